use crate::error::LogPlotResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch misaligned slices
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_point_count: usize,
    pub last_visible_series: usize,
    pub last_legend_len: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> LogPlotResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_point_count = frame.labels.len();
        self.last_visible_series = frame.visible_series().count();
        self.last_legend_len = frame.legend.len();
        Ok(())
    }
}
