mod frame;
mod null_renderer;

pub use frame::{LegendEntry, RenderFrame, SeriesFrame};
pub use null_renderer::NullRenderer;

use crate::error::LogPlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, read-only `RenderFrame` so drawing
/// code stays isolated from ingestion, windowing and visibility logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> LogPlotResult<()>;
}
