use tracing::{debug, trace};

use crate::core::{
    IndexWindow, SeriesWindow, clamp_window, clamp_window_end, clamp_window_start,
    map_zoom_to_window, window_of, window_slice,
};
use crate::error::{LogPlotError, LogPlotResult};
use crate::extensions::EngineEvent;
use crate::interaction::ZoomGesture;
use crate::render::Renderer;

use super::LogPlotEngine;

impl<R: Renderer> LogPlotEngine<R> {
    /// Current index window.
    pub fn window(&self) -> LogPlotResult<IndexWindow> {
        Ok(self.core.loaded()?.window)
    }

    /// Replaces the window, clamping both edges into the dataset.
    pub fn set_window(&mut self, start: i64, end: i64) -> LogPlotResult<IndexWindow> {
        let row_count = self.core.loaded()?.dataset.row_count();
        self.apply_window(clamp_window(start, end, row_count))
    }

    /// Moves the start edge only; it is clamped into `0..=end`.
    pub fn set_window_start(&mut self, start: i64) -> LogPlotResult<IndexWindow> {
        let current = self.core.loaded()?.window;
        self.apply_window(clamp_window_start(current, start))
    }

    /// Moves the end edge only; it is clamped into `start..=row_count-1`.
    pub fn set_window_end(&mut self, end: i64) -> LogPlotResult<IndexWindow> {
        let loaded = self.core.loaded()?;
        let next = clamp_window_end(loaded.window, end, loaded.dataset.row_count());
        self.apply_window(next)
    }

    /// Restores the full-dataset window.
    pub fn reset_window(&mut self) -> LogPlotResult<IndexWindow> {
        let row_count = self.core.loaded()?.dataset.row_count();
        self.apply_window(IndexWindow::full(row_count))
    }

    /// Handles a completed zoom gesture from the render adapter.
    ///
    /// Only drag selections change the window; wheel and pinch zooms are
    /// visual-only and return `None`.
    pub fn on_zoom(&mut self, gesture: ZoomGesture) -> LogPlotResult<Option<IndexWindow>> {
        let loaded = self.core.loaded()?;
        if !gesture.trigger.alters_window() {
            trace!(trigger = ?gesture.trigger, "ignoring visual-only zoom");
            return Ok(None);
        }
        let next = map_zoom_to_window(
            gesture.selection,
            loaded.window,
            loaded.dataset.row_count(),
            self.core.config.zoom_basis,
        )?;
        self.apply_window(next).map(Some)
    }

    /// Handles the adapter's reset-zoom request.
    pub fn on_reset_zoom(&mut self) -> LogPlotResult<IndexWindow> {
        self.reset_window()
    }

    /// Windowed x-axis labels.
    pub fn window_labels(&self) -> LogPlotResult<&[String]> {
        let loaded = self.core.loaded()?;
        Ok(window_slice(loaded.dataset.labels(), loaded.window))
    }

    /// Windowed view of one series.
    pub fn window_of(&self, key: &str) -> LogPlotResult<SeriesWindow<'_>> {
        let loaded = self.core.loaded()?;
        let series = loaded
            .dataset
            .series_by_key(key)
            .ok_or_else(|| LogPlotError::UnknownSeries(key.to_owned()))?;
        Ok(window_of(series, loaded.window))
    }

    /// Windowed views of every series in dataset order.
    pub fn windowed_series(&self) -> LogPlotResult<Vec<SeriesWindow<'_>>> {
        let loaded = self.core.loaded()?;
        Ok(loaded
            .dataset
            .series()
            .iter()
            .map(|series| window_of(series, loaded.window))
            .collect())
    }

    fn apply_window(&mut self, next: IndexWindow) -> LogPlotResult<IndexWindow> {
        let loaded = self.core.loaded_mut()?;
        if loaded.window == next {
            return Ok(next);
        }
        loaded.window = next;
        debug!(start = next.start, end = next.end, "window changed");
        self.emit_event(EngineEvent::WindowChanged {
            start: next.start,
            end: next.end,
        });
        Ok(next)
    }
}
