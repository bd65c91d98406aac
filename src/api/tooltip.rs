use crate::core::Series;
use crate::error::{LogPlotError, LogPlotResult};
use crate::render::Renderer;

use super::LogPlotEngine;

impl<R: Renderer> LogPlotEngine<R> {
    /// Original-unit value under the tooltip.
    ///
    /// `row_in_window` is relative to the window start. Returns `None` for
    /// hidden series, gaps and rows outside the window.
    pub fn tooltip_value(&self, key: &str, row_in_window: usize) -> LogPlotResult<Option<f64>> {
        Ok(self
            .tooltip_target(key, row_in_window)?
            .and_then(|(series, row)| series.original[row]))
    }

    /// Tooltip line in the form `label: value`, or the bare label over a gap.
    pub fn tooltip_text(&self, key: &str, row_in_window: usize) -> LogPlotResult<Option<String>> {
        Ok(self
            .tooltip_target(key, row_in_window)?
            .map(|(series, row)| match series.original[row] {
                Some(value) => format!("{}: {value}", series.label),
                None => series.label.clone(),
            }))
    }

    fn tooltip_target(
        &self,
        key: &str,
        row_in_window: usize,
    ) -> LogPlotResult<Option<(&Series, usize)>> {
        let loaded = self.core.loaded()?;
        let series = loaded
            .dataset
            .series_by_key(key)
            .ok_or_else(|| LogPlotError::UnknownSeries(key.to_owned()))?;
        if series.hidden {
            return Ok(None);
        }
        let row = loaded.window.start.saturating_add(row_in_window);
        if !loaded.window.contains(row) {
            return Ok(None);
        }
        Ok(Some((series, row)))
    }
}
