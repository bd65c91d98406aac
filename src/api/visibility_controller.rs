use tracing::debug;

use crate::core::LabelFilter;
use crate::error::{LogPlotError, LogPlotResult};
use crate::extensions::EngineEvent;
use crate::render::{LegendEntry, Renderer};

use super::LogPlotEngine;
use super::render_frame_builder::build_legend;

impl<R: Renderer> LogPlotEngine<R> {
    /// Flips one series' hidden flag and returns the new value.
    pub fn toggle_series(&mut self, key: &str) -> LogPlotResult<bool> {
        let hidden = !self.series_hidden(key)?;
        self.set_series_hidden(key, hidden)?;
        Ok(hidden)
    }

    pub fn series_hidden(&self, key: &str) -> LogPlotResult<bool> {
        self.core
            .loaded()?
            .dataset
            .series_by_key(key)
            .map(|series| series.hidden)
            .ok_or_else(|| LogPlotError::UnknownSeries(key.to_owned()))
    }

    pub fn set_series_hidden(&mut self, key: &str, hidden: bool) -> LogPlotResult<()> {
        let series = self
            .core
            .loaded_mut()?
            .dataset
            .series_by_key_mut(key)
            .ok_or_else(|| LogPlotError::UnknownSeries(key.to_owned()))?;
        if series.hidden == hidden {
            return Ok(());
        }
        series.hidden = hidden;
        debug!(key, hidden, "series visibility changed");
        self.emit_event(EngineEvent::SeriesVisibilityChanged {
            key: key.to_owned(),
            hidden,
        });
        Ok(())
    }

    /// Shows every series. Returns how many changed.
    pub fn show_all_series(&mut self) -> LogPlotResult<usize> {
        self.set_all_hidden(false)
    }

    /// Hides every series. Returns how many changed.
    pub fn hide_all_series(&mut self) -> LogPlotResult<usize> {
        self.set_all_hidden(true)
    }

    /// Restores every series to its default visibility.
    pub fn reset_series_visibility(&mut self) -> LogPlotResult<usize> {
        let changed: Vec<(String, bool)> = self
            .core
            .loaded_mut()?
            .dataset
            .series_mut()
            .filter(|series| series.hidden == series.default_visible)
            .map(|series| {
                series.hidden = !series.default_visible;
                (series.key.clone(), series.hidden)
            })
            .collect();
        Ok(self.emit_visibility_changes(changed))
    }

    fn set_all_hidden(&mut self, hidden: bool) -> LogPlotResult<usize> {
        let changed: Vec<(String, bool)> = self
            .core
            .loaded_mut()?
            .dataset
            .series_mut()
            .filter(|series| series.hidden != hidden)
            .map(|series| {
                series.hidden = hidden;
                (series.key.clone(), hidden)
            })
            .collect();
        Ok(self.emit_visibility_changes(changed))
    }

    fn emit_visibility_changes(&mut self, changed: Vec<(String, bool)>) -> usize {
        let count = changed.len();
        for (key, hidden) in changed {
            self.emit_event(EngineEvent::SeriesVisibilityChanged { key, hidden });
        }
        if count > 0 {
            debug!(count, "bulk series visibility change");
        }
        count
    }

    #[must_use]
    pub fn label_filter(&self) -> &LabelFilter {
        &self.core.label_filter
    }

    /// Sets the legend search text. Returns the number of matching series.
    ///
    /// The filter survives uploads and never touches the window.
    pub fn set_label_filter(&mut self, text: impl Into<String>) -> usize {
        self.core.label_filter = LabelFilter::new(text);
        let matching = self.legend_entries().len();
        self.emit_event(EngineEvent::LabelFilterChanged {
            text: self.core.label_filter.text().to_owned(),
            matching,
        });
        matching
    }

    pub fn clear_label_filter(&mut self) -> usize {
        self.set_label_filter(String::new())
    }

    /// Legend entries passing the label filter, in dataset order.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.core
            .loaded_opt()
            .map(|loaded| build_legend(loaded.dataset.series(), &self.core.label_filter))
            .unwrap_or_default()
    }
}
