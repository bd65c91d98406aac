use serde::{Deserialize, Serialize};

use crate::core::{IndexWindow, SeriesColor};
use crate::error::{LogPlotError, LogPlotResult};

/// Windowed samples of one series as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFrame {
    pub key: String,
    pub label: String,
    pub original: Vec<Option<f64>>,
    pub normalized: Vec<f64>,
    pub hidden: bool,
    pub color: SeriesColor,
}

/// Legend button state for one series that passes the label filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub key: String,
    pub label: String,
    pub hidden: bool,
    pub color: SeriesColor,
}

/// Backend-agnostic content for one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub window: IndexWindow,
    pub labels: Vec<String>,
    pub series: Vec<SeriesFrame>,
    pub legend: Vec<LegendEntry>,
}

impl RenderFrame {
    /// Checks that every series slice lines up with the x-axis labels.
    pub fn validate(&self) -> LogPlotResult<()> {
        if self.labels.len() != self.window.point_count() {
            return Err(LogPlotError::InvalidData(format!(
                "frame has {} labels for a {}-row window",
                self.labels.len(),
                self.window.point_count()
            )));
        }
        for series in &self.series {
            if series.original.len() != self.labels.len()
                || series.normalized.len() != self.labels.len()
            {
                return Err(LogPlotError::InvalidData(format!(
                    "series `{}` slice length does not match label count",
                    series.key
                )));
            }
            if series.normalized.iter().any(|v| !v.is_finite()) {
                return Err(LogPlotError::InvalidData(format!(
                    "series `{}` has non-finite normalized values",
                    series.key
                )));
            }
        }
        Ok(())
    }

    /// Series that should actually be drawn.
    pub fn visible_series(&self) -> impl Iterator<Item = &SeriesFrame> {
        self.series.iter().filter(|s| !s.hidden)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
