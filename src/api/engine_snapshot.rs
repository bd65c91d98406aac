use serde::{Deserialize, Serialize};

use crate::core::IndexWindow;
use crate::render::Renderer;

use super::LogPlotEngine;

/// Per-series summary carried in an engine snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub key: String,
    pub label: String,
    pub hidden: bool,
    pub default_visible: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub gap_count: usize,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub generation: Option<u64>,
    pub row_count: usize,
    pub window: Option<IndexWindow>,
    pub label_filter: String,
    pub series: Vec<SeriesSnapshot>,
}

impl<R: Renderer> LogPlotEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let label_filter = self.core.label_filter.text().to_owned();
        let Some(loaded) = self.core.loaded_opt() else {
            return EngineSnapshot {
                generation: None,
                row_count: 0,
                window: None,
                label_filter,
                series: Vec::new(),
            };
        };

        let series = loaded
            .dataset
            .series()
            .iter()
            .map(|series| SeriesSnapshot {
                key: series.key.clone(),
                label: series.label.clone(),
                hidden: series.hidden,
                default_visible: series.default_visible,
                min: series.range.map(|(min, _)| min),
                max: series.range.map(|(_, max)| max),
                gap_count: series.original.iter().filter(|v| v.is_none()).count(),
            })
            .collect();

        EngineSnapshot {
            generation: Some(loaded.generation),
            row_count: loaded.dataset.row_count(),
            window: Some(loaded.window),
            label_filter,
            series,
        }
    }
}
