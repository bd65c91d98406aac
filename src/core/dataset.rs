use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// HSL color assigned to a series; renderers decide how to use it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl SeriesColor {
    /// Spreads hues evenly over `column_count` slots (key column included).
    #[must_use]
    pub fn for_index(index: usize, column_count: usize) -> Self {
        let slots = column_count.max(1) as f64;
        Self {
            hue: index as f64 * 360.0 / slots,
            saturation: 70.0,
            lightness: 50.0,
        }
    }
}

impl fmt::Display for SeriesColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// One plotted column: original samples plus their 0..=100 rescaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Unique within its dataset; differs from `label` only for repeated labels.
    pub key: String,
    pub label: String,
    pub original: Vec<Option<f64>>,
    pub normalized: Vec<f64>,
    /// `(min, max)` over non-gap originals, `None` when the series has no values.
    pub range: Option<(f64, f64)>,
    pub default_visible: bool,
    pub hidden: bool,
    pub color: SeriesColor,
}

impl Series {
    #[must_use]
    pub fn len(&self) -> usize {
        self.original.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// `true` when every value normalizes to zero (no values or a flat range).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.range.is_none_or(|(min, max)| min == max)
    }
}

/// Key-column labels plus every derived series of one upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    labels: Vec<String>,
    series: Vec<Series>,
    index_by_key: IndexMap<String, usize>,
}

impl Dataset {
    pub(crate) fn new(labels: Vec<String>, series: Vec<Series>) -> Self {
        let index_by_key = series
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.key.clone(), idx))
            .collect();
        Self {
            labels,
            series,
            index_by_key,
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn series_by_key(&self, key: &str) -> Option<&Series> {
        self.index_by_key.get(key).map(|&idx| &self.series[idx])
    }

    pub(crate) fn series_by_key_mut(&mut self, key: &str) -> Option<&mut Series> {
        let idx = *self.index_by_key.get(key)?;
        self.series.get_mut(idx)
    }

    pub(crate) fn series_mut(&mut self) -> impl Iterator<Item = &mut Series> {
        self.series.iter_mut()
    }

    /// Resolves a display label; with repeated labels the last series wins.
    #[must_use]
    pub fn series_by_label(&self, label: &str) -> Option<&Series> {
        self.series.iter().rev().find(|s| s.label == label)
    }
}
