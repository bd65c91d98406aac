use serde::{Deserialize, Serialize};

use crate::core::{IndexWindow, clamp_window};
use crate::error::{LogPlotError, LogPlotResult};

/// How drag-selection coordinates relate to the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoomBasis {
    /// Coordinates are indices into the displayed window and are re-based
    /// onto its start. Matches renderers that only ever see windowed slices.
    #[default]
    WindowRelative,
    /// Coordinates are indices into the full dataset.
    Absolute,
}

/// Continuous x-axis bounds reported by a drag selection, in index units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomSelection {
    pub left: f64,
    pub right: f64,
}

impl ZoomSelection {
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Rounded `(low, high)` bounds; the two edges may arrive in either order.
    pub fn rounded_bounds(self) -> LogPlotResult<(i64, i64)> {
        if !self.left.is_finite() || !self.right.is_finite() {
            return Err(LogPlotError::InvalidData(
                "zoom selection bounds must be finite".to_owned(),
            ));
        }
        let low = self.left.min(self.right).round() as i64;
        let high = self.left.max(self.right).round() as i64;
        Ok((low, high))
    }
}

/// Maps a drag selection onto a new index window.
///
/// The result is clamped into the dataset and always holds at least one row.
/// Given the same selection, base window and basis it always yields the same
/// window.
pub fn map_zoom_to_window(
    selection: ZoomSelection,
    current: IndexWindow,
    row_count: usize,
    basis: ZoomBasis,
) -> LogPlotResult<IndexWindow> {
    let (low, high) = selection.rounded_bounds()?;
    let offset = match basis {
        ZoomBasis::WindowRelative => current.start as i64,
        ZoomBasis::Absolute => 0,
    };
    Ok(clamp_window(
        low.saturating_add(offset),
        high.saturating_add(offset),
        row_count,
    ))
}

#[cfg(test)]
mod tests {
    use super::{ZoomBasis, ZoomSelection, map_zoom_to_window};
    use crate::core::IndexWindow;

    #[test]
    fn absolute_selection_ignores_current_window() {
        let current = IndexWindow { start: 100, end: 200 };
        let window = map_zoom_to_window(
            ZoomSelection::new(10.4, 20.6),
            current,
            1000,
            ZoomBasis::Absolute,
        )
        .expect("map zoom");
        assert_eq!(window, IndexWindow { start: 10, end: 21 });
    }

    #[test]
    fn relative_selection_rebases_onto_window_start() {
        let current = IndexWindow { start: 100, end: 200 };
        let window = map_zoom_to_window(
            ZoomSelection::new(20.6, 10.4),
            current,
            1000,
            ZoomBasis::WindowRelative,
        )
        .expect("map zoom");
        assert_eq!(window, IndexWindow { start: 110, end: 121 });
    }

    #[test]
    fn collapsed_selection_yields_single_point() {
        let window = map_zoom_to_window(
            ZoomSelection::new(3.2, 2.9),
            IndexWindow::full(10),
            10,
            ZoomBasis::Absolute,
        )
        .expect("map zoom");
        assert_eq!(window, IndexWindow { start: 3, end: 3 });
    }

    #[test]
    fn non_finite_selection_is_rejected() {
        let err = map_zoom_to_window(
            ZoomSelection::new(f64::NAN, 2.0),
            IndexWindow::full(10),
            10,
            ZoomBasis::Absolute,
        );
        assert!(err.is_err());
    }
}
