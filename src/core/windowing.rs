use crate::core::{IndexWindow, Series};

/// Clamps a requested window into `0..=row_count-1`, keeping `start <= end`.
///
/// `start` is clamped first; `end` is then clamped into `start..=row_count-1`.
#[must_use]
pub fn clamp_window(start: i64, end: i64, row_count: usize) -> IndexWindow {
    let last = last_index(row_count);
    let start = clamp_index(start, 0, last);
    let end = clamp_index(end, start, last);
    IndexWindow { start, end }
}

/// Moves only the start edge; it can never pass the current end.
#[must_use]
pub fn clamp_window_start(current: IndexWindow, start: i64) -> IndexWindow {
    IndexWindow {
        start: clamp_index(start, 0, current.end),
        end: current.end,
    }
}

/// Moves only the end edge; it can never pass the current start.
#[must_use]
pub fn clamp_window_end(current: IndexWindow, end: i64, row_count: usize) -> IndexWindow {
    let last = last_index(row_count).max(current.start);
    IndexWindow {
        start: current.start,
        end: clamp_index(end, current.start, last),
    }
}

#[must_use]
pub fn last_index(row_count: usize) -> usize {
    row_count.saturating_sub(1)
}

pub(crate) fn clamp_index(value: i64, min: usize, max: usize) -> usize {
    i128::from(value).clamp(min as i128, max as i128) as usize
}

/// Inclusive slice of `values` covered by `window`, truncated to the data.
#[must_use]
pub fn window_slice<T>(values: &[T], window: IndexWindow) -> &[T] {
    if window.start >= values.len() {
        return &[];
    }
    let end = window.end.min(values.len() - 1);
    &values[window.start..=end]
}

/// Borrowed view of one series restricted to a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesWindow<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub original: &'a [Option<f64>],
    pub normalized: &'a [f64],
    pub hidden: bool,
}

#[must_use]
pub fn window_of(series: &Series, window: IndexWindow) -> SeriesWindow<'_> {
    SeriesWindow {
        key: &series.key,
        label: &series.label,
        original: window_slice(&series.original, window),
        normalized: window_slice(&series.normalized, window),
        hidden: series.hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::{clamp_window, clamp_window_end, clamp_window_start, window_slice};
    use crate::core::IndexWindow;

    #[test]
    fn clamp_window_keeps_order_and_bounds() {
        assert_eq!(clamp_window(-5, 500, 10), IndexWindow { start: 0, end: 9 });
        assert_eq!(clamp_window(7, 3, 10), IndexWindow { start: 7, end: 7 });
        assert_eq!(clamp_window(42, 50, 10), IndexWindow { start: 9, end: 9 });
        assert_eq!(clamp_window(0, 0, 1), IndexWindow { start: 0, end: 0 });
    }

    #[test]
    fn edge_edits_never_cross() {
        let current = IndexWindow { start: 2, end: 6 };
        assert_eq!(clamp_window_start(current, 9), IndexWindow { start: 6, end: 6 });
        assert_eq!(clamp_window_start(current, -1), IndexWindow { start: 0, end: 6 });
        assert_eq!(clamp_window_end(current, 0, 10), IndexWindow { start: 2, end: 2 });
        assert_eq!(clamp_window_end(current, 99, 10), IndexWindow { start: 2, end: 9 });
    }

    #[test]
    fn window_slice_is_inclusive() {
        let values = [0, 1, 2, 3, 4];
        assert_eq!(window_slice(&values, IndexWindow { start: 1, end: 3 }), &[1, 2, 3]);
        assert_eq!(window_slice(&values, IndexWindow { start: 4, end: 4 }), &[4]);
    }
}
