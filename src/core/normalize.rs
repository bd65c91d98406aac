use indexmap::IndexSet;

use crate::core::{Columns, Dataset, Series, SeriesColor, coerce_cells};

/// Upper bound of the normalized scale.
pub const NORMALIZED_SCALE_MAX: f64 = 100.0;

/// Builds a dataset from ingested columns.
///
/// Each non-key column is coerced and min-max rescaled into
/// `0..=NORMALIZED_SCALE_MAX`. Gaps and degenerate (flat or empty) series
/// normalize to `0`. `default_visible` decides each series' initial
/// visibility from its label.
#[must_use]
pub fn normalize(columns: &Columns, default_visible: &dyn Fn(&str) -> bool) -> Dataset {
    let labels = columns.key_column().cells.iter().map(|c| c.to_label()).collect();
    let column_count = columns.all().len();

    let mut used_keys: IndexSet<String> = IndexSet::new();
    let series = columns
        .value_columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let key = unique_key(&column.name, &used_keys);
            used_keys.insert(key.clone());

            let original = coerce_cells(&column.cells);
            let range = value_range(&original);
            let normalized = rescale(&original, range);
            let visible = default_visible(&column.name);
            Series {
                key,
                label: column.name.clone(),
                original,
                normalized,
                range,
                default_visible: visible,
                hidden: !visible,
                color: SeriesColor::for_index(idx, column_count),
            }
        })
        .collect();

    Dataset::new(labels, series)
}

/// `(min, max)` over the non-gap values.
#[must_use]
pub fn value_range(values: &[Option<f64>]) -> Option<(f64, f64)> {
    values.iter().flatten().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
    })
}

#[must_use]
pub fn rescale(values: &[Option<f64>], range: Option<(f64, f64)>) -> Vec<f64> {
    let Some((min, max)) = range.filter(|(min, max)| min != max) else {
        return vec![0.0; values.len()];
    };
    // Halved operands keep the span finite for ranges wider than f64::MAX.
    let factor = if (max - min).is_finite() { 1.0 } else { 0.5 };
    let (min, max) = (min * factor, max * factor);
    let span = max - min;
    values
        .iter()
        .map(|value| {
            value.map_or(0.0, |v| {
                ((v * factor - min) / span * NORMALIZED_SCALE_MAX)
                    .clamp(0.0, NORMALIZED_SCALE_MAX)
            })
        })
        .collect()
}

fn unique_key(label: &str, used: &IndexSet<String>) -> String {
    if !used.contains(label) {
        return label.to_owned();
    }
    (1..)
        .map(|n| format!("{label}#{n}"))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or_else(|| label.to_owned())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{rescale, value_range};

    #[test]
    fn range_ignores_gaps() {
        assert_eq!(
            value_range(&[None, Some(3.0), Some(-1.0), None]),
            Some((-1.0, 3.0))
        );
        assert_eq!(value_range(&[None, None]), None);
    }

    #[test]
    fn rescale_maps_extremes_to_scale_bounds() {
        let out = rescale(&[Some(10.0), Some(15.0), None, Some(20.0)], Some((10.0, 20.0)));
        assert_relative_eq!(out[0], 0.0);
        assert_relative_eq!(out[1], 50.0);
        assert_relative_eq!(out[2], 0.0);
        assert_relative_eq!(out[3], 100.0);
    }

    #[test]
    fn rescale_stays_finite_for_ranges_wider_than_f64_max() {
        let values = [Some(-f64::MAX), Some(0.0), Some(f64::MAX)];
        let out = rescale(&values, value_range(&values));
        assert_relative_eq!(out[0], 0.0);
        assert_relative_eq!(out[1], 50.0);
        assert_relative_eq!(out[2], 100.0);
    }

    #[test]
    fn rescale_flattens_degenerate_ranges() {
        assert_eq!(rescale(&[Some(5.0), Some(5.0)], Some((5.0, 5.0))), vec![0.0, 0.0]);
        assert_eq!(rescale(&[None], None), vec![0.0]);
    }
}
