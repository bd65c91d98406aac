use crate::core::{LabelFilter, Series, window_slice};
use crate::render::{LegendEntry, RenderFrame, SeriesFrame};

use super::engine_core::LoadedDataset;

pub(super) fn build_render_frame(loaded: &LoadedDataset, filter: &LabelFilter) -> RenderFrame {
    let window = loaded.window;
    let dataset = &loaded.dataset;

    let series = dataset
        .series()
        .iter()
        .map(|series| SeriesFrame {
            key: series.key.clone(),
            label: series.label.clone(),
            original: window_slice(&series.original, window).to_vec(),
            normalized: window_slice(&series.normalized, window).to_vec(),
            hidden: series.hidden,
            color: series.color,
        })
        .collect();

    RenderFrame {
        window,
        labels: window_slice(dataset.labels(), window).to_vec(),
        series,
        legend: build_legend(dataset.series(), filter),
    }
}

pub(super) fn build_legend(series: &[Series], filter: &LabelFilter) -> Vec<LegendEntry> {
    series
        .iter()
        .filter(|series| filter.matches(&series.label))
        .map(|series| LegendEntry {
            key: series.key.clone(),
            label: series.label.clone(),
            hidden: series.hidden,
            color: series.color,
        })
        .collect()
}
