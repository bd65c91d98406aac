use criterion::{Criterion, criterion_group, criterion_main};
use logplot::core::{
    IndexWindow, IngestOptions, KeywordVisibility, RawInput, ZoomBasis, ZoomSelection, ingest,
    map_zoom_to_window, normalize,
};
use std::fmt::Write as _;
use std::hint::black_box;

fn synthetic_log(rows: usize, value_columns: usize) -> String {
    let mut text = String::from("time");
    for col in 0..value_columns {
        let _ = write!(text, ",Channel {col}");
    }
    text.push('\n');
    for row in 0..rows {
        let _ = write!(text, "{row}");
        for col in 0..value_columns {
            let value = (row as f64 * 0.01 * (col + 1) as f64).sin() * 1_000.0;
            let _ = write!(text, ",{value:.3}");
        }
        text.push('\n');
    }
    text
}

fn bench_ingest_and_normalize_10k(c: &mut Criterion) {
    let text = synthetic_log(10_000, 24);
    let options = IngestOptions::default();
    let visibility = KeywordVisibility::default().into_predicate();

    c.bench_function("ingest_and_normalize_10k_x24", |b| {
        b.iter(|| {
            let columns =
                ingest(RawInput::Delimited(black_box(&text)), &options).expect("valid log");
            let _ = normalize(black_box(&columns), &*visibility);
        })
    });
}

fn bench_zoom_mapping(c: &mut Criterion) {
    let current = IndexWindow { start: 1_000, end: 9_000 };

    c.bench_function("zoom_selection_mapping", |b| {
        b.iter(|| {
            let _ = map_zoom_to_window(
                black_box(ZoomSelection::new(4_321.7, 123.2)),
                black_box(current),
                black_box(100_000),
                ZoomBasis::WindowRelative,
            )
            .expect("finite selection");
        })
    });
}

criterion_group!(benches, bench_ingest_and_normalize_10k, bench_zoom_mapping);
criterion_main!(benches);
