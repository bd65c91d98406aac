pub mod coercion;
pub mod dataset;
pub mod ingest;
pub mod normalize;
pub mod types;
pub mod visibility;
pub mod windowing;
pub mod zoom;

pub use coercion::{coerce_cell, coerce_cells, parse_float_prefix};
pub use dataset::{Dataset, Series, SeriesColor};
pub use ingest::{IngestOptions, InputFormat, RawInput, ingest, ingest_bytes};
pub use normalize::{NORMALIZED_SCALE_MAX, normalize, rescale, value_range};
pub use types::{Column, Columns, IndexWindow, RawCell};
pub use visibility::{DEFAULT_PRIORITY_KEYWORDS, KeywordVisibility, LabelFilter};
pub use windowing::{
    SeriesWindow, clamp_window, clamp_window_end, clamp_window_start, last_index, window_of,
    window_slice,
};
pub use zoom::{ZoomBasis, ZoomSelection, map_zoom_to_window};
