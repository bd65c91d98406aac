//! logplot: ingestion and interactive windowing engine for time-series logs.
//!
//! Raw delimited text or JSON records are parsed into columns, normalized
//! into comparable series, and exposed through an index window and per-series
//! visibility state. Drawing is left to a `render::Renderer` implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LogPlotEngine, LogPlotEngineConfig};
pub use error::{LogPlotError, LogPlotResult};
