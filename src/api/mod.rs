mod engine;
mod engine_config;
mod engine_core;
mod engine_snapshot;
mod json_contract;
mod observer_dispatch;
mod observer_registry;
mod render_frame_builder;
mod tooltip;
mod upload_controller;
mod validation;
mod visibility_controller;
mod window_controller;

pub use engine::{EngineStatus, LogPlotEngine};
pub use engine_config::LogPlotEngineConfig;
pub use engine_snapshot::{EngineSnapshot, SeriesSnapshot};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use upload_controller::{UploadOutcome, UploadTicket};
