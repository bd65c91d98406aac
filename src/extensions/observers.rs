use serde::{Deserialize, Serialize};

use crate::core::IndexWindow;

/// Read-only engine state passed alongside every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineContext {
    /// Generation of the installed dataset, `None` while empty.
    pub generation: Option<u64>,
    pub row_count: usize,
    pub series_count: usize,
    pub hidden_count: usize,
    pub window: Option<IndexWindow>,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    DatasetInstalled {
        generation: u64,
        row_count: usize,
        series_count: usize,
    },
    UploadFailed {
        generation: u64,
        reason: String,
    },
    UploadDiscarded {
        generation: u64,
        newest_generation: u64,
    },
    WindowChanged {
        start: usize,
        end: usize,
    },
    SeriesVisibilityChanged {
        key: String,
        hidden: bool,
    },
    LabelFilterChanged {
        text: String,
        matching: usize,
    },
    Rendered,
}

/// Hook interface for code reacting to engine state transitions.
///
/// Observers see events and context but cannot mutate engine internals.
pub trait EngineObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &EngineEvent, context: EngineContext);
}
