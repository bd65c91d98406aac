use crate::core::{Dataset, IndexWindow, LabelFilter};
use crate::error::{LogPlotError, LogPlotResult};
use crate::extensions::EngineObserver;

use super::LogPlotEngineConfig;

/// Dataset currently installed together with its window.
pub(super) struct LoadedDataset {
    pub(super) generation: u64,
    pub(super) dataset: Dataset,
    pub(super) window: IndexWindow,
}

pub(super) enum EngineState {
    Empty,
    Loaded(LoadedDataset),
}

/// Internal engine core state used by the public facade (`LogPlotEngine`).
pub(super) struct EngineCore {
    pub(super) config: LogPlotEngineConfig,
    pub(super) default_visibility: Box<dyn Fn(&str) -> bool>,
    pub(super) state: EngineState,
    /// Newest upload generation handed out; only that upload may install.
    pub(super) newest_generation: u64,
    pub(super) label_filter: LabelFilter,
    pub(super) observers: Vec<Box<dyn EngineObserver>>,
}

impl EngineCore {
    pub(super) fn loaded(&self) -> LogPlotResult<&LoadedDataset> {
        match &self.state {
            EngineState::Loaded(loaded) => Ok(loaded),
            EngineState::Empty => Err(no_dataset()),
        }
    }

    pub(super) fn loaded_mut(&mut self) -> LogPlotResult<&mut LoadedDataset> {
        match &mut self.state {
            EngineState::Loaded(loaded) => Ok(loaded),
            EngineState::Empty => Err(no_dataset()),
        }
    }

    pub(super) fn loaded_opt(&self) -> Option<&LoadedDataset> {
        match &self.state {
            EngineState::Loaded(loaded) => Some(loaded),
            EngineState::Empty => None,
        }
    }
}

fn no_dataset() -> LogPlotError {
    LogPlotError::InvalidState("no dataset loaded".to_owned())
}
