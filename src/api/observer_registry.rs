use crate::error::{LogPlotError, LogPlotResult};
use crate::extensions::EngineObserver;
use crate::render::Renderer;

use super::LogPlotEngine;

impl<R: Renderer> LogPlotEngine<R> {
    /// Adds an observer. Ids must be non-empty and unique per engine.
    pub fn register_observer(&mut self, observer: Box<dyn EngineObserver>) -> LogPlotResult<()> {
        let rejection = match observer.id() {
            "" => Some("observer id must not be empty".to_owned()),
            id if self.has_observer(id) => Some(format!("observer `{id}` is already registered")),
            _ => None,
        };
        if let Some(reason) = rejection {
            return Err(LogPlotError::InvalidData(reason));
        }
        self.core.observers.push(observer);
        Ok(())
    }

    /// Drops the observer with `observer_id`. Returns `true` when one was removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        let before = self.core.observers.len();
        self.core
            .observers
            .retain(|observer| observer.id() != observer_id);
        self.core.observers.len() != before
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.core.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observer_ids().any(|id| id == observer_id)
    }

    /// Registered observer ids in registration order.
    pub fn observer_ids(&self) -> impl Iterator<Item = &str> {
        self.core.observers.iter().map(|observer| observer.id())
    }
}
