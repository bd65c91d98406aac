use crate::extensions::{EngineContext, EngineEvent};
use crate::render::Renderer;

use super::LogPlotEngine;

impl<R: Renderer> LogPlotEngine<R> {
    pub(super) fn engine_context(&self) -> EngineContext {
        match self.core.loaded_opt() {
            Some(loaded) => EngineContext {
                generation: Some(loaded.generation),
                row_count: loaded.dataset.row_count(),
                series_count: loaded.dataset.series().len(),
                hidden_count: loaded.dataset.series().iter().filter(|s| s.hidden).count(),
                window: Some(loaded.window),
            },
            None => EngineContext {
                generation: None,
                row_count: 0,
                series_count: 0,
                hidden_count: 0,
                window: None,
            },
        }
    }

    pub(super) fn emit_event(&mut self, event: EngineEvent) {
        if self.core.observers.is_empty() {
            return;
        }
        let context = self.engine_context();
        for observer in &mut self.core.observers {
            observer.on_event(&event, context);
        }
    }
}
