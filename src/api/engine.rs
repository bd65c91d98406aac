use serde::{Deserialize, Serialize};

use crate::core::{Dataset, IndexWindow, KeywordVisibility, LabelFilter};
use crate::error::LogPlotResult;
use crate::extensions::EngineEvent;
use crate::render::Renderer;

use super::engine_core::{EngineCore, EngineState};
use super::LogPlotEngineConfig;
use super::render_frame_builder::build_render_frame;
use super::validation::validate_engine_config;

/// Coarse engine state exposed to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineStatus {
    Empty,
    Loaded { generation: u64, window: IndexWindow },
}

/// Main orchestration facade consumed by host applications.
///
/// `LogPlotEngine` owns the active dataset, its window and visibility state,
/// and hands read-only frames to the renderer. All mutations go through
/// explicit method calls, one at a time.
pub struct LogPlotEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> LogPlotEngine<R> {
    /// Creates an empty engine.
    pub fn new(renderer: R, config: LogPlotEngineConfig) -> LogPlotResult<Self> {
        validate_engine_config(&config)?;
        let default_visibility =
            KeywordVisibility::new(config.priority_keywords.iter().cloned()).into_predicate();
        Ok(Self {
            renderer,
            core: EngineCore {
                config,
                default_visibility,
                state: EngineState::Empty,
                newest_generation: 0,
                label_filter: LabelFilter::default(),
                observers: Vec::new(),
            },
        })
    }

    #[must_use]
    pub fn config(&self) -> &LogPlotEngineConfig {
        &self.core.config
    }

    #[must_use]
    pub fn status(&self) -> EngineStatus {
        match self.core.loaded_opt() {
            Some(loaded) => EngineStatus::Loaded {
                generation: loaded.generation,
                window: loaded.window,
            },
            None => EngineStatus::Empty,
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.core.loaded_opt().is_some()
    }

    /// Installed dataset, if any.
    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.core.loaded_opt().map(|loaded| &loaded.dataset)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Hands the current windowed frame to the renderer.
    ///
    /// Rendering an empty engine is a no-op.
    pub fn render(&mut self) -> LogPlotResult<()> {
        let Some(loaded) = self.core.loaded_opt() else {
            return Ok(());
        };
        let frame = build_render_frame(loaded, &self.core.label_filter);
        self.renderer.render(&frame)?;
        self.emit_event(EngineEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
