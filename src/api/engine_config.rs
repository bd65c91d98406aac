use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_PRIORITY_KEYWORDS, IngestOptions, ZoomBasis};
use crate::error::{LogPlotError, LogPlotResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load engine
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogPlotEngineConfig {
    #[serde(default)]
    pub ingest: IngestOptions,
    /// Series whose label contains one of these terms start visible.
    #[serde(default = "default_priority_keywords")]
    pub priority_keywords: Vec<String>,
    #[serde(default)]
    pub zoom_basis: ZoomBasis,
}

impl Default for LogPlotEngineConfig {
    fn default() -> Self {
        Self {
            ingest: IngestOptions::default(),
            priority_keywords: default_priority_keywords(),
            zoom_basis: ZoomBasis::default(),
        }
    }
}

impl LogPlotEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ingest_options(mut self, ingest: IngestOptions) -> Self {
        self.ingest = ingest;
        self
    }

    #[must_use]
    pub fn with_skip_lines(mut self, skip_lines: usize) -> Self {
        self.ingest.skip_lines = skip_lines;
        self
    }

    #[must_use]
    pub fn with_priority_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_zoom_basis(mut self, zoom_basis: ZoomBasis) -> Self {
        self.zoom_basis = zoom_basis;
        self
    }

    pub fn to_json_pretty(&self) -> LogPlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            LogPlotError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> LogPlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| LogPlotError::InvalidData(format!("failed to parse engine config: {e}")))
    }
}

fn default_priority_keywords() -> Vec<String> {
    DEFAULT_PRIORITY_KEYWORDS
        .iter()
        .map(|keyword| (*keyword).to_owned())
        .collect()
}
