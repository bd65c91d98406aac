use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    Columns, IndexWindow, IngestOptions, InputFormat, KeywordVisibility, RawInput, ingest,
    ingest_bytes, normalize,
};
use crate::error::{LogPlotError, LogPlotResult};
use crate::extensions::EngineEvent;
use crate::render::Renderer;

use super::LogPlotEngine;
use super::engine_core::{EngineState, LoadedDataset};
use super::validation::{validate_ingest_options, validate_priority_keywords};

/// Handle for one upload; only the newest ticket may install a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UploadTicket {
    generation: u64,
}

impl UploadTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadOutcome {
    Installed {
        generation: u64,
        row_count: usize,
        series_count: usize,
    },
    /// A newer upload was started first; this result was dropped unparsed.
    Stale {
        generation: u64,
        newest_generation: u64,
    },
}

impl<R: Renderer> LogPlotEngine<R> {
    #[must_use]
    pub fn ingest_options(&self) -> &IngestOptions {
        &self.core.config.ingest
    }

    /// Replaces parsing options. They apply to later uploads only.
    pub fn set_ingest_options(&mut self, options: IngestOptions) -> LogPlotResult<()> {
        validate_ingest_options(&options)?;
        self.core.config.ingest = options;
        Ok(())
    }

    pub fn set_skip_lines(&mut self, skip_lines: usize) {
        self.core.config.ingest.skip_lines = skip_lines;
    }

    /// Overrides the default-visibility predicate for later uploads.
    ///
    /// The predicate replaces the keyword rule, so `config().priority_keywords`
    /// is cleared and no longer describes which series start visible.
    pub fn set_default_visibility<F>(&mut self, predicate: F)
    where
        F: Fn(&str) -> bool + 'static,
    {
        self.core.config.priority_keywords.clear();
        self.core.default_visibility = Box::new(predicate);
    }

    /// Replaces the keyword rule deciding which series start visible on later
    /// uploads.
    pub fn set_priority_keywords<I, S>(&mut self, keywords: I) -> LogPlotResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
        validate_priority_keywords(&keywords)?;
        self.core.default_visibility =
            KeywordVisibility::new(keywords.iter().cloned()).into_predicate();
        self.core.config.priority_keywords = keywords;
        Ok(())
    }

    /// Starts an upload, superseding every earlier ticket.
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.core.newest_generation += 1;
        UploadTicket {
            generation: self.core.newest_generation,
        }
    }

    /// Completes an upload with raw content.
    ///
    /// Parsing and normalization run as one unit; on failure the previously
    /// installed dataset and window are left untouched.
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        raw: RawInput<'_>,
    ) -> LogPlotResult<UploadOutcome> {
        self.finish_upload(ticket, |options| ingest(raw, options))
    }

    /// Completes an upload with undecoded file bytes.
    pub fn complete_upload_bytes(
        &mut self,
        ticket: UploadTicket,
        bytes: &[u8],
        format: InputFormat,
    ) -> LogPlotResult<UploadOutcome> {
        self.finish_upload(ticket, |options| ingest_bytes(bytes, format, options))
    }

    /// Begins and completes an upload in one step.
    pub fn load(&mut self, raw: RawInput<'_>) -> LogPlotResult<UploadOutcome> {
        let ticket = self.begin_upload();
        self.complete_upload(ticket, raw)
    }

    pub fn load_bytes(&mut self, bytes: &[u8], format: InputFormat) -> LogPlotResult<UploadOutcome> {
        let ticket = self.begin_upload();
        self.complete_upload_bytes(ticket, bytes, format)
    }

    /// Reads a `.csv`/`.tsv`/`.json` file and loads it.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> LogPlotResult<UploadOutcome> {
        let path = path.as_ref();
        let ticket = self.begin_upload();
        let read = InputFormat::from_path(path)
            .and_then(|format| Ok((format, std::fs::read(path)?)));
        match read {
            Ok((format, bytes)) => self.complete_upload_bytes(ticket, &bytes, format),
            Err(err) => Err(self.reject_upload(ticket, err)),
        }
    }

    fn finish_upload<F>(&mut self, ticket: UploadTicket, parse: F) -> LogPlotResult<UploadOutcome>
    where
        F: FnOnce(&IngestOptions) -> LogPlotResult<Columns>,
    {
        let newest_generation = self.core.newest_generation;
        if ticket.generation != newest_generation {
            debug!(
                generation = ticket.generation,
                newest_generation, "discarding superseded upload"
            );
            self.emit_event(EngineEvent::UploadDiscarded {
                generation: ticket.generation,
                newest_generation,
            });
            return Ok(UploadOutcome::Stale {
                generation: ticket.generation,
                newest_generation,
            });
        }

        let columns = match parse(&self.core.config.ingest) {
            Ok(columns) => columns,
            Err(err) => return Err(self.reject_upload(ticket, err)),
        };
        let dataset = normalize(&columns, &*self.core.default_visibility);
        let row_count = dataset.row_count();
        let series_count = dataset.series().len();
        let window = IndexWindow::full(row_count);

        self.core.state = EngineState::Loaded(LoadedDataset {
            generation: ticket.generation,
            dataset,
            window,
        });
        debug!(
            generation = ticket.generation,
            row_count, series_count, "installed dataset"
        );
        self.emit_event(EngineEvent::DatasetInstalled {
            generation: ticket.generation,
            row_count,
            series_count,
        });
        self.emit_event(EngineEvent::WindowChanged {
            start: window.start,
            end: window.end,
        });

        Ok(UploadOutcome::Installed {
            generation: ticket.generation,
            row_count,
            series_count,
        })
    }

    fn reject_upload(&mut self, ticket: UploadTicket, err: LogPlotError) -> LogPlotError {
        warn!(
            generation = ticket.generation,
            error = %err,
            "upload rejected; keeping previous dataset"
        );
        self.emit_event(EngineEvent::UploadFailed {
            generation: ticket.generation,
            reason: err.to_string(),
        });
        err
    }
}
