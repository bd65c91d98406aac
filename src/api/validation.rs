use crate::core::IngestOptions;
use crate::error::{LogPlotError, LogPlotResult};

use super::LogPlotEngineConfig;

pub(super) fn validate_ingest_options(options: &IngestOptions) -> LogPlotResult<()> {
    let delimiter = options.delimiter;
    if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
        return Err(LogPlotError::InvalidData(format!(
            "delimiter {delimiter:?} must be ASCII and not a quote or line break"
        )));
    }

    if let Some(prefix) = options.comment_prefix.as_deref() {
        if prefix.trim().is_empty() {
            return Err(LogPlotError::InvalidData(
                "comment prefix must not be blank".to_owned(),
            ));
        }
        if prefix.contains(['\n', '\r']) {
            return Err(LogPlotError::InvalidData(
                "comment prefix must be a single line".to_owned(),
            ));
        }
    }

    Ok(())
}

pub(super) fn validate_engine_config(config: &LogPlotEngineConfig) -> LogPlotResult<()> {
    validate_ingest_options(&config.ingest)?;
    validate_priority_keywords(&config.priority_keywords)
}

pub(super) fn validate_priority_keywords(keywords: &[String]) -> LogPlotResult<()> {
    if keywords.iter().any(String::is_empty) {
        return Err(LogPlotError::InvalidData(
            "priority keywords must not be empty strings".to_owned(),
        ));
    }
    Ok(())
}
