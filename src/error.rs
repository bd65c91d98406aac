use thiserror::Error;

pub type LogPlotResult<T> = Result<T, LogPlotError>;

#[derive(Debug, Error)]
pub enum LogPlotError {
    #[error("input is empty or invalid: {0}")]
    EmptyOrInvalid(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("unknown series key: {0}")]
    UnknownSeries(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl LogPlotError {
    /// Returns `true` for failures that reject one upload attempt.
    #[must_use]
    pub fn is_upload_rejection(&self) -> bool {
        matches!(
            self,
            Self::EmptyOrInvalid(_) | Self::MalformedInput(_) | Self::UnsupportedFormat(_)
        )
    }
}
