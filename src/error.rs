//! Application error type.
//!
//! Every failure in the pipeline is a recoverable, reported error: the caller
//! receives a tagged kind plus a human-readable message and decides how to
//! surface it. Nothing here retries; the computation is deterministic for a
//! given input, so retrying cannot change the outcome.

/// Failure classification, matchable by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Degenerate input: empty series, non-positive horizon, bad split fraction.
    InvalidInput,
    /// Too few observations left to fit after the train/test split.
    InsufficientData,
    /// Malformed or oversized date range.
    Range,
    /// Data source or I/O failure (network, provider rejection, export file).
    Data,
}

#[derive(Debug, Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    pub fn insufficient_data(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InsufficientData, message)
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Range, message)
    }

    pub fn data(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Data, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Stable process exit code for the `mt` binary.
    pub fn exit_code(&self) -> u8 {
        match self.kind {
            ErrorKind::InvalidInput => 2,
            ErrorKind::InsufficientData => 3,
            ErrorKind::Range => 4,
            ErrorKind::Data => 5,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}
