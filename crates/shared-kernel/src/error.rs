// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::value_objects::{DocumentId, Statistic};

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LivecountError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LivecountError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, LivecountError>;

impl LivecountError {
    /// Configuration problems leave the previous configuration in effect.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::Context { source, .. } => source.is_configuration(),
            Self::Domain(err) => err.is_configuration(),
            _ => false,
        }
    }

    /// Host contract violations: offsets or ranges outside the text.
    pub fn is_invalid_range(&self) -> bool {
        match self {
            Self::Context { source, .. } => source.is_invalid_range(),
            Self::Domain(err) => err.is_invalid_range(),
            _ => false,
        }
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Pattern for {key} is not defined")]
    MissingPattern { key: &'static str },

    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern {
        pattern: String,
        details: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Range {start}..{end} is outside text of {len} characters")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("Edits overlap: an edit ending at {previous_end} is followed by one starting at {next_start}")]
    OverlappingEdits { previous_end: usize, next_start: usize },
}

impl DomainError {
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfiguration { .. } | Self::MissingPattern { .. } | Self::InvalidPattern { .. }
        )
    }

    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::InvalidRange { .. } | Self::OverlappingEdits { .. })
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Incremental count drifted for '{document}': incremental ({incremental}) != recomputed ({recomputed})")]
    ConsistencyMismatch {
        document: DocumentId,
        incremental: Statistic,
        recomputed: Statistic,
    },

    #[error("Incremental count for '{document}' went negative; recounted as ({recomputed})")]
    DeltaUnderflow { document: DocumentId, recomputed: Statistic },

    #[error("Document '{document}' has no cached statistic")]
    DocumentNotCached { document: DocumentId },

    #[error("Text of document '{document}' is unavailable: {reason}")]
    SourceUnavailable { document: DocumentId, reason: String },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} settings: {details}")]
    SerializationError { format: String, details: String },

    #[error("Unsupported settings format for '{path}'")]
    UnsupportedFormat { path: PathBuf },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for LivecountError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LivecountError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for LivecountError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LivecountError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LivecountError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LivecountError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
