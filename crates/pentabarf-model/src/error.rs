//! Error types shared by every pipeline stage.

use std::path::PathBuf;
use thiserror::Error;

/// Pipeline stage an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    /// Reading and parsing the input records.
    Load,
    /// Grouping records and building output events.
    Map,
    /// Serializing and writing the schedule document.
    Emit,
    /// Resolving the run configuration.
    Config,
}

/// Errors that can occur while converting a record list into a schedule.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A record lacks one of the required keys.
    #[error("record {index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A required key is present but its value is not a string.
    #[error("record {index}: field `{field}` is not a string")]
    InvalidField { index: usize, field: &'static str },

    /// The input document is not a list of objects.
    #[error("invalid input document: {message}")]
    InvalidDocument { message: String },

    /// The record uid has no characters to strip.
    #[error("record {index}: malformed uid {uid:?}")]
    MalformedId { index: usize, uid: String },

    /// A record references a day that grouping never created.
    #[error("record {index}: unknown day `{giorno}`")]
    UnknownDay { index: usize, giorno: String },

    /// Reading the input failed.
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing or writing the output failed.
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The run configuration is unusable.
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl ScheduleError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Stage that raised the error.
    pub fn stage(&self) -> ErrorStage {
        match self {
            Self::MissingField { .. }
            | Self::InvalidField { .. }
            | Self::InvalidDocument { .. }
            | Self::Read { .. } => ErrorStage::Load,
            Self::MalformedId { .. } | Self::UnknownDay { .. } => ErrorStage::Map,
            Self::Write { .. } => ErrorStage::Emit,
            Self::Config { .. } => ErrorStage::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
