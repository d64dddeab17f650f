//! Error types for the object types crate.
//!
//! Reading and writing catalogs can fail in two ways: the file itself could
//! not be accessed ([`ErrorKind::Io`]) or its contents are not a valid object
//! types document ([`ErrorKind::Format`]).

use std::io;
use thiserror::Error;

/// Broad classification of [`ObjectTypesError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file could not be opened, read or written.
    Io,
    /// The file was readable but is not an object types document.
    Format,
}

/// Errors that can occur while reading or writing an object types file.
#[derive(Error, Debug)]
pub enum ObjectTypesError {
    /// The file could not be opened for reading.
    #[error("Could not open file.")]
    OpenForReading(#[source] io::Error),

    /// The file could not be opened for writing.
    #[error("Could not open file for writing.")]
    OpenForWriting(#[source] io::Error),

    /// The writer failed after the file was opened.
    #[error("{0}")]
    WriteFault(String),

    /// The document root is missing or is not `objecttypes`.
    #[error("File doesn't contain object types.")]
    MissingRoot,

    /// The XML is malformed.
    #[error("{message}\n\nLine {line}, column {column}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
    },
}

impl ObjectTypesError {
    /// Returns the broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OpenForReading(_) | Self::OpenForWriting(_) | Self::WriteFault(_) => {
                ErrorKind::Io
            }
            Self::MissingRoot | Self::Parse { .. } => ErrorKind::Format,
        }
    }

    pub fn is_io(&self) -> bool {
        self.kind() == ErrorKind::Io
    }

    pub fn is_format(&self) -> bool {
        self.kind() == ErrorKind::Format
    }
}

/// Result type alias for object types operations.
pub type ObjectTypesResult<T> = Result<T, ObjectTypesError>;
