use std::convert::Infallible;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

pub const EMPTY_FIELD: &str = "empty field";
pub const MISSING_FIELD: &str = "missing field";
pub const NOT_AN_INTEGER: &str = "not an integer";
pub const NON_POSITIVE_YEAR: &str = "non-positive year";
pub const YEAR_OUT_OF_RANGE: &str = "year out of range";
pub const INVALID_STATUS: &str = "invalid status";
pub const ALREADY_LOANED: &str = "already loaned";
pub const ALREADY_AVAILABLE: &str = "already available";

#[derive(Error, Debug)]
pub enum LibraryError {
    // A field or state-transition invariant was violated. Only the current
    // operation is aborted.
    #[error("{}{message}", field_prefix(.field))]
    Validation {
        message: String,
        field: Option<String>,
    },
    #[error("{message}")]
    DuplicateKey {
        message: String,
    },
    #[error("{message}")]
    NotFound {
        message: String,
    },
    // The backing file exists but does not hold a JSON array of records.
    #[error("{message}")]
    CorruptStore {
        message: String,
    },
    #[error("{message}")]
    Serialization {
        message: String,
    },
    #[error("{message}")]
    Runtime {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

fn field_prefix(field: &Option<String>) -> String {
    field.as_ref().map(|f| format!("{}: ", f)).unwrap_or_default()
}

impl LibraryError {
    pub fn validation(message: &str, field: Option<&str>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), field: field.map(str::to_string) }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn corrupt_store(message: &str) -> LibraryError {
        LibraryError::CorruptStore { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, source: Option<std::io::Error>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), source }
    }

    // The bare message, without the field prefix used by Display.
    pub fn message(&self) -> &str {
        match self {
            LibraryError::Validation { message, .. } => message,
            LibraryError::DuplicateKey { message } => message,
            LibraryError::NotFound { message } => message,
            LibraryError::CorruptStore { message } => message,
            LibraryError::Serialization { message } => message,
            LibraryError::Runtime { message, .. } => message,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, LibraryError::Validation { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(format!("io error {}", err).as_str(), Some(err))
    }
}

impl From<Infallible> for LibraryError {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(format!("serde json {}", err).as_str())
    }
}

/// A specialized Result type for the library catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum BookStatus {
    #[default]
    Available,
    Loaned,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Loaned => "loaned",
        }
    }

    // Human readable label used when listing books.
    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Loaned => "On loan",
        }
    }
}

impl FromStr for BookStatus {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(BookStatus::Available),
            "loaned" => Ok(BookStatus::Loaned),
            _ => Err(LibraryError::validation(INVALID_STATUS, Some("status"))),
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
