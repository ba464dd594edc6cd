use thiserror::Error;
use crate::core::library::LibraryError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{message}")]
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
    #[error("{message}")]
    Storage {
        message: String,
        retryable: bool,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let message = other.to_string();
        match other {
            LibraryError::Validation { field, .. } => {
                CommandError::Validation { message, field }
            }
            LibraryError::DuplicateKey { .. } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { .. } => {
                CommandError::NotFound { message }
            }
            LibraryError::CorruptStore { .. } => {
                CommandError::Storage { message, retryable: false }
            }
            LibraryError::Serialization { .. } => {
                CommandError::Storage { message, retryable: false }
            }
            LibraryError::Runtime { .. } => {
                CommandError::Storage { message, retryable: true }
            }
        }
    }
}
