//! Error kinds surfaced by the processor, the exporters and the CLI.
//!
//! Every kind maps to a process exit code so the binary can stay a thin
//! wrapper (`main` prints the message and exits with `exit_code()`).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// An operation ran before a raw dataset was loaded (or on an empty one).
    #[error("{0}")]
    Precondition(String),

    /// The dataset does not have the shape an operation needs (e.g. < 2 rows).
    #[error("{0}")]
    DataShape(String),

    /// Bad caller parameters or a malformed input file.
    #[error("{0}")]
    InvalidArgument(String),

    /// Filesystem / CSV / workbook / JSON failures.
    #[error("{0}")]
    Io(String),

    /// Invalid distribution parameters or non-finite statistics.
    #[error("{0}")]
    Numeric(String),
}

impl AppError {
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    pub fn data_shape(message: impl Into<String>) -> Self {
        Self::DataShape(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    pub fn numeric(message: impl Into<String>) -> Self {
        Self::Numeric(message.into())
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidArgument(_) | AppError::Io(_) => 2,
            AppError::Precondition(_) | AppError::DataShape(_) => 3,
            AppError::Numeric(_) => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_kind() {
        assert_eq!(AppError::invalid_argument("x").exit_code(), 2);
        assert_eq!(AppError::io("x").exit_code(), 2);
        assert_eq!(AppError::precondition("x").exit_code(), 3);
        assert_eq!(AppError::data_shape("x").exit_code(), 3);
        assert_eq!(AppError::numeric("x").exit_code(), 4);
    }

    #[test]
    fn display_is_the_bare_message() {
        let err = AppError::precondition("Load a dataset first.");
        assert_eq!(err.to_string(), "Load a dataset first.");
    }
}
