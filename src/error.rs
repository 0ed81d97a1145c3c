//! Error types for the numeric and sequence helpers.

use thiserror::Error;

/// Failure raised by a helper when its arguments cannot be used
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilError {
    /// An argument was of the wrong kind (not a number, not an integer, empty input).
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),

    /// Numeric bounds that contradict each other, such as a max below the min.
    #[error("InvalidRange: {0}")]
    InvalidRange(String),
}

impl UtilError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        let err = UtilError::InvalidArgument(message.into());
        log::warn!("{}", err);
        err
    }

    pub(crate) fn invalid_range(message: impl Into<String>) -> Self {
        let err = UtilError::InvalidRange(message.into());
        log::warn!("{}", err);
        err
    }
}

pub type Result<T> = std::result::Result<T, UtilError>;
