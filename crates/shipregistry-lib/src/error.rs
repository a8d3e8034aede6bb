use thiserror::Error;

/// Convenient result alias for the ship registry library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Two kinds suffice for this domain: client payloads that violate a field
/// bound (or miss a required field), and references to ships that do not
/// exist. Neither is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Raised when ship data fails validation.
    #[error("invalid ship data: {message}")]
    Validation { message: String },

    /// Raised when an operation references an id absent from storage.
    #[error("no ship with id {id}")]
    NotFound { id: u64 },
}
