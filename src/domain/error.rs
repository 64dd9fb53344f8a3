//! Domain-level errors.
//!
//! These errors represent credential policy violations and store failures
//! as seen by the domain logic. They are independent of infrastructure
//! concerns (HTTP, serialization, process wiring).
//!
//! A missing record is not an error at this level; lookups surface it as
//! `Ok(None)` or a dedicated outcome variant.

use thiserror::Error;

use crate::config::MIN_SECRET_LENGTH;

/// Domain-specific errors for the credential lifecycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Supplied secret does not meet the length policy
    #[error("secret must be at least {min} characters", min = MIN_SECRET_LENGTH)]
    WeakCredential,

    /// The backing store failed or could not be reached
    #[error("user store unavailable: {0}")]
    StoreUnavailable(String),

    /// The hashing primitive failed internally
    #[error("credential hashing failed: {0}")]
    HashingFailure(String),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
