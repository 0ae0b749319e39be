//! Error types for scope parsing.
//!
//! Every variant carries the offending piece of input so the caller can
//! point at exactly what was rejected. A failed parse never yields a
//! partial [`Scope`](crate::Scope).

use thiserror::Error;

/// Errors produced while parsing a scope string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// The input has no `/` separating the context from the rest.
    #[error("invalid scope: {0}")]
    MalformedScope(String),

    /// The context segment is not `patient`, `user` or `system`.
    #[error("invalid context expected patient, user or system got: {0}")]
    InvalidContext(String),

    /// The segment after `/` has no `.` separating resource and operations.
    #[error("invalid resource or operation: {0}")]
    MalformedResourceOrOperation(String),

    /// The resource is neither `*` nor a known FHIR resource type.
    #[error("invalid resource type: {0}")]
    InvalidResource(String),

    /// The operation specification contains an unknown code, or is empty.
    #[error("invalid operation expected c, r, u, d or s got: {0}")]
    InvalidOperation(String),

    /// The same operation code appears twice.
    #[error("duplicate operation: {0}")]
    DuplicateOperation(String),

    /// A query parameter is not a single `key=value` pair.
    #[error("invalid param expected key=value got: {0}")]
    InvalidParam(String),
}

impl ScopeError {
    /// Returns the piece of input that caused the error.
    pub fn token(&self) -> &str {
        match self {
            ScopeError::MalformedScope(token)
            | ScopeError::InvalidContext(token)
            | ScopeError::MalformedResourceOrOperation(token)
            | ScopeError::InvalidResource(token)
            | ScopeError::InvalidOperation(token)
            | ScopeError::DuplicateOperation(token)
            | ScopeError::InvalidParam(token) => token,
        }
    }
}

/// Result type for scope parsing.
pub type ScopeResult<T> = Result<T, ScopeError>;
