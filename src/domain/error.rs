//! Domain Errors
//!
//! Request-level failures of the ranking pipeline. A destination the
//! provider cannot resolve is not an error; see `DestinationStatus::NotFound`.

use thiserror::Error;

/// Failure of the distance resolver as a whole.
///
/// Any of these aborts the pipeline for the current request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("request to distance provider failed: {0}")]
    Transport(String),

    #[error("distance provider returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    // Structured error reported by the provider inside a 2xx response
    #[error("distance provider error {status}: {message}")]
    Api { status: String, message: String },

    #[error("malformed distance provider response: {0}")]
    Malformed(String),

    #[error("distance provider returned {got} results for {expected} destinations")]
    LengthMismatch { expected: usize, got: usize },
}

/// Request-level failure of the pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Please provide a starting point and at least one destination.")]
    MissingInput,

    #[error("An unexpected error occurred: {0}")]
    ResolverFailure(#[from] ResolverError),
}
