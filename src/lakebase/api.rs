// lakebase/api.rs

//! # Postgres API Capability
//!
//! The remote operations the deployer needs, expressed as a trait so that
//! the ensurer can be driven by the HTTP client in production and by an
//! in-memory double in tests.

use std::time::Duration;

use thiserror::Error;

use crate::lakebase::models::{Lookup, Operation, Project};

/// Errors raised by the workspace API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {code}: {message}")]
    Http {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Operation {operation} failed: {message}")]
    OperationFailed { operation: String, message: String },

    #[error("Operation {0} completed without a response")]
    MissingResponse(String),

    #[error("Timed out after {elapsed:?} waiting for operation {operation}")]
    Timeout {
        operation: String,
        elapsed: Duration,
    },
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Lookup and creation of Lakebase projects.
pub trait PostgresApi {
    /// Fetches a project by its full resource name (`projects/{id}`).
    ///
    /// A missing project is `Ok(Lookup::Absent)`, never an error.
    fn get_project(&self, name: &str) -> ApiResult<Lookup>;

    /// Starts creation of a project and returns the long-running operation.
    fn create_project(&self, project_id: &str, project: &Project) -> ApiResult<Operation>;

    /// Blocks until `operation` is done and returns the resulting project.
    fn wait(&self, operation: Operation) -> ApiResult<Project>;
}
