// error.rs

//! # Error Handling Module
//!
//! Top-level error type for the Lakebase deploy application.
//! `AppError` gathers the errors raised by the metadata loader, the client
//! configuration discovery and the workspace API so that `main` has a single
//! value to report before exiting.
//!
//! # Usage Example
//! ```rust
//! use crate::error::AppError;
//! use crate::metadata::MetadataError;
//!
//! fn example_function() -> Result<(), AppError> {
//!     Err(MetadataError::MissingField("lakebase".to_string()).into())
//! }
//! ```

use std::error::Error;
use std::fmt;

use crate::core::env::ConfigError;
use crate::lakebase::ApiError;
use crate::metadata::MetadataError;

// ============================
// Application Error Definitions
// ============================

/// Represents errors that may occur within the application.
///
/// Every class is fatal:
/// - Input errors (metadata file missing, malformed or incomplete)
/// - Client configuration errors (workspace host or token not discoverable)
/// - Remote errors (lookup, creation or provisioning failures)
#[derive(Debug)]
pub enum AppError {
    /// The metadata file could not be loaded or lacks required keys.
    Metadata(MetadataError),

    /// The workspace client could not be configured.
    Config(ConfigError),

    /// A remote call failed.
    Api(ApiError),
}

// ============================
// Display Trait Implementation
// ============================

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Metadata(err) => write!(f, "Metadata error: {}", err),
            Self::Config(err) => write!(f, "Configuration error: {}", err),
            Self::Api(err) => write!(f, "Workspace API error: {}", err),
        }
    }
}

// ============================
// Error Trait Implementation
// ============================

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Metadata(err) => err.source(),
            Self::Config(err) => err.source(),
            Self::Api(err) => err.source(),
        }
    }
}

// ============================
// Conversions
// ============================

impl From<MetadataError> for AppError {
    fn from(error: MetadataError) -> Self {
        Self::Metadata(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<ApiError> for AppError {
    fn from(error: ApiError) -> Self {
        Self::Api(error)
    }
}

// ============================
// Utility Functions
// ============================

/// Renders an error followed by its chain of sources, one per line.
pub fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(&format!("\n  caused by: {}", cause_text));
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_error_class() {
        let err = AppError::from(MetadataError::MissingField("lakebase".to_string()));
        assert_eq!(
            err.to_string(),
            "Metadata error: Missing required field: lakebase"
        );

        let err = AppError::from(ConfigError::Missing("DATABRICKS_HOST"));
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_error_chain_skips_repeated_causes() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::from(MetadataError::Read(io));
        let chain = error_chain(&err);
        assert_eq!(chain.matches("denied").count(), 1);
    }
}
