// metadata/mod.rs

//! # Metadata Module
//!
//! Loading of the Lakebase metadata YAML file and extraction of the typed
//! deployment configuration from it.
//!
//! The loader only guarantees that the file exists and is a YAML mapping;
//! the `config` submodule decides which keys are required.

pub mod config;
pub mod loader;

pub use config::LakebaseConfig;
pub use loader::load_metadata;

use thiserror::Error;

/// Errors that can occur while loading or interpreting metadata.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Metadata file not found: {0}")]
    NotFound(String),

    #[error("Failed to read metadata file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to parse metadata: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),
}

/// Type alias for metadata results
pub type MetadataResult<T> = Result<T, MetadataError>;
