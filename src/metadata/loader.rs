// metadata/loader.rs

//! # Metadata Loader
//!
//! Resolves a metadata path, reads it and parses it as a YAML mapping.
//!
//! ## Example Usage
//! ```rust
//! use crate::metadata::load_metadata;
//!
//! let cfg = load_metadata("metadata/dev.yml")?;
//! ```

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_yaml::{Mapping, Value};

use crate::metadata::{MetadataError, MetadataResult};

/// Resolves `path` to an absolute path.
///
/// Relative paths are joined onto the current directory. When the file
/// exists the result is canonicalized so that symlinks and `..` are gone.
pub fn resolve_path(path: &str) -> MetadataResult<PathBuf> {
    let candidate = Path::new(path);
    let absolute = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        env::current_dir().map_err(MetadataError::Read)?.join(candidate)
    };

    Ok(fs::canonicalize(&absolute).unwrap_or(absolute))
}

/// Loads a metadata file and returns its top-level mapping.
///
/// # Errors
/// - `MetadataError::NotFound` if the path does not name an existing file.
/// - `MetadataError::Read` for any other I/O failure.
/// - `MetadataError::Parse` if the content is not valid YAML.
/// - `MetadataError::InvalidField` if the document is not a mapping.
pub fn load_metadata(path: &str) -> MetadataResult<Mapping> {
    let file_path = resolve_path(path)?;

    info!("Loading metadata from {}", file_path.display());

    let content = fs::read_to_string(&file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MetadataError::NotFound(file_path.display().to_string()),
        _ => MetadataError::Read(e),
    })?;

    let document: Value = serde_yaml::from_str(&content)?;
    debug!("Parsed metadata document from {}", file_path.display());

    match document {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Err(MetadataError::InvalidField(format!(
            "metadata file {} is empty",
            file_path.display()
        ))),
        _ => Err(MetadataError::InvalidField(format!(
            "metadata file {} must contain a mapping at the top level",
            file_path.display()
        ))),
    }
}
