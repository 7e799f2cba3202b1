// app.rs

//! # Application Constants
//!
//! Names, defaults and remote endpoints shared across the application.

use std::time::Duration;

// ============================
// Application Metadata
// ============================

pub const APP_NAME: &str = "lakebase-deploy";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_DESCRIPTION: &str = "Deploy Lakebase Autoscaling infrastructure";

// ============================
// CLI Defaults
// ============================

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
pub const DEFAULT_ENV_FILE: &str = ".env";

// ============================
// Project Defaults
// ============================

/// PostgreSQL major version provisioned when the metadata does not name one.
pub const DEFAULT_PG_VERSION: &str = "17";

/// Prefix of a project's full resource name (`projects/{project_id}`).
pub const PROJECT_NAME_PREFIX: &str = "projects/";

// ============================
// Workspace Client
// ============================

pub const ENV_HOST: &str = "DATABRICKS_HOST";
pub const ENV_TOKEN: &str = "DATABRICKS_TOKEN";

pub const POSTGRES_API_PATH: &str = "/api/2.0/postgres";

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// How long `wait` polls a long-running operation before giving up.
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(20 * 60);

/// Upper bound on the linear poll backoff.
pub const MAX_POLL_INTERVAL: Duration = Duration::from_secs(10);
