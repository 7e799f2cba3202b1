// lakebase/project.rs

//! # Project Ensurer
//!
//! Makes sure a Lakebase project exists. An existing project is left
//! untouched, even when its display name or Postgres version differ from
//! the requested ones; an absent project is created and awaited.
//!
//! ## Example Usage
//! ```rust
//! use crate::lakebase::project::ensure_project;
//!
//! ensure_project(&client, "analytics", None, "17")?;
//! ```

use log::info;

use crate::lakebase::api::{ApiResult, PostgresApi};
use crate::lakebase::models::{project_resource_name, Lookup, Project};

/// What `ensure_project` did.
#[derive(Debug, Clone, PartialEq)]
pub enum EnsureOutcome {
    /// The project was already there and was not modified.
    Existing(Project),
    /// The project was created by this call.
    Created(Project),
}

impl EnsureOutcome {
    pub fn project(&self) -> &Project {
        match self {
            Self::Existing(project) | Self::Created(project) => project,
        }
    }
}

/// Ensures that the project `name` exists.
///
/// # Arguments
/// - `api` - Workspace API handle.
/// - `name` - Project ID, not the full resource path.
/// - `display_name` - UI label; defaults to `name` when unset or blank.
/// - `pg_version` - PostgreSQL major version used on creation.
///
/// # Errors
/// Any lookup failure other than "not found", a rejected creation request
/// and a failed or timed-out operation are returned unchanged. Nothing is
/// retried or cleaned up.
pub fn ensure_project<A>(
    api: &A,
    name: &str,
    display_name: Option<&str>,
    pg_version: &str,
) -> ApiResult<EnsureOutcome>
where
    A: PostgresApi + ?Sized,
{
    let display_name = display_name
        .filter(|label| !label.trim().is_empty())
        .unwrap_or(name);

    match api.get_project(&project_resource_name(name))? {
        Lookup::Found(project) => {
            info!("Project already exists: {}", project);
            Ok(EnsureOutcome::Existing(project))
        }
        Lookup::Absent => {
            info!("Creating Lakebase project: {}...", name);

            let operation = api.create_project(name, &Project::desired(display_name, pg_version))?;
            let project = api.wait(operation)?;

            info!("Created Lakebase project: {}", project);
            Ok(EnsureOutcome::Created(project))
        }
    }
}
