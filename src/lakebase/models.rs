// lakebase/models.rs

//! # Lakebase Models
//!
//! Request and response payloads of the workspace Postgres API.
//! Field names follow the JSON wire format; every server-assigned field is
//! optional so that partial responses still decode.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::app::PROJECT_NAME_PREFIX;

/// A Lakebase project.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Project {
    /// Full resource name, `projects/{project_id}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,

    /// Desired state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<ProjectSpec>,

    /// Observed state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProjectSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pg_version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProjectStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pg_version: Option<String>,

    /// Provisioning state, e.g. `READY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Project {
    /// Builds the creation payload for a project.
    pub fn desired(display_name: &str, pg_version: &str) -> Self {
        Self {
            spec: Some(ProjectSpec {
                display_name: Some(display_name.to_string()),
                pg_version: Some(pg_version.to_string()),
            }),
            ..Self::default()
        }
    }

    pub fn status_display_name(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.display_name.as_deref())
    }

    pub fn status_pg_version(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.pg_version.as_deref())
    }
}

/// Renders `name=..., display_name=..., pg_version=...` for log lines.
impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={}, display_name={}, pg_version={}",
            self.name.as_deref().unwrap_or("None"),
            self.status_display_name().unwrap_or("None"),
            self.status_pg_version().unwrap_or("None"),
        )
    }
}

/// Full resource name of a project ID.
pub fn project_resource_name(project_id: &str) -> String {
    format!("{}{}", PROJECT_NAME_PREFIX, project_id)
}

/// Outcome of looking a project up by name.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Project),
    Absent,
}

/// A long-running operation returned by mutating calls.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Operation {
    /// Resource name used to poll the operation
    pub name: String,

    #[serde(default)]
    pub done: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,

    /// Result payload once `done` is set and no error occurred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<JsonValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OperationStatus>,
}

/// Error status attached to a failed operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OperationStatus {
    #[serde(default)]
    pub code: Option<JsonValue>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned by the workspace REST API on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error_code: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}
