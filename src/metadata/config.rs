// metadata/config.rs

//! # Deployment Configuration
//!
//! Typed view of the `lakebase` block of a metadata file.
//!
//! ```yaml
//! lakebase:
//!   project:
//!     name: analytics
//!     display_name: Analytics
//!     pg_version: "17"
//! ```
//!
//! Keys this tool does not deploy yet (compute, synced tables) are ignored.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};

use crate::app::DEFAULT_PG_VERSION;
use crate::metadata::{MetadataError, MetadataResult};

/// The `lakebase` section of a metadata file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LakebaseConfig {
    /// Desired project
    pub project: ProjectConfig,
}

/// Desired state of a Lakebase project.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Project ID, not the full `projects/{id}` resource name
    pub name: String,

    /// Label shown in the UI; the project ID is used when unset
    #[serde(default)]
    pub display_name: Option<String>,

    /// PostgreSQL major version
    #[serde(default = "default_pg_version", deserialize_with = "string_or_number")]
    pub pg_version: String,
}

fn default_pg_version() -> String {
    DEFAULT_PG_VERSION.to_string()
}

/// Accepts `pg_version: 17` as well as `pg_version: "17"`; null means the default.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Version {
        Text(String),
        Integer(u64),
    }

    Ok(match Option::<Version>::deserialize(deserializer)? {
        Some(Version::Text(s)) => s,
        Some(Version::Integer(n)) => n.to_string(),
        None => default_pg_version(),
    })
}

impl LakebaseConfig {
    /// Extracts the `lakebase` section from a loaded metadata mapping.
    pub fn from_metadata(cfg: &Mapping) -> MetadataResult<Self> {
        let lakebase = cfg
            .get("lakebase")
            .ok_or_else(|| MetadataError::MissingField("lakebase".to_string()))?;

        let project = lakebase
            .get("project")
            .ok_or_else(|| MetadataError::MissingField("lakebase.project".to_string()))?;

        if project.get("name").map_or(true, Value::is_null) {
            return Err(MetadataError::MissingField(
                "lakebase.project.name".to_string(),
            ));
        }

        let config: LakebaseConfig = serde_yaml::from_value(lakebase.clone())
            .map_err(|e| MetadataError::InvalidField(format!("lakebase: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> MetadataResult<()> {
        if self.project.name.trim().is_empty() {
            return Err(MetadataError::MissingField(
                "lakebase.project.name".to_string(),
            ));
        }

        if self.project.pg_version.trim().is_empty() {
            return Err(MetadataError::InvalidField(
                "lakebase.project.pg_version must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let cfg = mapping("lakebase:\n  project:\n    name: analytics\n");
        let config = LakebaseConfig::from_metadata(&cfg).unwrap();

        assert_eq!(config.project.name, "analytics");
        assert_eq!(config.project.display_name, None);
        assert_eq!(config.project.pg_version, "17");
    }

    #[test]
    fn test_explicit_values() {
        let cfg = mapping(
            "lakebase:\n  project:\n    name: analytics\n    display_name: Analytics DB\n    pg_version: \"16\"\n",
        );
        let config = LakebaseConfig::from_metadata(&cfg).unwrap();

        assert_eq!(config.project.display_name.as_deref(), Some("Analytics DB"));
        assert_eq!(config.project.pg_version, "16");
    }

    #[test]
    fn test_numeric_pg_version() {
        let cfg = mapping("lakebase:\n  project:\n    name: analytics\n    pg_version: 16\n");
        let config = LakebaseConfig::from_metadata(&cfg).unwrap();
        assert_eq!(config.project.pg_version, "16");
    }

    #[test]
    fn test_null_pg_version_uses_default() {
        let cfg = mapping("lakebase:\n  project:\n    name: analytics\n    pg_version: ~\n");
        let config = LakebaseConfig::from_metadata(&cfg).unwrap();
        assert_eq!(config.project.pg_version, "17");
    }

    #[test]
    fn test_unknown_sections_ignored() {
        let cfg = mapping(
            "lakebase:\n  project:\n    name: analytics\n  compute:\n    size: small\nother: 1\n",
        );
        assert!(LakebaseConfig::from_metadata(&cfg).is_ok());
    }

    #[test]
    fn test_missing_sections() {
        let cases = [
            ("other: 1\n", "lakebase"),
            ("lakebase:\n  compute: {}\n", "lakebase.project"),
            ("lakebase:\n  project:\n    display_name: x\n", "lakebase.project.name"),
            ("lakebase:\n  project:\n    name: \"  \"\n", "lakebase.project.name"),
        ];

        for (yaml, field) in cases {
            match LakebaseConfig::from_metadata(&mapping(yaml)) {
                Err(MetadataError::MissingField(f)) => assert_eq!(f, field),
                other => panic!("expected MissingField({}), got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_wrong_type_is_invalid() {
        let cfg = mapping("lakebase:\n  project:\n    name: [a, b]\n");
        assert!(matches!(
            LakebaseConfig::from_metadata(&cfg),
            Err(MetadataError::InvalidField(_))
        ));
    }
}
