// commands/deploy.rs

//! # Deploy Command Module
//!
//! Deploys Lakebase components described by a metadata file.
//!
//! Execution order is project, then compute, then synced tables. Only the
//! project step exists today.
//!
//! ## Example Usage
//! ```bash
//! ./lakebase-deploy --metadata metadata/dev.yml
//! ```

use log::{debug, info};
use serde_yaml::Mapping;

use crate::commands::common_args::DeployArgs;
use crate::core::env::ClientConfig;
use crate::error::AppError;
use crate::lakebase::{ensure_project, EnsureOutcome, PostgresApi, WorkspaceClient};
use crate::metadata::{load_metadata, LakebaseConfig};
use crate::print_success;
use crate::utils::display::print_unicode_box;

/// Ensures the configured project exists.
pub fn deploy_project<A>(api: &A, lakebase_cfg: &LakebaseConfig) -> Result<EnsureOutcome, AppError>
where
    A: PostgresApi + ?Sized,
{
    let project = &lakebase_cfg.project;
    debug!("Project config: {:?}", project);

    Ok(ensure_project(
        api,
        &project.name,
        project.display_name.as_deref(),
        &project.pg_version,
    )?)
}

/// Deploys every Lakebase component found in a loaded metadata mapping.
pub fn deploy_from_metadata<A>(api: &A, cfg: &Mapping) -> Result<EnsureOutcome, AppError>
where
    A: PostgresApi + ?Sized,
{
    let lakebase_cfg = LakebaseConfig::from_metadata(cfg)?;
    deploy_project(api, &lakebase_cfg)
}

/// Loads metadata, connects to the workspace and deploys.
///
/// The metadata is read before any client is configured, so a missing or
/// malformed file fails without touching the network.
pub fn run(args: &DeployArgs) -> Result<EnsureOutcome, AppError> {
    let cfg = load_metadata(&args.metadata)?;

    let config = ClientConfig::discover(&args.env_file)?;
    info!("Connecting to workspace {}", config.host);
    let client = WorkspaceClient::new(&config)?;

    deploy_from_metadata(&client, &cfg)
}

/// Executes the deploy command.
pub fn execute(args: &DeployArgs) -> Result<(), AppError> {
    print_unicode_box(&format!("🚀 Deploying Lakebase metadata: [{}]", args.metadata));

    let outcome = run(args)?;
    let status = match outcome {
        EnsureOutcome::Existing(_) => "Project already exists",
        EnsureOutcome::Created(_) => "Project created",
    };
    print_success!("{}: {}", status, outcome.project());

    print_success!("Lakebase deployment finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::lakebase::models::Project;
    use crate::lakebase::project::tests::FakeWorkspace;
    use crate::metadata::MetadataError;

    fn metadata_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    /// Same order as `run`, with the workspace swapped for a fake.
    fn run_with(fake: &FakeWorkspace, path: &str) -> Result<EnsureOutcome, AppError> {
        let cfg = load_metadata(path)?;
        deploy_from_metadata(fake, &cfg)
    }

    #[test]
    fn test_scenario_new_project() {
        let fake = FakeWorkspace::default();
        let file = metadata_file("lakebase:\n  project:\n    name: analytics\n");

        let outcome = run_with(&fake, file.path().to_str().unwrap()).unwrap();

        assert!(matches!(outcome, EnsureOutcome::Created(_)));
        assert_eq!(*fake.lookups.borrow(), vec!["projects/analytics".to_string()]);
        assert_eq!(
            fake.creates.borrow()[0],
            ("analytics".to_string(), Project::desired("analytics", "17"))
        );
    }

    #[test]
    fn test_empty_display_name_uses_project_id() {
        let fake = FakeWorkspace::default();
        let file = metadata_file(
            "lakebase:\n  project:\n    name: analytics\n    display_name: \"\"\n",
        );

        run_with(&fake, file.path().to_str().unwrap()).unwrap();

        let creates = fake.creates.borrow();
        let spec = creates[0].1.spec.as_ref().unwrap();
        assert_eq!(spec.display_name.as_deref(), Some("analytics"));
    }

    #[test]
    fn test_scenario_existing_project() {
        let fake = FakeWorkspace::with_project("analytics", "Analytics", "17");
        let file = metadata_file(
            "lakebase:\n  project:\n    name: analytics\n    display_name: Renamed\n",
        );

        let outcome = run_with(&fake, file.path().to_str().unwrap()).unwrap();

        assert!(matches!(outcome, EnsureOutcome::Existing(_)));
        assert!(fake.creates.borrow().is_empty());
    }

    #[test]
    fn test_missing_file_makes_no_remote_calls() {
        let fake = FakeWorkspace::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dev.yml");

        let result = run_with(&fake, path.to_str().unwrap());

        assert!(matches!(
            result,
            Err(AppError::Metadata(MetadataError::NotFound(_)))
        ));
        assert_eq!(fake.remote_calls(), 0);
    }

    #[test]
    fn test_malformed_file_makes_no_remote_calls() {
        let fake = FakeWorkspace::default();
        let file = metadata_file("lakebase: {project: [\n");

        let result = run_with(&fake, file.path().to_str().unwrap());

        assert!(matches!(
            result,
            Err(AppError::Metadata(MetadataError::Parse(_)))
        ));
        assert_eq!(fake.remote_calls(), 0);
    }

    #[test]
    fn test_missing_project_block_makes_no_remote_calls() {
        let fake = FakeWorkspace::default();
        let file = metadata_file("lakebase:\n  compute:\n    size: small\n");

        let result = run_with(&fake, file.path().to_str().unwrap());

        assert!(matches!(
            result,
            Err(AppError::Metadata(MetadataError::MissingField(_)))
        ));
        assert_eq!(fake.remote_calls(), 0);
    }

    #[test]
    fn test_run_fails_before_network_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = DeployArgs {
            metadata: dir.path().join("absent.yml").to_string_lossy().to_string(),
            log_level: "info".to_string(),
            env_file: dir.path().join(".env").to_string_lossy().to_string(),
        };

        assert!(matches!(
            run(&args),
            Err(AppError::Metadata(MetadataError::NotFound(_)))
        ));
    }
}
