// commands/common_args.rs

//! # Common Command Arguments
//!
//! Argument definitions for the deploy entry point, plus the struct they are
//! collected into.

use clap::{builder::PossibleValuesParser, Arg, ArgAction, ArgMatches};

use crate::app::{DEFAULT_ENV_FILE, DEFAULT_LOG_LEVEL, LOG_LEVELS};

/// Path to the Lakebase metadata YAML file
pub fn metadata() -> Arg {
    Arg::new("metadata")
        .long("metadata")
        .required(true)
        .value_name("PATH")
        .help("Path to Lakebase metadata YAML file")
        .action(ArgAction::Set)
}

/// Common argument for setting the log level
pub fn log_level() -> Arg {
    Arg::new("log-level")
        .long("log-level")
        .help("Set the logging level")
        .value_parser(PossibleValuesParser::new(LOG_LEVELS))
        .ignore_case(true)
        .default_value(DEFAULT_LOG_LEVEL)
        .action(ArgAction::Set)
}

/// Dotenv file consulted for workspace credentials
pub fn env_file() -> Arg {
    Arg::new("env-file")
        .long("env-file")
        .help("Environment variables file with workspace credentials")
        .default_value(DEFAULT_ENV_FILE)
        .action(ArgAction::Set)
}

/// Arguments of a deploy invocation
#[derive(Debug, Clone, PartialEq)]
pub struct DeployArgs {
    /// Metadata file path as given on the command line
    pub metadata: String,
    /// Logging level
    pub log_level: String,
    /// Environment file path
    pub env_file: String,
}

/// Create DeployArgs from ArgMatches
pub fn args_from_matches(matches: &ArgMatches) -> DeployArgs {
    let value = |id: &str, default: &str| {
        matches
            .get_one::<String>(id)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };

    DeployArgs {
        metadata: value("metadata", ""),
        log_level: value("log-level", DEFAULT_LOG_LEVEL),
        env_file: value("env-file", DEFAULT_ENV_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    fn command() -> Command {
        Command::new("test")
            .arg(metadata())
            .arg(log_level())
            .arg(env_file())
    }

    #[test]
    fn test_defaults() {
        let matches = command()
            .try_get_matches_from(["test", "--metadata", "metadata/dev.yml"])
            .unwrap();
        let args = args_from_matches(&matches);

        assert_eq!(args.metadata, "metadata/dev.yml");
        assert_eq!(args.log_level, "info");
        assert_eq!(args.env_file, ".env");
    }

    #[test]
    fn test_metadata_is_required() {
        assert!(command().try_get_matches_from(["test"]).is_err());
    }

    #[test]
    fn test_log_level_ignores_case() {
        let matches = command()
            .try_get_matches_from(["test", "--metadata", "m.yml", "--log-level", "DEBUG"])
            .unwrap();
        assert_eq!(args_from_matches(&matches).log_level.to_lowercase(), "debug");
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        assert!(command()
            .try_get_matches_from(["test", "--metadata", "m.yml", "--log-level", "loud"])
            .is_err());
    }
}
