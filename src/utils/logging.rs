// utils/logging.rs

use env_logger::Env;
use log::LevelFilter;

/// Maps a `--log-level` value to a filter. Unrecognized values fall back to `Info`.
pub fn level_filter(log_level: &str) -> LevelFilter {
    match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Sets the logger level based on the provided argument.
///
/// `RUST_LOG` can still narrow individual modules; dependency crates are
/// kept at `warn` so that HTTP internals do not flood `debug` output.
pub fn initialize_logger(log_level: &str) {
    env_logger::Builder::from_env(Env::default())
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), level_filter(log_level))
        .format_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_filter("warning"), LevelFilter::Warn);
        assert_eq!(level_filter("nonsense"), LevelFilter::Info);
    }
}
