//! Logging setup
//!
//! Diagnostics go to stderr so stdout stays clean for table or JSON output.
//! `SEARCHADS_LOG` takes precedence over the `--verbose` default.

use anyhow::Context as _;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::cli::LogFormat;

/// Environment variable holding an `EnvFilter` directive string
pub const LOG_ENV: &str = "SEARCHADS_LOG";

const QUIET_DIRECTIVES: &str = "warn";
const VERBOSE_DIRECTIVES: &str = "warn,searchads=debug";

/// Install the global subscriber.
///
/// # Errors
/// Fails when `SEARCHADS_LOG` is malformed or a subscriber is already set.
pub fn init_logging(verbose: bool, format: LogFormat) -> anyhow::Result<()> {
    let filter = build_env_filter(verbose)?;
    let registry = Registry::default().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
    }
    .context("failed to install log subscriber")
}

fn build_env_filter(verbose: bool) -> anyhow::Result<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid {LOG_ENV} directive '{directives}'")),
        _ => Ok(EnvFilter::new(default_directives(verbose))),
    }
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVES
    } else {
        QUIET_DIRECTIVES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_enables_debug_for_crate_targets() {
        assert_eq!(default_directives(false), "warn");
        assert!(default_directives(true).contains("searchads=debug"));
    }

    #[test]
    fn default_directives_parse() {
        assert!(EnvFilter::try_new(default_directives(true)).is_ok());
        assert!(EnvFilter::try_new(default_directives(false)).is_ok());
    }
}
