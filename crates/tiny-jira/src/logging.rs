//! Diagnostic output on stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "TINY_JIRA_LOG";

/// The filter used when [`LOG_ENV`] is unset or invalid.
pub fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Installs the global subscriber. `-v` overrides the environment.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init(verbose: bool) {
    let filter = if verbose {
        default_filter(true)
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(false))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
