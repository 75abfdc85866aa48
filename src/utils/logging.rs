use tracing_subscriber::EnvFilter;

use crate::models::AuditConfig;

/// Level used when `RUST_LOG` is not set
pub fn default_level(config: &AuditConfig) -> &'static str {
    if config.debug_mode {
        "debug"
    } else if config.quiet {
        "error"
    } else {
        "info"
    }
}

/// Install the global subscriber. Logs go to stderr, stdout carries the report.
pub fn init_logging(config: &AuditConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(config)));

    // module paths only help when chasing a problem
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.debug_mode)
        .try_init();
}
