pub mod rules;
pub mod run;

use livefield::Config;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so JSON output on stdout stays clean.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
