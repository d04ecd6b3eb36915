//! Process-wide logging for the host.
//!
//! Library crates log through the `log` facade; those records are bridged
//! into `tracing` and written to stderr so stdout carries command output only.
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Install the subscriber. `RUST_LOG` wins over `default_level`.
pub fn init(default_level: &str) {
    if let Err(e) = LogTracer::init() {
        eprintln!("Failed to bridge log records into tracing: {e}");
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install tracing subscriber: {e}");
    }
}
