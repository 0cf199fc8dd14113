use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file prefix.
pub const LOG_ENV: &str = "RINKWATCH_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless `RINKWATCH_LOG` is set to a file path. The
/// display owns the terminal and the companion's stdout carries the wire
/// protocol, so nothing is ever logged to stdout or stderr.
///
/// Each process writes its own file: `{path}.{process}.{timestamp}.{pid}`.
pub fn init_tracing(process: &str) {
    let Some(log_path) = std::env::var(LOG_ENV).ok() else {
        return;
    };

    let unique_path = log_file_name(&log_path, process);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn log_file_name(prefix: &str, process: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{prefix}.{process}.{timestamp}.{pid}")
}
