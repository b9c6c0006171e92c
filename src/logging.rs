use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the dashboard log file.
pub const LOG_ENV_VAR: &str = "SERVERDASH_LOG";

/// Initialize tracing for dashboard mode.
///
/// Logging is disabled by default because the dashboard owns the terminal.
/// Set `SERVERDASH_LOG` to a file path to enable it. The file name gets a
/// `.{timestamp}.{pid}` suffix so concurrent instances never share a file.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
        return;
    };

    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

/// Initialize tracing for headless commands: stderr, `warn` unless
/// `RUST_LOG` says otherwise. Stdout stays reserved for JSON output.
pub fn init_stderr_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
