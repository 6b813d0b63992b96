//! CLI output formatting and logging setup.

use tracing_subscriber::EnvFilter;

/// Serializes tests that touch process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

pub fn debug_enabled() -> bool {
    std::env::var_os("PAPERDECK_DEBUG").is_some_and(|v| !v.is_empty())
}

/// Filter used when `RUST_LOG` is unset or invalid.
fn fallback_filter() -> &'static str {
    if debug_enabled() { "debug" } else { "warn" }
}

/// Log to stderr; `RUST_LOG` wins, else [`fallback_filter`].
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(fallback_filter())),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

pub fn print_error(err: &anyhow::Error) {
    if debug_enabled() {
        eprintln!("{err:#}");
    } else {
        // Best-effort single line.
        eprintln!("{err}");
    }
}
