//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `level` is an `EnvFilter` directive such as `info` or
/// `shortener=debug,tower_http=info`; an unparsable directive falls back to
/// `info`. `format` selects human-readable `text` or one-JSON-object-per-line
/// `json` output.
pub fn init(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
