//! Logging and tracing bootstrap.

use tracing_subscriber::EnvFilter;
use yatra_kernel::settings::{LogFormat, TelemetrySettings};

/// Initialize the tracing pipeline once, honoring `RUST_LOG` when set.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(settings: &TelemetrySettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match settings.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(target: "yatra-telemetry", "tracing pipeline initialized");
    }
}
