//! Tracing subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{LogFormat, LogSettings};

/// Installs the global subscriber. `RUST_LOG` wins over `settings.level`.
///
/// Returns `false` when a subscriber was already installed (tests, embedding).
pub fn init(settings: &LogSettings) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match settings.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    };

    match installed {
        Ok(()) => {
            tracing::info!(level = %settings.level, format = ?settings.format, "telemetry initialised");
            true
        }
        Err(_) => false,
    }
}
