use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_LOG_FILTER: &str = "info,pricing_scout=debug";

/// Installs the global subscriber. A subscriber installed earlier wins; the
/// launcher may try to install its own afterwards, which is then ignored.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("logging initialized");
    }
}
