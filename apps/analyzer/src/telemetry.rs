use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AnalyzerConfig;

/// Installs structured logging for a host process that has none yet.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `config.log_level`.
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(config: &AnalyzerConfig) -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.log_level))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
