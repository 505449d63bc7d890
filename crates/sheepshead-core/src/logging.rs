use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Installs a global fmt subscriber. `RUST_LOG` wins over the configured
/// level. Returns false when a subscriber was already installed.
pub fn init_logging(logging: &LoggingConfig) -> bool {
    let level = logging.level().unwrap_or(Level::INFO);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}

#[cfg(test)]
mod tests {
    use super::init_logging;
    use crate::config::LoggingConfig;

    #[test]
    fn second_install_is_tolerated() {
        let config = LoggingConfig {
            tracing_level: "nonsense".to_string(),
        };
        let _ = init_logging(&config);
        assert!(!init_logging(&config));
    }
}
