use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingSettings;
use crate::error::AppError;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when it is set.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), AppError> {
    let log_level = settings
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("financial_risk_engine={},risk_assess={}", log_level, log_level).into());

    let registry = tracing_subscriber::registry().with(filter);

    let result = match settings.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        "pretty" => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| AppError::InternalError(format!("Failed to initialize logging: {}", e)))
}
