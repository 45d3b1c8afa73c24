//! Logging setup.
//!
//! Centralizes logger initialization behind the `log` facade so the engine
//! and the sandbox binary report through one sink.

use std::sync::Once;

/// Logger configuration.
///
/// `filter` follows the `env_logger` syntax, e.g. `"easel_engine=debug"`.
/// When unset, `RUST_LOG` wins, then the info-level default.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

static INIT: Once = Once::new();

/// Initializes the process-wide logger.
///
/// Idempotent: only the first call takes effect. Intended early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();
        log::debug!("logging ready");
    });
}
