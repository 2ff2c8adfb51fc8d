use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// Filter precedence: `env_filter`, then `RUST_LOG`, then `default_level`.
/// `env_filter` uses `env_logger` syntax (e.g. `"gradmesh_engine=debug,wgpu=warn"`).
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Default config at the given fallback level.
    pub fn with_level(default_level: LevelFilter) -> Self {
        Self { default_level, ..Self::default() }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    // wgpu is chatty at info; keep it at warn unless asked.
                    builder.filter_level(config.default_level);
                    builder.filter_module("wgpu_core", LevelFilter::Warn);
                    builder.filter_module("wgpu_hal", LevelFilter::Warn);
                    builder.filter_module("naga", LevelFilter::Warn);
                }
            },
        }

        builder.write_style(config.write_style);

        // A test harness or host may already own the global logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_level_keeps_other_defaults() {
        let cfg = LoggingConfig::with_level(LevelFilter::Debug);
        assert_eq!(cfg.default_level, LevelFilter::Debug);
        assert!(cfg.env_filter.is_none());
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::with_level(LevelFilter::Trace));
        log::info!("still logging");
    }
}
