use std::sync::Once;

use log::LevelFilter;

/// Module path of the paint-order producers, for targeted verbosity.
const SORT_TARGET: &str = "ziggurat_engine::sort";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "warn",
/// "ziggurat_engine::sort=debug"). When unset, `RUST_LOG` is consulted, then
/// `info` is used.
///
/// `sort_level` overrides verbosity for the sorter alone. `trace` there shows
/// every cycle the graph producer breaks without flooding the rest of the host.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub sort_level: Option<LevelFilter>,
    pub write_style: env_logger::WriteStyle,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            sort_level: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: false,
        }
    }
}

impl LoggingConfig {
    #[inline]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    #[inline]
    pub fn with_sort_level(mut self, level: LevelFilter) -> Self {
        self.sort_level = Some(level);
        self
    }

    #[inline]
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();

        match self.env_filter.clone().or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(LevelFilter::Info);
            }
        }

        if let Some(level) = self.sort_level {
            builder.filter_module(SORT_TARGET, level);
        }

        if !self.timestamps {
            builder.format_timestamp(None);
        }

        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once.
///
/// Later calls are ignored, and so is the case where the host already
/// installed its own `log` backend. Returns whether this call installed ours.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;

    INIT.call_once(|| {
        if config.builder().try_init().is_err() {
            return;
        }
        installed = true;
        log::debug!("logging initialized");
    });

    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = LoggingConfig::default();
        assert!(c.env_filter.is_none());
        assert!(c.sort_level.is_none());
        assert!(!c.timestamps);
    }

    #[test]
    fn builder_methods_set_fields() {
        let c = LoggingConfig::default()
            .with_filter("warn")
            .with_sort_level(LevelFilter::Trace)
            .with_timestamps(true);
        assert_eq!(c.env_filter.as_deref(), Some("warn"));
        assert_eq!(c.sort_level, Some(LevelFilter::Trace));
        assert!(c.timestamps);
    }

    #[test]
    fn second_init_is_a_no_op() {
        init_logging(LoggingConfig::default().with_filter("off"));
        assert!(!init_logging(LoggingConfig::default()));
    }
}
