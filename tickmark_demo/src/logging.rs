// Copyright 2025 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logger setup for the demo binary.

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. `"info"` or
/// `"tickmark=debug,tickmark_demo=info"`). When unset, `RUST_LOG` is used, then `info`.
#[derive(Debug, Clone)]
pub(crate) struct LoggingConfig {
    pub(crate) env_filter: Option<String>,
    pub(crate) write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Installs the global logger. Call once, early in `main`.
pub(crate) fn init_logging(config: LoggingConfig) {
    let mut builder = env_logger::Builder::new();
    if let Some(filter) = config.env_filter {
        builder.parse_filters(&filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.write_style(config.write_style);
    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}
