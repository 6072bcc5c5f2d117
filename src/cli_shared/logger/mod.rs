// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use tracing_subscriber::{EnvFilter, Registry, prelude::*};

use crate::cli_shared::cli::LogConfig;

/// Installs a console logger on `stderr`, leaving `stdout` to command output,
/// and an hourly-rotated file logger if a log directory is configured.
pub fn setup_logger(config: &LogConfig) -> anyhow::Result<()> {
    let mut layers: Vec<Box<dyn tracing_subscriber::layer::Layer<Registry> + Send + Sync>> =
        // console logger
        vec![Box::new(
            tracing_subscriber::fmt::Layer::new()
                .with_ansi(config.color.coloring_enabled())
                .with_writer(std::io::stderr)
                .with_filter(get_env_filter(default_env_filter(config))),
        )];

    // file logger
    if let Some(log_dir) = &config.log_dir {
        let file_appender = tracing_appender::rolling::hourly(log_dir, "sector-recovery.log");
        layers.push(Box::new(
            tracing_subscriber::fmt::Layer::new()
                .with_ansi(false)
                .with_writer(file_appender)
                .with_filter(get_env_filter(default_env_filter(config))),
        ));
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(())
}

/// Returns an [`EnvFilter`] according to the `RUST_LOG` environment variable, or a default
/// - see [`default_env_filter`]
///
/// Note that [`tracing_subscriber::filter::Builder`] only allows a single default directive,
/// whereas we want to provide multiple.
/// See also <https://github.com/tokio-rs/tracing/blob/27f688efb72316a26f3ec1f952c82626692c08ff/tracing-subscriber/src/filter/env/builder.rs#L189-L194>
fn get_env_filter(def: EnvFilter) -> EnvFilter {
    use std::env::{
        self,
        VarError::{NotPresent, NotUnicode},
    };
    match env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV) {
        Ok(s) => EnvFilter::new(s),
        Err(NotPresent) => def,
        Err(NotUnicode(_)) => EnvFilter::default(),
    }
}

fn default_env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::new(config.to_filter_string())
}

#[test]
fn test_default_env_filter() {
    let _did_not_panic = default_env_filter(&LogConfig::default());
}
