// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod client;
mod config;

use std::path::PathBuf;

use clap::Args;

pub use self::{client::*, config::*};
use crate::cli_shared::read_config;
use crate::utils::misc::LoggingColor;

/// CLI options shared by all subcommands
#[derive(Default, Debug, Args)]
pub struct CliOpts {
    /// A TOML file containing relevant configurations
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Enable or disable colored logging in `stderr`
    #[arg(long)]
    pub color: Option<LoggingColor>,
    /// Write logs to hourly-rotated files in this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl CliOpts {
    /// The configuration file's contents, overridden by any options given on
    /// the command line.
    pub fn to_config(&self) -> anyhow::Result<Config> {
        let mut config = read_config(self.config.as_deref())?;
        if let Some(color) = self.color {
            config.log.color = color;
        }
        if let Some(log_dir) = &self.log_dir {
            config.log.log_dir = Some(log_dir.clone());
        }
        anyhow::ensure!(
            !config.client.query_timeout.is_zero(),
            "client.query_timeout must be at least one second"
        );
        Ok(config)
    }
}

pub const HELP_MESSAGE: &str = "\
{name} {version}
{author}
{about}

{usage-heading} {usage}

{all-args}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[log]\ncolor = \"always\"\nlog_dir = \"/var/log/a\"\n").unwrap();

        let opts = CliOpts {
            config: Some(path.clone()),
            ..Default::default()
        };
        let config = opts.to_config().unwrap();
        assert_eq!(config.log.color, LoggingColor::Always);
        assert_eq!(config.log.log_dir, Some(PathBuf::from("/var/log/a")));

        let opts = CliOpts {
            config: Some(path),
            color: Some(LoggingColor::Never),
            log_dir: Some("/tmp/b".into()),
        };
        let config = opts.to_config().unwrap();
        assert_eq!(config.log.color, LoggingColor::Never);
        assert_eq!(config.log.log_dir, Some(PathBuf::from("/tmp/b")));
    }

    #[test]
    fn zero_query_timeout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[client]\nquery_timeout = 0\n").unwrap();

        let opts = CliOpts {
            config: Some(path),
            ..Default::default()
        };
        let err = opts.to_config().unwrap_err();
        assert!(err.to_string().contains("query_timeout"));
    }
}
