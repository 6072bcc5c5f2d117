// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod cli;
pub mod logger;

use crate::cli_shared::cli::Config;
use crate::utils::io::read_toml;
use anyhow::Context as _;
use std::path::Path;

/// Reads the configuration file at `config_path`, or returns the defaults.
pub fn read_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    match config_path {
        Some(path) => {
            // Read from config file
            let toml = std::fs::read_to_string(path)
                .with_context(|| format!("couldn't read config file {}", path.display()))?;
            // Parse and return the configuration file
            read_toml(&toml).with_context(|| format!("invalid config file {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn read_config_default() {
        let config = read_config(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn read_config_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[client]\nquery_timeout = 5\napi_info = \"secret:/ip4/10.0.0.1/tcp/1234/http\"\n",
        )
        .unwrap();

        let config = read_config(Some(&path)).unwrap();
        assert_eq!(config.client.query_timeout, Duration::from_secs(5));
        assert_eq!(
            config.client.api_info.unwrap().token.as_deref(),
            Some("secret")
        );
        assert_eq!(config.log, Default::default());
    }

    #[test]
    fn read_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_config(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
