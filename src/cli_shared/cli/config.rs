// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::path::PathBuf;

use itertools::Itertools as _;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use tracing_subscriber::filter::LevelFilter;

use super::client::Client;
use crate::utils::misc::LoggingColor;

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub color: LoggingColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    /// Per-module levels, applied when `RUST_LOG` is unset.
    pub filters: Vec<LogValue>,
}

impl LogConfig {
    pub(in crate::cli_shared) fn to_filter_string(&self) -> String {
        std::iter::once(String::from("info"))
            .chain(
                self.filters
                    .iter()
                    .map(|f| format!("{}={}", f.module, f.level)),
            )
            .join(",")
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            color: LoggingColor::default(),
            log_dir: None,
            filters: vec![
                LogValue::new("hyper", LevelFilter::WARN),
                LogValue::new("jsonrpsee", LevelFilter::WARN),
            ],
        }
    }
}

#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct LogValue {
    pub module: String,
    #[serde_as(as = "DisplayFromStr")]
    pub level: LevelFilter,
}

impl LogValue {
    pub fn new(module: &str, level: LevelFilter) -> Self {
        Self {
            module: module.to_string(),
            level,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Default, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub client: Client,
    pub log: LogConfig,
}
