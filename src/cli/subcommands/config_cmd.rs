// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::io::Write;

use anyhow::Context as _;
use clap::Subcommand;

use crate::cli_shared::cli::Config;

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Dump the effective configuration (defaults, overridden by the
    /// configuration file and command line options) as TOML
    Dump,
}

impl ConfigCommands {
    pub fn run<W: Write>(self, config: &Config, sink: &mut W) -> anyhow::Result<()> {
        match self {
            Self::Dump => writeln!(
                sink,
                "{}",
                toml::to_string(config).context("Could not convert configuration to TOML format")?
            )
            .context("Failed to write the configuration"),
        }
    }
}
