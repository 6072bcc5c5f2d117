// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::ffi::OsString;

use crate::cli::subcommands::Cli;
use crate::cli_shared::logger;
use clap::Parser;

use super::subcommands::Subcommand;

pub async fn main<ArgT>(args: impl IntoIterator<Item = ArgT>) -> anyhow::Result<()>
where
    ArgT: Into<OsString> + Clone,
{
    // Capture Cli inputs
    let Cli { token, opts, cmd } = Cli::parse_from(args);
    let config = opts.to_config()?;
    logger::setup_logger(&config.log)?;

    // Run command
    match cmd {
        Subcommand::Export(cmd) => cmd.run(&config, token).await,
        Subcommand::Config(cmd) => cmd.run(&config, &mut std::io::stdout()),
    }
}
