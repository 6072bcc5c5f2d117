// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod config_cmd;
mod export_cmd;

pub(super) use self::{config_cmd::ConfigCommands, export_cmd::ExportCommand};
use crate::cli_shared::cli::{CliOpts, HELP_MESSAGE};
use crate::utils::version::VERSION_STRING;
use clap::Parser;

/// CLI structure generated when interacting with the recovery binary
#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"), bin_name = "forest-sector-recovery", author = env!("CARGO_PKG_AUTHORS"), version = VERSION_STRING.as_str(), about = env!("CARGO_PKG_DESCRIPTION")
)]
#[command(help_template(HELP_MESSAGE))]
pub struct Cli {
    /// Client JWT token to use for JSON-RPC authentication
    #[arg(short, long)]
    pub token: Option<String>,
    #[command(flatten)]
    pub opts: CliOpts,
    #[command(subcommand)]
    pub cmd: Subcommand,
}

/// Sub-commands available.
#[derive(clap::Subcommand, Debug)]
pub enum Subcommand {
    /// Export the on-chain data needed to recover sealed sectors
    Export(ExportCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}
