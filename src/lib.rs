// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod blocks;
mod cli;
mod cli_shared;
mod lotus_json;
mod recovery;
mod rpc;
mod rpc_client;
mod shim;
#[cfg(test)]
mod test_utils;
mod utils;

/// These items are semver-exempt, and exist for forest author use only
// We want to have doctests, but don't want our internals to be public because:
// - We don't want to be concerned with library compat
//   (We want our cargo semver to be _for the command line_).
// - We don't want to mistakenly export items which we never actually use.
//
// So we re-export the relevant items here instead.
#[doc(hidden)]
pub mod doctest_private {
    pub use crate::utils::io::read_toml;
}

pub use cli::main::main as sector_recovery_main;
pub use cli_shared::cli::{Client, Config};
