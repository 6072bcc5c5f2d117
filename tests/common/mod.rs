// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use assert_cmd::{Command, cargo::cargo_bin_cmd};

pub fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("forest-sector-recovery");
    // Keep the developer's node out of the tests
    cmd.env_remove("FULLNODE_API_INFO").env("RUST_LOG", "error");
    cmd
}
