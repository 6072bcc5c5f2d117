// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub use super::fvm_shared_latest::address::{Address, Network};

/// Returns the network an address string is written for, judging by its prefix.
pub fn network_of(s: &str) -> Option<Network> {
    match s.chars().next()? {
        'f' => Some(Network::Mainnet),
        't' => Some(Network::Testnet),
        _ => None,
    }
}

pub fn network_prefix(network: Network) -> &'static str {
    match network {
        Network::Mainnet => "f",
        Network::Testnet => "t",
    }
}

/// Formats `address` with the prefix of `network`, independently of the
/// process-wide default network `fvm_shared` uses for [`std::fmt::Display`].
pub fn to_network_string(address: &Address, network: Network) -> String {
    let s = address.to_string();
    // Both prefixes are a single ASCII character.
    match s.get(1..) {
        Some(rest) => format!("{}{rest}", network_prefix(network)),
        None => s,
    }
}
