// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::{fmt, str::FromStr};

use super::RecoveryError;
use crate::shim::address::{Address, Network, network_of, to_network_string};

/// A validated storage provider address, together with the network its
/// prefix was written for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProviderIdentity {
    address: Address,
    network: Network,
}

impl ProviderIdentity {
    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// DAG-CBOR encoding of the address, used as entropy when drawing sealing
    /// randomness.
    pub fn to_cbor_bytes(&self) -> Result<Vec<u8>, fvm_ipld_encoding::Error> {
        fvm_ipld_encoding::to_vec(&self.address)
    }
}

impl FromStr for ProviderIdentity {
    type Err = RecoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = |reason: String| RecoveryError::InvalidIdentity {
            input: input.into(),
            reason,
        };
        let network = network_of(input)
            .ok_or_else(|| invalid("expected an address starting with `f` or `t`".into()))?;
        let address = network
            .parse_address(input)
            .map_err(|e| invalid(e.to_string()))?;
        Ok(Self { address, network })
    }
}

impl fmt::Display for ProviderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_network_string(&self.address, self.network))
    }
}
