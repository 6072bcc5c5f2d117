// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::shim::address::{Address, network_of};

/// Nodes accept and return addresses with either network prefix.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AddressLotusJson(Address);

impl TryFrom<String> for AddressLotusJson {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let Some(network) = network_of(&s) else {
            anyhow::bail!("unknown network prefix in address {s:?}")
        };
        Ok(Self(network.parse_address(&s)?))
    }
}

impl From<AddressLotusJson> for String {
    fn from(AddressLotusJson(address): AddressLotusJson) -> Self {
        address.to_string()
    }
}

impl HasLotusJson for Address {
    type LotusJson = AddressLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![(json!("f01234"), Address::new_id(1234))]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        AddressLotusJson(self)
    }

    fn from_lotus_json(AddressLotusJson(address): Self::LotusJson) -> Self {
        address
    }
}

#[test]
fn testnet_prefix_is_accepted() {
    let AddressLotusJson(address) = serde_json::from_value(json!("t01234")).unwrap();
    assert_eq!(address, Address::new_id(1234));
    assert!(serde_json::from_value::<AddressLotusJson>(json!("z01234")).is_err());
}
