// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::recovery::ProviderIdentity;

impl HasLotusJson for ProviderIdentity {
    type LotusJson = Stringify<ProviderIdentity>;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![
            (json!("f01000"), "f01000".parse().unwrap()),
            (json!("t01000"), "t01000".parse().unwrap()),
        ]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        Stringify(self)
    }

    fn from_lotus_json(Stringify(identity): Self::LotusJson) -> Self {
        identity
    }
}

#[test]
fn malformed_identity_is_an_error() {
    assert!(serde_json::from_value::<Stringify<ProviderIdentity>>(json!("x01000")).is_err());
}
