// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::shim::randomness::Randomness;

impl HasLotusJson for Randomness {
    type LotusJson = <Vec<u8> as HasLotusJson>::LotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![(json!("AQID"), Randomness::new(vec![1, 2, 3]))]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        self.into_bytes().into_lotus_json()
    }

    fn from_lotus_json(lotus_json: Self::LotusJson) -> Self {
        Randomness::new(Vec::from_lotus_json(lotus_json))
    }
}
