// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::shim::sector::{RegisteredSealProof, RegisteredSealProofV4};

impl HasLotusJson for RegisteredSealProof {
    type LotusJson = i64;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![
            (json!(0), Self::from(RegisteredSealProofV4::StackedDRG2KiBV1)),
            (json!(8), Self::from(RegisteredSealProofV4::StackedDRG32GiBV1P1)),
        ]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        self.id()
    }

    fn from_lotus_json(i: Self::LotusJson) -> Self {
        Self::from(i)
    }
}
