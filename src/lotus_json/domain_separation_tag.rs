// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::shim::crypto::DomainSeparationTag;

#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct DomainSeparationTagLotusJson(DomainSeparationTag);

impl TryFrom<i64> for DomainSeparationTagLotusJson {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        DomainSeparationTag::from_i64(value)
            .map(Self)
            .ok_or_else(|| format!("unknown domain separation tag {value}"))
    }
}

impl From<DomainSeparationTagLotusJson> for i64 {
    fn from(DomainSeparationTagLotusJson(tag): DomainSeparationTagLotusJson) -> Self {
        tag as i64
    }
}

impl HasLotusJson for DomainSeparationTag {
    type LotusJson = DomainSeparationTagLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![(json!(5), DomainSeparationTag::SealRandomness)]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        DomainSeparationTagLotusJson(self)
    }

    fn from_lotus_json(DomainSeparationTagLotusJson(tag): Self::LotusJson) -> Self {
        tag
    }
}
