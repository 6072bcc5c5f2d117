// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::blocks::TipsetKey;
use ::cid::Cid;

#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<LotusJson<Cid>>", into = "Vec<LotusJson<Cid>>")]
pub struct TipsetKeyLotusJson(TipsetKey);

impl TryFrom<Vec<LotusJson<Cid>>> for TipsetKeyLotusJson {
    type Error = anyhow::Error;

    fn try_from(cids: Vec<LotusJson<Cid>>) -> Result<Self, Self::Error> {
        TipsetKey::new(cids.into_iter().map(LotusJson::into_inner).collect()).map(Self)
    }
}

impl From<TipsetKeyLotusJson> for Vec<LotusJson<Cid>> {
    fn from(TipsetKeyLotusJson(key): TipsetKeyLotusJson) -> Self {
        key.into_cids().into_iter().map(LotusJson).collect()
    }
}

impl HasLotusJson for TipsetKey {
    type LotusJson = TipsetKeyLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![(json!([{"/": "baeaaaaa"}]), TipsetKey::from(Cid::default()))]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        TipsetKeyLotusJson(self)
    }

    fn from_lotus_json(TipsetKeyLotusJson(key): Self::LotusJson) -> Self {
        key
    }
}

#[test]
fn empty_key_is_an_error() {
    assert!(serde_json::from_value::<TipsetKeyLotusJson>(json!([])).is_err());
}
