// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Types shared by more than one API vertical.


use crate::blocks::TipsetKey;
use crate::lotus_json::{HasLotusJson, LotusJson};
use cid::Cid;

/// The tipset a query is evaluated against. `None` asks the node to use its
/// heaviest tipset.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ApiTipsetKey(pub Option<TipsetKey>);

impl From<TipsetKey> for ApiTipsetKey {
    fn from(key: TipsetKey) -> Self {
        Self(Some(key))
    }
}

impl HasLotusJson for ApiTipsetKey {
    type LotusJson = Option<Vec<LotusJson<Cid>>>;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![
            (serde_json::json!(null), ApiTipsetKey(None)),
            (
                serde_json::json!([{"/": "baeaaaaa"}]),
                ApiTipsetKey(Some(TipsetKey::from(Cid::default()))),
            ),
        ]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        self.0
            .map(|key| key.into_cids().into_iter().map(LotusJson).collect())
    }

    /// Lotus uses both `null` and `[]` for the heaviest tipset.
    fn from_lotus_json(lotus_json: Self::LotusJson) -> Self {
        let cids = lotus_json
            .unwrap_or_default()
            .into_iter()
            .map(LotusJson::into_inner)
            .collect();
        Self(TipsetKey::new(cids).ok())
    }
}
