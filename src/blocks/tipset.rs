// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;

use anyhow::ensure;
use cid::Cid;
use itertools::Itertools as _;

use crate::shim::clock::ChainEpoch;

/// A set of CIDs forming a unique key for a tipset.
///
/// Equal keys will have equivalent iteration order, but note that the `CIDs`
/// are *not* maintained in the same order as the canonical iteration order of
/// blocks in a tipset (which is by ticket).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TipsetKey(Vec<Cid>);

impl TipsetKey {
    pub fn new(cids: Vec<Cid>) -> anyhow::Result<Self> {
        ensure!(!cids.is_empty(), "a tipset key must contain at least one block CID");
        Ok(Self(cids))
    }

    pub fn cids(&self) -> &[Cid] {
        &self.0
    }

    pub fn into_cids(self) -> Vec<Cid> {
        self.0
    }
}

impl From<Cid> for TipsetKey {
    fn from(cid: Cid) -> Self {
        Self(vec![cid])
    }
}

impl TryFrom<Vec<Cid>> for TipsetKey {
    type Error = anyhow::Error;

    fn try_from(cids: Vec<Cid>) -> Result<Self, Self::Error> {
        Self::new(cids)
    }
}

impl fmt::Display for TipsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(","))
    }
}

/// The position of a tipset on the chain, as reported by a node.
///
/// Only the key and epoch are retained; block headers are never needed to
/// recover sealing randomness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tipset {
    key: TipsetKey,
    epoch: ChainEpoch,
}

impl Tipset {
    pub fn new(key: TipsetKey, epoch: ChainEpoch) -> Self {
        Self { key, epoch }
    }

    pub fn key(&self) -> &TipsetKey {
        &self.key
    }

    pub fn epoch(&self) -> ChainEpoch {
        self.epoch
    }
}

pub mod lotus_json {
    //! [`Tipset`] isn't just plain old data - it has an invariant (a non-empty
    //! key), so its lotus JSON lives next to it.
    use super::*;
    use crate::lotus_json::{HasLotusJson, LotusJson};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct TipsetLotusJson {
        cids: LotusJson<TipsetKey>,
        height: ChainEpoch,
    }

    impl HasLotusJson for Tipset {
        type LotusJson = TipsetLotusJson;

        #[cfg(test)]
        fn snapshots() -> Vec<(serde_json::Value, Self)> {
            vec![(
                serde_json::json!({
                    "Cids": [{"/": "baeaaaaa"}],
                    "Height": 10
                }),
                Tipset::new(TipsetKey::from(Cid::default()), 10),
            )]
        }

        fn into_lotus_json(self) -> Self::LotusJson {
            let Tipset { key, epoch } = self;
            TipsetLotusJson {
                cids: key.into(),
                height: epoch,
            }
        }

        fn from_lotus_json(lotus_json: Self::LotusJson) -> Self {
            let TipsetLotusJson { cids, height } = lotus_json;
            Tipset::new(cids.into_inner(), height)
        }
    }

    #[test]
    fn snapshots() {
        crate::lotus_json::assert_all_snapshots::<Tipset>();
    }

    #[test]
    fn ignores_block_headers() {
        let json = serde_json::json!({
            "Cids": [{"/": "baeaaaaa"}],
            "Blocks": [{"Miner": "f01000"}],
            "Height": 42
        });
        let tipset = Tipset::from_lotus_json(serde_json::from_value(json).unwrap());
        assert_eq!(tipset.epoch(), 42);
        assert_eq!(tipset.key().cids(), &[Cid::default()]);
    }
}
