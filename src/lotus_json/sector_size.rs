// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::shim::sector::{SectorSize, SectorSizeV4};

/// Sector sizes are plain byte counts on the wire, but only a handful are valid.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct SectorSizeLotusJson(SectorSize);

impl TryFrom<u64> for SectorSizeLotusJson {
    type Error = anyhow::Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        SectorSize::try_from(value).map(Self)
    }
}

impl From<SectorSizeLotusJson> for u64 {
    fn from(SectorSizeLotusJson(size): SectorSizeLotusJson) -> Self {
        size.bytes()
    }
}

impl HasLotusJson for SectorSize {
    type LotusJson = SectorSizeLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![
            (json!(2048), Self::from(SectorSizeV4::_2KiB)),
            (json!(34359738368_u64), Self::from(SectorSizeV4::_32GiB)),
        ]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        SectorSizeLotusJson(self)
    }

    fn from_lotus_json(SectorSizeLotusJson(size): Self::LotusJson) -> Self {
        size
    }
}

#[test]
fn unsupported_size_is_an_error() {
    assert!(serde_json::from_value::<SectorSizeLotusJson>(json!(1024)).is_err());
}
