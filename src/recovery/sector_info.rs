// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use cid::Cid;
use serde::{Deserialize, Serialize};

use crate::shim::{
    clock::ChainEpoch,
    randomness::Randomness,
    sector::{RegisteredSealProof, SectorNumber},
};

/// Everything needed to rebuild the proof inputs of one sector.
///
/// `ticket` is empty until sealing randomness has been drawn for the sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SectorInfo {
    pub sector_number: SectorNumber,
    /// Activation epoch, or the pre-commit epoch for a sector that was never
    /// proven.
    pub activation: ChainEpoch,
    #[serde(with = "crate::lotus_json")]
    pub ticket: Option<Randomness>,
    #[serde(with = "crate::lotus_json")]
    pub seal_proof: RegisteredSealProof,
    /// `CommR`
    #[serde(with = "crate::lotus_json", rename = "SealedCID")]
    pub sealed_cid: Cid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shim::sector::RegisteredSealProofV4;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn lotus_style_json() {
        let info = SectorInfo {
            sector_number: 5,
            activation: 200,
            ticket: Some(Randomness::new(vec![1, 2, 3])),
            seal_proof: RegisteredSealProofV4::StackedDRG32GiBV1P1.into(),
            sealed_cid: Cid::default(),
        };
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({
                "SectorNumber": 5,
                "Activation": 200,
                "Ticket": "AQID",
                "SealProof": 8,
                "SealedCID": {"/": "baeaaaaa"}
            })
        );
        let info = SectorInfo {
            ticket: None,
            ..info
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["Ticket"], json!(null));
        assert_eq!(serde_json::from_value::<SectorInfo>(json).unwrap(), info);
    }
}
