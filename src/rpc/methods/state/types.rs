// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Only the fields needed for sector recovery are decoded; nodes return many
//! more, which are ignored.

use crate::lotus_json::lotus_json_with_self;
use crate::shim::{
    clock::ChainEpoch,
    sector::{RegisteredSealProof, SectorNumber, SectorSize},
};
use cid::Cid;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MinerInfo {
    /// Amount of space in each sector committed to the network by this miner
    #[serde(with = "crate::lotus_json")]
    pub sector_size: SectorSize,
}

lotus_json_with_self!(MinerInfo);

/// Information stored on-chain for a proven sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SectorOnChainInfo {
    pub sector_number: SectorNumber,
    /// The seal proof type implies the PoSt proofs
    #[serde(with = "crate::lotus_json")]
    pub seal_proof: RegisteredSealProof,
    /// `CommR`
    #[serde(with = "crate::lotus_json", rename = "SealedCID")]
    pub sealed_cid: Cid,
    /// Epoch during which the sector proof was accepted
    pub activation: ChainEpoch,
    /// Epoch during which the sector expires
    pub expiration: ChainEpoch,
}

lotus_json_with_self!(SectorOnChainInfo);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SectorPreCommitOnChainInfo {
    #[serde(with = "crate::lotus_json")]
    pub info: SectorPreCommitInfo,
    pub pre_commit_epoch: ChainEpoch,
}

lotus_json_with_self!(SectorPreCommitOnChainInfo);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SectorPreCommitInfo {
    #[serde(with = "crate::lotus_json")]
    pub seal_proof: RegisteredSealProof,
    pub sector_number: SectorNumber,
    #[serde(rename = "SealedCID", with = "crate::lotus_json")]
    pub sealed_cid: Cid,
    pub seal_rand_epoch: ChainEpoch,
    pub expiration: ChainEpoch,
}

lotus_json_with_self!(SectorPreCommitInfo);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lotus_json::HasLotusJson;
    use crate::shim::sector::{RegisteredSealProofV4, SectorSizeV4};
    use serde_json::json;

    #[test]
    fn miner_info_from_lotus() {
        let json = json!({
            "Owner": "f01001",
            "Worker": "f01002",
            "NewWorker": "<empty>",
            "ControlAddresses": null,
            "WorkerChangeEpoch": -1,
            "PeerId": null,
            "Multiaddrs": null,
            "WindowPoStProofType": 9,
            "SectorSize": 34359738368_u64,
            "WindowPoStPartitionSectors": 2349,
            "ConsensusFaultElapsed": -1,
            "PendingOwnerAddress": null,
            "Beneficiary": "f01001",
            "BeneficiaryTerm": {"Quota": "0", "UsedQuota": "0", "Expiration": 0},
            "PendingBeneficiaryTerm": null
        });
        let info: MinerInfo = serde_json::from_value(json).unwrap();
        assert_eq!(info.sector_size, SectorSize::from(SectorSizeV4::_32GiB));
    }

    #[test]
    fn sector_on_chain_info_from_lotus() {
        let json = json!({
            "SectorNumber": 7,
            "SealProof": 8,
            "SealedCID": {"/": "baeaaaaa"},
            "DealIDs": null,
            "Activation": 1200,
            "Expiration": 1540000,
            "DealWeight": "0",
            "VerifiedDealWeight": "0",
            "InitialPledge": "159767301659402498",
            "ExpectedDayReward": "0",
            "ExpectedStoragePledge": "0",
            "PowerBaseEpoch": 1200,
            "ReplacedDayReward": "0",
            "SectorKeyCID": null,
            "Flags": 0
        });
        let info = Option::<SectorOnChainInfo>::from_lotus_json(
            serde_json::from_value(json).unwrap(),
        )
        .unwrap();
        assert_eq!(
            info,
            SectorOnChainInfo {
                sector_number: 7,
                seal_proof: RegisteredSealProofV4::StackedDRG32GiBV1P1.into(),
                sealed_cid: Cid::default(),
                activation: 1200,
                expiration: 1540000,
            }
        );
        assert_eq!(
            Option::<SectorOnChainInfo>::from_lotus_json(
                serde_json::from_value(json!(null)).unwrap()
            ),
            None
        );
    }

    #[test]
    fn pre_commit_info_from_lotus() {
        let json = json!({
            "Info": {
                "SealProof": 8,
                "SectorNumber": 9,
                "SealedCID": {"/": "baeaaaaa"},
                "SealRandEpoch": 1100,
                "DealIDs": null,
                "Expiration": 1540000,
                "UnsealedCid": null
            },
            "PreCommitDeposit": "0",
            "PreCommitEpoch": 1150
        });
        let info: SectorPreCommitOnChainInfo = serde_json::from_value(json).unwrap();
        assert_eq!(info.pre_commit_epoch, 1150);
        assert_eq!(info.info.sector_number, 9);
        assert_eq!(info.info.seal_rand_epoch, 1100);
    }

    #[test]
    fn unchanged_via_json() {
        crate::lotus_json::assert_unchanged_via_json(SectorOnChainInfo {
            sector_number: 1,
            seal_proof: RegisteredSealProofV4::StackedDRG2KiBV1P1.into(),
            sealed_cid: Cid::default(),
            activation: 10,
            expiration: 20,
        });
    }
}
