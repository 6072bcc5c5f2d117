// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Decides, per sector, whether it is proven or only pre-committed, and
//! takes its recovery fields from the matching on-chain record.

use itertools::Itertools as _;
use tracing::{debug, warn};

use super::{
    ChainState, FailureSet, FailureStage, ProviderIdentity, QueryError, QueryGuard, RecoveryError,
    SectorInfo,
};
use crate::rpc::{
    RpcMethod as _,
    state::{
        SectorOnChainInfo, SectorPreCommitOnChainInfo, StateSectorGetInfo,
        StateSectorPreCommitInfo,
    },
};
use crate::shim::{clock::ChainEpoch, sector::SectorNumber};

/// The on-chain record a sector was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedSector {
    /// Proven; carries its true activation epoch.
    Committed(SectorOnChainInfo),
    /// Pre-committed but never proven.
    PreCommitted(SectorPreCommitOnChainInfo),
}

impl ClassifiedSector {
    /// Builds the recovery entry for `sector_number`.
    ///
    /// A pre-committed sector has no activation epoch, so its pre-commit epoch
    /// stands in. Sealing randomness is then drawn at that epoch, which need
    /// not be the epoch the sector was sealed with.
    pub fn into_sector_info(self, sector_number: SectorNumber) -> Result<SectorInfo, RecoveryError> {
        let (method, activation, seal_proof, sealed_cid) = match self {
            ClassifiedSector::Committed(info) => (
                StateSectorGetInfo::NAME,
                info.activation,
                info.seal_proof,
                info.sealed_cid,
            ),
            ClassifiedSector::PreCommitted(SectorPreCommitOnChainInfo {
                info,
                pre_commit_epoch,
            }) => {
                warn!(
                    "sector {sector_number} is only pre-committed, using pre-commit epoch {pre_commit_epoch} as its activation"
                );
                (
                    StateSectorPreCommitInfo::NAME,
                    pre_commit_epoch,
                    info.seal_proof,
                    info.sealed_cid,
                )
            }
        };
        ensure_epoch(method, activation)?;
        Ok(SectorInfo {
            sector_number,
            activation,
            ticket: None,
            seal_proof,
            sealed_cid,
        })
    }
}

fn ensure_epoch(method: &'static str, epoch: ChainEpoch) -> Result<(), RecoveryError> {
    if epoch < 0 {
        return Err(RecoveryError::ChainQueryFailed {
            method,
            source: QueryError::Decode(format!("negative activation epoch {epoch}")),
        });
    }
    Ok(())
}

/// Looks the sector up as committed, then as pre-committed.
pub async fn classify_sector(
    chain: &dyn ChainState,
    guard: &QueryGuard,
    provider: &ProviderIdentity,
    sector_number: SectorNumber,
) -> Result<ClassifiedSector, RecoveryError> {
    let address = provider.address();
    if let Some(info) = guard
        .run(
            StateSectorGetInfo::NAME,
            chain.committed_sector(address, sector_number),
        )
        .await?
    {
        return Ok(ClassifiedSector::Committed(info));
    }
    debug!("sector {sector_number} is not committed, checking pre-commits");
    match guard
        .run(
            StateSectorPreCommitInfo::NAME,
            chain.pre_committed_sector(address, sector_number),
        )
        .await?
    {
        Some(info) => Ok(ClassifiedSector::PreCommitted(info)),
        None => Err(RecoveryError::NotFound(sector_number)),
    }
}

/// Classifies each distinct sector in `sector_numbers`, in input order.
/// Sectors which cannot be classified are added to `failures`; only
/// cancellation is returned as an error.
pub async fn classify_sectors(
    chain: &dyn ChainState,
    guard: &QueryGuard,
    provider: &ProviderIdentity,
    sector_numbers: &[SectorNumber],
    failures: &mut FailureSet,
) -> Result<Vec<SectorInfo>, RecoveryError> {
    for duplicate in sector_numbers.iter().duplicates() {
        warn!("sector {duplicate} was requested more than once");
    }
    let mut sectors = Vec::with_capacity(sector_numbers.len());
    for &sector_number in sector_numbers.iter().unique() {
        let classified = classify_sector(chain, guard, provider, sector_number)
            .await
            .and_then(|it| it.into_sector_info(sector_number));
        match classified {
            Ok(info) => sectors.push(info),
            Err(error) => failures.record(sector_number, FailureStage::Classification, error)?,
        }
    }
    Ok(sectors)
}
