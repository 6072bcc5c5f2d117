// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Recovers the on-chain sealing inputs of a provider's sectors.
//!
//! The pipeline runs strictly in order:
//! 1. resolve the [`ProviderIdentity`],
//! 2. classify each sector as committed or pre-committed ([`classify_sectors`]),
//! 3. sort by activation epoch, newest first ([`sort_by_activation`]),
//! 4. walk the chain backwards drawing each sector's ticket ([`resolve_tickets`]),
//! 5. assemble the [`RecoveryParams`].
//!
//! Failures of a single sector are collected in a [`FailureSet`] and never
//! abort the batch. Only an unusable identity, a failed sector-size query or
//! cancellation does.

mod chain_state;
mod classifier;
mod error;
mod identity;
mod ordering;
mod randomness;
mod record;
mod sector_info;

use std::time::Duration;

use tracing::{debug, info, warn};

pub use chain_state::{ChainState, DEFAULT_QUERY_TIMEOUT, QueryGuard};
pub use classifier::classify_sectors;
pub use error::{FailureSet, FailureStage, QueryError, RecoveryError};
pub use identity::ProviderIdentity;
pub use ordering::sort_by_activation;
pub use randomness::resolve_tickets;
pub use record::{RecoveryParams, RecoverySummary};
pub use sector_info::SectorInfo;

use crate::rpc::{RpcMethod as _, state::StateMinerInfo};
use crate::shim::sector::SectorNumber;

/// The result of a run: the artifact, and the sectors missing from it or
/// lacking a ticket.
#[derive(Debug)]
pub struct RecoveryOutcome {
    pub params: RecoveryParams,
    pub failures: FailureSet,
}

impl RecoveryOutcome {
    pub fn summary(&self, elapsed: Duration) -> RecoverySummary {
        RecoverySummary {
            exported: self.params.sector_infos.len(),
            failed: self.failures.sector_numbers(),
            elapsed,
        }
    }
}

/// Builds the recovery record of `sector_numbers` belonging to `provider`.
pub async fn export_recovery_params(
    chain: &dyn ChainState,
    guard: &QueryGuard,
    provider: ProviderIdentity,
    sector_numbers: &[SectorNumber],
) -> Result<RecoveryOutcome, RecoveryError> {
    let entropy = provider
        .to_cbor_bytes()
        .map_err(|e| RecoveryError::InvalidIdentity {
            input: provider.to_string(),
            reason: e.to_string(),
        })?;
    let sector_size = guard
        .run(
            StateMinerInfo::NAME,
            chain.provider_sector_size(provider.address()),
        )
        .await?;
    info!(
        "recovering {} sectors of {provider} ({} byte sectors)",
        sector_numbers.len(),
        sector_size.bytes()
    );

    let mut failures = FailureSet::default();
    let mut sectors =
        classify_sectors(chain, guard, &provider, sector_numbers, &mut failures).await?;
    for sector in &sectors {
        match sector.seal_proof.sector_size() {
            Ok(size) if size == sector_size => {}
            Ok(size) => warn!(
                "sector {} was sealed for {} byte sectors, but {provider} uses {}",
                sector.sector_number,
                size.bytes(),
                sector_size.bytes()
            ),
            Err(e) => warn!("sector {}: {e}", sector.sector_number),
        }
    }
    sort_by_activation(&mut sectors);
    let walk = resolve_tickets(chain, guard, &entropy, &mut sectors, &mut failures).await?;
    if let Some(epoch) = walk.epoch() {
        debug!("tipset walk stopped at epoch {epoch}");
    }

    Ok(RecoveryOutcome {
        params: RecoveryParams {
            miner: provider,
            sector_size,
            sector_infos: sectors,
        },
        failures,
    })
}
