// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Draws the sealing ticket of each sector from the tipset at its activation
//! epoch.

use tracing::{debug, warn};

use super::{ChainState, FailureSet, FailureStage, QueryGuard, RecoveryError, SectorInfo};
use crate::blocks::Tipset;
use crate::rpc::{
    RpcMethod as _, chain::ChainGetTipSetByHeight, state::StateGetRandomnessFromTickets,
    types::ApiTipsetKey,
};
use crate::shim::{clock::ChainEpoch, crypto::DomainSeparationTag};

/// Position of a backwards walk over the chain. Starts at the heaviest
/// tipset and never moves to a newer tipset than one already reached.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TipsetWalk {
    cursor: ApiTipsetKey,
    epoch: Option<ChainEpoch>,
}

impl TipsetWalk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the next tipset lookup searches back from.
    pub fn cursor(&self) -> &ApiTipsetKey {
        &self.cursor
    }

    /// Epoch of the last tipset reached, `None` while at the head.
    pub fn epoch(&self) -> Option<ChainEpoch> {
        self.epoch
    }

    /// Moves the cursor to `tipset`. Returns `false`, leaving the cursor
    /// unchanged, if `tipset` is newer than the current position.
    pub fn advance(&mut self, tipset: &Tipset) -> bool {
        match self.epoch {
            Some(epoch) if tipset.epoch() > epoch => {
                warn!(
                    "refusing to move tipset walk forward from epoch {epoch} to {}",
                    tipset.epoch()
                );
                false
            }
            _ => {
                self.cursor = tipset.key().clone().into();
                self.epoch = Some(tipset.epoch());
                true
            }
        }
    }
}

/// Attaches a ticket to each sector, which must already be sorted by
/// [`sort_by_activation`](super::sort_by_activation). Sectors whose tipset or
/// randomness cannot be fetched are added to `failures` and keep no ticket.
pub async fn resolve_tickets(
    chain: &dyn ChainState,
    guard: &QueryGuard,
    entropy: &[u8],
    sectors: &mut [SectorInfo],
    failures: &mut FailureSet,
) -> Result<TipsetWalk, RecoveryError> {
    let mut walk = TipsetWalk::new();
    for sector in sectors.iter_mut() {
        let tipset = match guard
            .run(
                ChainGetTipSetByHeight::NAME,
                chain.tipset_at_epoch(sector.activation, walk.cursor()),
            )
            .await
        {
            Ok(it) => it,
            Err(error) => {
                failures.record(sector.sector_number, FailureStage::TipsetLookup, error)?;
                continue;
            }
        };
        walk.advance(&tipset);
        debug!(
            "sector {} activated at {}, drawing randomness from tipset {} at {}",
            sector.sector_number,
            sector.activation,
            tipset.key(),
            tipset.epoch()
        );

        match guard
            .run(
                StateGetRandomnessFromTickets::NAME,
                chain.seal_randomness(
                    DomainSeparationTag::SealRandomness,
                    sector.activation,
                    entropy,
                    tipset.key(),
                ),
            )
            .await
        {
            Ok(ticket) => sector.ticket = Some(ticket),
            Err(error) => failures.record(sector.sector_number, FailureStage::Randomness, error)?,
        }
    }
    Ok(walk)
}
