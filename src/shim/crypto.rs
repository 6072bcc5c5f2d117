// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Domain separation tags mixed into randomness derived from the chain, so
/// that values drawn for different purposes at the same epoch never collide.
///
/// Values match `crypto.DomainSeparationTag` in Lotus.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize, Display,
)]
#[repr(i64)]
pub enum DomainSeparationTag {
    TicketProduction = 1,
    ElectionProofProduction = 2,
    WinningPoStChallengeSeed = 3,
    WindowedPoStChallengeSeed = 4,
    SealRandomness = 5,
    InteractiveSealChallengeSeed = 6,
    WindowedPoStDeadlineAssignment = 7,
    MarketDealCronSeed = 8,
    PoStChainCommit = 9,
    EvmPrevRandao = 10,
}

impl DomainSeparationTag {
    pub fn from_i64(value: i64) -> Option<Self> {
        num_traits::FromPrimitive::from_i64(value)
    }
}
