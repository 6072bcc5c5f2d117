// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::cmp::Reverse;

use super::SectorInfo;

/// Orders sectors newest activation first, then by sector number.
///
/// Tickets are resolved by walking the chain backwards from the newest
/// activation, so each tipset lookup starts where the previous one ended.
pub fn sort_by_activation(sectors: &mut [SectorInfo]) {
    sectors.sort_by_key(|it| (Reverse(it.activation), it.sector_number));
}
