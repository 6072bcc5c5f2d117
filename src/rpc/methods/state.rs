// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod types;
pub use types::*;

use crate::rpc::RpcMethod;
use crate::rpc::types::ApiTipsetKey;
use crate::shim::{
    address::Address, clock::ChainEpoch, crypto::DomainSeparationTag,
    randomness::Randomness, sector::SectorNumber,
};

pub enum StateMinerInfo {}
impl RpcMethod<2> for StateMinerInfo {
    const NAME: &'static str = "Filecoin.StateMinerInfo";

    type Params = (Address, ApiTipsetKey);
    type Ok = MinerInfo;
}

/// Returns on-chain information of a committed sector, or `null` if the
/// provider has no such sector.
pub enum StateSectorGetInfo {}
impl RpcMethod<3> for StateSectorGetInfo {
    const NAME: &'static str = "Filecoin.StateSectorGetInfo";

    type Params = (Address, SectorNumber, ApiTipsetKey);
    type Ok = Option<SectorOnChainInfo>;
}

/// Returns the pre-commit record of a sector, or `null` if there is none.
pub enum StateSectorPreCommitInfo {}
impl RpcMethod<3> for StateSectorPreCommitInfo {
    const NAME: &'static str = "Filecoin.StateSectorPreCommitInfo";

    type Params = (Address, SectorNumber, ApiTipsetKey);
    type Ok = Option<SectorPreCommitOnChainInfo>;
}

/// Samples the ticket chain for randomness, as of the tipset identified by
/// `tipsetKey`.
pub enum StateGetRandomnessFromTickets {}
impl RpcMethod<4> for StateGetRandomnessFromTickets {
    const NAME: &'static str = "Filecoin.StateGetRandomnessFromTickets";

    type Params = (DomainSeparationTag, ChainEpoch, Vec<u8>, ApiTipsetKey);
    type Ok = Randomness;
}
