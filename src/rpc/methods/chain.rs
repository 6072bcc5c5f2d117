// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::blocks::Tipset;
use crate::rpc::RpcMethod;
use crate::rpc::types::ApiTipsetKey;
use crate::shim::clock::ChainEpoch;

/// Get tipset at epoch. Pick the older tipset if epoch points to a
/// null-tipset. Only tipsets below the given `head` are searched. If `head`
/// is null, the node will use the heaviest tipset.
pub enum ChainGetTipSetByHeight {}
impl RpcMethod<2> for ChainGetTipSetByHeight {
    const NAME: &'static str = "Filecoin.ChainGetTipSetByHeight";

    type Params = (ChainEpoch, ApiTipsetKey);
    type Ok = Tipset;
}
