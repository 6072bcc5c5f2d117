// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! The client side of the Filecoin JSON-RPC API, limited to the chain-state
//! queries needed to recover sectors.
//!
//! Each method is described by a type implementing [`RpcMethod`], and invoked
//! through [`RpcMethodExt::call`]:
//! ```ignore
//! use crate::rpc::{self, prelude::*};
//!
//! let client = rpc::Client::from_api_info(&api_info, None).await?;
//! let info = StateMinerInfo::call(&client, (miner, ApiTipsetKey(None))).await?;
//! ```

mod client;
mod reflect;
pub mod types;

pub use client::Client;
pub use reflect::{Request, RpcMethod, RpcMethodExt};
pub use methods::*;

/// Protocol or transport-specific error
pub use jsonrpsee::core::ClientError;

/// All method definitions.
pub mod prelude {
    pub use super::reflect::RpcMethodExt as _;

    pub use super::chain::ChainGetTipSetByHeight;
    pub use super::state::{
        StateGetRandomnessFromTickets, StateMinerInfo, StateSectorGetInfo,
        StateSectorPreCommitInfo,
    };
    pub use super::types::ApiTipsetKey;
}

/// All the methods live in their own folder
///
/// # Handling types
/// - If a `struct` or `enum` is only used in the RPC API, it should live in `src/rpc`.
///   - If it is used in only one API vertical (i.e `chain` or `state`), then it should live
///     in either:
///     - `src/rpc/methods/chain.rs` (if there are only a few).
///     - `src/rpc/methods/state/types.rs` (if there are so many that they would cause clutter).
///   - If it is used _across_ API verticals, it should live in `src/rpc/types.rs`
mod methods {
    pub mod chain;
    pub mod state;
}
