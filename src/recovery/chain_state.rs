// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{QueryError, RecoveryError};
use crate::blocks::{Tipset, TipsetKey};
use crate::rpc::{
    self,
    prelude::*,
    state::{SectorOnChainInfo, SectorPreCommitOnChainInfo},
};
use crate::shim::{
    address::Address,
    clock::ChainEpoch,
    crypto::DomainSeparationTag,
    randomness::Randomness,
    sector::{SectorNumber, SectorSize},
};

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(60);

/// Read-only view of chain state needed to recover sectors. All queries are
/// evaluated against the heaviest tipset unless a tipset is given.
#[async_trait]
pub trait ChainState: Send + Sync {
    async fn provider_sector_size(&self, provider: &Address) -> Result<SectorSize, QueryError>;

    async fn committed_sector(
        &self,
        provider: &Address,
        sector_number: SectorNumber,
    ) -> Result<Option<SectorOnChainInfo>, QueryError>;

    async fn pre_committed_sector(
        &self,
        provider: &Address,
        sector_number: SectorNumber,
    ) -> Result<Option<SectorPreCommitOnChainInfo>, QueryError>;

    /// The tipset at `epoch`, or the closest older one if `epoch` is a null
    /// round, searching back from `search_from`.
    async fn tipset_at_epoch(
        &self,
        epoch: ChainEpoch,
        search_from: &ApiTipsetKey,
    ) -> Result<Tipset, QueryError>;

    async fn seal_randomness(
        &self,
        tag: DomainSeparationTag,
        epoch: ChainEpoch,
        entropy: &[u8],
        tipset: &TipsetKey,
    ) -> Result<Randomness, QueryError>;
}

#[async_trait]
impl ChainState for rpc::Client {
    async fn provider_sector_size(&self, provider: &Address) -> Result<SectorSize, QueryError> {
        let info = StateMinerInfo::call(self, (*provider, ApiTipsetKey(None))).await?;
        Ok(info.sector_size)
    }

    async fn committed_sector(
        &self,
        provider: &Address,
        sector_number: SectorNumber,
    ) -> Result<Option<SectorOnChainInfo>, QueryError> {
        Ok(StateSectorGetInfo::call(self, (*provider, sector_number, ApiTipsetKey(None))).await?)
    }

    async fn pre_committed_sector(
        &self,
        provider: &Address,
        sector_number: SectorNumber,
    ) -> Result<Option<SectorPreCommitOnChainInfo>, QueryError> {
        Ok(
            StateSectorPreCommitInfo::call(self, (*provider, sector_number, ApiTipsetKey(None)))
                .await?,
        )
    }

    async fn tipset_at_epoch(
        &self,
        epoch: ChainEpoch,
        search_from: &ApiTipsetKey,
    ) -> Result<Tipset, QueryError> {
        Ok(ChainGetTipSetByHeight::call(self, (epoch, search_from.clone())).await?)
    }

    async fn seal_randomness(
        &self,
        tag: DomainSeparationTag,
        epoch: ChainEpoch,
        entropy: &[u8],
        tipset: &TipsetKey,
    ) -> Result<Randomness, QueryError> {
        Ok(StateGetRandomnessFromTickets::call(
            self,
            (tag, epoch, entropy.to_vec(), tipset.clone().into()),
        )
        .await?)
    }
}

/// Bounds every chain-state query by a timeout, and aborts it when the run is
/// cancelled.
#[derive(Debug, Clone)]
pub struct QueryGuard {
    timeout: Duration,
    cancel: CancellationToken,
}

impl Default for QueryGuard {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_TIMEOUT, CancellationToken::new())
    }
}

impl QueryGuard {
    pub fn new(timeout: Duration, cancel: CancellationToken) -> Self {
        Self { timeout, cancel }
    }

    /// Runs `query`, labelled `method` in errors. Cancellation wins over a
    /// query that completes at the same time.
    pub async fn run<T>(
        &self,
        method: &'static str,
        query: impl Future<Output = Result<T, QueryError>>,
    ) -> Result<T, RecoveryError> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(RecoveryError::Cancelled),
            res = tokio::time::timeout(self.timeout, query) => match res {
                Ok(Ok(it)) => Ok(it),
                Ok(Err(source)) => Err(RecoveryError::ChainQueryFailed { method, source }),
                Err(_elapsed) => Err(RecoveryError::ChainQueryFailed {
                    method,
                    source: QueryError::Timeout(self.timeout),
                }),
            },
        }
    }
}
