// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::time::Duration;

use strum::Display;
use tracing::error;

use crate::rpc::ClientError;
use crate::shim::sector::SectorNumber;

/// Errors which end a recovery run, or single out one sector as failed.
#[derive(Debug, thiserror::Error)]
pub enum RecoveryError {
    #[error("invalid provider identity {input:?}: {reason}")]
    InvalidIdentity { input: String, reason: String },
    #[error("{method} failed: {source}")]
    ChainQueryFailed {
        method: &'static str,
        source: QueryError,
    },
    #[error("sector {0} is neither committed nor pre-committed")]
    NotFound(SectorNumber),
    #[error("cancelled")]
    Cancelled,
}

/// Why a single chain-state query failed.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Rpc(ClientError),
    #[error("timed out after {}", humantime::format_duration(*.0))]
    Timeout(Duration),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ClientError> for QueryError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::ParseError(e) => Self::Decode(e.to_string()),
            other => Self::Rpc(other),
        }
    }
}

/// The pipeline step a sector failed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum FailureStage {
    Classification,
    TipsetLookup,
    Randomness,
}

#[derive(Debug, thiserror::Error)]
#[error("sector {sector_number} failed at {stage}: {error}")]
pub struct SectorFailure {
    pub sector_number: SectorNumber,
    pub stage: FailureStage,
    #[source]
    pub error: RecoveryError,
}

/// Sectors that could not be recovered, in the order they failed.
#[derive(Debug, Default)]
pub struct FailureSet(Vec<SectorFailure>);

impl FailureSet {
    /// Records `error` against `sector_number`, unless it is a cancellation,
    /// which is returned to abort the run.
    pub fn record(
        &mut self,
        sector_number: SectorNumber,
        stage: FailureStage,
        error: RecoveryError,
    ) -> Result<(), RecoveryError> {
        if let RecoveryError::Cancelled = error {
            return Err(error);
        }
        let failure = SectorFailure {
            sector_number,
            stage,
            error,
        };
        error!("{failure}");
        self.0.push(failure);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectorFailure> {
        self.0.iter()
    }

    pub fn sector_numbers(&self) -> Vec<SectorNumber> {
        self.0.iter().map(|it| it.sector_number).collect()
    }
}
