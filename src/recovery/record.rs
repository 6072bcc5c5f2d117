// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use super::{ProviderIdentity, SectorInfo};
use crate::shim::sector::{SectorNumber, SectorSize};

/// The recovery artifact: everything needed to rebuild the proof inputs of a
/// provider's sectors offline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecoveryParams {
    #[serde(with = "crate::lotus_json")]
    pub miner: ProviderIdentity,
    #[serde(with = "crate::lotus_json")]
    pub sector_size: SectorSize,
    pub sector_infos: Vec<SectorInfo>,
}

impl RecoveryParams {
    /// `sectors-recovery-<miner>.json`
    pub fn file_name(&self) -> String {
        format!("sectors-recovery-{}.json", self.miner)
    }

    /// Tab-indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}

/// The console report of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoverySummary {
    pub exported: usize,
    pub failed: Vec<SectorNumber>,
    pub elapsed: Duration,
}

impl fmt::Display for RecoverySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // sub-millisecond precision is noise
        let elapsed = Duration::from_millis(
            u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX),
        );
        write!(
            f,
            "export {} sectors, failed sectors: {:?}, elapsed: {}",
            self.exported,
            self.failed,
            humantime::format_duration(elapsed)
        )
    }
}
