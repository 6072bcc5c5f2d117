// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use anyhow::bail;
pub use fvm_shared4::sector::{
    RegisteredSealProof as RegisteredSealProofV4, SectorSize as SectorSizeV4,
};
use serde::{Deserialize, Serialize};

pub type SectorNumber = fvm_shared4::sector::SectorNumber;

/// Represents a shim over `RegisteredSealProof` from `fvm_shared`.
///
/// Unknown proof ids are kept as `Invalid(id)` so they survive a round trip
/// through the recovery artifact unchanged.
#[derive(Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Debug, derive_more::Deref)]
pub struct RegisteredSealProof(RegisteredSealProofV4);

impl RegisteredSealProof {
    pub fn id(self) -> i64 {
        i64::from(self.0)
    }

    /// The size class of sectors sealed with this proof.
    pub fn sector_size(self) -> anyhow::Result<SectorSize> {
        match self.0.sector_size() {
            Ok(size) => Ok(SectorSize(size)),
            Err(e) => bail!("unsupported seal proof {:?}: {e}", self.0),
        }
    }
}

impl From<i64> for RegisteredSealProof {
    fn from(value: i64) -> Self {
        RegisteredSealProof(RegisteredSealProofV4::from(value))
    }
}

impl From<RegisteredSealProofV4> for RegisteredSealProof {
    fn from(value: RegisteredSealProofV4) -> Self {
        RegisteredSealProof(value)
    }
}

impl From<RegisteredSealProof> for RegisteredSealProofV4 {
    fn from(value: RegisteredSealProof) -> Self {
        value.0
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for RegisteredSealProof {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self(i64::arbitrary(g).into())
    }
}

/// Represents a shim over `SectorSize` from `fvm_shared`, the storage
/// capacity of a single sector in bytes.
#[derive(Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Debug, derive_more::Deref)]
pub struct SectorSize(SectorSizeV4);

impl SectorSize {
    const ALL: [SectorSizeV4; 5] = [
        SectorSizeV4::_2KiB,
        SectorSizeV4::_8MiB,
        SectorSizeV4::_512MiB,
        SectorSizeV4::_32GiB,
        SectorSizeV4::_64GiB,
    ];

    pub fn bytes(self) -> u64 {
        self.0 as u64
    }
}

impl From<SectorSizeV4> for SectorSize {
    fn from(value: SectorSizeV4) -> Self {
        SectorSize(value)
    }
}

impl TryFrom<u64> for SectorSize {
    type Error = anyhow::Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match Self::ALL.into_iter().find(|it| *it as u64 == value) {
            Some(size) => Ok(SectorSize(size)),
            None => bail!("{value} is not a supported sector size"),
        }
    }
}
