// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::fvm_shared_latest::randomness::Randomness as Randomness_latest;
use serde::{Deserialize, Serialize};

/// Represents a shim over `Randomness` from `fvm_shared`: the bytes derived
/// from chain state for a given domain, epoch and entropy.
#[derive(
    PartialEq,
    Eq,
    Default,
    Clone,
    Debug,
    Deserialize,
    Serialize,
    derive_more::Deref,
    derive_more::From,
    derive_more::Into,
)]
#[serde(transparent)]
pub struct Randomness(Randomness_latest);

impl Randomness {
    pub fn new(rand: Vec<u8>) -> Self {
        Randomness(Randomness_latest(rand))
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0.0
    }
}
