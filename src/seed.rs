// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides a `Seed` master secret from which
//! one-time key pairs can be derived deterministically.

use super::error::SignatureError;
use super::{KeyPair, SEED_LENGTH};

use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A master secret of at least `SEED_LENGTH` bytes.
///
/// The key pair derived for a given index must only ever sign
/// one message: callers are responsible for never reusing an index.
#[derive(Clone, Eq, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct Seed(Vec<u8>);

impl Debug for Seed {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Seed").finish_non_exhaustive()
    }
}

impl Seed {
    /// Generates a new random seed of `SEED_LENGTH` bytes
    pub fn generate(mut rng: impl CryptoRng + RngCore) -> Self {
        let mut bytes = [0u8; SEED_LENGTH];
        rng.fill_bytes(&mut bytes);
        let seed = Seed(bytes.to_vec());
        bytes.zeroize();

        seed
    }

    /// Constructs a seed from raw bytes, failing if they are
    /// shorter than `SEED_LENGTH`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() < SEED_LENGTH {
            return Err(SignatureError::SeedTooShort(bytes.len()));
        }

        Ok(Seed(bytes.to_vec()))
    }

    /// Returns the raw bytes of this seed
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Derives the key pair of this seed at position `index`
    pub fn key_pair(&self, index: u64) -> KeyPair {
        KeyPair::from_seed(self, index)
    }
}
