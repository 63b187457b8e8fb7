// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides a `KeyPair` struct
//! combining a `PrivateKey` and an associated `PublicKey`.

use super::error::SignatureError;
use super::{PrivateKey, PublicKey, Seed, Signature};

use rand_core::{CryptoRng, RngCore};

/// A KeyPair
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyPair {
    /// A private key
    pub private_key: PrivateKey,
    /// A public key
    pub public_key: PublicKey,
}

impl KeyPair {
    /// Generates a new random key pair
    pub fn new(mut rng: impl CryptoRng + RngCore) -> Self {
        let private_key = PrivateKey::new(&mut rng);

        KeyPair::from_private_key(private_key)
    }

    /// Derives the key pair at position `index` of a seed.
    ///
    /// The same seed and index always give the same key pair.
    pub fn from_seed(seed: &Seed, index: u64) -> Self {
        KeyPair::from_private_key(PrivateKey::from_seed(seed, index))
    }

    /// Generates a new key pair from a provided private key.
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = PublicKey::from_private_key(&private_key);

        KeyPair {
            private_key,
            public_key,
        }
    }

    /// Computes a Lamport signature. This key pair must not sign
    /// any other message.
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature::sign(message, &self.private_key)
    }

    /// Verifies a signature against a message and this key pair
    pub fn verify_signature(
        &self,
        signature: &Signature,
        message: &[u8],
    ) -> Result<(), SignatureError> {
        signature.verify(message, &self.public_key)
    }
}

impl From<PrivateKey> for KeyPair {
    fn from(private_key: PrivateKey) -> Self {
        KeyPair::from_private_key(private_key)
    }
}
