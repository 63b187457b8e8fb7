// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides `Lamport`, which runs key generation,
//! signing and verification on encoded keys and signatures.

use super::config::Config;
use super::error::SignatureError;
use super::format::{Encoded, EntrySequence, Format};
use super::{KeyPair, PrivateKey, PublicKey, Seed, Signature};

use alloc::string::String;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Lamport one-time signatures over encoded keys and signatures.
///
/// The encodings are fixed when the instance is built.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Lamport {
    config: Config,
}

impl Lamport {
    /// Builds an instance using the provided encodings
    pub fn new(config: Config) -> Self {
        Lamport { config }
    }

    /// Returns the encodings of this instance
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generates a new random seed, encoded as text.
    ///
    /// The returned text is cleared from memory when dropped.
    pub fn generate_seed(&self, rng: impl CryptoRng + RngCore) -> Zeroizing<String> {
        let seed = Seed::generate(rng);

        Zeroizing::new(self.config.seed_encoding.encode(seed.as_bytes()))
    }

    /// Generates a new random key pair, returning the encoded
    /// private key and public key.
    pub fn generate_keys(
        &self,
        rng: impl CryptoRng + RngCore,
    ) -> Result<(Encoded, Encoded), SignatureError> {
        self.encode_key_pair(&KeyPair::new(rng))
    }

    /// Derives the key pair at position `index` of an encoded seed,
    /// returning the encoded private key and public key.
    pub fn generate_keys_from_seed(
        &self,
        seed: &str,
        index: u64,
    ) -> Result<(Encoded, Encoded), SignatureError> {
        let bytes = Zeroizing::new(self.config.seed_encoding.decode(seed)?);
        let seed = Seed::from_bytes(&bytes)?;

        self.encode_key_pair(&KeyPair::from_seed(&seed, index))
    }

    /// Signs a message with an encoded private key, which must
    /// not be used again.
    pub fn sign(&self, message: &[u8], private_key: &Encoded) -> Result<Encoded, SignatureError> {
        let private_key: PrivateKey = self.decode_key(private_key)?;
        let signature = Signature::sign(message, &private_key);

        self.encode(self.config.signature_format, &signature)
    }

    /// Verifies an encoded signature against a message and an
    /// encoded public key.
    ///
    /// Any decoding failure makes verification fail.
    pub fn verify(&self, message: &[u8], signature: &Encoded, public_key: &Encoded) -> bool {
        let signature = match self.decode_signature(signature) {
            Ok(signature) => signature,
            Err(err) => {
                tracing::debug!(%err, "rejecting undecodable signature");
                return false;
            }
        };
        let public_key: PublicKey = match self.decode_key(public_key) {
            Ok(public_key) => public_key,
            Err(err) => {
                tracing::debug!(%err, "rejecting undecodable public key");
                return false;
            }
        };

        signature.verify(message, &public_key).is_ok()
    }

    /// Computes the encoded public key of an encoded private key
    pub fn public_key_from_private_key(
        &self,
        private_key: &Encoded,
    ) -> Result<Encoded, SignatureError> {
        let private_key: PrivateKey = self.decode_key(private_key)?;

        self.encode(self.config.key_format, &PublicKey::from_private_key(&private_key))
    }

    /// Decodes a private or public key using the key format
    pub fn decode_key<T: EntrySequence>(&self, key: &Encoded) -> Result<T, SignatureError> {
        self.config
            .key_format
            .decode(key, self.config.hash_encoding)
    }

    /// Decodes a signature using the signature format
    pub fn decode_signature(&self, signature: &Encoded) -> Result<Signature, SignatureError> {
        self.config
            .signature_format
            .decode(signature, self.config.hash_encoding)
    }

    fn encode_key_pair(&self, key_pair: &KeyPair) -> Result<(Encoded, Encoded), SignatureError> {
        Ok((
            self.encode(self.config.key_format, &key_pair.private_key)?,
            self.encode(self.config.key_format, &key_pair.public_key)?,
        ))
    }

    fn encode<T: EntrySequence>(
        &self,
        format: Format,
        value: &T,
    ) -> Result<Encoded, SignatureError> {
        format.encode(value, self.config.hash_encoding)
    }
}
