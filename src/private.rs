// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides a one-time `PrivateKey` made of
//! `KEY_LENGTH` secret hash-sized entries.

use super::error::SignatureError;
use super::hash::{keyed_hash, HashDigest};
use super::{Seed, Signature, HASH_LENGTH, KEY_BYTES_LENGTH, KEY_LENGTH};

use alloc::format;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A one-time private key.
///
/// A private key must sign at most one message: every signature
/// reveals about half of its entries.
#[derive(Clone, Eq, PartialEq)]
pub struct PrivateKey(pub(crate) Vec<HashDigest>);

/// Overwrites every entry with zeros in place, so a cleared key
/// keeps its `KEY_LENGTH` entries.
impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.0.iter_mut().for_each(Zeroize::zeroize);
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for PrivateKey {}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("entries", &self.0.len())
            .finish_non_exhaustive()
    }
}

impl PrivateKey {
    /// Generates a new random private key
    pub fn new(mut rng: impl CryptoRng + RngCore) -> Self {
        let entries = (0..KEY_LENGTH)
            .map(|_| {
                let mut entry = [0u8; HASH_LENGTH];
                rng.fill_bytes(&mut entry);
                entry
            })
            .collect();

        tracing::trace!(entries = KEY_LENGTH, "generated random private key");

        PrivateKey(entries)
    }

    /// Derives a private key from a seed and an index.
    ///
    /// Entry `i` is the HMAC of the text `"{index}-{i}"` keyed with
    /// the seed, so identical inputs always give the same key.
    pub fn from_seed(seed: &Seed, index: u64) -> Self {
        let entries = (0..KEY_LENGTH)
            .map(|i| keyed_hash(seed.as_bytes(), format!("{}-{}", index, i).as_bytes()))
            .collect();

        tracing::trace!(index, entries = KEY_LENGTH, "derived private key from seed");

        PrivateKey(entries)
    }

    /// Constructs a private key from its entries, failing
    /// if there are not exactly `KEY_LENGTH` of them.
    pub fn from_entries(entries: Vec<HashDigest>) -> Result<Self, SignatureError> {
        if entries.len() != KEY_LENGTH {
            return Err(SignatureError::InvalidFormat(
                "private key does not have 264 entries",
            ));
        }

        Ok(PrivateKey(entries))
    }

    /// Returns the entries of this private key
    pub fn entries(&self) -> &[HashDigest] {
        &self.0
    }

    /// Converts this private key to its concatenated entries
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.concat())
    }

    /// Constructs a private key from its concatenated entries
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != KEY_BYTES_LENGTH {
            return Err(SignatureError::InvalidFormat(
                "private key is not 8448 bytes long",
            ));
        }

        Ok(PrivateKey(split_entries(bytes)))
    }

    /// Signs a message with this private key, which must not be used again
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature::sign(message, self)
    }
}

impl TryFrom<Vec<HashDigest>> for PrivateKey {
    type Error = SignatureError;

    fn try_from(entries: Vec<HashDigest>) -> Result<Self, Self::Error> {
        PrivateKey::from_entries(entries)
    }
}

/// Splits a buffer whose length is a multiple of `HASH_LENGTH`
/// into hash-sized entries.
pub(crate) fn split_entries(bytes: &[u8]) -> Vec<HashDigest> {
    bytes
        .chunks_exact(HASH_LENGTH)
        .map(|chunk| {
            let mut entry = [0u8; HASH_LENGTH];
            entry.copy_from_slice(chunk);
            entry
        })
        .collect()
}

#[cfg(feature = "serialize")]
impl serde::Serialize for PrivateKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serialize")]
impl<'de> serde::Deserialize<'de> for PrivateKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Zeroizing::new(Vec::<HashDigest>::deserialize(deserializer)?);
        PrivateKey::from_entries(entries.to_vec()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::OsRng;

    #[test]
    fn test_random_keys() {
        let a = PrivateKey::new(OsRng);
        let b = PrivateKey::new(OsRng);

        assert_eq!(a.entries().len(), KEY_LENGTH);
        assert_ne!(a, b);
    }

    #[test]
    fn test_seed_derivation() {
        let seed = Seed::from_bytes(&[42u8; 32]).unwrap();

        let a = PrivateKey::from_seed(&seed, 0);
        assert_eq!(a, PrivateKey::from_seed(&seed, 0));
        assert_ne!(a, PrivateKey::from_seed(&seed, 1));

        assert_eq!(a.entries()[0], keyed_hash(&[42u8; 32], b"0-0"));
        assert_eq!(a.entries()[263], keyed_hash(&[42u8; 32], b"0-263"));

        let b = PrivateKey::from_seed(&seed, 17);
        assert_eq!(b.entries()[5], keyed_hash(&[42u8; 32], b"17-5"));
    }

    #[test]
    fn test_encoding() {
        let key = PrivateKey::new(OsRng);
        let bytes = key.to_bytes();
        assert_eq!(bytes.len(), KEY_BYTES_LENGTH);
        assert_eq!(&bytes[..HASH_LENGTH], &key.entries()[0]);
        assert_eq!(key, PrivateKey::from_bytes(&bytes).unwrap());

        assert!(PrivateKey::from_bytes(&bytes[..KEY_BYTES_LENGTH - 1]).is_err());
        assert!(PrivateKey::from_bytes(&bytes[..KEY_BYTES_LENGTH - 32]).is_err());
    }

    #[test]
    fn test_from_entries() {
        let entries = vec![[1u8; HASH_LENGTH]; KEY_LENGTH - 1];
        assert!(PrivateKey::try_from(entries).is_err());

        let entries = vec![[1u8; HASH_LENGTH]; KEY_LENGTH];
        assert!(PrivateKey::try_from(entries).is_ok());
    }

    #[test]
    fn test_zeroize() {
        let mut key = PrivateKey::new(OsRng);
        key.zeroize();

        assert_eq!(key.entries().len(), KEY_LENGTH);
        assert!(key.entries().iter().all(|entry| entry == &[0u8; HASH_LENGTH]));

        // A cleared key still signs with the expected shape
        let signature = key.sign(b"cleared");
        assert_eq!(
            signature.len(),
            crate::bits::message_bits(b"cleared").count_ones()
        );
    }
}
