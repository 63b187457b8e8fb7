// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides a Signature struct implementing
//! Lamport signing and verification.

use super::bits::message_bits;
use super::error::SignatureError;
use super::hash::{hash, HashDigest};
use super::private::split_entries;
use super::{
    PrivateKey, PublicKey, HASH_LENGTH, KEY_LENGTH, MAX_SIGNATURE_BYTES_LENGTH,
    MAX_SIGNATURE_LENGTH,
};

use alloc::vec::Vec;
use subtle::ConstantTimeEq;

/// A Lamport signature not attached to its message.
///
/// It holds one private key entry for every set bit of the
/// signed message bits, in increasing bit position order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Signature(pub(crate) Vec<HashDigest>);

impl Signature {
    /// Computes a Lamport signature.
    ///
    /// The private key must not be used for any other message.
    pub fn sign(message: &[u8], skey: &PrivateKey) -> Self {
        let bits = message_bits(message);

        let entries = bits
            .iter()
            .by_vals()
            .zip(skey.entries())
            .filter_map(|(bit, entry)| bit.then_some(*entry))
            .collect();

        Signature(entries)
    }

    /// Verifies a Lamport signature.
    ///
    /// Entries are consumed in order, one per set bit. Entries left
    /// once every set bit has been checked are ignored.
    pub fn verify(&self, message: &[u8], pkey: &PublicKey) -> Result<(), SignatureError> {
        if pkey.entries().len() != KEY_LENGTH {
            tracing::debug!(entries = pkey.entries().len(), "malformed public key");
            return Err(SignatureError::InvalidSignature);
        }

        let bits = message_bits(message);
        let mut revealed = self.0.iter();

        for (position, (bit, expected)) in bits.iter().by_vals().zip(pkey.entries()).enumerate() {
            if !bit {
                continue;
            }

            let entry = revealed.next().ok_or_else(|| {
                tracing::debug!(position, "signature exhausted before last set bit");
                SignatureError::InvalidSignature
            })?;

            if !bool::from(hash(entry)[..].ct_eq(&expected[..])) {
                tracing::debug!(position, "signature entry does not match public key");
                return Err(SignatureError::InvalidSignature);
            }
        }

        Ok(())
    }

    /// Constructs a signature from its entries, failing
    /// if there are more than `MAX_SIGNATURE_LENGTH` of them.
    pub fn from_entries(entries: Vec<HashDigest>) -> Result<Self, SignatureError> {
        if entries.len() > MAX_SIGNATURE_LENGTH {
            return Err(SignatureError::InvalidFormat(
                "signature has more than 264 entries",
            ));
        }

        Ok(Signature(entries))
    }

    /// Returns the entries of this signature
    pub fn entries(&self) -> &[HashDigest] {
        &self.0
    }

    /// Returns the number of revealed entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this signature reveals no entry
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts this signature to its concatenated entries
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.concat()
    }

    /// Constructs a signature from its concatenated entries
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() % HASH_LENGTH != 0 {
            return Err(SignatureError::InvalidFormat(
                "signature length is not a multiple of 32 bytes",
            ));
        }
        if bytes.len() > MAX_SIGNATURE_BYTES_LENGTH {
            return Err(SignatureError::InvalidFormat(
                "signature is longer than 8448 bytes",
            ));
        }

        Ok(Signature(split_entries(bytes)))
    }
}

impl TryFrom<Vec<HashDigest>> for Signature {
    type Error = SignatureError;

    fn try_from(entries: Vec<HashDigest>) -> Result<Self, Self::Error> {
        Signature::from_entries(entries)
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for Signature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serialize")]
impl<'de> serde::Deserialize<'de> for Signature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<HashDigest>::deserialize(deserializer)?;
        Signature::from_entries(entries).map_err(serde::de::Error::custom)
    }
}
