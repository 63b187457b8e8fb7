// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides a `PublicKey` made of the hashes
//! of the entries of a `PrivateKey`.

use super::error::SignatureError;
use super::hash::{hash, HashDigest};
use super::private::split_entries;
use super::{PrivateKey, Signature, KEY_BYTES_LENGTH, KEY_LENGTH};

use alloc::vec::Vec;

/// A public key
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey(pub(crate) Vec<HashDigest>);

impl PublicKey {
    /// Computes a public key from a provided private key
    pub fn from_private_key(sk: &PrivateKey) -> Self {
        PublicKey(sk.entries().iter().map(|entry| hash(entry)).collect())
    }

    /// Constructs a public key from its entries, failing
    /// if there are not exactly `KEY_LENGTH` of them.
    pub fn from_entries(entries: Vec<HashDigest>) -> Result<Self, SignatureError> {
        if entries.len() != KEY_LENGTH {
            return Err(SignatureError::InvalidFormat(
                "public key does not have 264 entries",
            ));
        }

        Ok(PublicKey(entries))
    }

    /// Returns the entries of this public key
    pub fn entries(&self) -> &[HashDigest] {
        &self.0
    }

    /// Converts this public key to its concatenated entries
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.concat()
    }

    /// Constructs a public key from its concatenated entries
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != KEY_BYTES_LENGTH {
            return Err(SignatureError::InvalidFormat(
                "public key is not 8448 bytes long",
            ));
        }

        Ok(PublicKey(split_entries(bytes)))
    }

    /// Verifies a signature against a message and this public key
    pub fn verify_signature(
        &self,
        signature: &Signature,
        message: &[u8],
    ) -> Result<(), SignatureError> {
        signature.verify(message, self)
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(sk: &PrivateKey) -> Self {
        PublicKey::from_private_key(sk)
    }
}

impl TryFrom<Vec<HashDigest>> for PublicKey {
    type Error = SignatureError;

    fn try_from(entries: Vec<HashDigest>) -> Result<Self, Self::Error> {
        PublicKey::from_entries(entries)
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for PublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serialize")]
impl<'de> serde::Deserialize<'de> for PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<HashDigest>::deserialize(deserializer)?;
        PublicKey::from_entries(entries).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HASH_LENGTH;
    use rand_core::OsRng;

    #[test]
    fn test_signature() {
        let message = b"A one-time message";

        let skey = PrivateKey::new(OsRng);
        let pkey = PublicKey::from_private_key(&skey);

        let signature = Signature::sign(message, &skey);
        assert!(pkey.verify_signature(&signature, message).is_ok());
        assert!(pkey
            .verify_signature(&signature, b"Another message")
            .is_err());
    }

    #[test]
    fn test_derivation() {
        let skey = PrivateKey::new(OsRng);
        let pkey = PublicKey::from(&skey);

        assert_eq!(pkey.entries().len(), KEY_LENGTH);
        for (secret, public) in skey.entries().iter().zip(pkey.entries()) {
            assert_eq!(&hash(secret), public);
        }

        let zero_key = PrivateKey::from_entries(vec![[0u8; HASH_LENGTH]; KEY_LENGTH]).unwrap();
        let zero_pkey = PublicKey::from_private_key(&zero_key);
        assert!(zero_pkey.entries().iter().all(|e| e == &hash(&[0u8; 32])));
    }

    #[test]
    fn test_encoding() {
        for _ in 0..10 {
            let key = PublicKey::from_private_key(&PrivateKey::new(OsRng));
            let bytes = key.to_bytes();

            assert_eq!(bytes.len(), KEY_BYTES_LENGTH);
            assert_eq!(key, PublicKey::from_bytes(&bytes).unwrap());
        }

        assert_eq!(
            PublicKey::from_bytes(&[0u8; KEY_BYTES_LENGTH + 32]),
            Err(SignatureError::InvalidFormat(
                "public key is not 8448 bytes long"
            ))
        );
        assert!(PublicKey::from_entries(vec![[0u8; HASH_LENGTH]; 3]).is_err());
    }
}
