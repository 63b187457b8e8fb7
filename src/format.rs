// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module translates keys and signatures from and to
//! their external representations.
//!
//! Two encodings are involved: the `Format` deciding how the whole
//! sequence of entries is packaged, and the `TextEncoding` of each
//! individual entry whenever entries are represented as text.

use super::encoding::TextEncoding;
use super::error::SignatureError;
use super::hash::HashDigest;
use super::{PrivateKey, PublicKey, Signature, HASH_LENGTH, KEY_LENGTH, MAX_SIGNATURE_LENGTH};

use alloc::string::String;
use alloc::vec::Vec;
use zeroize::{Zeroize, Zeroizing};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The external representation of a key or a signature
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "snake_case"))]
pub enum Format {
    /// A list of text-encoded entries
    Structured,
    /// A list of text-encoded entries, serialized as a JSON array
    SerializedText,
    /// All entries concatenated in a single buffer
    ConcatenatedBinary,
    /// All entries concatenated, then text-encoded
    TextEncodedBinary(TextEncoding),
}

impl Default for Format {
    fn default() -> Self {
        Format::TextEncodedBinary(TextEncoding::Base64)
    }
}

/// An encoded key or signature
#[derive(Clone, Debug, Eq, PartialEq, Zeroize)]
pub enum Encoded {
    /// Output of `Format::Structured`
    Structured(Vec<String>),
    /// Output of `Format::SerializedText` and `Format::TextEncodedBinary`
    Text(String),
    /// Output of `Format::ConcatenatedBinary`
    Binary(Vec<u8>),
}

impl Encoded {
    /// Returns the entries of a structured value
    pub fn as_structured(&self) -> Option<&[String]> {
        match self {
            Self::Structured(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the content of a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the content of a binary value
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<Vec<String>> for Encoded {
    fn from(entries: Vec<String>) -> Self {
        Encoded::Structured(entries)
    }
}

impl From<String> for Encoded {
    fn from(text: String) -> Self {
        Encoded::Text(text)
    }
}

impl From<&str> for Encoded {
    fn from(text: &str) -> Self {
        Encoded::Text(text.into())
    }
}

impl From<Vec<u8>> for Encoded {
    fn from(bytes: Vec<u8>) -> Self {
        Encoded::Binary(bytes)
    }
}

mod sealed {
    use super::HashDigest;

    /// Entry count rules and unchecked construction of an `EntrySequence`.
    pub trait Shape: Sized {
        /// Name used in logs
        const NAME: &'static str;

        /// Checks whether `count` entries form a valid value
        fn accepts_length(count: usize) -> bool;

        /// Builds a value from entries whose count has been checked
        fn from_checked_entries(entries: &[HashDigest]) -> Self;
    }
}

/// An ordered sequence of hash-sized entries with a bounded length,
/// shared by keys and signatures.
///
/// This trait is sealed: it is only implemented by `PrivateKey`,
/// `PublicKey` and `Signature`, and values can only be built through
/// their shape-checked constructors.
///
/// ```compile_fail
/// use lamport_sig::{EntrySequence, PublicKey};
///
/// let empty = <PublicKey as EntrySequence>::from_checked_entries(&[]);
/// ```
pub trait EntrySequence: sealed::Shape {
    /// Returns the entries of this value
    fn entries(&self) -> &[HashDigest];
}

impl EntrySequence for PrivateKey {
    fn entries(&self) -> &[HashDigest] {
        &self.0
    }
}

impl sealed::Shape for PrivateKey {
    const NAME: &'static str = "private key";

    fn accepts_length(count: usize) -> bool {
        count == KEY_LENGTH
    }

    fn from_checked_entries(entries: &[HashDigest]) -> Self {
        PrivateKey(entries.to_vec())
    }
}

impl EntrySequence for PublicKey {
    fn entries(&self) -> &[HashDigest] {
        &self.0
    }
}

impl sealed::Shape for PublicKey {
    const NAME: &'static str = "public key";

    fn accepts_length(count: usize) -> bool {
        count == KEY_LENGTH
    }

    fn from_checked_entries(entries: &[HashDigest]) -> Self {
        PublicKey(entries.to_vec())
    }
}

impl EntrySequence for Signature {
    fn entries(&self) -> &[HashDigest] {
        &self.0
    }
}

impl sealed::Shape for Signature {
    const NAME: &'static str = "signature";

    fn accepts_length(count: usize) -> bool {
        count <= MAX_SIGNATURE_LENGTH
    }

    fn from_checked_entries(entries: &[HashDigest]) -> Self {
        Signature(entries.to_vec())
    }
}

impl Format {
    /// Encodes a key or a signature, representing individual entries
    /// with `hash_encoding` when they are stored as text.
    pub fn encode<T: EntrySequence>(
        &self,
        value: &T,
        hash_encoding: TextEncoding,
    ) -> Result<Encoded, SignatureError> {
        match self {
            Self::Structured => Ok(Encoded::Structured(encode_entries(
                value.entries(),
                hash_encoding,
            ))),
            Self::SerializedText => {
                let entries = Zeroizing::new(encode_entries(value.entries(), hash_encoding));
                serde_json::to_string(&*entries)
                    .map(Encoded::Text)
                    .map_err(|_| SignatureError::InvalidFormat("cannot serialize entries"))
            }
            Self::ConcatenatedBinary => Ok(Encoded::Binary(value.entries().concat())),
            Self::TextEncodedBinary(encoding) => {
                let bytes = Zeroizing::new(value.entries().concat());
                Ok(Encoded::Text(encoding.encode(&bytes)))
            }
        }
    }

    /// Decodes a key or a signature, checking its shape.
    pub fn decode<T: EntrySequence>(
        &self,
        encoded: &Encoded,
        hash_encoding: TextEncoding,
    ) -> Result<T, SignatureError> {
        match (self, encoded) {
            (Self::Structured, Encoded::Structured(entries)) => {
                decode_entries(entries, hash_encoding)
            }
            (Self::SerializedText, Encoded::Text(text)) => {
                let entries: Zeroizing<Vec<String>> = Zeroizing::new(
                    serde_json::from_str(text)
                        .map_err(|_| SignatureError::InvalidFormat("not a JSON array of strings"))?,
                );
                decode_entries(&entries, hash_encoding)
            }
            (Self::ConcatenatedBinary, Encoded::Binary(bytes)) => decode_binary(bytes),
            (Self::TextEncodedBinary(encoding), Encoded::Text(text)) => {
                let bytes = Zeroizing::new(encoding.decode(text)?);
                decode_binary(&bytes)
            }
            _ => Err(SignatureError::InvalidFormat(
                "encoded value does not match the configured format",
            )),
        }
    }
}

fn encode_entries(entries: &[HashDigest], hash_encoding: TextEncoding) -> Vec<String> {
    entries
        .iter()
        .map(|entry| hash_encoding.encode(entry))
        .collect()
}

fn decode_entries<T: EntrySequence>(
    entries: &[String],
    hash_encoding: TextEncoding,
) -> Result<T, SignatureError> {
    if !T::accepts_length(entries.len()) {
        tracing::debug!(kind = T::NAME, count = entries.len(), "wrong entry count");
        return Err(SignatureError::InvalidFormat("wrong number of entries"));
    }

    let mut decoded = Zeroizing::new(Vec::with_capacity(entries.len()));
    for text in entries {
        let bytes = Zeroizing::new(hash_encoding.decode(text)?);
        if bytes.len() != HASH_LENGTH {
            tracing::debug!(kind = T::NAME, length = bytes.len(), "wrong entry length");
            return Err(SignatureError::InvalidFormat("entry is not 32 bytes long"));
        }

        let mut entry = [0u8; HASH_LENGTH];
        entry.copy_from_slice(&bytes);
        decoded.push(entry);
    }

    Ok(T::from_checked_entries(&decoded))
}

fn decode_binary<T: EntrySequence>(bytes: &[u8]) -> Result<T, SignatureError> {
    if bytes.len() % HASH_LENGTH != 0 {
        tracing::debug!(kind = T::NAME, length = bytes.len(), "unaligned buffer");
        return Err(SignatureError::InvalidFormat(
            "length is not a multiple of 32 bytes",
        ));
    }
    if !T::accepts_length(bytes.len() / HASH_LENGTH) {
        tracing::debug!(kind = T::NAME, length = bytes.len(), "wrong buffer length");
        return Err(SignatureError::InvalidFormat("wrong number of entries"));
    }

    let entries = Zeroizing::new(super::private::split_entries(bytes));

    Ok(T::from_checked_entries(&entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyPair;
    use alloc::string::ToString;
    use rand_core::OsRng;

    const FORMATS: [Format; 6] = [
        Format::Structured,
        Format::SerializedText,
        Format::ConcatenatedBinary,
        Format::TextEncodedBinary(TextEncoding::Hex),
        Format::TextEncodedBinary(TextEncoding::Base64),
        Format::TextEncodedBinary(TextEncoding::Base64Url),
    ];

    const HASH_ENCODINGS: [TextEncoding; 3] = [
        TextEncoding::Hex,
        TextEncoding::Base64,
        TextEncoding::Base64Url,
    ];

    #[test]
    fn test_round_trip() {
        let key_pair = KeyPair::new(OsRng);
        let signature = key_pair.sign(b"round trip");

        for format in FORMATS {
            for hash_encoding in HASH_ENCODINGS {
                let encoded = format.encode(&key_pair.private_key, hash_encoding).unwrap();
                let decoded: PrivateKey = format.decode(&encoded, hash_encoding).unwrap();
                assert_eq!(decoded, key_pair.private_key);

                let encoded = format.encode(&key_pair.public_key, hash_encoding).unwrap();
                let decoded: PublicKey = format.decode(&encoded, hash_encoding).unwrap();
                assert_eq!(decoded, key_pair.public_key);

                let encoded = format.encode(&signature, hash_encoding).unwrap();
                let decoded: Signature = format.decode(&encoded, hash_encoding).unwrap();
                assert_eq!(decoded, signature);
            }
        }
    }

    #[test]
    fn test_encoded_shapes() {
        let key_pair = KeyPair::new(OsRng);
        let pkey = &key_pair.public_key;

        let structured = Format::Structured
            .encode(pkey, TextEncoding::Hex)
            .unwrap();
        let entries = structured.as_structured().unwrap();
        assert_eq!(entries.len(), KEY_LENGTH);
        assert_eq!(entries[0], hex::encode(pkey.entries()[0]));

        let serialized = Format::SerializedText
            .encode(pkey, TextEncoding::Hex)
            .unwrap();
        let text = serialized.as_text().unwrap();
        assert!(text.starts_with("[\""));
        assert!(text.contains(&entries[1]));

        let binary = Format::ConcatenatedBinary
            .encode(pkey, TextEncoding::Hex)
            .unwrap();
        assert_eq!(binary.as_binary().unwrap(), &pkey.to_bytes()[..]);

        let text = Format::TextEncodedBinary(TextEncoding::Hex)
            .encode(pkey, TextEncoding::Base64)
            .unwrap();
        assert_eq!(text.as_text().unwrap(), hex::encode(pkey.to_bytes()));
    }

    #[test]
    fn test_invalid_structured() {
        let key_pair = KeyPair::new(OsRng);
        let encoded = Format::Structured
            .encode(&key_pair.public_key, TextEncoding::Base64)
            .unwrap();
        let mut entries = encoded.as_structured().unwrap().to_vec();

        // Too few entries
        let short = Encoded::from(entries[1..].to_vec());
        assert!(Format::Structured
            .decode::<PublicKey>(&short, TextEncoding::Base64)
            .is_err());

        // Entry of the wrong byte length
        entries[7] = TextEncoding::Base64.encode(&[1u8; 31]);
        let wrong_entry = Encoded::from(entries.clone());
        assert_eq!(
            Format::Structured.decode::<PublicKey>(&wrong_entry, TextEncoding::Base64),
            Err(SignatureError::InvalidFormat("entry is not 32 bytes long"))
        );

        // Entry that is not valid text for the hash encoding
        entries[7] = "not base64!".to_string();
        let wrong_text = Encoded::from(entries);
        assert!(Format::Structured
            .decode::<PublicKey>(&wrong_text, TextEncoding::Base64)
            .is_err());

        // Signatures accept fewer entries but not more than 264
        let signatures = Encoded::from(vec![TextEncoding::Base64.encode(&[0u8; 32]); 3]);
        assert_eq!(
            Format::Structured
                .decode::<Signature>(&signatures, TextEncoding::Base64)
                .unwrap()
                .len(),
            3
        );
        let too_long = Encoded::from(vec![TextEncoding::Base64.encode(&[0u8; 32]); 265]);
        assert!(Format::Structured
            .decode::<Signature>(&too_long, TextEncoding::Base64)
            .is_err());
    }

    #[test]
    fn test_invalid_binary() {
        let format = Format::ConcatenatedBinary;

        assert!(format
            .decode::<Signature>(&Encoded::from(vec![0u8; 33]), TextEncoding::Base64)
            .is_err());
        assert!(format
            .decode::<Signature>(&Encoded::from(vec![0u8; 265 * 32]), TextEncoding::Base64)
            .is_err());
        assert!(format
            .decode::<Signature>(&Encoded::from(vec![0u8; 264 * 32]), TextEncoding::Base64)
            .is_ok());

        assert!(format
            .decode::<PrivateKey>(&Encoded::from(vec![0u8; 263 * 32]), TextEncoding::Base64)
            .is_err());
        assert!(format
            .decode::<PrivateKey>(&Encoded::from(vec![0u8; 264 * 32]), TextEncoding::Base64)
            .is_ok());

        let text_format = Format::TextEncodedBinary(TextEncoding::Hex);
        assert!(text_format
            .decode::<Signature>(&Encoded::from("0011zz"), TextEncoding::Base64)
            .is_err());
        assert!(text_format
            .decode::<Signature>(&Encoded::from(hex::encode([0u8; 31])), TextEncoding::Base64)
            .is_err());
    }

    #[test]
    fn test_invalid_serialized_text() {
        let format = Format::SerializedText;

        assert!(format
            .decode::<Signature>(&Encoded::from("not json"), TextEncoding::Base64)
            .is_err());
        assert!(format
            .decode::<Signature>(&Encoded::from("[1, 2, 3]"), TextEncoding::Base64)
            .is_err());
        assert_eq!(
            format
                .decode::<Signature>(&Encoded::from("[]"), TextEncoding::Base64)
                .unwrap(),
            Signature::default()
        );
    }

    #[test]
    fn test_mismatched_variant() {
        let key_pair = KeyPair::new(OsRng);
        let encoded = Format::ConcatenatedBinary
            .encode(&key_pair.public_key, TextEncoding::Base64)
            .unwrap();

        assert_eq!(
            Format::Structured.decode::<PublicKey>(&encoded, TextEncoding::Base64),
            Err(SignatureError::InvalidFormat(
                "encoded value does not match the configured format"
            ))
        );
    }
}
