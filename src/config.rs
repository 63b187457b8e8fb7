// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides the encoding configuration of a `Lamport` instance.

use super::encoding::TextEncoding;
use super::format::Format;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The encodings used for keys, signatures and seeds
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct Config {
    /// External representation of private and public keys
    pub key_format: Format,
    /// External representation of signatures
    pub signature_format: Format,
    /// Text representation of each key or signature entry
    pub hash_encoding: TextEncoding,
    /// Text representation of seeds
    pub seed_encoding: TextEncoding,
}

impl Config {
    /// Sets the key format
    pub fn with_key_format(mut self, key_format: Format) -> Self {
        self.key_format = key_format;
        self
    }

    /// Sets the signature format
    pub fn with_signature_format(mut self, signature_format: Format) -> Self {
        self.signature_format = signature_format;
        self
    }

    /// Sets the text encoding of entries
    pub fn with_hash_encoding(mut self, hash_encoding: TextEncoding) -> Self {
        self.hash_encoding = hash_encoding;
        self
    }

    /// Sets the text encoding of seeds
    pub fn with_seed_encoding(mut self, seed_encoding: TextEncoding) -> Self {
        self.seed_encoding = seed_encoding;
        self
    }
}
