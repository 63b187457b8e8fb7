// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides the text encodings used for hash
//! entries, seeds and binary keys or signatures.

use super::error::SignatureError;

use alloc::string::String;
use alloc::vec::Vec;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A text encoding of binary data
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "snake_case"))]
pub enum TextEncoding {
    /// Lowercase hexadecimal. Decoding accepts both cases.
    Hex,
    /// Standard base64 alphabet, with padding
    #[default]
    Base64,
    /// URL-safe base64 alphabet, without padding
    Base64Url,
}

impl TextEncoding {
    /// Encodes `bytes` as text
    pub fn encode(&self, bytes: &[u8]) -> String {
        match self {
            Self::Hex => hex::encode(bytes),
            Self::Base64 => STANDARD.encode(bytes),
            Self::Base64Url => URL_SAFE_NO_PAD.encode(bytes),
        }
    }

    /// Decodes `text` back to bytes
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, SignatureError> {
        match self {
            Self::Hex => {
                hex::decode(text).map_err(|_| SignatureError::InvalidFormat("invalid hex text"))
            }
            Self::Base64 => STANDARD
                .decode(text)
                .map_err(|_| SignatureError::InvalidFormat("invalid base64 text")),
            Self::Base64Url => URL_SAFE_NO_PAD
                .decode(text)
                .map_err(|_| SignatureError::InvalidFormat("invalid base64url text")),
        }
    }
}
