// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides the one-way hash and keyed hash
//! used to derive keys, sign and verify.

use super::HASH_LENGTH;

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// A 32-byte hash digest, the unit of all key and signature entries.
pub type HashDigest = [u8; HASH_LENGTH];

/// Computes the SHA-256 digest of `data`.
pub fn hash(data: &[u8]) -> HashDigest {
    Sha256::digest(data).into()
}

/// Computes the HMAC-SHA-256 of `message` under `key`.
pub fn keyed_hash(key: &[u8], message: &[u8]) -> HashDigest {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take a key of any size.");
    mac.update(message);

    mac.finalize().into_bytes().into()
}
