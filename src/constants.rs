// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module defines all constants used in this crate.

/// Hash digest length in bytes
pub const HASH_LENGTH: usize = 32;

/// Number of bits in a message digest
pub const DIGEST_BITS: usize = HASH_LENGTH * 8;

/// Number of checksum bits appended to a message digest
pub const CHECKSUM_BITS: usize = 8;

/// Number of bits signed for any message (digest bits and checksum bits)
pub const MESSAGE_BITS: usize = DIGEST_BITS + CHECKSUM_BITS;

/// Number of entries in a private or public key
pub const KEY_LENGTH: usize = MESSAGE_BITS;

/// Private or public key length in bytes (concatenated form)
pub const KEY_BYTES_LENGTH: usize = KEY_LENGTH * HASH_LENGTH;

/// Maximum number of entries in a signature
pub const MAX_SIGNATURE_LENGTH: usize = MESSAGE_BITS;

/// Maximum signature length in bytes (concatenated form)
pub const MAX_SIGNATURE_BYTES_LENGTH: usize = MAX_SIGNATURE_LENGTH * HASH_LENGTH;

/// Minimum seed length in bytes
pub const SEED_LENGTH: usize = 32;
