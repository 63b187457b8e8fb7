// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module converts message digests into the bit sequence
//! selecting which key entries get revealed, including the
//! trailing checksum bits.

use super::hash::{hash, HashDigest};
use super::{DIGEST_BITS, HASH_LENGTH};

use bitvec::{array::BitArray, order::Msb0, slice::BitSlice};

/// The bits of a message digest, most significant bit of each byte first.
pub type DigestBits = BitArray<HashDigest, Msb0>;

/// The bits of a checksum byte, most significant bit first.
pub type ChecksumBits = BitArray<[u8; 1], Msb0>;

/// The full sequence of bits signed for a message: the digest bits
/// followed by the checksum bits.
pub type MessageBits = BitArray<[u8; HASH_LENGTH + 1], Msb0>;

/// Unpacks a digest into its bits.
pub fn digest_to_bits(digest: &HashDigest) -> DigestBits {
    BitArray::new(*digest)
}

/// Counts the zero bits of a digest, modulo 256.
///
/// A digest made only of zero bits has a true count of 256,
/// which wraps to 0.
pub fn compute_checksum(bits: &BitSlice<u8, Msb0>) -> u8 {
    (bits.count_zeros() % 256) as u8
}

/// Unpacks a checksum byte into its bits.
pub fn checksum_to_bits(checksum: u8) -> ChecksumBits {
    BitArray::new([checksum])
}

/// Computes the bits to sign for `message`.
pub fn message_bits(message: &[u8]) -> MessageBits {
    let digest = hash(message);
    let checksum = compute_checksum(&digest_to_bits(&digest));

    let mut bits = MessageBits::new([0u8; HASH_LENGTH + 1]);
    bits[..DIGEST_BITS].copy_from_bitslice(&digest_to_bits(&digest));
    bits[DIGEST_BITS..].copy_from_bitslice(&checksum_to_bits(checksum));

    bits
}
