// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt::{Display, Formatter, Result};

use super::SEED_LENGTH;

/// Custom error type during key, signature and encoding operations
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignatureError {
    /// Invalid signature
    InvalidSignature,
    /// The provided seed is shorter than `SEED_LENGTH` bytes.
    /// Contains the decoded length of the rejected seed.
    SeedTooShort(usize),
    /// A key, signature or seed could not be decoded, or does
    /// not have the expected shape.
    InvalidFormat(&'static str),
}

impl Display for SignatureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidSignature => {
                write!(f, "The signature is invalid or was incorrectly computed.",)
            }
            Self::SeedTooShort(length) => write!(
                f,
                "The seed is {} bytes long, at least {} bytes are required.",
                length, SEED_LENGTH
            ),
            Self::InvalidFormat(reason) => write!(f, "Invalid format: {}.", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SignatureError {}
