// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This crate provides an implementation of Lamport one-time
//! signatures over SHA-256, with a checksum preventing forgeries
//! from the entries revealed by a signature.

//! # Usage
//!
//! To generate a new random key pair, consisting of 264 secret
//! entries (private key) and their hashes (public key), do as the following:
//!
//! ```rust
//! use lamport_sig::KeyPair;
//! use rand_core::OsRng;
//!
//! let mut rng = OsRng;
//! let new_key_pair = KeyPair::new(&mut rng);
//! ```
//!
//! Key pairs can also be derived deterministically from a `Seed`
//! and an index. Each index must only be used once:
//!
//! ```rust
//! use lamport_sig::{KeyPair, Seed};
//! use rand_core::OsRng;
//!
//! let seed = Seed::generate(OsRng);
//! let key_pair = KeyPair::from_seed(&seed, 0);
//!
//! assert_eq!(key_pair, seed.key_pair(0));
//! ```
//!
//! To sign a `message` with a given private key `skey`, either call the
//! `sign` method from the `Signature` struct or from the private key
//! directly. A private key must never sign more than one message.
//!
//! ```rust
//! use lamport_sig::{PrivateKey, PublicKey, Signature};
//! use rand_core::OsRng;
//!
//! let message = b"hello world";
//! let skey = PrivateKey::new(OsRng);
//! let pkey = PublicKey::from_private_key(&skey);
//!
//! let signature = Signature::sign(message, &skey);
//!
//! assert!(signature.verify(message, &pkey).is_ok());
//! assert!(pkey.verify_signature(&signature, b"different message").is_err());
//! ```
//!
//! The `Lamport` struct works on encoded keys and signatures instead,
//! following the formats chosen in its `Config`:
//!
//! ```rust
//! use lamport_sig::{Config, Format, Lamport, TextEncoding};
//! use rand_core::OsRng;
//!
//! let lamport = Lamport::new(
//!     Config::default()
//!         .with_key_format(Format::TextEncodedBinary(TextEncoding::Hex))
//!         .with_signature_format(Format::SerializedText),
//! );
//!
//! let (private_key, public_key) = lamport.generate_keys(OsRng).unwrap();
//! let signature = lamport.sign(b"hello world", &private_key).unwrap();
//!
//! assert!(lamport.verify(b"hello world", &signature, &public_key));
//! assert!(!lamport.verify(b"different message", &signature, &public_key));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![no_std]

extern crate alloc;

#[cfg(all(feature = "std", not(test)))]
extern crate std;

#[cfg(test)]
#[macro_use]
extern crate std;

mod constants;
pub use constants::*;

mod error;
pub use error::SignatureError;

/// The hash module.
mod hash;
pub use hash::{hash, keyed_hash, HashDigest};

/// The message bits module.
pub mod bits;

/// The seed module.
mod seed;

/// The private key module.
mod private;

/// The public key module.
mod public;

/// The key pair module.
mod keypair;

/// The Lamport signature module.
mod signature;

mod encoding;

mod format;

mod config;

mod lamport;

pub use seed::Seed;

pub use private::PrivateKey;
pub use public::PublicKey;

pub use keypair::KeyPair;

pub use signature::Signature;

pub use encoding::TextEncoding;
pub use format::{Encoded, EntrySequence, Format};

pub use config::Config;
pub use lamport::Lamport;
