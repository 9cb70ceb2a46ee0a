//! meowrs
//!
//! Streaming Meow-style non-cryptographic checksum for Rust.
//!
//! `meowrs` turns an arbitrary-length byte stream into a 128-bit digest (with
//! 64- and 32-bit truncations), optimized for very large inputs. It is
//! designed as a small, composable primitive for:
//!
//! - file-scale hashing
//! - deduplication keys
//! - content fingerprints
//!
//! The crate intentionally:
//! - is NOT cryptographically secure (a checksum, not a MAC)
//! - does NOT manage files or paths
//! - does NOT manage concurrency
//! - does NOT perform I/O
//!
//! It only does one thing: **bytes in → digest out**, and the digest never
//! depends on how the caller split its writes.
//!
//! # One-shot
//!
//! ```
//! let sum = meowrs::checksum(0, b"hello world");
//! assert_eq!(sum, meowrs::checksum(0, b"hello world"));
//! ```
//!
//! # Streaming
//!
//! ```
//! use meowrs::Hasher;
//!
//! let mut hasher = Hasher::new(42);
//! hasher.write(b"hello ");
//! hasher.write(b"world");
//!
//! let expected = meowrs::checksum(42, b"hello world");
//! assert_eq!(hasher.checksum(), expected);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checksum;
mod hasher;

mod backend; // internal mixing/finalization primitives

//
// Public surface (intentionally tiny)
//

pub use checksum::{Checksum, checksum, checksum32, checksum64};
pub use hasher::Hasher;

/// The underlying block size of the hash in bytes.
///
/// `write` accepts any amount of data, but operates most efficiently when
/// writes are a multiple of this size.
pub const BLOCK_SIZE: usize = 256;

/// Size of a full checksum in bytes.
pub const SIZE: usize = 16;
