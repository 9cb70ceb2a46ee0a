//! Core hashing engine - Hasher with streaming API.
//!
//! This module implements the streaming accumulator. It provides a pure
//! streaming interface:
//!
//! - [`Hasher`] - stateful engine that folds streaming bytes into a digest
//! - `write()` - feed data in any size (1 byte, 8KB, 1MB, etc.)
//! - `sum()` / `sum_into()` - take a digest without disturbing the stream

use std::fmt;
use std::io;

use crate::backend::{self, Backend, STATE_SIZE};
use crate::checksum::Checksum;
use crate::{BLOCK_SIZE, SIZE};

use super::trailing::TrailingWindow;

/// A hasher that folds streaming byte data into a fixed-width digest.
///
/// `Hasher` accepts bytes via `write()` in any chunking and maintains the
/// running state across calls. Full 256-byte blocks are folded as they
/// complete; leftover bytes wait in an owned pending buffer, and the last 16
/// bytes ever written are tracked for finalization.
///
/// # Determinism
///
/// Identical byte streams produce identical digests, regardless of:
/// - how many bytes are written at once (1 byte vs 1MB)
/// - the number of `write()` calls
/// - where the writes fall relative to block boundaries
///
/// # Taking a digest
///
/// Finalization is read-only: `sum()` and friends compute the digest from the
/// live state without mutating it, so the stream can continue afterwards, and
/// repeated calls with no intervening write return identical bytes.
///
/// # Concurrency
///
/// A `Hasher` is plain mutable state with no internal locking. Use one hasher
/// per concurrent stream, or serialize access externally.
///
/// # Example
///
/// ```
/// use meowrs::Hasher;
///
/// let mut hasher = Hasher::new(7);
/// hasher.write(b"first part");
/// hasher.write(b" second part");
///
/// let digest = hasher.sum(Vec::new());
/// assert_eq!(digest.len(), hasher.size());
/// ```
#[derive(Clone)]
pub struct Hasher {
    backend: &'static dyn Backend,
    seed: u64,
    state: [u8; STATE_SIZE],
    block: [u8; BLOCK_SIZE],
    filled: usize,
    trailing: TrailingWindow,
    length: u64,
    size: usize,
}

impl Hasher {
    /// Creates a full-width (128-bit) hasher with the given seed.
    ///
    /// The seed randomizes the digest without being part of the hashed
    /// content. It is fixed for the lifetime of the hasher and survives
    /// [`reset`](Self::reset).
    pub fn new(seed: u64) -> Self {
        Self::with_size(seed, SIZE)
    }

    /// Creates a 64-bit hasher with the given seed.
    pub fn new64(seed: u64) -> Self {
        Self::with_size(seed, 8)
    }

    /// Creates a 32-bit hasher with the given seed.
    pub fn new32(seed: u64) -> Self {
        Self::with_size(seed, 4)
    }

    fn with_size(seed: u64, size: usize) -> Self {
        Self::with_backend(seed, size, backend::detect())
    }

    /// Constructor with an explicit backend, for tests that need to observe
    /// the primitive call pattern. The backend never changes afterwards.
    pub(crate) fn with_backend(seed: u64, size: usize, backend: &'static dyn Backend) -> Self {
        Self {
            backend,
            seed,
            state: [0; STATE_SIZE],
            block: [0; BLOCK_SIZE],
            filled: 0,
            trailing: TrailingWindow::new(),
            length: 0,
            size,
        }
    }

    /// Adds more data to the running hash. Never fails.
    ///
    /// Accepts any length, including zero. After writes totaling `L` bytes,
    /// the state reflects exactly `L / 256` block folds in arrival order and
    /// the pending buffer holds the final `L % 256` bytes.
    pub fn write(&mut self, mut bytes: &[u8]) {
        self.length += bytes.len() as u64;
        self.trailing.push(bytes);

        // Top up a partially filled block first.
        if self.filled > 0 {
            let take = (BLOCK_SIZE - self.filled).min(bytes.len());
            self.block[self.filled..self.filled + take].copy_from_slice(&bytes[..take]);
            self.filled += take;
            if self.filled < BLOCK_SIZE {
                // Input exhausted inside the partial block.
                return;
            }
            self.backend.mix_block(&mut self.state, &self.block);
            self.filled = 0;
            bytes = &bytes[take..];
        }

        // Fold whole blocks in arrival order. Input is staged through the
        // owned block buffer so the mix never reads caller memory.
        let mut chunks = bytes.chunks_exact(BLOCK_SIZE);
        for chunk in &mut chunks {
            self.block.copy_from_slice(chunk);
            self.backend.mix_block(&mut self.state, &self.block);
        }

        // Keep any remaining data for the next write.
        let rest = chunks.remainder();
        if !rest.is_empty() {
            self.block[..rest.len()].copy_from_slice(rest);
            self.filled = rest.len();
        }
    }

    /// Resets the hasher to its initial state for a new stream.
    ///
    /// Clears the running state, the pending block, the trailing window, and
    /// the length counter. The seed and digest width survive.
    pub fn reset(&mut self) {
        self.state = [0; STATE_SIZE];
        self.filled = 0;
        self.trailing.clear();
        self.length = 0;
    }

    /// Returns the number of bytes [`sum`](Self::sum) will append.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the hash's underlying block size.
    pub fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Returns the seed this hasher was constructed with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the total number of bytes written since the last reset.
    pub fn total_len(&self) -> u64 {
        self.length
    }

    /// Returns the number of pending bytes not yet folded into the state.
    ///
    /// Always `total_len() % 256`: a block is folded the moment it completes.
    pub fn pending_len(&self) -> usize {
        self.filled
    }

    /// Appends the current digest to `prefix` and returns the result.
    ///
    /// Appends [`size`](Self::size) bytes. Does not change the underlying
    /// hash state: writing may continue afterwards, and calling `sum` again
    /// without an intervening write yields the same bytes.
    pub fn sum(&self, mut prefix: Vec<u8>) -> Vec<u8> {
        let mut digest = [0u8; SIZE];
        self.finalize_into(&mut digest);
        prefix.extend_from_slice(&digest[..self.size]);
        prefix
    }

    /// Copies the current full-width digest into `dst` without allocating.
    ///
    /// Always writes the full 16 bytes, regardless of the configured width.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is not exactly 16 bytes long. A wrong-sized
    /// destination is a caller bug, not a runtime data error.
    pub fn sum_into(&self, dst: &mut [u8]) {
        assert_eq!(
            dst.len(),
            SIZE,
            "sum_into requires a {SIZE}-byte destination"
        );
        let mut digest = [0u8; SIZE];
        self.finalize_into(&mut digest);
        dst.copy_from_slice(&digest);
    }

    /// Returns the current digest as a [`Checksum`] value.
    pub fn checksum(&self) -> Checksum {
        let mut digest = [0u8; SIZE];
        self.finalize_into(&mut digest);
        Checksum::new(digest)
    }

    /// Returns the first 8 digest bytes as a little-endian `u64`.
    pub fn sum64(&self) -> u64 {
        self.checksum().to_u64()
    }

    /// Returns the first 4 digest bytes as a little-endian `u32`.
    pub fn sum32(&self) -> u32 {
        self.checksum().to_u32()
    }

    /// Finalizes into `dst` from a read-only snapshot of the live fields.
    fn finalize_into(&self, dst: &mut [u8; SIZE]) {
        self.backend.finalize(
            self.seed,
            &self.state,
            &self.block[..self.filled],
            self.trailing.bytes(),
            self.length,
            dst,
        );
    }
}

impl io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Hasher::write(self, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("backend", &self.backend.name())
            .field("seed", &self.seed)
            .field("size", &self.size)
            .field("length", &self.length)
            .field("pending", &self.filled)
            .finish()
    }
}
