//! Mixing and finalization primitives.
//!
//! A backend supplies the two transforms the streaming accumulator is built
//! from:
//!
//! - [`Backend::mix_block`] - folds one 256-byte block into the running state
//! - [`Backend::finalize`] - reduces the state plus edge data into a digest
//!
//! Both must be pure functions of their inputs. The backend is resolved once
//! per process via [`detect`] and injected into each hasher at construction,
//! so a given stream is never mixed by two different implementations.

mod portable;

use portable::Portable;

use std::sync::OnceLock;

use crate::{BLOCK_SIZE, SIZE};

/// Size of the running mix state in bytes.
pub(crate) const STATE_SIZE: usize = 256;

/// Size of the trailing window in bytes.
pub(crate) const TRAILING_SIZE: usize = 16;

/// The two primitives a hash backend must supply.
///
/// Implementations must be deterministic and stateless: the same arguments
/// always produce the same result, and neither primitive may observe anything
/// beyond its parameters. All backends compute the same digest for the same
/// inputs; a backend is a strategy, not a format.
pub(crate) trait Backend: Sync {
    /// Human-readable backend name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Folds one full block into the running state, in place.
    fn mix_block(&self, state: &mut [u8; STATE_SIZE], block: &[u8; BLOCK_SIZE]);

    /// Reduces the accumulated state plus edge data into a 16-byte digest.
    ///
    /// `pending` is the partial block not yet folded (always shorter than a
    /// block), `trailing` the last `min(16, length)` bytes ever written, and
    /// `length` the total byte count. `state` is read-only: finalization
    /// works on its own copies so the caller can keep writing afterwards.
    fn finalize(
        &self,
        seed: u64,
        state: &[u8; STATE_SIZE],
        pending: &[u8],
        trailing: &[u8],
        length: u64,
        dst: &mut [u8; SIZE],
    );
}

/// Returns the backend for this process, probing capabilities on first use.
///
/// The choice is made exactly once and never changes afterwards; hashers
/// capture the reference at construction time.
pub(crate) fn detect() -> &'static dyn Backend {
    static BACKEND: OnceLock<&'static dyn Backend> = OnceLock::new();
    *BACKEND.get_or_init(probe)
}

/// Capability probe. Currently always selects the portable implementation;
/// accelerated backends plug in here without touching the accumulator.
fn probe() -> &'static dyn Backend {
    static PORTABLE: Portable = Portable;
    &PORTABLE
}
