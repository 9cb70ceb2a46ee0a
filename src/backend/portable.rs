//! Portable mixing and finalization.
//!
//! A pure-Rust backend that runs everywhere. The 256-byte running state is
//! treated as 32 little-endian 64-bit lanes; each block fold performs one
//! multiply-rotate round per lane followed by a cross-lane diffusion pass, so
//! a block that differs in a single word still perturbs every lane within a
//! few blocks. Finalization merges the lanes, the partial block, the trailing
//! window, the stream length, and the seed into two avalanched 64-bit halves.
//!
//! The round and avalanche constants are the 64-bit primes from the xxHash
//! family, which have well-studied diffusion behavior. No compatibility with
//! the published Meow reference digests is claimed; the format is this
//! crate's own and is stable across platforms and backends.

use super::{Backend, STATE_SIZE};
use crate::{BLOCK_SIZE, SIZE};

const PRIME64_1: u64 = 0x9E37_79B1_85EB_CA87;
const PRIME64_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
const PRIME64_3: u64 = 0x1656_67B1_9E37_79F9;
const PRIME64_4: u64 = 0x85EB_CA77_C2B2_AE63;
const PRIME64_5: u64 = 0x27D4_EB2F_1656_67C5;

/// Number of 64-bit lanes in the running state.
const LANES: usize = STATE_SIZE / 8;

/// The portable backend. Stateless; all work happens on the arguments.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Portable;

impl Backend for Portable {
    fn name(&self) -> &'static str {
        "portable"
    }

    fn mix_block(&self, state: &mut [u8; STATE_SIZE], block: &[u8; BLOCK_SIZE]) {
        let mut lanes = load_lanes(state);

        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = round(*lane, read_u64(&block[i * 8..i * 8 + 8]));
        }

        // Cross-lane diffusion: carry each lane into the next.
        let mut carry = lanes[LANES - 1];
        for lane in lanes.iter_mut() {
            *lane = lane.wrapping_add(carry.rotate_left(13));
            carry = *lane;
        }

        store_lanes(&lanes, state);
    }

    fn finalize(
        &self,
        seed: u64,
        state: &[u8; STATE_SIZE],
        pending: &[u8],
        trailing: &[u8],
        length: u64,
        dst: &mut [u8; SIZE],
    ) {
        let lanes = load_lanes(state);

        let mut h1 = seed.wrapping_add(PRIME64_5).wrapping_add(length);
        let mut h2 = (seed.rotate_left(23) ^ PRIME64_4).wrapping_add(length.wrapping_mul(PRIME64_2));

        // Fold the running state, alternating lanes between the halves.
        for pair in lanes.chunks_exact(2) {
            h1 = merge(h1, pair[0]);
            h2 = merge(h2, pair[1]);
        }

        // Absorb the partial block, eight bytes at a time, then the
        // stragglers byte by byte.
        let mut words = pending.chunks_exact(8);
        let mut into_h2 = false;
        for word in &mut words {
            let folded = round(0, read_u64(word));
            if into_h2 {
                h2 = fold_word(h2, folded);
            } else {
                h1 = fold_word(h1, folded);
            }
            into_h2 = !into_h2;
        }
        for &byte in words.remainder() {
            h1 = fold_byte(h1, byte);
        }

        // The trailing window enters with its own length, so five written
        // bytes never collide with five bytes plus zero padding.
        h2 ^= (trailing.len() as u64).wrapping_mul(PRIME64_3);
        for &byte in trailing {
            h2 = fold_byte(h2, byte);
        }

        // Both halves must depend on everything.
        let lo = avalanche(h1 ^ h2.rotate_left(29));
        let hi = avalanche(h2 ^ lo);

        dst[..8].copy_from_slice(&lo.to_le_bytes());
        dst[8..].copy_from_slice(&hi.to_le_bytes());
    }
}

/// One multiply-rotate round (xxHash64 accumulator round).
#[inline]
fn round(acc: u64, input: u64) -> u64 {
    acc.wrapping_add(input.wrapping_mul(PRIME64_2))
        .rotate_left(31)
        .wrapping_mul(PRIME64_1)
}

/// Merges an already-rounded lane into a half (xxHash64 merge round).
#[inline]
fn merge(acc: u64, lane: u64) -> u64 {
    (acc ^ round(0, lane))
        .wrapping_mul(PRIME64_1)
        .wrapping_add(PRIME64_4)
}

#[inline]
fn fold_word(acc: u64, folded: u64) -> u64 {
    (acc ^ folded)
        .rotate_left(27)
        .wrapping_mul(PRIME64_1)
        .wrapping_add(PRIME64_4)
}

#[inline]
fn fold_byte(acc: u64, byte: u8) -> u64 {
    (acc ^ u64::from(byte).wrapping_mul(PRIME64_5))
        .rotate_left(11)
        .wrapping_mul(PRIME64_1)
}

/// Final bit scrambler (xxHash64 avalanche).
#[inline]
fn avalanche(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(PRIME64_2);
    h ^= h >> 29;
    h = h.wrapping_mul(PRIME64_3);
    h ^= h >> 32;
    h
}

#[inline]
fn read_u64(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(bytes);
    u64::from_le_bytes(word)
}

fn load_lanes(bytes: &[u8; STATE_SIZE]) -> [u64; LANES] {
    let mut lanes = [0u64; LANES];
    for (lane, chunk) in lanes.iter_mut().zip(bytes.chunks_exact(8)) {
        *lane = read_u64(chunk);
    }
    lanes
}

fn store_lanes(lanes: &[u64; LANES], bytes: &mut [u8; STATE_SIZE]) {
    for (lane, chunk) in lanes.iter().zip(bytes.chunks_exact_mut(8)) {
        chunk.copy_from_slice(&lane.to_le_bytes());
    }
}
