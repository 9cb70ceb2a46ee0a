//! The Checksum type and one-shot hashing entry points.

use std::fmt;
use std::hash::{Hash as StdHash, Hasher as StdHasher};

use crate::SIZE;
use crate::hasher::Hasher;

/// Returns the full 128-bit checksum of `data` under `seed`.
///
/// Equivalent to constructing a [`Hasher`], writing `data` once, and taking
/// the digest.
///
/// # Example
///
/// ```
/// let sum = meowrs::checksum(0, b"content");
/// assert_eq!(sum.as_bytes().len(), 16);
/// ```
pub fn checksum(seed: u64, data: &[u8]) -> Checksum {
    let mut hasher = Hasher::new(seed);
    hasher.write(data);
    hasher.checksum()
}

/// Returns the 64-bit checksum of `data`: the first 8 digest bytes,
/// interpreted little-endian.
pub fn checksum64(seed: u64, data: &[u8]) -> u64 {
    checksum(seed, data).to_u64()
}

/// Returns the 32-bit checksum of `data`: the first 4 digest bytes,
/// interpreted little-endian.
pub fn checksum32(seed: u64, data: &[u8]) -> u32 {
    checksum(seed, data).to_u32()
}

/// A full-width checksum value.
///
/// Thin wrapper around the 16-byte digest. The narrower 64- and 32-bit forms
/// are byte-prefixes of this value (little-endian), not independent hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checksum([u8; SIZE]);

impl Checksum {
    /// The size of the checksum in bytes.
    pub const SIZE: usize = SIZE;

    /// Creates a checksum from a byte array.
    pub const fn new(bytes: [u8; SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates a checksum from a slice.
    ///
    /// Returns `None` if the slice is not exactly 16 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != SIZE {
            return None;
        }
        let mut bytes = [0u8; SIZE];
        bytes.copy_from_slice(slice);
        Some(Self(bytes))
    }

    /// Returns the checksum as a byte array.
    pub fn as_bytes(&self) -> &[u8; SIZE] {
        &self.0
    }

    /// Returns the first 8 bytes as a little-endian `u64`.
    pub fn to_u64(&self) -> u64 {
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.0[..8]);
        u64::from_le_bytes(word)
    }

    /// Returns the first 4 bytes as a little-endian `u32`.
    pub fn to_u32(&self) -> u32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.0[..4]);
        u32::from_le_bytes(word)
    }

    /// Returns the checksum as a hex string.
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut result = String::with_capacity(SIZE * 2);
        for byte in &self.0 {
            result.push(HEX[(byte >> 4) as usize] as char);
            result.push(HEX[(byte & 0xf) as usize] as char);
        }
        result
    }

    /// Creates a checksum from a hex string.
    ///
    /// Returns `None` if the string is not valid hex or not exactly 32
    /// characters.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.len() != SIZE * 2 {
            return None;
        }
        let mut bytes = [0u8; SIZE];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let byte_str = hex_str.get(i * 2..i * 2 + 2)?;
            *byte = u8::from_str_radix(byte_str, 16).ok()?;
        }
        Some(Self(bytes))
    }
}

impl AsRef<[u8]> for Checksum {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; SIZE]> for Checksum {
    fn from(bytes: [u8; SIZE]) -> Self {
        Self(bytes)
    }
}

impl StdHash for Checksum {
    fn hash<H: StdHasher>(&self, state: &mut H) {
        state.write(&self.0);
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let bytes = [7u8; SIZE];
        let sum = Checksum::new(bytes);
        assert_eq!(sum.as_bytes(), &bytes);
    }

    #[test]
    fn test_from_slice() {
        let bytes = vec![3u8; SIZE];
        let sum = Checksum::from_slice(&bytes).unwrap();
        assert_eq!(sum.as_bytes().as_slice(), bytes.as_slice());

        // Wrong size
        assert!(Checksum::from_slice(&[0u8; 15]).is_none());
        assert!(Checksum::from_slice(&[0u8; 17]).is_none());
    }

    #[test]
    fn test_integer_prefixes_are_little_endian() {
        let mut bytes = [0u8; SIZE];
        bytes[..8].copy_from_slice(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);
        let sum = Checksum::new(bytes);

        assert_eq!(sum.to_u64(), 0xEFCD_AB89_6745_2301);
        assert_eq!(sum.to_u32(), 0x6745_2301);
    }

    #[test]
    fn test_hex_round_trip() {
        let sum = checksum(9, b"round trip");
        let hex = sum.to_hex();
        assert_eq!(hex.len(), 32);
        assert_eq!(Checksum::from_hex(&hex), Some(sum));

        assert!(Checksum::from_hex("xyz").is_none());
        assert!(Checksum::from_hex(&"g".repeat(32)).is_none());
    }

    #[test]
    fn test_display_matches_to_hex() {
        let sum = checksum(0, b"display");
        assert_eq!(sum.to_string(), sum.to_hex());
    }

    #[test]
    fn test_oneshot_matches_streaming() {
        let data = b"one shot versus streaming";
        let mut hasher = Hasher::new(4);
        hasher.write(data);

        assert_eq!(checksum(4, data), hasher.checksum());
        assert_eq!(checksum64(4, data), hasher.sum64());
        assert_eq!(checksum32(4, data), hasher.sum32());
    }

    #[test]
    fn test_narrow_checksums_are_prefixes() {
        let data = b"prefix law";
        let full = checksum(8, data);

        assert_eq!(checksum64(8, data), full.to_u64());
        assert_eq!(checksum32(8, data), full.to_u32());
        assert_eq!(checksum32(8, data) as u64, full.to_u64() & 0xFFFF_FFFF);
    }
}
