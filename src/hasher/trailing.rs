//! Trailing window tracking.

use crate::backend::TRAILING_SIZE;

/// Sliding window over the last bytes ever written to a hasher.
///
/// Finalization consumes the last `min(16, length)` bytes of the whole
/// stream, regardless of how the writes lined up with block boundaries. The
/// window is carried across `write` calls; it cannot be reconstructed from
/// the pending block alone, because a large write may have bypassed the block
/// buffer entirely.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TrailingWindow {
    buf: [u8; TRAILING_SIZE],
    len: usize,
}

impl TrailingWindow {
    /// Creates an empty window.
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0; TRAILING_SIZE],
            len: 0,
        }
    }

    /// Slides the window over `bytes`, keeping the final 16 bytes seen.
    ///
    /// Oldest bytes drop off first; the window never holds history farther
    /// back than 16 bytes.
    pub(crate) fn push(&mut self, bytes: &[u8]) {
        if bytes.len() >= TRAILING_SIZE {
            self.buf.copy_from_slice(&bytes[bytes.len() - TRAILING_SIZE..]);
            self.len = TRAILING_SIZE;
            return;
        }

        let keep = (TRAILING_SIZE - bytes.len()).min(self.len);
        self.buf.copy_within(self.len - keep..self.len, 0);
        self.buf[keep..keep + bytes.len()].copy_from_slice(bytes);
        self.len = keep + bytes.len();
    }

    /// The window contents, oldest byte first.
    ///
    /// Shorter than 16 bytes when fewer than 16 bytes were ever written;
    /// never zero-padded.
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Empties the window.
    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_write_keeps_exact_bytes() {
        let mut window = TrailingWindow::new();
        window.push(b"hello");

        assert_eq!(window.bytes(), b"hello", "No padding for short streams");
    }

    #[test]
    fn test_exact_window_size() {
        let mut window = TrailingWindow::new();
        window.push(b"0123456789abcdef");

        assert_eq!(window.bytes(), b"0123456789abcdef");
    }

    #[test]
    fn test_long_write_replaces_wholesale() {
        let mut window = TrailingWindow::new();
        window.push(b"this is much longer than sixteen bytes");

        assert_eq!(window.bytes(), b"an sixteen bytes");
    }

    #[test]
    fn test_accumulates_across_pushes() {
        let mut window = TrailingWindow::new();
        window.push(b"abcdefgh");
        window.push(b"ijklmnopqrst");

        // 20 bytes total, window holds the last 16.
        assert_eq!(window.bytes(), b"efghijklmnopqrst");
    }

    #[test]
    fn test_small_push_after_large() {
        let mut window = TrailingWindow::new();
        window.push(b"0123456789abcdefXXXX");
        window.push(b"yz");

        assert_eq!(window.bytes(), b"6789abcdefXXXXyz");
    }

    #[test]
    fn test_empty_push_is_noop() {
        let mut window = TrailingWindow::new();
        window.push(b"abc");
        window.push(b"");

        assert_eq!(window.bytes(), b"abc");
    }

    #[test]
    fn test_many_single_byte_pushes() {
        let mut window = TrailingWindow::new();
        for byte in 0u8..40 {
            window.push(&[byte]);
        }

        let expected: Vec<u8> = (24u8..40).collect();
        assert_eq!(window.bytes(), expected.as_slice());
    }

    #[test]
    fn test_clear() {
        let mut window = TrailingWindow::new();
        window.push(b"some bytes");
        window.clear();

        assert!(window.bytes().is_empty(), "Clear must empty the window");

        window.push(b"ab");
        assert_eq!(window.bytes(), b"ab", "Window must be reusable");
    }
}
