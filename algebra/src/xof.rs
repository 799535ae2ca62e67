//! Deterministic byte streams derived from a seed.
//!
//! [xof] seeds BLAKE3 in key-derivation mode and exposes its extendable output. The
//! stream is a pure function of the seed: reading `n` bytes and then `m` more yields
//! exactly the first `n + m` bytes of the stream.

use blake3::BLOCK_LEN;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Context string that separates this stream from other uses of BLAKE3 on the same seed.
const CONTEXT: &str = "commonware-algebra xof v1";

/// Returns a stream of pseudorandom bytes determined entirely by `seed`.
pub fn xof(seed: &[u8]) -> Xof {
    let mut hasher = blake3::Hasher::new_derive_key(CONTEXT);
    hasher.update(seed);
    Xof::new(hasher.finalize_xof())
}

/// An extendable-output stream returned by [xof].
///
/// Output is pulled from BLAKE3 one block at a time and buffered, so callers reading in
/// small pieces don't pay for a block per read.
pub struct Xof {
    inner: blake3::OutputReader,
    buf: [u8; BLOCK_LEN],
    start: usize,
}

impl Xof {
    fn new(inner: blake3::OutputReader) -> Self {
        Self {
            inner,
            buf: [0u8; BLOCK_LEN],
            start: BLOCK_LEN,
        }
    }

    /// Fills `dest` with the next `dest.len()` bytes of the stream.
    pub fn fill(&mut self, dest: &mut [u8]) {
        let dest_len = dest.len();
        let remaining = &self.buf[self.start..];
        if remaining.len() >= dest_len {
            dest.copy_from_slice(&remaining[..dest_len]);
            self.start += dest_len;
            return;
        }

        let (start, mut dest) = dest.split_at_mut(remaining.len());
        start.copy_from_slice(remaining);
        self.start = BLOCK_LEN;

        while dest.len() >= BLOCK_LEN {
            let (block, rest) = dest.split_at_mut(BLOCK_LEN);
            self.inner.fill(block);
            dest = rest;
        }

        let dest_len = dest.len();
        if dest_len > 0 {
            self.inner.fill(&mut self.buf[..]);
            dest.copy_from_slice(&self.buf[..dest_len]);
            self.start = dest_len;
        }
    }

    /// Returns the next `n` bytes of the stream.
    pub fn read(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.fill(&mut out);
        out
    }
}

impl Drop for Xof {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

impl RngCore for Xof {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill(dest);
        Ok(())
    }
}

impl CryptoRng for Xof {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let a = xof(b"test-seed").read(16);
        let b = xof(b"test-seed").read(16);
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn test_seed_matters() {
        assert_ne!(xof(b"A").read(32), xof(b"B").read(32));
    }

    #[test]
    fn test_empty_seed() {
        assert_eq!(xof(b"").read(32), xof(b"").read(32));
        assert_ne!(xof(b"").read(32), xof(b"\x00").read(32));
    }

    #[test]
    fn test_chunking_doesnt_matter() {
        let total = 3 * BLOCK_LEN + 7;
        let whole = xof(b"test").read(total);
        for i in 0..=total {
            let mut stream = xof(b"test");
            let mut split = stream.read(i);
            split.extend(stream.read(total - i));
            assert_eq!(whole, split, "split at {i}");
        }
    }

    #[test]
    fn test_many_small_reads() {
        let whole = xof(b"small").read(200);
        let mut stream = xof(b"small");
        let mut pieces = Vec::new();
        for len in [0, 1, 2, 3, 5, 8, 13, 21, 34, 55, 58] {
            pieces.extend(stream.read(len));
        }
        assert_eq!(whole, pieces);
    }

    #[test]
    fn test_rng_matches_read() {
        let mut rng = xof(b"rng");
        let first = rng.next_u32();
        let second = rng.next_u64();
        let mut rest = [0u8; 20];
        rng.fill_bytes(&mut rest);

        let bytes = xof(b"rng").read(32);
        assert_eq!(first.to_le_bytes(), bytes[..4]);
        assert_eq!(second.to_le_bytes(), bytes[4..12]);
        assert_eq!(rest, bytes[12..]);
    }

    #[test]
    fn test_not_plain_blake3() {
        let plain = {
            let mut hasher = blake3::Hasher::new();
            hasher.update(b"seed");
            let mut out = [0u8; 32];
            hasher.finalize_xof().fill(&mut out);
            out
        };
        assert_ne!(xof(b"seed").read(32), plain);
    }
}
