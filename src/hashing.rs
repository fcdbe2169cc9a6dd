use crate::error::Result;
use xxhash_rust::xxh3::xxh3_64;

/// Two base hashes of a key, combined by double hashing into `k` probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashPair {
    pub h1: u64,
    pub h2: u64,
}

impl HashPair {
    /// Reduces both hashes into `0..width`.
    ///
    /// A second hash of 0 would make every probe `h1 + i * 0` land on the same
    /// bit, so it is bumped to 1.
    pub fn reduce(self, width: u64) -> (u64, u64) {
        let h1 = self.h1 % width;
        let h2 = match self.h2 % width {
            0 => 1,
            h2 => h2,
        };
        (h1, h2)
    }

    /// Probe positions `(h1 + i * h2) mod width` for `i` in `0..count`.
    pub fn probes(self, width: u64, count: u64) -> Probes {
        let (h1, h2) = self.reduce(width);
        Probes {
            position: h1,
            step: h2,
            width,
            remaining: count,
        }
    }
}

/// Iterator over double-hashing probe positions.
///
/// Advances by adding `h2` modulo the width, so the running position never
/// exceeds `2 * width`.
#[derive(Debug, Clone)]
pub struct Probes {
    position: u64,
    step: u64,
    width: u64,
    remaining: u64,
}

impl Iterator for Probes {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.position;
        self.position = (self.position + self.step) % self.width;
        Some(current as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Probes {}

/// Derives the pair of base hashes for a key.
pub trait KeyHasher {
    fn derive(&self, key: &[u8]) -> Result<HashPair>;
}

/// xxh3 for `h1`, crc32 for `h2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleHasher;

impl KeyHasher for DoubleHasher {
    fn derive(&self, key: &[u8]) -> Result<HashPair> {
        Ok(HashPair {
            h1: xxh3_64(key),
            h2: crc32fast::hash(key) as u64,
        })
    }
}
