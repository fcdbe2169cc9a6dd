use bit_vec::BitVec;
use tracing::{debug, trace};

use crate::bloom_filters::base::{estimate_false_positive_rate, Filter, Sizing};
use crate::error::Result;
use crate::hashing::{DoubleHasher, KeyHasher};

/// Bloom filter with one shared bit array; all `k` probes range over the
/// whole of it.
pub struct ClassicalBloomFilter<H = DoubleHasher> {
    /// number of bits in a Bloom filter
    m: u64,
    /// number of hash functions
    k: u64,
    count: u64,

    storage: BitVec,
    hasher: H,
}

impl<H: KeyHasher> ClassicalBloomFilter<H> {
    pub fn with_hasher(n: u64, f: f64, hasher: H) -> Result<Self> {
        let Sizing { m, k, .. } = Sizing::new(n, f)?;
        debug!(n, f, m, k, "creating classical bloom filter");
        Ok(Self {
            m,
            k,
            count: 0,
            storage: BitVec::from_elem(m as usize, false),
            hasher,
        })
    }
}

impl<H: KeyHasher + Default> Filter for ClassicalBloomFilter<H> {
    fn new(n: u64, f: f64) -> Result<Self> {
        Self::with_hasher(n, f, H::default())
    }

    fn insert(&mut self, value: &[u8]) -> Result<()> {
        let pair = self.hasher.derive(value)?;
        for idx in pair.probes(self.m, self.k) {
            self.storage.set(idx, true);
        }
        self.count += 1;
        trace!(count = self.count, "inserted value");
        Ok(())
    }

    fn lookup(&self, value: &[u8]) -> Result<bool> {
        let pair = self.hasher.derive(value)?;
        for idx in pair.probes(self.m, self.k) {
            if self.storage.get(idx) == Some(false) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn false_positive_rate(&self) -> f64 {
        estimate_false_positive_rate(self.k, self.m, self.count)
    }

    fn get_size(&self) -> usize {
        self.storage.len()
    }
}
