use std::fmt;

use bit_vec::BitVec;
use tracing::{debug, trace, warn};

use crate::bloom_filters::base::{estimate_false_positive_rate, Filter, Sizing};
use crate::error::Result;
use crate::hashing::{DoubleHasher, KeyHasher};

/// Bloom filter whose `m` bits are split into `k` disjoint slots of `w` bits.
/// Every insert and lookup probes exactly one bit per slot.
pub struct PartitionedBloomFilter<H = DoubleHasher> {
    /// number of bits in a Bloom filter
    m: u64,
    /// number of hash functions
    k: u64,
    /// number of elements the filter was sized for
    capacity: u64,
    count: u64,

    partition_size: u64,
    partitions: Vec<BitVec>,
    hasher: H,
}

impl<H: KeyHasher> PartitionedBloomFilter<H> {
    pub fn with_hasher(n: u64, f: f64, hasher: H) -> Result<Self> {
        let Sizing { m, k, w } = Sizing::new(n, f)?;
        debug!(n, f, m, k, w, "creating partitioned bloom filter");
        Ok(Self {
            m,
            k,
            capacity: n,
            count: 0,
            partition_size: w,
            partitions: vec![BitVec::from_elem(w as usize, false); k as usize],
            hasher,
        })
    }

    pub fn hash_count(&self) -> u64 {
        self.k
    }

    pub fn partition_size(&self) -> u64 {
        self.partition_size
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    fn probes(&self, value: &[u8]) -> Result<impl Iterator<Item = (usize, usize)>> {
        let pair = self.hasher.derive(value)?;
        Ok(pair.probes(self.partition_size, self.k).enumerate())
    }
}

impl<H: KeyHasher + Default> Filter for PartitionedBloomFilter<H> {
    fn new(n: u64, f: f64) -> Result<Self> {
        Self::with_hasher(n, f, H::default())
    }

    fn insert(&mut self, value: &[u8]) -> Result<()> {
        let probes = self.probes(value)?;
        for (slot, idx) in probes {
            self.partitions[slot].set(idx, true);
        }
        self.count += 1;
        trace!(count = self.count, "inserted value");
        // count is at least 1 here, and capacity may be u64::MAX
        if self.count - 1 == self.capacity {
            warn!(
                capacity = self.capacity,
                "bloom filter is over capacity, false positive rate will exceed its target"
            );
        }
        Ok(())
    }

    fn lookup(&self, value: &[u8]) -> Result<bool> {
        for (slot, idx) in self.probes(value)? {
            if self.partitions[slot].get(idx) == Some(false) {
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
        self.m as usize
    }
}

/// Dumps every slot as a run of `0`/`1`, slots separated by a space.
impl<H> fmt::Display for PartitionedBloomFilter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, partition) in self.partitions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            for bit in partition.iter() {
                f.write_str(if bit { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}
