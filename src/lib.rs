//! Bloom filters sized from an estimated element count and a target false
//! positive rate.
//!
//! [`PartitionedBloomFilter`] splits its bits into `k` equal slots and probes
//! one bit per slot, deriving all `k` positions from two base hashes
//! (xxh3 and crc32) by double hashing. [`ClassicalBloomFilter`] probes a single
//! shared bit array instead. Both implement [`Filter`].
//!
//! ```
//! use bloomd::{Filter, PartitionedBloomFilter};
//!
//! let mut bf: PartitionedBloomFilter = PartitionedBloomFilter::new(1000, 0.01)?;
//! bf.insert(b"steve")?;
//! assert!(bf.lookup(b"steve")?);
//! assert_eq!(bf.count(), 1);
//! assert!(bf.false_positive_rate() < 0.01);
//! # Ok::<(), bloomd::BloomError>(())
//! ```
//!
//! Filters are not synchronized; wrap one in [`SharedFilter`] to share it
//! between threads.

pub mod bloom_filters;
mod error;
pub mod hashing;
mod sync;

pub use bloom_filters::{ClassicalBloomFilter, Filter, PartitionedBloomFilter};
pub use error::{BloomError, Result};
pub use hashing::{DoubleHasher, HashPair, KeyHasher};
pub use sync::SharedFilter;
