mod base;
mod classical_bloom_filter;
mod partitioned_bloom_filter;

pub use self::base::{estimate_false_positive_rate, Filter, Sizing};
pub use self::classical_bloom_filter::ClassicalBloomFilter;
pub use self::partitioned_bloom_filter::PartitionedBloomFilter;
