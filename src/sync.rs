use std::sync::RwLock;

use crate::bloom_filters::Filter;
use crate::error::{BloomError, Result};

/// A filter behind a read-write lock.
///
/// `insert` holds the write lock for all of its bit updates, so a concurrent
/// `lookup` never sees a partially inserted value.
pub struct SharedFilter<F> {
    inner: RwLock<F>,
}

impl<F: Filter> SharedFilter<F> {
    pub fn new(filter: F) -> Self {
        Self {
            inner: RwLock::new(filter),
        }
    }

    pub fn insert(&self, value: &[u8]) -> Result<()> {
        self.inner
            .write()
            .map_err(|_| BloomError::Poisoned)?
            .insert(value)
    }

    pub fn lookup(&self, value: &[u8]) -> Result<bool> {
        self.inner
            .read()
            .map_err(|_| BloomError::Poisoned)?
            .lookup(value)
    }

    pub fn count(&self) -> Result<u64> {
        Ok(self.inner.read().map_err(|_| BloomError::Poisoned)?.count())
    }

    pub fn false_positive_rate(&self) -> Result<f64> {
        Ok(self
            .inner
            .read()
            .map_err(|_| BloomError::Poisoned)?
            .false_positive_rate())
    }

    pub fn into_inner(self) -> Result<F> {
        self.inner.into_inner().map_err(|_| BloomError::Poisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bloom_filters::PartitionedBloomFilter;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn concurrent_inserts_and_lookups() {
        let filter: PartitionedBloomFilter =
            PartitionedBloomFilter::new(4000, 0.01).unwrap();
        let shared = Arc::new(SharedFilter::new(filter));

        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for i in 0..1000u32 {
                        let value = (t * 1000 + i).to_be_bytes();
                        shared.insert(&value).unwrap();
                        assert!(shared.lookup(&value).unwrap());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.count().unwrap(), 4000);
        assert!(shared.false_positive_rate().unwrap() < 0.02);

        let filter = Arc::try_unwrap(shared)
            .ok()
            .unwrap()
            .into_inner()
            .unwrap();
        for i in 0..4000u32 {
            assert!(filter.lookup(&i.to_be_bytes()).unwrap());
        }
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let filter: PartitionedBloomFilter =
            PartitionedBloomFilter::new(10, 0.01).unwrap();
        let shared = Arc::new(SharedFilter::new(filter));

        let poisoner = Arc::clone(&shared);
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("writer died");
        })
        .join();

        assert!(matches!(shared.insert(b"steve"), Err(BloomError::Poisoned)));
        assert!(matches!(shared.lookup(b"steve"), Err(BloomError::Poisoned)));
    }
}
