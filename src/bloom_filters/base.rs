use std::f64::consts::LN_2;

use crate::error::{BloomError, Result};

pub trait Filter {
    /// n -- estimated number of elements to insert
    /// f -- the target false positive rate
    fn new(n: u64, f: f64) -> Result<Self>
    where
        Self: Sized;
    fn insert(&mut self, value: &[u8]) -> Result<()>;
    fn lookup(&self, value: &[u8]) -> Result<bool>;
    /// number of insert calls, duplicates included
    fn count(&self) -> u64;
    fn false_positive_rate(&self) -> f64;
    /// total number of bits
    fn get_size(&self) -> usize;
}

/// Bit layout derived from the estimated element count and the target
/// false positive rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sizing {
    /// number of bits in a Bloom filter, always `k * w`
    pub m: u64,
    /// number of hash functions, one per slot
    pub k: u64,
    /// slot width
    pub w: u64,
}

impl Sizing {
    pub fn new(n: u64, f: f64) -> Result<Self> {
        if n == 0 {
            return Err(BloomError::InvalidElementCount);
        }
        if !(f > 0.0 && f < 1.0) {
            return Err(BloomError::InvalidFalsePositiveRate(f));
        }

        let bits = calculate_m(f, n);
        if bits > (usize::MAX >> 1) as f64 {
            return Err(BloomError::CapacityOverflow { bits });
        }
        let m = bits as u64;
        let k = calculate_k(m, n);
        // pad the last slot so that every slot has the same width
        let w = m.div_ceil(k);

        Ok(Self { m: w * k, k, w })
    }
}

/// m = -(nlε/(ln2)^2) where ε is desired false positive probability,
/// in our case it is indicated by the letter f
fn calculate_m(f: f64, n: u64) -> f64 {
    (-(f.ln() * n as f64) / LN_2.powi(2)).ceil().max(1.0)
}

/// k = m/n * ln2, at least 1
fn calculate_k(m: u64, n: u64) -> u64 {
    ((m as f64 / n as f64) * LN_2).round().max(1.0) as u64
}

/// (1 - e^(-kn/m))^k, 0 for an empty filter
pub fn estimate_false_positive_rate(k: u64, m: u64, n: u64) -> f64 {
    let k = k as f64;
    (1.0 - (-k * n as f64 / m as f64).exp()).powf(k)
}
