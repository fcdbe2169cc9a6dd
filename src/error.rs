use thiserror::Error;

#[derive(Debug, Error)]
pub enum BloomError {
    #[error("estimated element count must be greater than zero")]
    InvalidElementCount,

    #[error("false positive rate must be strictly between 0 and 1, got {0}")]
    InvalidFalsePositiveRate(f64),

    #[error("filter of {bits} bits exceeds the addressable bit count")]
    CapacityOverflow { bits: f64 },

    #[error("hashing failed: {0}")]
    Hashing(String),

    #[error("filter lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, BloomError>;
