use thiserror::Error;

mod hash_table;
mod prime;

pub use hash_table::{
    ChainedHashTable, DEFAULT_GROW_FACTOR, DEFAULT_SHRINK_FACTOR, Entry, Iter, MIN_CAPACITY, hash,
};
pub use prime::{is_prime, next_prime};

#[derive(Error, Debug, PartialEq)]
pub enum TableConfigError {
    #[error("initial capacity must be a prime of at least {}, got: {got}", MIN_CAPACITY)]
    InvalidCapacity { got: usize },

    #[error("load factors must satisfy 0 < shrink < grow <= 1, got: shrink {shrink}, grow {grow}")]
    InvalidLoadFactors { grow: f32, shrink: f32 },
}
