use log::trace;

use super::TableConfigError;
use super::prime::{is_prime, next_prime};

/// Capacities never drop below this, and every capacity is prime.
pub const MIN_CAPACITY: usize = 7;

pub const DEFAULT_GROW_FACTOR: f32 = 0.75;
pub const DEFAULT_SHRINK_FACTOR: f32 = 0.25;

const HASH_PRIME: u64 = 31;

/// A key-value pair stored in one bucket of a [`ChainedHashTable`].
#[derive(Debug, PartialEq, Eq)]
pub struct Entry<V> {
    pub key: String,
    pub value: V,
}

/// Separate-chaining hash table over string keys.
///
/// Buckets are plain vectors, capacity is kept at a prime number, and the
/// table grows or shrinks wholesale whenever the load factor leaves the
/// configured band. Lookups miss with `None` rather than failing.
#[derive(Debug)]
pub struct ChainedHashTable<V> {
    buckets: Vec<Vec<Entry<V>>>,
    items: usize,
    grow_at: f32,
    shrink_at: f32,
}

#[derive(Debug)]
pub struct Iter<'a, V> {
    table: &'a ChainedHashTable<V>,
    bucket_idx: usize,
    pos: usize,
}

/// Horner-rule accumulation over the key's characters with multiplier 31,
/// reduced modulo `capacity`.
///
/// Accumulation wraps in `u64`, so long keys overflow deterministically
/// instead of widening. The empty string lands in bucket 0.
pub fn hash(key: &str, capacity: usize) -> usize {
    let mut code: u64 = 0;
    for ch in key.chars() {
        code = code.wrapping_mul(HASH_PRIME).wrapping_add(ch as u64);
    }
    (code % capacity as u64) as usize
}

impl<V> Default for ChainedHashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ChainedHashTable<V> {
    /// Creates an empty table with the minimum capacity and the default
    /// 0.75 / 0.25 load factor band.
    pub fn new() -> Self {
        Self {
            buckets: (0..MIN_CAPACITY).map(|_| Vec::new()).collect(),
            items: 0,
            grow_at: DEFAULT_GROW_FACTOR,
            shrink_at: DEFAULT_SHRINK_FACTOR,
        }
    }

    /// Creates an empty table with `capacity` buckets.
    /// The capacity must be a prime of at least [`MIN_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Result<Self, TableConfigError> {
        Self::with_config(capacity, DEFAULT_GROW_FACTOR, DEFAULT_SHRINK_FACTOR)
    }

    /// Creates an empty table with an explicit capacity and load factor band.
    pub fn with_config(
        capacity: usize,
        grow_at: f32,
        shrink_at: f32,
    ) -> Result<Self, TableConfigError> {
        if capacity < MIN_CAPACITY || !is_prime(capacity) {
            return Err(TableConfigError::InvalidCapacity { got: capacity });
        }
        if !(0.0 < shrink_at && shrink_at < grow_at && grow_at <= 1.0) {
            return Err(TableConfigError::InvalidLoadFactors {
                grow: grow_at,
                shrink: shrink_at,
            });
        }

        Ok(Self {
            buckets: (0..capacity).map(|_| Vec::new()).collect(),
            items: 0,
            grow_at,
            shrink_at,
        })
    }

    /// Returns the number of stored entries
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Returns the number of buckets, or "slots" of the table
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the load factor of the table,
    /// computed as num of entries / num of buckets
    pub fn load_factor(&self) -> f32 {
        self.items as f32 / self.capacity() as f32
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present (an overwrite changes neither the count nor the
    /// capacity).
    ///
    /// A fresh insert that pushes the load factor over `grow_at` rehashes the
    /// whole table into `next_prime(capacity * 2)` buckets.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let old = self.place(key.into(), value);

        if old.is_none() && self.load_factor() > self.grow_at {
            let target = next_prime(self.capacity() * 2);
            trace!(target:"resize", "load {:.2} over {}, growing {} -> {}",
                self.load_factor(), self.grow_at, self.capacity(), target);
            self.resize(target);
        }

        old
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let i = hash(key, self.capacity());
        self.buckets[i]
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let i = hash(key, self.capacity());
        self.buckets[i]
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes a key, returning the stored pair, or `None` if the key was
    /// absent (in which case nothing changes).
    ///
    /// A removal that drops the load factor under `shrink_at` while the
    /// capacity is above the minimum rehashes into
    /// `next_prime(max(capacity / 2, MIN_CAPACITY))` buckets. The clamp keeps
    /// the capacity prime and at least [`MIN_CAPACITY`], which a raw halving
    /// would break at capacity 11.
    pub fn remove(&mut self, key: &str) -> Option<(String, V)> {
        let i = hash(key, self.capacity());
        let pos = self.buckets[i].iter().position(|e| e.key == key)?;
        let entry = self.buckets[i].remove(pos);
        self.items -= 1;

        if self.capacity() > MIN_CAPACITY && self.load_factor() < self.shrink_at {
            let target = next_prime((self.capacity() / 2).max(MIN_CAPACITY));
            trace!(target:"resize", "load {:.2} under {}, shrinking {} -> {}",
                self.load_factor(), self.shrink_at, self.capacity(), target);
            self.resize(target);
        }

        Some((entry.key, entry.value))
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            table: self,
            bucket_idx: 0,
            pos: 0,
        }
    }

    // [private]

    /// Insert or overwrite without the load-factor check. `resize` re-places
    /// entries through this path, so a rehash can never trigger another one.
    fn place(&mut self, key: String, value: V) -> Option<V> {
        let i = hash(&key, self.capacity());

        match self.buckets[i].iter_mut().find(|e| e.key == key) {
            Some(e) => {
                let old = std::mem::replace(&mut e.value, value);
                Some(old)
            }
            None => {
                self.buckets[i].push(Entry { key, value });
                self.items += 1;
                None
            }
        }
    }

    /// Replaces the bucket array wholesale and re-places every surviving
    /// entry under the new capacity, in bucket-then-position order.
    fn resize(&mut self, new_capacity: usize) {
        let old_buckets = std::mem::replace(
            &mut self.buckets,
            (0..new_capacity).map(|_| Vec::new()).collect(),
        );
        self.items = 0;

        for bucket in old_buckets {
            for entry in bucket {
                self.place(entry.key, entry.value);
            }
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.bucket_idx < self.table.buckets.len() {
            let bucket = &self.table.buckets[self.bucket_idx];
            if self.pos < bucket.len() {
                let entry = &bucket[self.pos];
                self.pos += 1;
                return Some(entry);
            }
            self.bucket_idx += 1;
            self.pos = 0;
        }
        None
    }
}
