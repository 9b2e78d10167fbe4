//! Open-addressing hash table with linear probing

use super::prime::next_prime;
use thiserror::Error;
use tracing::debug;

/// Load factor above which `put` doubles the table before inserting
pub const GROW_LOAD_FACTOR: f64 = 0.75;

/// Load factor below which `remove` halves the table
pub const SHRINK_LOAD_FACTOR: f64 = 0.2;

/// Shrinking only happens while more than this many entries are live
pub const SHRINK_MIN_ENTRIES: usize = 100;

/// Errors raised by the probing table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Table full: no free slot among {0}")]
    TableFull(usize),
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

#[derive(Debug, Clone)]
enum Slot<V> {
    /// Never used; terminates probe chains
    Empty,
    Occupied { key: String, value: V },
    /// Previously occupied; probes walk past it
    Tombstone,
}

/// Polynomial base-31 string hash with wrapping arithmetic.
pub fn hash_key(key: &str) -> u64 {
    key.chars()
        .fold(0u64, |acc, c| acc.wrapping_mul(31).wrapping_add(c as u64))
}

/// String-keyed table resolving collisions by linear probing.
///
/// Capacity is always an odd prime. The table grows when an insert finds the
/// load factor above [`GROW_LOAD_FACTOR`] and shrinks when a removal leaves
/// it below [`SHRINK_LOAD_FACTOR`] with more than [`SHRINK_MIN_ENTRIES`]
/// entries live. Keys compare exactly (case-sensitive).
#[derive(Debug, Clone)]
pub struct ProbingTable<V> {
    slots: Vec<Slot<V>>,
    count: usize,
}

impl<V> ProbingTable<V> {
    /// Create a table sized to the next prime `>= initial_capacity`
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            slots: Self::empty_slots(next_prime(initial_capacity)),
            count: 0,
        }
    }

    fn empty_slots(capacity: usize) -> Vec<Slot<V>> {
        (0..capacity).map(|_| Slot::Empty).collect()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Live entries divided by capacity
    pub fn get_load_factor(&self) -> f64 {
        self.count as f64 / self.slots.len() as f64
    }

    fn home_slot(&self, key: &str) -> usize {
        (hash_key(key) % self.slots.len() as u64) as usize
    }

    /// Insert a new entry.
    ///
    /// Fails with `DuplicateKey` if the key is already live; the whole probe
    /// chain is checked so a tombstone earlier in the chain cannot hide a
    /// duplicate further along.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> TableResult<()> {
        let key = key.into();
        if self.get_load_factor() > GROW_LOAD_FACTOR {
            self.resize(next_prime(self.slots.len() * 2));
        }

        let capacity = self.slots.len();
        let home = self.home_slot(&key);
        let mut free: Option<usize> = None;
        let mut index = home;

        loop {
            match &self.slots[index] {
                Slot::Occupied { key: existing, .. } => {
                    if *existing == key {
                        return Err(TableError::DuplicateKey(key));
                    }
                }
                Slot::Tombstone => {
                    free.get_or_insert(index);
                }
                Slot::Empty => {
                    free.get_or_insert(index);
                    break;
                }
            }
            index = (index + 1) % capacity;
            if index == home {
                break;
            }
        }

        let Some(slot) = free else {
            return Err(TableError::TableFull(capacity));
        };
        self.slots[slot] = Slot::Occupied { key, value };
        self.count += 1;
        Ok(())
    }

    fn find_index(&self, key: &str) -> Option<usize> {
        let capacity = self.slots.len();
        let home = self.home_slot(key);
        let mut index = home;

        loop {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied { key: existing, .. } if existing == key => return Some(index),
                _ => {}
            }
            index = (index + 1) % capacity;
            if index == home {
                return None;
            }
        }
    }

    /// Look up the value stored under `key`
    pub fn get(&self, key: &str) -> TableResult<&V> {
        match self.find_index(key).map(|i| &self.slots[i]) {
            Some(Slot::Occupied { value, .. }) => Ok(value),
            _ => Err(TableError::KeyNotFound(key.to_string())),
        }
    }

    /// Mutable lookup
    pub fn get_mut(&mut self, key: &str) -> TableResult<&mut V> {
        let index = self.find_index(key);
        match index.map(|i| &mut self.slots[i]) {
            Some(Slot::Occupied { value, .. }) => Ok(value),
            _ => Err(TableError::KeyNotFound(key.to_string())),
        }
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.find_index(key).is_some()
    }

    /// Remove an entry, leaving a tombstone, and return its value.
    ///
    /// The shrink check runs only after the removal has happened.
    pub fn remove(&mut self, key: &str) -> TableResult<V> {
        let index = self
            .find_index(key)
            .ok_or_else(|| TableError::KeyNotFound(key.to_string()))?;

        let Slot::Occupied { value, .. } = std::mem::replace(&mut self.slots[index], Slot::Tombstone)
        else {
            return Err(TableError::KeyNotFound(key.to_string()));
        };
        self.count -= 1;

        if self.get_load_factor() < SHRINK_LOAD_FACTOR && self.count > SHRINK_MIN_ENTRIES {
            self.resize(next_prime(self.slots.len() / 2));
        }
        Ok(value)
    }

    /// Live values in slot order
    pub fn export_to_sequence(&self) -> Vec<&V> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Live `(key, value)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((key.as_str(), value)),
            _ => None,
        })
    }

    /// Rehash every live entry into a fresh all-empty array, dropping tombstones.
    fn resize(&mut self, capacity: usize) {
        debug!(
            from = self.slots.len(),
            to = capacity,
            live = self.count,
            "resizing probing table"
        );
        let old = std::mem::replace(&mut self.slots, Self::empty_slots(capacity));
        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                self.place(key, value);
            }
        }
    }

    /// Put for a freshly allocated array: keys are already unique and the
    /// array has no tombstones, so the first empty slot is the target.
    fn place(&mut self, key: String, value: V) {
        debug_assert!(self.count < self.slots.len());
        let capacity = self.slots.len();
        let mut index = self.home_slot(&key);
        while !matches!(self.slots[index], Slot::Empty) {
            index = (index + 1) % capacity;
        }
        self.slots[index] = Slot::Occupied { key, value };
    }
}
