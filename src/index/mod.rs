//! String-keyed record index
//!
//! A linear-probing hash table used by the application layer to look up
//! records (vehicles) by id.

mod prime;
mod table;

pub use prime::{is_prime, next_prime};
pub use table::{
    hash_key, ProbingTable, TableError, TableResult, GROW_LOAD_FACTOR, SHRINK_LOAD_FACTOR,
    SHRINK_MIN_ENTRIES,
};
