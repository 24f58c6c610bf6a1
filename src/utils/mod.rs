/*!
# Utilities

Helper traits used by the algorithms, most importantly the [`Set`] abstraction over
visited-sets and [`FromCapacity`] to pre-size them.

You probably do not need to interact with this module directly.
*/

use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
};

pub mod set;

pub use set::Set;

/// Helper trait for datastructure that can be initialized with capacity.
///
/// Mainly used in conjunction with [`Set`] so that algorithms can allocate their
/// visited-set for the number of nodes they may touch.
pub trait FromCapacity: Sized {
    /// Create a new instance able to hold `capacity` elements without reallocation
    fn from_capacity(capacity: usize) -> Self;
}

impl<T, S> FromCapacity for HashSet<T, S>
where
    S: BuildHasher + Default,
{
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<T> FromCapacity for BTreeSet<T> {
    fn from_capacity(_capacity: usize) -> Self {
        // Nodes of a `BTreeSet` are allocated on demand
        Self::new()
    }
}
