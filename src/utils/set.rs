/*!
# Generalized Sets

Traversals track discovered nodes in a set. Node ids are sparse handles, so the
natural choices are hash-based or ordered sets; this module abstracts over them so
that a traversal can be parameterized by the set it uses without changing its logic.

- [`Set<T>`]: trait for generic set-like operations
- Implementations: `HashSet` (any hasher, in particular `FxHashSet`) and `BTreeSet`.
*/

use std::{
    collections::{BTreeSet, HashSet, btree_set, hash_set},
    hash::{BuildHasher, Hash},
    iter::Cloned,
};

/// Minimalist trait for a set-like collection.
///
/// Supports insertion, removal, membership queries and iteration.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Inserts multiple elements from an iterator.
    fn insert_multiple<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Iterator over elements in set.
    ///
    /// Returned by [`Set::iter`].
    type SetIter<'a>: Iterator<Item = T>
    where
        Self: 'a,
        T: Clone;

    /// Returns an iterator over all elements in the set (in no particular order).
    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        // std returns whether the value was newly inserted
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    type SetIter<'a>
        = Cloned<hash_set::Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone,
    {
        HashSet::iter(self).cloned()
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<T> Set<T> for BTreeSet<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) -> bool {
        !BTreeSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        BTreeSet::remove(self, value)
    }

    type SetIter<'a>
        = Cloned<btree_set::Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone,
    {
        BTreeSet::iter(self).cloned()
    }

    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self);
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}
