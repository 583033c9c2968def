//! [SwissSet] is a hash set over a control-byte table, with arbitrary iteration order.
use crate::{hash::DefaultBuildHasher, swiss_map, swiss_map::SwissMap, util::impl_iterator};
use core::hash::Hash;
use std::{borrow::Borrow, hash::BuildHasher};

/// A hash set backed by an open-addressed table with one-byte control metadata.
///
/// This is a projection of [`SwissMap`] with a unit value type: all table invariants and the
/// iteration order caveats of the map apply unchanged.
///
/// ```
/// use swiss_table::SwissSet;
///
/// let mut set: SwissSet<&str> = SwissSet::new();
/// assert!(set.insert("x"));
/// assert!(!set.insert("x"));
/// assert!(set.contains("x"));
/// assert!(set.remove("x"));
/// assert!(!set.remove("x"));
/// ```
#[derive(Clone)]
pub struct SwissSet<T, S = DefaultBuildHasher> {
    map: SwissMap<T, (), S>,
}

impl<T, S: Default> Default for SwissSet<T, S> {
    fn default() -> Self {
        SwissSet {
            map: SwissMap::default(),
        }
    }
}

impl<T, S: Default> SwissSet<T, S> {
    /// Returns an empty set with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns an empty set with at least the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        SwissSet {
            map: SwissMap::with_capacity(capacity),
        }
    }
}

impl<T, S> SwissSet<T, S> {
    /// Returns an empty set with the provided BuildHasher.
    pub fn with_hasher(build_hasher: S) -> Self {
        SwissSet {
            map: SwissMap::with_hasher(build_hasher),
        }
    }
    /// Returns an empty set with at least the specified capacity and the provided BuildHasher.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        SwissSet {
            map: SwissMap::with_capacity_and_hasher(capacity, build_hasher),
        }
    }
    /// Returns the number of items in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }
    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
    /// Returns the number of slots in the set's table.
    ///
    /// The set rehashes before the number of items reaches 7/8 of this.
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }
    /// Removes all items from the set, but keeps the allocated slots.
    pub fn clear(&mut self) {
        self.map.clear();
    }
    /// Returns an iterator over all items.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.map.keys(),
        }
    }
}

impl<T: std::fmt::Debug, S> std::fmt::Debug for SwissSet<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq, S: BuildHasher> SwissSet<T, S> {
    /// Inserts `value` into the set. Returns `true` if it was not present yet.
    pub fn insert(&mut self, value: T) -> bool {
        self.map.insert(value, ()).is_none()
    }
    /// Removes `value` from the set. Returns `true` if it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        Q: Hash + Eq + ?Sized,
        T: Borrow<Q>,
    {
        self.map.remove(value).is_some()
    }
    /// Removes `value` from the set and returns the stored item, if it was present.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        Q: Hash + Eq + ?Sized,
        T: Borrow<Q>,
    {
        self.map.remove_entry(value).map(|(item, _)| item)
    }
    /// Returns `true` if the set contains `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: Hash + Eq + ?Sized,
        T: Borrow<Q>,
    {
        self.map.contains_key(value)
    }
    /// Returns a reference to the stored item equal to `value`, if it exists.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        Q: Hash + Eq + ?Sized,
        T: Borrow<Q>,
    {
        self.map.get_key_value(value).map(|(item, _)| item)
    }
    /// Removes all items for which `f` evaluates to `false`.
    pub fn retain(&mut self, mut f: impl FnMut(&T) -> bool) {
        self.map.retain(|item, _| f(item));
    }
    /// Reserve capacity for an extra `additional` items.
    pub fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for SwissSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for SwissSet<T, S> {}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for SwissSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for SwissSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

/// An iterator over the items of a [`SwissSet`].
///
/// This struct is created by the [`iter`](`SwissSet::iter`) method on [`SwissSet`].
pub struct Iter<'a, T> {
    inner: swiss_map::Keys<'a, T, ()>,
}
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    impl_iterator!();
}
impl<T> ExactSizeIterator for Iter<'_, T> {}

/// An iterator moving items out of a [`SwissSet`].
///
/// This struct is created by the `into_iter` method on [`SwissSet`].
pub struct IntoIter<T> {
    inner: swiss_map::IntoIter<T, ()>,
}
impl<T> Iterator for IntoIter<T> {
    type Item = T;
    impl_iterator!(|entry| entry.0);
}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, S> IntoIterator for SwissSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.map.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a SwissSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> SwissSet<T, S> {
    #[cfg(test)]
    pub(crate) fn check(&self) {
        self.map.check();
    }
}
