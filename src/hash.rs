//! Utilities for computing hashes.
use std::hash::{BuildHasher, BuildHasherDefault};

use zwohash::ZwoHasher;

/// The [`BuildHasher`] used by [`SwissMap`][crate::SwissMap] and [`SwissSet`][crate::SwissSet]
/// unless a different one is supplied.
pub type DefaultBuildHasher = BuildHasherDefault<ZwoHasher>;

/// Computes the hash of a value using this crate's default hasher.
#[inline]
pub fn hash_value<T: std::hash::Hash>(value: T) -> u64 {
    DefaultBuildHasher::default().hash_one(value)
}

/// Computes the hash of a reference using this crate's default hasher.
///
/// This forwards to [`hash_value`]. Restricting the argument to be a reference is occasionally
/// useful for type inference or for avoiding warnings.
#[inline]
pub fn hash_ref<T: std::hash::Hash + ?Sized>(value: &T) -> u64 {
    hash_value(value)
}
