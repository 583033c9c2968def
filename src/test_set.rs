#![cfg(test)]
#![allow(missing_docs)]
use crate::{SwissMap, SwissSet};
use rand::prelude::*;
use std::collections::HashSet;

#[test]
fn test_basic() {
    let mut set: SwissSet<&str> = SwissSet::new();
    assert!(set.insert("x"));
    assert!(!set.insert("x"));
    assert!(set.contains("x"));
    assert!(set.remove("x"));
    assert!(!set.remove("x"));
    assert!(set.is_empty());
    assert_eq!(set.capacity(), 16);
    set.check();
}

#[test]
fn test_map_consistency() {
    // A set over values behaves exactly like a map keyed by those values with a unit value.
    let values = [3u32, 1, 4, 1, 5, 9, 2, 6, 5, 3];
    let mut set: SwissSet<u32> = SwissSet::new();
    let mut map: SwissMap<u32, ()> = SwissMap::new();
    for &value in &values {
        assert_eq!(set.insert(value), map.insert(value, ()).is_none());
        assert_eq!(set.len(), map.len());
    }
    for &value in &values {
        assert_eq!(set.contains(&value), map.contains_key(&value));
    }
    for &value in &values {
        assert_eq!(set.remove(&value), map.remove(&value).is_some());
    }
    assert!(set.is_empty());
    set.check();
}

#[test]
fn test_primes() {
    let mut set: SwissSet<u32> = (2..200).collect();
    for k in 2..200 {
        if set.contains(&k) {
            set.retain(|&n| n == k || n % k != 0);
            set.check();
        }
    }
    let mut primes: Vec<u32> = set.iter().copied().collect();
    primes.sort();
    assert_eq!(
        primes,
        [
            2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79,
            83, 89, 97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167,
            173, 179, 181, 191, 193, 197, 199
        ]
    );
}

#[test]
fn test_take_get() {
    let mut set: SwissSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    assert_eq!(set.get("a"), Some(&"a".to_string()));
    assert_eq!(set.take("a"), Some("a".to_string()));
    assert!(set.get("a").is_none());
    assert_eq!(set.len(), 1);
    set.check();
}

#[test]
fn test_iter_extend_eq() {
    let set_a: SwissSet<u32> = (0..50).collect();
    let mut set_b: SwissSet<u32> = SwissSet::new();
    set_b.extend((0..50).rev());
    assert_eq!(set_a, set_b);

    let mut items: Vec<u32> = set_a.iter().copied().collect();
    items.sort();
    assert_eq!(items, (0..50).collect::<Vec<_>>());

    let mut moved: Vec<u32> = set_b.into_iter().collect();
    moved.sort();
    assert_eq!(moved, (0..50).collect::<Vec<_>>());
}

#[test]
fn test_clear_keeps_capacity() {
    let mut set: SwissSet<u32> = (0..100).collect();
    let capacity = set.capacity();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.capacity(), capacity);
    set.check();
}

#[test]
fn test_randomized_against_std() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(12);
    let mut set: SwissSet<u32> = SwissSet::new();
    let mut spec: HashSet<u32> = HashSet::new();
    for _ in 0..10_000 {
        let value = rng.gen_range(0..400);
        match rng.gen_range(0..3) {
            0 => assert_eq!(set.insert(value), spec.insert(value)),
            1 => assert_eq!(set.remove(&value), spec.remove(&value)),
            _ => assert_eq!(set.contains(&value), spec.contains(&value)),
        }
    }
    assert_eq!(set.len(), spec.len());
    for value in &spec {
        assert!(set.contains(value));
    }
    set.check();
}
