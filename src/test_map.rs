#![cfg(test)]
#![allow(missing_docs)]
use crate::SwissMap;
use rand::prelude::*;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hasher};

/// Hashes every key to zero, forcing all entries onto a single probe sequence.
#[derive(Clone, Default)]
struct CollidingState;

struct CollidingHasher;

impl Hasher for CollidingHasher {
    fn finish(&self) -> u64 {
        0
    }
    fn write(&mut self, _bytes: &[u8]) {}
}

impl BuildHasher for CollidingState {
    type Hasher = CollidingHasher;
    fn build_hasher(&self) -> CollidingHasher {
        CollidingHasher
    }
}

#[test]
fn test_basic() {
    let mut map: SwissMap<u32, &str> = SwissMap::new();
    map.insert(1, "one");
    map.insert(2, "two");
    assert_eq!(map.get(&1), Some(&"one"));
    assert_eq!(map.get(&2), Some(&"two"));
    assert_eq!(map.get(&3), None);
    assert_eq!(map.len(), 2);
    assert!(!map.is_empty());
    assert_eq!(map.capacity(), 16);
    map.check();
}

#[test]
fn test_replace() {
    let mut map: SwissMap<&str, i32> = SwissMap::new();
    assert_eq!(map.insert("a", 1), None);
    assert_eq!(map.insert("a", 2), Some(1));
    assert_eq!(map.get("a"), Some(&2));
    assert_eq!(map.len(), 1);
    map.check();
}

#[test]
fn test_growth() {
    let mut map: SwissMap<u64, u64> = SwissMap::new();
    for key in 0..14 {
        map.insert(key, key * key);
        assert_eq!(map.capacity(), 16);
    }
    let mut expected: HashMap<u64, u64> = map.iter().map(|(&k, &v)| (k, v)).collect();

    // The 15th distinct key exceeds the 7/8 load cap and doubles the table.
    map.insert(14, 196);
    assert_eq!(map.capacity(), 32);
    assert_eq!(map.len(), 15);

    expected.insert(14, 196);
    let after: HashMap<u64, u64> = map.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(after, expected);
    map.check();
}

#[test]
fn test_remove_idempotence() {
    let mut map: SwissMap<u32, u32> = (0..10).map(|i| (i, i)).collect();
    assert_eq!(map.remove(&3), Some(3));
    map.check();
    let mut snapshot: Vec<(u32, u32)> = map.iter().map(|(&k, &v)| (k, v)).collect();
    snapshot.sort();

    assert_eq!(map.remove(&3), None);
    let mut again: Vec<(u32, u32)> = map.iter().map(|(&k, &v)| (k, v)).collect();
    again.sort();
    assert_eq!(snapshot, again);
    assert_eq!(map.len(), 9);
    map.check();
}

#[test]
fn test_clear_idempotence() {
    let mut map: SwissMap<u32, u32> = (0..20).map(|i| (i, i)).collect();
    let capacity = map.capacity();
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.capacity(), capacity);
    map.check();
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.capacity(), capacity);
    map.check();
}

#[test]
fn test_insert_then_remove_half() {
    let mut map: SwissMap<u32, u32> = SwissMap::new();
    for key in 0..100 {
        map.insert(key, key + 1000);
    }
    for key in 0..50 {
        assert_eq!(map.remove(&key), Some(key + 1000));
    }
    assert_eq!(map.len(), 50);
    for key in 50..100 {
        assert_eq!(map.get(&key), Some(&(key + 1000)));
    }
    for key in 0..50 {
        assert!(!map.contains_key(&key));
    }
    map.check();
}

#[test]
fn test_remove_all_keeps_capacity() {
    let mut map: SwissMap<u32, u32> = (0..100).map(|i| (i, i)).collect();
    let capacity = map.capacity();
    for key in 0..100 {
        assert_eq!(map.remove(&key), Some(key));
    }
    assert!(map.is_empty());
    assert_eq!(map.capacity(), capacity);
    map.check();
}

#[test]
fn test_colliding_hashes() {
    let mut map: SwissMap<u32, u32, CollidingState> = SwissMap::with_hasher(CollidingState);
    for key in 0..100 {
        map.insert(key, !key);
    }
    for key in 0..100 {
        assert_eq!(map.get(&key), Some(&!key));
    }
    map.check();

    for key in (0..100).step_by(3) {
        assert_eq!(map.remove(&key), Some(!key));
    }
    for key in 0..100 {
        if key % 3 == 0 {
            assert!(map.get(&key).is_none());
        } else {
            assert_eq!(map.get(&key), Some(&!key));
        }
    }
    map.check();
}

#[test]
fn test_tombstone_transparency() {
    let mut map: SwissMap<u32, u32, CollidingState> = SwissMap::with_hasher(CollidingState);
    map.insert(1, 10);
    map.insert(2, 20);
    map.insert(3, 30);
    // Key 3 sits past key 2 on the shared probe sequence; the tombstone left by removing
    // key 2 must not terminate the search for it.
    assert_eq!(map.remove(&2), Some(20));
    assert_eq!(map.get(&3), Some(&30));
    assert_eq!(map.get(&1), Some(&10));

    map.insert(4, 40);
    assert_eq!(map.get(&4), Some(&40));
    assert_eq!(map.get(&3), Some(&30));
    map.check();
}

#[test]
fn test_tombstone_reclaim() {
    let mut map: SwissMap<u64, u64> = SwissMap::new();
    for key in 0..14 {
        map.insert(key, key);
    }
    for key in 0..14 {
        assert_eq!(map.remove(&key), Some(key));
    }
    assert!(map.is_empty());
    assert_eq!(map.capacity(), 16);

    // The insert budget is exhausted by tombstones, but the table is nearly empty, so the
    // rebuild happens at the same size instead of doubling.
    map.insert(100, 100);
    assert_eq!(map.capacity(), 16);
    assert_eq!(map.get(&100), Some(&100));
    map.check();
}

#[test]
fn test_borrowed_keys() {
    let mut map: SwissMap<String, u32> = SwissMap::new();
    map.insert("alpha".to_string(), 1);
    assert_eq!(map.get("alpha"), Some(&1));
    assert!(map.contains_key("alpha"));
    assert_eq!(map.remove("alpha"), Some(1));
    assert!(map.get("alpha").is_none());
    map.check();
}

#[test]
fn test_iterators() {
    let mut map: SwissMap<u32, u32> = (0..50).map(|i| (i, 2 * i)).collect();
    assert_eq!(map.iter().count(), 50);
    assert_eq!(map.iter().size_hint(), (50, Some(50)));

    let mut keys: Vec<u32> = map.keys().copied().collect();
    keys.sort();
    assert_eq!(keys, (0..50).collect::<Vec<_>>());

    let mut values: Vec<u32> = map.values().copied().collect();
    values.sort();
    assert_eq!(values, (0..50).map(|i| 2 * i).collect::<Vec<_>>());

    for (_, value) in map.iter_mut() {
        *value += 1;
    }
    for value in map.values_mut() {
        *value += 1;
    }
    assert_eq!(map.get(&10), Some(&22));
    map.check();

    let mut pairs: Vec<(u32, u32)> = map.into_iter().collect();
    pairs.sort();
    assert_eq!(pairs.len(), 50);
    assert_eq!(pairs[10], (10, 22));
}

#[test]
fn test_eq_extend_index() {
    let map_a: SwissMap<u32, u32> = (0..30).map(|i| (i, i)).collect();
    let mut map_b: SwissMap<u32, u32> = SwissMap::new();
    map_b.extend((0..30).rev().map(|i| (i, i)));
    assert_eq!(map_a, map_b);
    assert_eq!(map_a[&7], 7);

    map_b.insert(7, 8);
    assert_ne!(map_a, map_b);
}

#[test]
fn test_get_mut_retain() {
    let mut map: SwissMap<u32, u32> = (0..100).map(|i| (i, i)).collect();
    if let Some(value) = map.get_mut(&5) {
        *value = 500;
    }
    assert_eq!(map.get(&5), Some(&500));

    map.retain(|&key, value| {
        *value += 1;
        key % 2 == 0
    });
    assert_eq!(map.len(), 50);
    assert_eq!(map.get(&6), Some(&7));
    assert!(map.get(&7).is_none());
    map.check();
}

#[test]
fn test_reserve() {
    let mut map: SwissMap<u32, u32> = SwissMap::new();
    map.reserve(100);
    let capacity = map.capacity();
    assert!(capacity >= 128);
    for key in 0..100 {
        map.insert(key, key);
    }
    assert_eq!(map.capacity(), capacity);
    map.check();
}

#[test]
fn test_with_capacity() {
    let map: SwissMap<u32, u32> = SwissMap::with_capacity(0);
    assert_eq!(map.capacity(), 16);
    let map: SwissMap<u32, u32> = SwissMap::with_capacity(17);
    assert_eq!(map.capacity(), 32);
    let map: SwissMap<u32, u32> = SwissMap::with_capacity(64);
    assert_eq!(map.capacity(), 64);
}

#[test]
fn test_randomized_against_std() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(10);
    let mut map: SwissMap<u32, u64> = SwissMap::new();
    let mut spec: HashMap<u32, u64> = HashMap::new();
    for round in 0..10_000 {
        let key = rng.gen_range(0..500);
        match rng.gen_range(0..4) {
            0 | 1 => {
                let value: u64 = rng.gen();
                assert_eq!(map.insert(key, value), spec.insert(key, value));
            }
            2 => assert_eq!(map.remove(&key), spec.remove(&key)),
            _ => assert_eq!(map.get(&key), spec.get(&key)),
        }
        if round % 1000 == 0 {
            map.check();
        }
    }
    assert_eq!(map.len(), spec.len());
    for (key, value) in &spec {
        assert_eq!(map.get(key), Some(value));
    }
    map.check();
}

#[test]
fn test_randomized_colliding() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(11);
    let mut map: SwissMap<u32, u64, CollidingState> = SwissMap::with_hasher(CollidingState);
    let mut spec: HashMap<u32, u64> = HashMap::new();
    for _ in 0..2_000 {
        let key = rng.gen_range(0..50);
        if rng.gen() {
            let value: u64 = rng.gen();
            assert_eq!(map.insert(key, value), spec.insert(key, value));
        } else {
            assert_eq!(map.remove(&key), spec.remove(&key));
        }
    }
    for (key, value) in &spec {
        assert_eq!(map.get(key), Some(value));
    }
    map.check();
}
