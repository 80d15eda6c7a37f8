#![cfg(test)]

use std::hash::{BuildHasherDefault, Hasher};

use super::*;

/// Sends every value to the same bucket, so every insert collides.
#[derive(Debug, Default)]
struct CollidingHasher;

impl Hasher for CollidingHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

type CollidingSet<T> = HashSet<T, BuildHasherDefault<CollidingHasher>>;

static EMPTY: CollidingSet<u8> = HashSet::with_hasher(BuildHasherDefault::new());

fn set_of(values: &[i64]) -> HashSet<i64> {
    values.iter().copied().collect()
}

#[test]
fn test_static_with_hasher() {
    assert!(EMPTY.is_empty());
    assert!(!EMPTY.contains(&0));
    assert_eq!(EMPTY.to_string(), "{}");
}

#[test]
fn test_insert_remove_contains() {
    let mut set = HashSet::new();
    for value in [1, 2, 3, 3, 4, 5, 5, 6, 6] {
        set.insert(value);
    }

    assert_eq!(set.len(), 6, "Duplicate values should only be stored once.");
    assert!(set.contains(&2));
    assert!(!set.contains(&7));
    assert!(!set.insert(4), "Inserting an existing value should report false.");

    assert_eq!(set.remove(&4), Some(4));
    assert_eq!(set.remove(&4), None, "Removing a missing value should yield nothing.");
    assert!(!set.contains(&4));
    assert_eq!(set.len(), 5);

    set.clear();
    assert!(set.is_empty());
}

#[test]
fn test_hash_collisions() {
    let mut set = CollidingSet::default();
    for word in ["zero", "one", "two", "three", "four"] {
        set.insert(word);
    }
    set.remove("zero");
    set.remove("two");

    assert_eq!(
        set.sorted(),
        [&"four", &"one", &"three"],
        "Colliding values should all be kept apart and survive removals around them."
    );
}

#[test]
fn test_set_operations() {
    let a = set_of(&[1, 2, 3, 4]);
    let b = set_of(&[3, 4, 5]);

    assert_eq!(&a | &b, set_of(&[1, 2, 3, 4, 5]));
    assert_eq!(&a & &b, set_of(&[3, 4]));
    assert_eq!(&a - &b, set_of(&[1, 2]));
    assert_eq!(&b - &a, set_of(&[5]));
    assert_eq!(&a ^ &b, set_of(&[1, 2, 5]));

    let mut union: Vec<_> = a.union(&b).copied().collect();
    union.sort();
    assert_eq!(union, [1, 2, 3, 4, 5], "Union should yield shared values exactly once.");

    assert_eq!(a.intersection(&b).count(), b.intersection(&a).count());
    assert_eq!(a.difference(&a).next(), None);
}

#[test]
fn test_assign_operations() {
    let mut set = set_of(&[1, 2, 3]);
    set |= set_of(&[3, 4]);
    assert_eq!(set, set_of(&[1, 2, 3, 4]));

    set &= set_of(&[2, 3, 4, 9]);
    assert_eq!(set, set_of(&[2, 3, 4]));

    set -= set_of(&[4]);
    assert_eq!(set, set_of(&[2, 3]));

    set ^= set_of(&[3, 5]);
    assert_eq!(set, set_of(&[2, 5]));
}

#[test]
fn test_subset_and_equality() {
    let small = set_of(&[1, 2]);
    let large = set_of(&[1, 2, 3]);

    assert!(small.is_subset(&large));
    assert!(!large.is_subset(&small));
    assert!(large.is_superset(&small));
    assert!(HashSet::<i64>::new().is_subset(&small), "The empty set is a subset of any set.");
    assert!(small.is_disjoint(&set_of(&[7, 8])));
    assert!(!small.is_disjoint(&large));

    assert_ne!(small, large);
    assert_eq!(large, set_of(&[3, 2, 1]), "Sets should be equal regardless of insertion order.");
}

#[test]
fn test_functional_helpers() {
    let set = set_of(&[1, 2, 3, 4, 5, 6]);

    let even = set.filter(|value| value % 2 == 0);
    assert_eq!(even, set_of(&[2, 4, 6]));

    let halves = set.map(|value| value / 2);
    assert_eq!(halves, set_of(&[0, 1, 2, 3]), "Mapped values that collide should be merged.");

    let labels: HashSet<String> = set.map(|value| format!("#{value}"));
    assert!(labels.contains("#3"));

    let mut total = 0;
    set.for_each(|value| total += value);
    assert_eq!(total, 21);

    let mut kept = set.clone();
    kept.retain(|value| *value > 4);
    assert_eq!(kept, set_of(&[5, 6]));
}

#[test]
fn test_values_and_sorting() {
    let set = set_of(&[3, 1, 2]);

    let mut values = set.values();
    values.sort();
    assert_eq!(values, [1, 2, 3]);

    assert_eq!(set.sorted(), [&1, &2, &3]);
    assert_eq!(set.sorted_by(|a, b| b.cmp(a)), [&3, &2, &1]);
}

#[test]
fn test_format() {
    assert_eq!(HashSet::<i64>::new().to_string(), "{}");
    assert_eq!(set_of(&[42]).to_string(), "{42}");
    assert_eq!(format!("{:?}", set_of(&[42])), "HashSet { contents: {42}, len: 1 }");

    let rendered = set_of(&[1, 2]).to_string();
    assert!(rendered == "{1, 2}" || rendered == "{2, 1}");
}
