use super::*;
use crate::test_helpers::test_rng;
use std::collections::HashMap;

fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    v.sort();
    v
}

#[test]
fn test_shuffle_empty_and_single() {
    let mut rng = test_rng();

    let mut empty: [u8; 0] = [];
    empty.shuffle_with(&mut rng);
    assert!(empty.is_empty());
    assert!(empty.shuffled_with(&mut rng).is_empty());

    let mut single = [42];
    single.shuffle_with(&mut rng);
    assert_eq!(single, [42]);
    assert_eq!(single.shuffled_with(&mut rng), [42]);
}

#[test]
fn test_shuffle_is_permutation() {
    let mut rng = test_rng();
    for len in 0..50 {
        let original: Vec<u32> = (0..len).map(|i| i % 7).collect();
        let mut v = original.clone();
        v.shuffle_with(&mut rng);
        assert_eq!(v.len(), original.len());
        assert_eq!(sorted(v), sorted(original));
    }
}

#[test]
fn test_shuffled_leaves_source_untouched() {
    let mut rng = test_rng();
    let source: Vec<String> = ["x", "y", "z", "w"].iter().map(|s| s.to_string()).collect();
    let copy = source.clone();
    let shuffled = source.shuffled_with(&mut rng);
    assert_eq!(source, copy);
    assert_eq!(sorted(shuffled), sorted(copy));
}

#[test]
fn test_shuffle_rarely_keeps_order() {
    let mut rng = test_rng();
    let original: Vec<u32> = (0..8).collect();
    let mut unchanged = 0;
    for _ in 0..1000 {
        if original.shuffled_with(&mut rng) == original {
            unchanged += 1;
        }
    }
    // Expected about 1000 / 8! = 0.025 times.
    assert!(unchanged < 5, "identity permutation came up {unchanged} times");
}

#[test]
fn test_shuffle_uniform_over_permutations() {
    let mut rng = test_rng();
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
    for _ in 0..60_000 {
        let mut v = [0, 1, 2];
        v.shuffle_with(&mut rng);
        *counts.entry(v).or_default() += 1;
    }
    assert_eq!(counts.len(), 6);
    for (permutation, count) in counts {
        assert!((9_000..11_000).contains(&count), "{permutation:?} drawn {count} times");
    }
}

#[test]
fn test_shuffle_every_position_reachable() {
    let mut rng = test_rng();
    let mut first = [0usize; 10];
    for _ in 0..10_000 {
        let mut v: Vec<usize> = (0..10).collect();
        v.shuffle_with(&mut rng);
        first[v[0]] += 1;
    }
    for count in first {
        assert!((800..1_200).contains(&count));
    }
}

#[test]
fn test_random_index_and_element() {
    let mut rng = test_rng();

    let empty: [char; 0] = [];
    assert_eq!(empty.random_index_with(&mut rng), None);
    assert_eq!(empty.random_element_with(&mut rng), None);

    assert_eq!(['q'].random_index_with(&mut rng), Some(0));
    assert_eq!(['q'].random_element_with(&mut rng), Some(&'q'));

    let letters = ['a', 'b', 'c', 'd'];
    let mut hits = [false; 4];
    for _ in 0..1000 {
        let index = letters.random_index_with(&mut rng).unwrap();
        hits[index] = true;
        assert!(letters.contains(letters.random_element_with(&mut rng).unwrap()));
    }
    assert!(hits.iter().all(|&hit| hit));
}

#[cfg(feature = "std")]
#[test]
fn test_thread_shuffle() {
    let mut v: Vec<i32> = (0..20).collect();
    v.shuffle();
    assert_eq!(sorted(v.clone()), (0..20).collect::<Vec<_>>());
    assert_eq!(sorted(v.shuffled()), (0..20).collect::<Vec<_>>());
}
