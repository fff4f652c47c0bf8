use pdqsort::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Ordering;

fn is_sorted_by<T>(v: &[T], mut compare: impl FnMut(&T, &T) -> Ordering) -> bool {
    v.windows(2).all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

fn all_configs() -> Vec<Config> {
    (0..=6)
        .map(|shift| Config::new().with_insertion_threshold_shift(shift))
        .collect()
}

#[test]
fn test_basic_sort_strings() {
    let mut input = vec![
        "banana".to_string(),
        "apple".to_string(),
        "cherry".to_string(),
        "date".to_string(),
    ];

    pdqsort(&mut input);

    assert_eq!(input, vec!["apple", "banana", "cherry", "date"]);
}

#[test]
fn test_scenario_ascending_then_descending() {
    let mut data = [0.0, 1.0, 10.0, 5.0];
    let mut data2 = [0.0, 1.0, 10.0, 5.0];

    pdqsort_with(
        &mut data,
        |a: &f64, b: &f64| a.total_cmp(b),
        CoSort::new(&mut data2),
        &Config::default(),
    );
    assert_eq!(data, [0.0, 1.0, 5.0, 10.0]);
    assert_eq!(data2, [0.0, 1.0, 5.0, 10.0]);

    pdqsort_with(
        &mut data,
        |a: &f64, b: &f64| b.total_cmp(a),
        Swap,
        &Config::default(),
    );
    assert_eq!(data, [10.0, 5.0, 1.0, 0.0]);
    assert_eq!(data2, [0.0, 1.0, 5.0, 10.0]);
}

#[test]
fn test_comparator_without_equal() {
    // Never reports Equal, like a C comparator returning only -1 or 1.
    let lt_or_gt = |a: &i32, b: &i32| if a < b { Ordering::Less } else { Ordering::Greater };
    let mut rng = StdRng::seed_from_u64(3);

    for config in all_configs() {
        let mut input: Vec<i32> = (0..500).map(|_| rng.random_range(0..50)).collect();
        let mut expected = input.clone();
        expected.sort();

        pdqsort_with(&mut input, lt_or_gt, Swap, &config);
        assert_eq!(input, expected);
    }
}

#[test]
fn test_fuzz_random() {
    let mut rng = rand::rng();

    for _ in 0..2_000 {
        let len = rng.random_range(0..200);
        let mut input: Vec<u32> = (0..len).map(|_| rng.random_range(0..1_000)).collect();

        let mut expected = input.clone();
        expected.sort();

        pdqsort(&mut input);
        assert_eq!(input, expected);
    }
}

#[test]
fn test_fuzz_every_threshold() {
    let mut rng = StdRng::seed_from_u64(42);

    for config in all_configs() {
        for _ in 0..200 {
            let len = rng.random_range(0..300);
            let mut input: Vec<i64> = (0..len).map(|_| rng.random_range(-100..100)).collect();

            let mut expected = input.clone();
            expected.sort();

            pdqsort_with(&mut input, |a: &i64, b: &i64| a.cmp(b), Swap, &config);
            assert_eq!(input, expected, "shift {}", config.insertion_threshold_shift());
        }
    }
}

#[test]
fn test_permutation_with_duplicates() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut input: Vec<u8> = (0..10_000).map(|_| rng.random_range(0..8)).collect();

    let mut before = [0usize; 8];
    input.iter().for_each(|&x| before[x as usize] += 1);

    pdqsort(&mut input);

    let mut after = [0usize; 8];
    input.iter().for_each(|&x| after[x as usize] += 1);
    assert_eq!(before, after);
    assert!(is_sorted_by(&input, u8::cmp));
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut input: Vec<(u8, u32)> = (0..1_000)
        .map(|i| (rng.random_range(0..10), i))
        .collect();

    let by_key = |a: &(u8, u32), b: &(u8, u32)| a.0.cmp(&b.0);
    pdqsort_by(&mut input, by_key);
    assert!(is_sorted_by(&input, by_key));

    let keys: Vec<u8> = input.iter().map(|p| p.0).collect();
    pdqsort_by(&mut input, by_key);
    let keys_again: Vec<u8> = input.iter().map(|p| p.0).collect();
    assert_eq!(keys, keys_again);
}

#[test]
fn test_custom_key_order() {
    let mut input = vec!["ccc", "a", "bb", "dddd", ""];
    pdqsort_by(&mut input, |a: &&str, b: &&str| b.len().cmp(&a.len()));
    assert_eq!(input, vec!["dddd", "ccc", "bb", "a", ""]);
}

#[test]
fn test_edge_cases() {
    for config in all_configs() {
        // 1. Empty
        let mut input: Vec<i32> = vec![];
        pdqsort_with(&mut input, i32::cmp, Swap, &config);
        assert!(input.is_empty());

        // 2. Single
        let mut input = vec![7];
        pdqsort_with(&mut input, i32::cmp, Swap, &config);
        assert_eq!(input, vec![7]);

        // 3. Two, both directions
        let mut input = vec![2, 1];
        pdqsort_with(&mut input, i32::cmp, Swap, &config);
        assert_eq!(input, vec![1, 2]);
        pdqsort_with(&mut input, |a: &i32, b: &i32| b.cmp(a), Swap, &config);
        assert_eq!(input, vec![2, 1]);

        // 4. All same
        let mut input = vec![4; 100];
        pdqsort_with(&mut input, i32::cmp, Swap, &config);
        assert_eq!(input, vec![4; 100]);

        // 5. Reversed
        let mut input: Vec<i32> = (0..100).rev().collect();
        pdqsort_with(&mut input, i32::cmp, Swap, &config);
        assert_eq!(input, (0..100).collect::<Vec<_>>());

        // 6. Sorted
        let mut input: Vec<i32> = (0..100).collect();
        pdqsort_with(&mut input, i32::cmp, Swap, &config);
        assert_eq!(input, (0..100).collect::<Vec<_>>());
    }
}

#[test]
fn test_trivial_inputs_never_compare() {
    let mut calls = 0;
    let mut input = [1];
    pdqsort_by(&mut input, |a: &i32, b: &i32| {
        calls += 1;
        a.cmp(b)
    });
    assert_eq!(calls, 0);

    let mut input: [i32; 0] = [];
    pdqsort_by(&mut input, |a: &i32, b: &i32| {
        calls += 1;
        a.cmp(b)
    });
    assert_eq!(calls, 0);
}

#[test]
fn test_non_transitive_comparator_keeps_elements() {
    // Rock-paper-scissors: no valid order exists, but nothing may be lost.
    let beats = |a: &u8, b: &u8| match (a % 3, b % 3) {
        (x, y) if x == y => Ordering::Equal,
        (0, 1) | (1, 2) | (2, 0) => Ordering::Less,
        _ => Ordering::Greater,
    };
    let mut rng = StdRng::seed_from_u64(17);
    let mut input: Vec<u8> = (0..300).map(|_| rng.random()).collect();
    let mut expected = input.clone();

    pdqsort_by(&mut input, beats);

    input.sort();
    expected.sort();
    assert_eq!(input, expected);
}

#[test]
fn test_float_total_order() {
    let mut input = vec![3.5, -0.0, f64::INFINITY, 0.0, -7.25, f64::NEG_INFINITY];
    pdqsort_by(&mut input, f64::total_cmp);
    assert_eq!(
        input,
        vec![f64::NEG_INFINITY, -7.25, -0.0, 0.0, 3.5, f64::INFINITY]
    );
    assert!(input[2].is_sign_negative());
}
