use std::collections::HashSet;

use proptest::prelude::*;
use vennplot::{Fill, Pattern, compute_labels, counts, partition};

fn collections() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0u8..40, 0..25), 2..=6)
}

proptest! {
    #[test]
    fn one_label_per_non_empty_pattern(sets in collections()) {
        let labels = compute_labels(&sets, &[Fill::Number]).unwrap();
        let n = sets.len();
        prop_assert_eq!(labels.len(), (1 << n) - 1);
        let expected: Vec<Pattern> = Pattern::all(n).unwrap().collect();
        let keys: Vec<Pattern> = labels.keys().copied().collect();
        prop_assert_eq!(keys, expected);
        prop_assert!(labels.keys().all(|p| p.to_string().len() == n));
    }

    #[test]
    fn patterns_partition_the_union(sets in collections()) {
        let union: HashSet<u8> = sets.iter().flatten().copied().collect();
        let total: usize = counts(&sets).unwrap().values().sum();
        prop_assert_eq!(total, union.len());

        let parts = partition(&sets).unwrap();
        for (pattern, members) in &parts {
            for element in members {
                for (i, set) in sets.iter().enumerate() {
                    prop_assert_eq!(set.contains(element), pattern.contains(i));
                }
            }
        }
    }

    #[test]
    fn percentages_sum_to_one_hundred(sets in collections()) {
        prop_assume!(sets.iter().any(|s| !s.is_empty()));
        let labels = compute_labels(&sets, &[Fill::Percent]).unwrap();
        let sum: f64 = labels
            .values()
            .map(|l| l.trim_start_matches('(').trim_end_matches("%)").parse::<f64>().unwrap())
            .sum();
        // each label is rounded to 0.05 at most
        prop_assert!((sum - 100.0).abs() <= 0.05 * labels.len() as f64 + 1e-9);
    }
}

#[test]
fn disjoint_sets_split_evenly() {
    let labels = compute_labels(&[vec![1, 2], vec![3, 4]], &[Fill::Percent]).unwrap();
    let get = |k: &str| labels[&k.parse::<Pattern>().unwrap()].clone();
    assert_eq!(get("10"), "(50.0%)");
    assert_eq!(get("01"), "(50.0%)");
    assert_eq!(get("11"), "(0.0%)");
}
