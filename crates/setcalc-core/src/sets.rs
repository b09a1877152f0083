//! Set algebra over ordered sequences.
//!
//! Inputs are sequences rather than true sets: ordering is preserved and
//! duplicates are only collapsed where an operation says so. Membership is
//! tested through a `HashSet` built from the probed side.

use std::collections::HashSet;
use std::hash::Hash;

fn members<T: Eq + Hash>(items: &[T]) -> HashSet<&T> {
    items.iter().collect()
}

/// Elements of `right` that also occur in `left`, in `right`'s order.
///
/// Every qualifying occurrence in `right` is emitted, so duplicates in
/// `right` survive.
#[must_use]
pub fn intersection<T: Eq + Hash + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let seen = members(left);
    right
        .iter()
        .filter(|item| seen.contains(item))
        .cloned()
        .collect()
}

/// Elements of `left` then `right`, each distinct value emitted once at its
/// first occurrence.
#[must_use]
pub fn union<T: Eq + Hash + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut emitted = HashSet::with_capacity(left.len() + right.len());
    left.iter()
        .chain(right)
        .filter(|item| emitted.insert(*item))
        .cloned()
        .collect()
}

/// Elements of `left` absent from `right`, in `left`'s order.
#[must_use]
pub fn difference<T: Eq + Hash + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let excluded = members(right);
    left.iter()
        .filter(|item| !excluded.contains(item))
        .cloned()
        .collect()
}

/// `left \ right` in `left`'s order followed by `right \ left` in `right`'s
/// order.
#[must_use]
pub fn symmetric_difference<T: Eq + Hash + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let in_left = members(left);
    let in_right = members(right);
    let mut result: Vec<T> = left
        .iter()
        .filter(|item| !in_right.contains(item))
        .cloned()
        .collect();
    result.extend(right.iter().filter(|item| !in_left.contains(item)).cloned());
    result
}

/// Whether every element of `left` occurs in `right`.
#[must_use]
pub fn is_subset<T: Eq + Hash>(left: &[T], right: &[T]) -> bool {
    let available = members(right);
    left.iter().all(|item| available.contains(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_sample() {
        assert_eq!(intersection(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
    }

    #[test]
    fn intersection_keeps_right_duplicates() {
        assert_eq!(intersection(&[2], &[2, 5, 2]), vec![2, 2]);
    }

    #[test]
    fn intersection_follows_right_order() {
        assert_eq!(intersection(&[1, 2, 3], &[3, 1]), vec![3, 1]);
    }

    #[test]
    fn union_sample() {
        assert_eq!(union(&[1, 2, 3], &[2, 3, 4]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn union_collapses_left_duplicates() {
        assert_eq!(union(&[1, 1, 2], &[2, 3, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn union_with_self_deduplicates() {
        let a = [4, 1, 4, 2, 1];
        assert_eq!(union(&a, &a), vec![4, 1, 2]);
    }

    #[test]
    fn difference_sample() {
        assert_eq!(difference(&[1, 2, 3], &[2, 3, 4]), vec![1]);
    }

    #[test]
    fn difference_keeps_left_duplicates() {
        assert_eq!(difference(&[1, 1, 2], &[2]), vec![1, 1]);
    }

    #[test]
    fn symmetric_difference_sample() {
        assert_eq!(symmetric_difference(&[1, 2, 3], &[2, 3, 4]), vec![1, 4]);
    }

    #[test]
    fn symmetric_difference_disjoint() {
        assert_eq!(symmetric_difference(&[1, 2], &[3]), vec![1, 2, 3]);
    }

    #[test]
    fn subset_sample() {
        assert!(is_subset(&[1, 2], &[1, 2, 3]));
        assert!(!is_subset(&[1, 2, 3], &[1, 2]));
    }

    #[test]
    fn empty_is_subset_of_anything() {
        assert!(is_subset::<i64>(&[], &[]));
        assert!(is_subset(&[], &[7]));
    }

    #[test]
    fn empty_operands() {
        let empty: [i64; 0] = [];
        assert!(intersection(&empty, &[1]).is_empty());
        assert_eq!(union(&empty, &[1]), vec![1]);
        assert!(difference(&empty, &[1]).is_empty());
        assert_eq!(symmetric_difference(&empty, &[1]), vec![1]);
    }

    #[test]
    fn works_with_strings() {
        let left = ["a".to_string(), "b".to_string()];
        let right = ["b".to_string(), "c".to_string()];
        assert_eq!(intersection(&left, &right), vec!["b".to_string()]);
    }
}
