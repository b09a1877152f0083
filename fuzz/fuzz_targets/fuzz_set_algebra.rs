#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

use setcalc_core::sets::{difference, intersection, is_subset, symmetric_difference, union};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the split point; small element range forces overlap.
    let split = usize::from(data[0]) % data.len();
    let body = &data[1..];
    let split = split.min(body.len());
    let left: Vec<i64> = body[..split].iter().map(|b| i64::from(b % 16)).collect();
    let right: Vec<i64> = body[split..].iter().map(|b| i64::from(b % 16)).collect();

    let in_left: HashSet<i64> = left.iter().copied().collect();
    let in_right: HashSet<i64> = right.iter().copied().collect();

    let inter = intersection(&left, &right);
    assert!(inter.iter().all(|x| in_left.contains(x) && in_right.contains(x)));

    let uni = union(&left, &right);
    let uni_set: HashSet<i64> = uni.iter().copied().collect();
    assert_eq!(uni.len(), uni_set.len(), "union emitted a duplicate");
    assert_eq!(uni_set, &in_left | &in_right);

    let diff = difference(&left, &right);
    assert!(diff.iter().all(|x| !in_right.contains(x)));
    assert_eq!(is_subset(&left, &right), diff.is_empty());

    let sym: HashSet<i64> = symmetric_difference(&left, &right).into_iter().collect();
    let expected: HashSet<i64> = union(&diff, &difference(&right, &left))
        .into_iter()
        .collect();
    assert_eq!(sym, expected);
});
