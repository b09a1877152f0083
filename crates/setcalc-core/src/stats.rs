//! Descriptive statistics over integer samples.
//!
//! Empty samples are not rejected: mean, median, variance, and standard
//! deviation return NaN, and the mode is empty.

use std::collections::HashMap;

use crate::Element;

/// Arithmetic mean. NaN for an empty sample.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(sample: &[Element]) -> f64 {
    let sum: i128 = sample.iter().map(|&x| i128::from(x)).sum();
    sum as f64 / sample.len() as f64
}

/// Median of the sorted sample; the average of the two middle values when
/// the count is even. NaN for an empty sample.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn median(sample: &[Element]) -> f64 {
    if sample.is_empty() {
        return f64::NAN;
    }
    let mut sorted = sample.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

/// Every value whose occurrence count equals the highest count.
///
/// The order of the returned values follows hash-map enumeration and is
/// not stable across runs.
#[must_use]
pub fn mode(sample: &[Element]) -> Vec<Element> {
    let mut frequency: HashMap<Element, usize> = HashMap::new();
    let mut max_count = 0;
    for &value in sample {
        let count = frequency.entry(value).or_insert(0);
        *count += 1;
        max_count = max_count.max(*count);
    }
    frequency
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(value, _)| value)
        .collect()
}

/// Population variance (divisor is the sample size). NaN for an empty
/// sample.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn variance(sample: &[Element]) -> f64 {
    let center = mean(sample);
    let squares: f64 = sample
        .iter()
        .map(|&x| (x as f64 - center).powi(2))
        .sum();
    squares / sample.len() as f64
}

/// Population standard deviation.
#[must_use]
pub fn standard_deviation(sample: &[Element]) -> f64 {
    variance(sample).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [Element; 5] = [1, 2, 3, 4, 5];

    #[test]
    fn mean_sample() {
        assert!((mean(&SAMPLE) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mean_negative_values() {
        assert!((mean(&[-4, 2]) + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mean_does_not_overflow() {
        let m = mean(&[i64::MAX, i64::MAX]);
        assert!(m > 9.0e18);
    }

    #[test]
    fn mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn median_odd() {
        assert!((median(&[5, 1, 3]) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn median_even_averages_middle() {
        assert!((median(&[4, 1, 3, 2]) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn median_does_not_reorder_input() {
        let sample = [3, 1, 2];
        let _ = median(&sample);
        assert_eq!(sample, [3, 1, 2]);
    }

    #[test]
    fn median_empty_is_nan() {
        assert!(median(&[]).is_nan());
    }

    #[test]
    fn mode_single_peak() {
        assert_eq!(mode(&[1, 2, 2, 3, 3, 3, 4]), vec![3]);
    }

    #[test]
    fn mode_ties_return_all() {
        let mut modes = mode(&[1, 1, 2, 2, 3]);
        modes.sort_unstable();
        assert_eq!(modes, vec![1, 2]);
    }

    #[test]
    fn mode_all_unique_returns_everything() {
        let mut modes = mode(&[9, 8, 7]);
        modes.sort_unstable();
        assert_eq!(modes, vec![7, 8, 9]);
    }

    #[test]
    fn mode_empty() {
        assert!(mode(&[]).is_empty());
    }

    #[test]
    fn variance_sample() {
        assert!((variance(&SAMPLE) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn variance_constant_is_zero() {
        assert!(variance(&[7, 7, 7]).abs() < f64::EPSILON);
    }

    #[test]
    fn standard_deviation_sample() {
        assert!((standard_deviation(&SAMPLE) - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_spread_is_nan() {
        assert!(variance(&[]).is_nan());
        assert!(standard_deviation(&[]).is_nan());
    }
}
