#![no_main]

use libfuzzer_sys::fuzz_target;

use setcalc_core::stats::{mean, median, mode, standard_deviation, variance};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let sample: Vec<i64> = data.iter().map(|&b| i64::from(b) - 128).collect();
    let min = *sample.iter().min().unwrap_or(&0) as f64;
    let max = *sample.iter().max().unwrap_or(&0) as f64;

    let m = mean(&sample);
    assert!(m >= min && m <= max, "mean {m} outside [{min}, {max}]");

    let med = median(&sample);
    assert!(med >= min && med <= max, "median {med} outside [{min}, {max}]");

    let var = variance(&sample);
    assert!(var >= 0.0, "negative variance {var}");
    assert_eq!(standard_deviation(&sample).to_bits(), var.sqrt().to_bits());

    let modes = mode(&sample);
    assert!(!modes.is_empty());
    let count = |v: i64| sample.iter().filter(|&&x| x == v).count();
    let top = count(modes[0]);
    assert!(modes.iter().all(|&v| count(v) == top));
    assert!(sample.iter().all(|&v| count(v) <= top));
});
