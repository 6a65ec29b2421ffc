//! Unit tests for the RNG adapter.
//!
//! These verify:
//! - Seeding semantics (no-op `set_seed`, fatal `set_seed_random`)
//! - Distribution properties (uniform range and mean, normal moments)
//! - Bulk fill behaviour, including the degenerate integer range
//! - Reproducibility against the host's seeding contract

use super::*;
use crate::host::SeededHost;

fn adapter(seed: u64) -> HostRng<SeededHost> {
    HostRng::new(SeededHost::from_seed(seed))
}

#[test]
fn test_uniform_range_and_mean() {
    let mut rng = adapter(42);
    let n = 100_000;

    let mut sum = 0.0;
    for _ in 0..n {
        let value = rng.uniform();
        assert!((0.0..1.0).contains(&value), "draw {} out of [0, 1)", value);
        sum += value;
    }

    let mean = sum / n as f64;
    assert!(
        (mean - 0.5).abs() < 0.01,
        "uniform sample mean {} too far from 0.5",
        mean
    );
}

#[test]
fn test_uniform_int_range() {
    let mut rng = adapter(42);
    for _ in 0..10_000 {
        let value = rng.uniform_int();
        assert!(value >= 0);
    }
}

#[test]
fn test_normal_moments() {
    let mut rng = adapter(42);
    let n = 100_000;

    let draws: Vec<f64> = (0..n).map(|_| rng.normal()).collect();
    let mean = draws.iter().sum::<f64>() / n as f64;
    let variance = draws.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    let std_dev = variance.sqrt();

    assert!(mean.abs() < 0.05, "normal sample mean {} too far from 0", mean);
    assert!(
        (std_dev - 1.0).abs() < 0.05,
        "normal sample std dev {} too far from 1",
        std_dev
    );
}

#[test]
fn test_normal_draws_are_finite() {
    let mut rng = adapter(7);
    for _ in 0..10_000 {
        assert!(rng.normal().is_finite());
    }
}

#[test]
fn test_set_seed_is_a_no_op() {
    // A host that saw a no-op seed call must keep producing the same stream
    // as an identically-seeded host that never saw one.
    let mut seeded = adapter(12345);
    let mut untouched = adapter(12345);

    for _ in 0..10 {
        assert_eq!(seeded.uniform(), untouched.uniform());
    }

    seeded.set_seed(999);

    for _ in 0..100 {
        assert_eq!(seeded.uniform(), untouched.uniform());
    }
}

#[test]
#[should_panic(expected = "host runtime's own seeding entry point")]
fn test_set_seed_random_is_fatal() {
    let mut rng = adapter(42);
    rng.set_seed_random();
}

#[test]
fn test_max_value() {
    let rng = adapter(0);
    assert_eq!(rng.max_value(), i32::MAX);
}

#[test]
fn test_fill_uniform_range_bounds() {
    let mut rng = adapter(42);
    let mut buf = [0.0_f64; 1000];
    rng.fill_uniform_range(&mut buf, -3.0, 5.0);

    for &value in &buf {
        assert!((-3.0..5.0).contains(&value), "draw {} out of [-3, 5)", value);
    }
}

#[test]
fn test_fill_normal_scales_draws() {
    use approx::assert_relative_eq;

    let mut rng = adapter(42);
    let n = 100_000;
    let mut buf = vec![0.0_f64; n];
    rng.fill_normal(&mut buf, 10.0, 2.0);

    let mean = buf.iter().sum::<f64>() / n as f64;
    let variance = buf.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n as f64;

    assert_relative_eq!(mean, 10.0, max_relative = 0.01);
    assert_relative_eq!(variance.sqrt(), 2.0, max_relative = 0.05);
}

#[test]
fn test_fill_uniform_int_degenerate_range() {
    let mut rng = adapter(42);
    let mut buf = [0_i32; 257];
    rng.fill_uniform_int(&mut buf, 5, 5);
    assert!(buf.iter().all(|&v| v == 5));
}

#[test]
fn test_fill_uniform_int_bounds() {
    let mut rng = adapter(42);
    let mut buf = [0_i32; 10_000];
    rng.fill_uniform_int(&mut buf, -7, 11);

    for &value in &buf {
        assert!((-7..=11).contains(&value), "draw {} out of [-7, 11]", value);
    }
}

#[test]
fn test_fill_uniform_int_covers_small_range() {
    let mut rng = adapter(42);
    let mut buf = [0_i32; 10_000];
    rng.fill_uniform_int(&mut buf, 0, 3);

    for expected in 0..=3 {
        assert!(
            buf.contains(&expected),
            "value {} never drawn over 10k samples",
            expected
        );
    }
}

#[test]
fn test_fill_into_f32_buffer() {
    let mut rng = adapter(42);
    let mut buf = [0.0_f32; 1000];
    rng.fill_uniform(&mut buf);

    for &value in &buf {
        assert!((0.0..1.0).contains(&value));
    }
}

#[test]
fn test_fill_uniform_int_into_u32_buffer() {
    let mut rng = adapter(42);
    let mut buf = [0_u32; 1000];
    rng.fill_uniform_int(&mut buf, 0, 100);

    for &value in &buf {
        assert!(value <= 100);
    }
}

#[test]
fn test_empty_buffers() {
    let mut rng = adapter(42);
    let mut empty_f64: [f64; 0] = [];
    let mut empty_i32: [i32; 0] = [];

    rng.fill_uniform(&mut empty_f64);
    rng.fill_uniform_range(&mut empty_f64, 0.0, 1.0);
    rng.fill_normal(&mut empty_f64, 0.0, 1.0);
    rng.fill_uniform_int(&mut empty_i32, 0, 10);
}

#[test]
fn test_host_seed_reproducibility() {
    let mut rng1 = adapter(777);
    let mut rng2 = adapter(777);

    for _ in 0..100 {
        assert_eq!(rng1.normal(), rng2.normal());
    }
}

#[test]
fn test_into_host_returns_wrapped_runtime() {
    let rng = adapter(31);
    assert_eq!(rng.host().seed(), 31);
    let host = rng.into_host();
    assert_eq!(host.seed(), 31);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// All uniform draws land in [0, 1) for any host seed.
        #[test]
        fn prop_uniform_in_range(seed in any::<u64>(), count in 1..2000_usize) {
            let mut rng = adapter(seed);
            for _ in 0..count {
                let value = rng.uniform();
                prop_assert!((0.0..1.0).contains(&value));
            }
        }

        /// Integer fills respect both inclusive bounds for any ordered pair.
        #[test]
        fn prop_fill_uniform_int_in_bounds(
            seed in any::<u64>(),
            a in -1000_i32..1000,
            b in -1000_i32..1000,
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let mut rng = adapter(seed);
            let mut buf = [0_i32; 256];
            rng.fill_uniform_int(&mut buf, low, high);
            for &value in &buf {
                prop_assert!((low..=high).contains(&value));
            }
        }

        /// Identical host seeds produce identical adapter draw sequences.
        #[test]
        fn prop_seed_determinism(seed in any::<u64>(), count in 1..500_usize) {
            let mut rng1 = adapter(seed);
            let mut rng2 = adapter(seed);
            for _ in 0..count {
                prop_assert_eq!(rng1.uniform(), rng2.uniform());
            }
        }
    }
}
