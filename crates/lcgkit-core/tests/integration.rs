//! Integration tests for lcgkit-core.
//!
//! These tests exercise the public surface end to end:
//! parameter validation → sampling → stream properties.

use lcgkit_core::{LcgParams, MINSTD, RANDU, generate, good_generator, randu};

#[test]
fn generate_matches_named_generators() {
    assert_eq!(
        generate(42, 65539, 0, 1 << 31, 256).unwrap(),
        randu(42, 256).unwrap()
    );
    assert_eq!(
        generate(42, 16807, 0, (1 << 31) - 1, 256).unwrap(),
        good_generator(42, 256).unwrap()
    );
}

#[test]
fn named_constants_sample_like_their_functions() {
    assert_eq!(RANDU.sample(7, 100).unwrap(), randu(7, 100).unwrap());
    assert_eq!(
        MINSTD.sample(7, 100).unwrap(),
        good_generator(7, 100).unwrap()
    );
}

#[test]
fn long_streams_stay_in_unit_interval() {
    let sample = good_generator(1, 100_000).unwrap();
    assert_eq!(sample.len(), 100_000);
    assert!(sample.iter().all(|v| (0.0..1.0).contains(v)));
}

#[test]
fn custom_parameterization_is_reproducible() {
    let params = LcgParams::new(1_103_515_245, 12345, 1 << 31).unwrap();
    let a = params.sample(1, 10_000).unwrap();
    let b = params.sample(1, 10_000).unwrap();
    assert_eq!(a, b);
    assert!(a.iter().all(|v| (0.0..1.0).contains(v)));
}

#[test]
fn params_serialize_to_json() {
    let json = serde_json::to_value(RANDU).unwrap();
    assert_eq!(json["a"], 65539);
    assert_eq!(json["c"], 0);
    assert_eq!(json["m"], 2_147_483_648u64);
}
