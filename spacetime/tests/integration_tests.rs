//! Integration-level tests for the `spacetime` facade crate.

use spacetime::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[test]
fn smoke_test_scalars() {
    let d: Unit = Speed::new(5.0) * Duration::new(2.0);
    assert_eq!(d, Unit::new(10.0));

    let s: Speed = Unit::new(10.0) / Duration::new(2.0);
    assert_eq!(s, Speed::new(5.0));

    let a: Acceleration = s / Duration::new(2.5);
    assert_eq!(a, Acceleration::new(2.0));
}

#[test]
fn smoke_test_vectors() {
    let v: Velocity2 = Speed::new(3.0) * Direction2::of(DVec2::new(1.0, 0.0));
    assert_eq!(v, Velocity2::new(DVec2::new(3.0, 0.0)));

    let d: Difference2 = v * Duration::new(2.0);
    assert_eq!(d, Difference2::from_xy(6.0, 0.0));
}

#[test]
fn projection_of_velocity() {
    let v = Velocity2::new(DVec2::new(3.0, 4.0));
    assert_eq!(v.projected_on(Direction2::of(DVec2::new(1.0, 0.0))), Speed::new(3.0));
    assert_eq!(v.projected_on(DVec2::new(0.0, 2.0)), Speed::new(4.0));
    assert_eq!(v.projected_on(Difference2::from_xy(0.0, -1.0)), Speed::new(-4.0));
}

#[test]
fn direction_of_zero_vector_is_fallback() {
    let first = Direction2::of(DVec2::ZERO);
    let second = Direction2::of(DVec2::new(0.0, 0.0));
    assert_eq!(first, Direction2::FALLBACK);
    assert_eq!(first, second);
    assert!(!first.vector().is_nan());
    assert_eq!(Direction2::try_of(DVec2::ZERO), Err(DirectionError::ZeroLength));
}

#[test]
fn ratio_unwraps() {
    let u = Unit::new(4.0);
    let unwrapped: DVec2 = Difference2::from_xy(8.0, -2.0) / u;
    assert_eq!(unwrapped, DVec2::new(8.0, -2.0) / u.value());

    let ratio: f64 = Speed::new(9.0) / Speed::new(3.0);
    assert_eq!(ratio, 3.0);
}

#[test]
fn squared_companion() {
    let v = Velocity2::from_xy(6.0, 8.0);
    let limit = Speed::new(9.0);
    assert!(v.length_squared() > limit.squared());
    assert_eq!(v.length_squared().root(), Speed::new(10.0));
}

#[test]
fn numeric_value_interop() {
    fn to_render_space<Q: NumericValue<Value = DVec2>>(q: Q) -> [f32; 2] {
        let v = q.numeric_value();
        [v.x as f32, v.y as f32]
    }

    assert_eq!(to_render_space(Difference2::from_xy(1.0, 2.0)), [1.0, 2.0]);
    assert_eq!(to_render_space(Direction2::UNIT_Y), [0.0, 1.0]);
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_values_hash_identically() {
    let a = Velocity2::from_xy(1.0, 2.0);
    assert_eq!(hash_of(&a), hash_of(&Velocity2::from_xy(1.0, 2.0)));

    let signed_zero = Velocity2::from_xy(-0.0, 0.0);
    assert_eq!(signed_zero, Velocity2::ZERO);
    assert_eq!(hash_of(&signed_zero), hash_of(&Velocity2::ZERO));

    assert_eq!(hash_of(&Speed::new(1.0)), hash_of(&Speed::new(1.0)));
    assert_eq!(hash_of(&Unit::new(0.0)), hash_of(&Unit::new(-0.0)));
}

#[test]
fn frame_time_from_std() {
    let dt: Duration = std::time::Duration::from_millis(20).into();
    let step: Difference2 = Velocity2::from_xy(50.0, 0.0) * dt;
    assert_abs_diff_eq!(step.x().value(), 1.0, epsilon = 1e-12);
}

#[test]
fn projectile_apex() {
    // Launched at 45° with 20 m/s; apex reached when vertical speed hits zero.
    let launch = Speed::new(20.0) * Direction2::from_radians(core::f64::consts::FRAC_PI_4);
    let g = STANDARD_GRAVITY;
    let vertical = launch.projected_on(Direction2::UNIT_Y);
    let time_to_apex = Duration::new(vertical / (g * Duration::new(1.0)));
    let horizontal: Unit = launch.projected_on(Direction2::UNIT_X) * time_to_apex;

    // 20² · sin(90°) / (2g)
    assert_relative_eq!(
        horizontal.value(),
        400.0 / (2.0 * 9.806_65),
        max_relative = 1e-12
    );
}

#[test]
fn display_formatting() {
    assert_eq!(format!("{}", Unit::new(42.0)), "42 m");
    assert_eq!(format!("{}", Speed::new(1.5)), "1.5 m/s");
    assert_eq!(format!("{}", Acceleration::new(-2.0)), "-2 m/s²");
    assert_eq!(format!("{}", Duration::new(0.5)), "0.5 s");
    assert_eq!(format!("{}", Acceleration2::from_xy(0.0, -1.0)), "(0, -1) m/s²");
}

#[test]
fn dimension_symbols() {
    assert_eq!(Length::SYMBOL, "m");
    assert_eq!(Time::SYMBOL, "s");
    assert_eq!(SpeedDim::SYMBOL, "m/s");
    assert_eq!(AccelerationDim::SYMBOL, "m/s²");
}

fn finite() -> impl Strategy<Value = f64> {
    -1e4..1e4f64
}

fn nonzero_duration() -> impl Strategy<Value = f64> {
    prop_oneof![1e-3..1e3f64, -1e3..-1e-3f64]
}

proptest! {
    #[test]
    fn prop_acceleration_chain_roundtrip(a in finite(), t in nonzero_duration()) {
        let acc = Acceleration::new(a);
        let dt = Duration::new(t);
        let back: Acceleration = (acc * dt) / dt;
        prop_assert!((back.value() - a).abs() <= 1e-9 * a.abs().max(1.0));
    }

    #[test]
    fn prop_unit_speed_roundtrip(u in finite(), t in nonzero_duration()) {
        let d = Unit::new(u);
        let dt = Duration::new(t);
        let back: Unit = (d / dt) * dt;
        prop_assert!((back.value() - u).abs() <= 1e-9 * u.abs().max(1.0));
    }

    #[test]
    fn prop_acceleration2_roundtrip(x in finite(), y in finite(), t in nonzero_duration()) {
        let a = Acceleration2::from_xy(x, y);
        let dt = Duration::new(t);
        let back: Acceleration2 = (a * dt) / dt;
        let err = (back.value() - a.value()).length();
        prop_assert!(err <= 1e-9 * a.value().length().max(1.0));
    }

    #[test]
    fn prop_speed_times_direction_length(s in finite(), angle in -3.1..3.1f64) {
        let v = Speed::new(s) * Direction2::from_radians(angle);
        prop_assert!((v.length().value() - s.abs()).abs() <= 1e-9 * s.abs().max(1.0));
    }

    #[test]
    fn prop_equal_iff_payload_equal(a in finite(), b in finite()) {
        prop_assert_eq!(Unit::new(a) == Unit::new(b), a == b);
        prop_assert_eq!(
            Velocity2::from_xy(a, b) == Velocity2::from_xy(b, a),
            a == b
        );
    }
}
