//! Normalized 2D directions.

use crate::math;
use crate::numeric::NumericValue;
use core::fmt::{Display, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::Neg;
use glam::DVec2;
use ordered_float::OrderedFloat;
use thiserror::Error;

/// Reasons a vector cannot be turned into a [`Direction2`] by [`Direction2::try_of`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DirectionError {
    /// The vector has zero length (or is too short to normalize).
    #[error("cannot take the direction of a zero-length vector")]
    ZeroLength,
    /// The vector has an infinite or NaN component.
    #[error("cannot take the direction of a non-finite vector")]
    NonFinite,
}

/// An orientation in the plane, stored as a unit-length vector.
///
/// A `Direction2` carries no magnitude. Multiplying it with a scalar quantity yields the matching 2D quantity, and it
/// serves as a projection axis for [`crate::Quantity2::projected_on`].
///
/// # Zero-length input
///
/// [`Direction2::of`] is total. A zero-length or non-finite vector yields [`Direction2::FALLBACK`], which is
/// [`Direction2::UNIT_X`] (the direction at angle zero). Use [`Direction2::try_of`] to reject such input instead.
///
/// ```rust
/// use spacetime_core::{DVec2, Direction2};
///
/// assert_eq!(Direction2::of(DVec2::new(0.0, 3.0)), Direction2::UNIT_Y);
/// assert_eq!(Direction2::of(DVec2::ZERO), Direction2::FALLBACK);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction2(DVec2);

impl Direction2 {
    /// Pointing along +x (angle zero).
    pub const UNIT_X: Self = Self(DVec2::X);

    /// Pointing along +y (angle π/2).
    pub const UNIT_Y: Self = Self(DVec2::Y);

    /// What [`Direction2::of`] returns for vectors without a direction.
    pub const FALLBACK: Self = Self::UNIT_X;

    /// Returns the direction of `vector`, or [`Direction2::FALLBACK`] if it has none.
    ///
    /// Only zero-length and non-finite vectors have no direction; very large or very small finite vectors are
    /// rescaled before normalizing.
    pub fn of(vector: DVec2) -> Self {
        match unit_vector(vector) {
            Some(unit) => Self(unit),
            None => {
                log::trace!(
                    "direction of degenerate vector ({}, {}), using fallback",
                    vector.x,
                    vector.y
                );
                Self::FALLBACK
            }
        }
    }

    /// Returns the direction of `vector`, rejecting zero-length and non-finite input.
    ///
    /// ```rust
    /// use spacetime_core::{DVec2, Direction2, DirectionError};
    ///
    /// assert_eq!(Direction2::try_of(DVec2::ZERO), Err(DirectionError::ZeroLength));
    /// assert!(Direction2::try_of(DVec2::new(1.0, 1.0)).is_ok());
    /// ```
    pub fn try_of(vector: DVec2) -> Result<Self, DirectionError> {
        if !vector.is_finite() {
            return Err(DirectionError::NonFinite);
        }
        unit_vector(vector)
            .map(Self)
            .ok_or(DirectionError::ZeroLength)
    }

    /// Direction at `radians` counter-clockwise from +x.
    ///
    /// A NaN or infinite angle yields [`Direction2::FALLBACK`].
    ///
    /// ```rust
    /// use spacetime_core::Direction2;
    ///
    /// assert_eq!(Direction2::from_radians(f64::NAN), Direction2::FALLBACK);
    /// ```
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        if !radians.is_finite() {
            log::trace!("direction at non-finite angle {}, using fallback", radians);
            return Self::FALLBACK;
        }
        let (sin, cos) = math::sin_cos(radians);
        Self(DVec2::new(cos, sin))
    }

    /// Angle from +x, counter-clockwise, in `(-π, π]`.
    #[inline]
    pub fn radians(self) -> f64 {
        math::atan2(self.0.y, self.0.x)
    }

    /// The unit vector.
    #[inline]
    pub const fn vector(self) -> DVec2 {
        self.0
    }

    /// The x component of the unit vector.
    #[inline]
    pub const fn x(self) -> f64 {
        self.0.x
    }

    /// The y component of the unit vector.
    #[inline]
    pub const fn y(self) -> f64 {
        self.0.y
    }

    /// The direction rotated a quarter turn counter-clockwise.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self(self.0.perp())
    }
}

/// Normalizes `vector`, or `None` if it is zero-length or non-finite.
///
/// The vector is first divided by its largest component so the length neither overflows nor underflows.
pub(crate) fn unit_vector(vector: DVec2) -> Option<DVec2> {
    if !vector.is_finite() {
        return None;
    }
    let scale = vector.abs().max_element();
    if scale == 0.0 {
        return None;
    }
    let scaled = vector / scale;
    Some(scaled / math::hypot(scaled.x, scaled.y))
}

impl Default for Direction2 {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl Neg for Direction2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Hash for Direction2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.0.x).hash(state);
        OrderedFloat(self.0.y).hash(state);
    }
}

impl NumericValue for Direction2 {
    type Value = DVec2;

    #[inline]
    fn numeric_value(&self) -> DVec2 {
        self.0
    }
}

impl Display for Direction2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::{FRAC_PI_2, PI};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Normalization
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn of_normalizes() {
        let d = Direction2::of(DVec2::new(3.0, 4.0));
        assert_abs_diff_eq!(d.x(), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(d.y(), 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(d.vector().length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn of_axis_aligned_is_exact() {
        assert_eq!(Direction2::of(DVec2::new(7.0, 0.0)), Direction2::UNIT_X);
        assert_eq!(Direction2::of(DVec2::new(0.0, 0.5)), Direction2::UNIT_Y);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Degenerate input
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn zero_vector_falls_back() {
        let d = Direction2::of(DVec2::ZERO);
        assert_eq!(d, Direction2::FALLBACK);
        assert_eq!(d, Direction2::UNIT_X);
        assert!(!d.x().is_nan() && !d.y().is_nan());
    }

    #[test]
    fn zero_vector_fallback_is_idempotent() {
        let first = Direction2::of(DVec2::ZERO);
        let again = Direction2::of(DVec2::ZERO);
        assert_eq!(first, again);
        assert_eq!(Direction2::of(first.vector()), first);
    }

    #[test]
    fn non_finite_vector_falls_back() {
        assert_eq!(
            Direction2::of(DVec2::new(f64::NAN, 1.0)),
            Direction2::FALLBACK
        );
        assert_eq!(
            Direction2::of(DVec2::new(f64::INFINITY, 0.0)),
            Direction2::FALLBACK
        );
    }

    #[test]
    fn non_finite_angle_falls_back() {
        for angle in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let d = Direction2::from_radians(angle);
            assert_eq!(d, Direction2::FALLBACK);
            assert!(!d.x().is_nan() && !d.y().is_nan());
        }
    }

    #[test]
    fn huge_vector_keeps_its_direction() {
        assert_eq!(Direction2::of(DVec2::new(0.0, 1e200)), Direction2::UNIT_Y);
        assert_eq!(Direction2::try_of(DVec2::new(0.0, 1e200)), Ok(Direction2::UNIT_Y));
        assert_eq!(Direction2::of(DVec2::new(-f64::MAX, 0.0)), -Direction2::UNIT_X);

        let d = Direction2::of(DVec2::new(3e300, 4e300));
        assert_abs_diff_eq!(d.x(), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(d.y(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn tiny_vector_keeps_its_direction() {
        let d = Direction2::of(DVec2::new(3e-320, -4e-320));
        assert_abs_diff_eq!(d.x(), 0.6, epsilon = 1e-3);
        assert_abs_diff_eq!(d.y(), -0.8, epsilon = 1e-3);
        assert_abs_diff_eq!(d.vector().length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn try_of_reports_reason() {
        assert_eq!(
            Direction2::try_of(DVec2::ZERO),
            Err(DirectionError::ZeroLength)
        );
        assert_eq!(
            Direction2::try_of(DVec2::new(f64::NAN, 0.0)),
            Err(DirectionError::NonFinite)
        );
        assert_eq!(
            Direction2::try_of(DVec2::new(0.0, -2.0)),
            Ok(-Direction2::UNIT_Y)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            DirectionError::ZeroLength.to_string(),
            "cannot take the direction of a zero-length vector"
        );
        assert_eq!(
            DirectionError::NonFinite.to_string(),
            "cannot take the direction of a non-finite vector"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Angles
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn from_radians_zero_is_unit_x() {
        assert_eq!(Direction2::from_radians(0.0), Direction2::UNIT_X);
    }

    #[test]
    fn radians_of_axes() {
        assert_eq!(Direction2::UNIT_X.radians(), 0.0);
        assert_abs_diff_eq!(Direction2::UNIT_Y.radians(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!((-Direction2::UNIT_X).radians(), PI, epsilon = 1e-12);
    }

    #[test]
    fn perpendicular_turns_counter_clockwise() {
        assert_eq!(Direction2::UNIT_X.perpendicular(), Direction2::UNIT_Y);
        assert_eq!(Direction2::UNIT_Y.perpendicular(), -Direction2::UNIT_X);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Direction2::UNIT_Y), "(0, 1)");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_of_is_unit_length(x in -1e6..1e6f64, y in -1e6..1e6f64) {
            let d = Direction2::of(DVec2::new(x, y));
            prop_assert!((d.vector().length() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_of_is_unit_length_at_any_scale(
            x in -1.0..1.0f64,
            y in -1.0..1.0f64,
            exp in -300i32..300,
        ) {
            prop_assume!(x.abs().max(y.abs()) > 1e-3);
            let scale = 10f64.powi(exp);
            let d = Direction2::of(DVec2::new(x * scale, y * scale));
            let expected = Direction2::of(DVec2::new(x, y));
            prop_assert!((d.vector().length() - 1.0).abs() < 1e-9);
            prop_assert!((d.vector() - expected.vector()).length() < 1e-6);
        }

        #[test]
        fn prop_radians_roundtrip(angle in -3.1..3.1f64) {
            let d = Direction2::from_radians(angle);
            prop_assert!((d.radians() - angle).abs() < 1e-9);
        }
    }
}
