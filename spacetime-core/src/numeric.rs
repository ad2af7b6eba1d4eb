//! Shared access to the raw payload of every quantity.

/// Implemented by every value type in this crate to expose its raw backing value.
///
/// Generic interop code (rendering, physics stepping loops, …) can read any quantity without knowing its concrete
/// dimension:
///
/// ```rust
/// use spacetime_core::{DVec2, NumericValue};
/// use spacetime_core::speed::{Speed, Velocity2};
///
/// fn raw<Q: NumericValue>(q: Q) -> Q::Value {
///     q.numeric_value()
/// }
///
/// assert_eq!(raw(Speed::new(2.0)), 2.0);
/// assert_eq!(raw(Velocity2::from_xy(1.0, 2.0)), DVec2::new(1.0, 2.0));
/// ```
pub trait NumericValue {
    /// Type of the raw payload (`f64` for scalars, [`glam::DVec2`] for vectors and directions).
    type Value: Copy;

    /// Returns the raw payload.
    fn numeric_value(&self) -> Self::Value;
}
