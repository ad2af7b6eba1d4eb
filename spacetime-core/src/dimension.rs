//! Dimension types and traits.

use core::fmt::Debug;

/// Marker trait for **dimensions** (Length, Time, Speed …).
///
/// A *dimension* is what distinguishes a distance from a speed. Each dimension is modelled as a zero-sized marker
/// type; the predefined ones live in [`crate::units`] and are declared with `#[derive(Dimension)]`:
///
/// ```rust
/// use spacetime_core::Dimension;
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// pub struct Angle;
/// impl Dimension for Angle {
///     const SYMBOL: &'static str = "rad";
/// }
/// ```
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - Every dimension is expressed in its canonical unit (metres, seconds and combinations thereof). There is no
///   conversion factor.
pub trait Dimension: Copy + PartialEq + PartialOrd + Debug + 'static {
    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;
}

/// A dimension that can be divided by a duration.
///
/// `Rate` is the next-lower derivative: distance differentiates to speed, speed to acceleration.
pub trait Differentiate: Dimension {
    /// Dimension of `Self / Time`.
    type Rate: Dimension;
}

/// A dimension that can be multiplied by a duration.
///
/// `Integral` is the next-higher derivative: acceleration integrates to speed, speed to distance.
pub trait Integrate: Dimension {
    /// Dimension of `Self * Time`.
    type Integral: Dimension;
}

/// A dimension that has a 2D vector counterpart ([`crate::Quantity2`]).
///
/// Time is not planar: there is no 2D duration.
pub trait Planar: Dimension {}
