//! Scalar quantity type and its implementations.

use crate::dimension::{Differentiate, Dimension, Integrate};
use crate::math;
use crate::numeric::NumericValue;
use crate::squared::Squared;
use crate::units::time::Time;
use core::fmt::{Display, Formatter, Result};
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use ordered_float::OrderedFloat;

/// A signed scalar quantity of dimension `D`.
///
/// `Quantity<D>` wraps an `f64` together with phantom type information about its dimension. Values of different
/// dimensions cannot be mixed by accident; the only cross-dimension operations are the ones the derivative lattice
/// allows (dividing or multiplying by a [`Duration`](crate::time::Duration)).
///
/// # Examples
///
/// ```rust
/// use spacetime_core::length::Unit;
/// use spacetime_core::speed::Speed;
/// use spacetime_core::time::Duration;
///
/// let travelled: Unit = Speed::new(5.0) * Duration::new(2.0);
/// assert_eq!(travelled, Unit::new(10.0));
///
/// let pace: Speed = travelled / Duration::new(2.0);
/// assert_eq!(pace, Speed::new(5.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Quantity<D: Dimension>(f64, PhantomData<D>);

impl<D: Dimension> Quantity<D> {
    /// The additive identity.
    pub const ZERO: Self = Self::new(0.0);

    /// A quantity with a backing value of one.
    pub const ONE: Self = Self::new(1.0);

    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use spacetime_core::speed::Speed;
    /// assert!(Speed::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use spacetime_core::length::Unit;
    /// let d = Unit::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use spacetime_core::acceleration::Acceleration;
    /// let a = Acceleration::new(-9.81);
    /// assert_eq!(a.abs().value(), 9.81);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Returns `1.0`, `-1.0` or NaN following the sign of the backing value.
    #[inline]
    pub fn signum(self) -> f64 {
        math::signum(self.0)
    }

    /// Returns the smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Returns the larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }

    /// `true` if the backing value is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// `true` if the backing value is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Squares this quantity without losing its dimension.
    ///
    /// Useful for magnitude comparisons against [`crate::Quantity2::length_squared`].
    ///
    /// ```rust
    /// use spacetime_core::speed::Speed;
    /// assert_eq!(Speed::new(-3.0).squared().value(), 9.0);
    /// ```
    #[inline]
    pub fn squared(self) -> Squared<D> {
        Squared::from_root(self.0)
    }
}

impl<D: Dimension> Default for Quantity<D> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension> Hash for Quantity<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.0).hash(state);
    }
}

impl<D: Dimension> NumericValue for Quantity<D> {
    type Value = f64;

    #[inline]
    fn numeric_value(&self) -> f64 {
        self.0
    }
}

impl<D: Dimension> Display for Quantity<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.0, D::SYMBOL)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Algebra within one dimension
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<D: Dimension> AddAssign for Quantity<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<D: Dimension> SubAssign for Quantity<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<D: Dimension> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, D: Dimension> Sum<&'a Quantity<D>> for Quantity<D> {
    fn sum<I: Iterator<Item = &'a Quantity<D>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scaling and ratio
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Mul<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<D: Dimension> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Self::Output {
        rhs * self
    }
}

impl<D: Dimension> MulAssign<f64> for Quantity<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl<D: Dimension> Div<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<D: Dimension> DivAssign<f64> for Quantity<D> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

/// Dividing two quantities of the same dimension yields a plain number.
impl<D: Dimension> Div for Quantity<D> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl<D: Dimension> PartialEq<f64> for Quantity<D> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl<D: Dimension> From<f64> for Quantity<D> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Derivative lattice: divide by time, multiply by time
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Differentiate> Div<Quantity<Time>> for Quantity<D> {
    type Output = Quantity<D::Rate>;
    #[inline]
    fn div(self, rhs: Quantity<Time>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

impl<D: Integrate> Mul<Quantity<Time>> for Quantity<D> {
    type Output = Quantity<D::Integral>;
    #[inline]
    fn mul(self, rhs: Quantity<Time>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<D: Integrate> Mul<Quantity<D>> for Quantity<Time> {
    type Output = Quantity<D::Integral>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Self::Output {
        rhs * self
    }
}
