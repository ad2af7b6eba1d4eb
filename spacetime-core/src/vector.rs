//! 2D vector quantity type and its implementations.

use crate::dimension::{Differentiate, Integrate, Planar};
use crate::direction::{self, Direction2};
use crate::math;
use crate::numeric::NumericValue;
use crate::quantity::Quantity;
use crate::squared::Squared;
use crate::units::length::Length;
use crate::units::time::Time;
use core::fmt::{Display, Formatter, Result};
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use glam::DVec2;
use ordered_float::OrderedFloat;

/// A 2D vector quantity of dimension `D`.
///
/// `Quantity2<D>` is the planar counterpart of [`Quantity<D>`]: its [`length`](Self::length) and its projections are
/// `Quantity<D>`, and it follows the same derivative lattice when divided or multiplied by a
/// [`Duration`](crate::time::Duration).
///
/// # Examples
///
/// ```rust
/// use spacetime_core::length::Difference2;
/// use spacetime_core::speed::{Speed, Velocity2};
/// use spacetime_core::time::Duration;
/// use spacetime_core::Direction2;
///
/// let v = Velocity2::from_xy(3.0, 4.0);
/// assert_eq!(v.length(), Speed::new(5.0));
/// assert_eq!(v.projected_on(Direction2::UNIT_X), Speed::new(3.0));
///
/// let moved: Difference2 = v * Duration::new(2.0);
/// assert_eq!(moved, Difference2::from_xy(6.0, 8.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantity2<D: Planar>(DVec2, PhantomData<D>);

impl<D: Planar> Quantity2<D> {
    /// The zero vector.
    pub const ZERO: Self = Self::new(DVec2::ZERO);

    /// Wraps a raw vector.
    #[inline]
    pub const fn new(value: DVec2) -> Self {
        Self(value, PhantomData)
    }

    /// Builds the vector from its components.
    #[inline]
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self::new(DVec2::new(x, y))
    }

    /// Returns the raw vector.
    #[inline]
    pub const fn value(self) -> DVec2 {
        self.0
    }

    /// The x component.
    #[inline]
    pub const fn x(self) -> Quantity<D> {
        Quantity::new(self.0.x)
    }

    /// The y component.
    #[inline]
    pub const fn y(self) -> Quantity<D> {
        Quantity::new(self.0.y)
    }

    /// Euclidean length.
    ///
    /// Computed without intermediate overflow, so any finite vector has a finite length unless the length itself
    /// exceeds `f64::MAX`.
    #[inline]
    pub fn length(self) -> Quantity<D> {
        Quantity::new(math::hypot(self.0.x, self.0.y))
    }

    /// Squared Euclidean length, without a square root.
    ///
    /// Overflows to infinity for components above roughly `1.3e154`.
    #[inline]
    pub fn length_squared(self) -> Squared<D> {
        Squared::from_value(self.0.length_squared())
    }

    /// Direction of the vector; [`Direction2::FALLBACK`] for the zero vector.
    #[inline]
    pub fn direction(self) -> Direction2 {
        Direction2::of(self.0)
    }

    /// Signed component of this vector along `axis`.
    ///
    /// The axis is normalized first. A raw vector or displacement of zero length projects everything to zero.
    ///
    /// ```rust
    /// use spacetime_core::{DVec2, Direction2};
    /// use spacetime_core::length::Difference2;
    /// use spacetime_core::speed::{Speed, Velocity2};
    ///
    /// let v = Velocity2::from_xy(3.0, 4.0);
    /// assert_eq!(v.projected_on(Direction2::UNIT_Y), Speed::new(4.0));
    /// assert_eq!(v.projected_on(DVec2::new(0.0, -10.0)), Speed::new(-4.0));
    /// assert_eq!(v.projected_on(Difference2::ZERO), Speed::ZERO);
    /// ```
    #[inline]
    pub fn projected_on<A: ProjectionAxis>(self, axis: A) -> Quantity<D> {
        Quantity::new(self.0.dot(axis.unit_axis()))
    }
}

/// Something a [`Quantity2`] can be projected onto.
pub trait ProjectionAxis {
    /// The normalized axis, or the zero vector if there is none.
    fn unit_axis(self) -> DVec2;
}

impl ProjectionAxis for Direction2 {
    #[inline]
    fn unit_axis(self) -> DVec2 {
        self.vector()
    }
}

impl ProjectionAxis for DVec2 {
    #[inline]
    fn unit_axis(self) -> DVec2 {
        direction::unit_vector(self).unwrap_or(DVec2::ZERO)
    }
}

impl ProjectionAxis for Quantity2<Length> {
    #[inline]
    fn unit_axis(self) -> DVec2 {
        self.0.unit_axis()
    }
}

impl<D: Planar> Default for Quantity2<D> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Planar> Hash for Quantity2<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.0.x).hash(state);
        OrderedFloat(self.0.y).hash(state);
    }
}

impl<D: Planar> NumericValue for Quantity2<D> {
    type Value = DVec2;

    #[inline]
    fn numeric_value(&self) -> DVec2 {
        self.0
    }
}

impl<D: Planar> Display for Quantity2<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}, {}) {}", self.0.x, self.0.y, D::SYMBOL)
    }
}

impl<D: Planar> From<DVec2> for Quantity2<D> {
    #[inline]
    fn from(value: DVec2) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Algebra within one dimension
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Planar> Add for Quantity2<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<D: Planar> AddAssign for Quantity2<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<D: Planar> Sub for Quantity2<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<D: Planar> SubAssign for Quantity2<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<D: Planar> Neg for Quantity2<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<D: Planar> Sum for Quantity2<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, D: Planar> Sum<&'a Quantity2<D>> for Quantity2<D> {
    fn sum<I: Iterator<Item = &'a Quantity2<D>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scaling and ratio
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Planar> Mul<f64> for Quantity2<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<D: Planar> Mul<Quantity2<D>> for f64 {
    type Output = Quantity2<D>;
    #[inline]
    fn mul(self, rhs: Quantity2<D>) -> Self::Output {
        rhs * self
    }
}

impl<D: Planar> MulAssign<f64> for Quantity2<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl<D: Planar> Div<f64> for Quantity2<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<D: Planar> DivAssign<f64> for Quantity2<D> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

/// Dividing by a scalar of the same dimension unwraps to a plain vector.
impl<D: Planar> Div<Quantity<D>> for Quantity2<D> {
    type Output = DVec2;
    #[inline]
    fn div(self, rhs: Quantity<D>) -> DVec2 {
        self.0 / rhs.value()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Derivative lattice
// ─────────────────────────────────────────────────────────────────────────────

impl<D> Div<Quantity<Time>> for Quantity2<D>
where
    D: Planar + Differentiate,
    D::Rate: Planar,
{
    type Output = Quantity2<D::Rate>;
    #[inline]
    fn div(self, rhs: Quantity<Time>) -> Self::Output {
        Quantity2::new(self.0 / rhs.value())
    }
}

impl<D> Mul<Quantity<Time>> for Quantity2<D>
where
    D: Planar + Integrate,
    D::Integral: Planar,
{
    type Output = Quantity2<D::Integral>;
    #[inline]
    fn mul(self, rhs: Quantity<Time>) -> Self::Output {
        Quantity2::new(self.0 * rhs.value())
    }
}

impl<D> Mul<Quantity2<D>> for Quantity<Time>
where
    D: Planar + Integrate,
    D::Integral: Planar,
{
    type Output = Quantity2<D::Integral>;
    #[inline]
    fn mul(self, rhs: Quantity2<D>) -> Self::Output {
        rhs * self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Raising a scalar into the plane
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Planar> Mul<Direction2> for Quantity<D> {
    type Output = Quantity2<D>;
    #[inline]
    fn mul(self, rhs: Direction2) -> Quantity2<D> {
        Quantity2::new(rhs.vector() * self.value())
    }
}

impl<D: Planar> Mul<Quantity<D>> for Direction2 {
    type Output = Quantity2<D>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Quantity2<D> {
        rhs * self
    }
}

impl<D: Planar> Mul<DVec2> for Quantity<D> {
    type Output = Quantity2<D>;
    #[inline]
    fn mul(self, rhs: DVec2) -> Quantity2<D> {
        Quantity2::new(rhs * self.value())
    }
}

impl<D: Planar> Mul<Quantity<D>> for DVec2 {
    type Output = Quantity2<D>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Quantity2<D> {
        rhs * self
    }
}
