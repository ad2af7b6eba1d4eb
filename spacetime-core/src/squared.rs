//! Squared magnitudes.

use crate::dimension::Dimension;
use crate::math;
use crate::numeric::NumericValue;
use crate::quantity::Quantity;
use core::fmt::{Display, Formatter, Result};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::Add;
use ordered_float::OrderedFloat;

/// The square of a quantity of dimension `D`.
///
/// Lets callers compare magnitudes without a square root:
///
/// ```rust
/// use spacetime_core::speed::{Speed, Velocity2};
///
/// let v = Velocity2::from_xy(3.0, 4.0);
/// assert!(v.length_squared() > Speed::new(4.9).squared());
/// assert!(v.length_squared() < Speed::new(5.1).squared());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Squared<D: Dimension>(f64, PhantomData<D>);

impl<D: Dimension> Squared<D> {
    /// Zero squared.
    pub const ZERO: Self = Self::from_value(0.0);

    /// Wraps a value that is already squared.
    #[inline]
    pub const fn from_value(squared: f64) -> Self {
        Self(squared, PhantomData)
    }

    /// Squares `root`.
    #[inline]
    pub fn from_root(root: f64) -> Self {
        Self::from_value(root * root)
    }

    /// Returns the squared value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the non-negative square root as a quantity.
    #[inline]
    pub fn root(self) -> Quantity<D> {
        Quantity::new(math::sqrt(self.0))
    }
}

impl<D: Dimension> Add for Squared<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_value(self.0 + rhs.0)
    }
}

impl<D: Dimension> Hash for Squared<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.0).hash(state);
    }
}

impl<D: Dimension> NumericValue for Squared<D> {
    type Value = f64;

    #[inline]
    fn numeric_value(&self) -> f64 {
        self.0
    }
}

impl<D: Dimension> Display for Squared<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})²", self.0, D::SYMBOL)
    }
}
