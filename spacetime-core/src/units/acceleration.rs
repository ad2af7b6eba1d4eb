//! Scalar and 2D accelerations.
//!
//! Acceleration is the end of the lattice: it integrates to [`SpeedDim`] but has no rate.

use crate::units::speed::SpeedDim;
use crate::{Quantity, Quantity2};
use spacetime_derive::Dimension;

/// Dimension tag for acceleration (`Length / Time²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Dimension)]
#[dimension(symbol = "m/s²", integral = SpeedDim, planar)]
pub struct AccelerationDim;

/// A signed scalar acceleration.
pub type Acceleration = Quantity<AccelerationDim>;

/// A 2D acceleration.
pub type Acceleration2 = Quantity2<AccelerationDim>;

/// Standard gravity, `9.806 65 m/s²`.
pub const STANDARD_GRAVITY: Acceleration = Acceleration::new(9.806_65);
