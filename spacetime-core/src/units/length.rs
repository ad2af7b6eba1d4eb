//! Distances and displacements.
//!
//! ```rust
//! use spacetime_core::length::{Difference2, Unit};
//! use spacetime_core::speed::{Speed, Velocity2};
//! use spacetime_core::time::Duration;
//!
//! let v: Speed = Unit::new(100.0) / Duration::new(20.0);
//! assert_eq!(v.value(), 5.0);
//!
//! let step: Velocity2 = Difference2::from_xy(3.0, -6.0) / Duration::new(3.0);
//! assert_eq!(step, Velocity2::from_xy(1.0, -2.0));
//! ```

use crate::units::speed::SpeedDim;
use crate::{Quantity, Quantity2};
use spacetime_derive::Dimension;

/// Dimension tag for distance.
///
/// Differentiates to [`SpeedDim`]. Distance has no integral here; composing displacements with absolute positions
/// is left to the host.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Dimension)]
#[dimension(symbol = "m", rate = SpeedDim, planar)]
pub struct Length;

/// A signed scalar distance.
pub type Unit = Quantity<Length>;

/// A 2D displacement (a difference between two positions).
pub type Difference2 = Quantity2<Length>;
