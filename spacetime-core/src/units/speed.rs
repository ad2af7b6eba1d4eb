//! Speeds and velocities.
//!
//! ```rust
//! use spacetime_core::speed::{Speed, Velocity2};
//! use spacetime_core::length::Unit;
//! use spacetime_core::time::Duration;
//! use spacetime_core::{DVec2, Direction2};
//!
//! let cruise = Speed::new(3.0);
//! let v: Velocity2 = cruise * Direction2::of(DVec2::new(1.0, 0.0));
//! assert_eq!(v, Velocity2::from_xy(3.0, 0.0));
//!
//! let covered: Unit = cruise * Duration::new(4.0);
//! assert_eq!(covered, Unit::new(12.0));
//! ```

use crate::units::acceleration::AccelerationDim;
use crate::units::length::Length;
use crate::{Quantity, Quantity2};
use spacetime_derive::Dimension;

/// Dimension tag for speed (`Length / Time`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Dimension)]
#[dimension(symbol = "m/s", rate = AccelerationDim, integral = Length, planar)]
pub struct SpeedDim;

/// A signed scalar speed.
pub type Speed = Quantity<SpeedDim>;

/// A 2D velocity.
pub type Velocity2 = Quantity2<SpeedDim>;
