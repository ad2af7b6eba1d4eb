//! Strongly typed distances, speeds, accelerations and their 2D counterparts.
//!
//! `spacetime` is the user-facing crate in this workspace. It re-exports the full API from `spacetime-core` plus the
//! predefined dimensions of the kinematic chain.
//!
//! The core idea is: a number always carries its dimension in its type. A [`Speed`] is a `Quantity<SpeedDim>`, a
//! [`Velocity2`] is a `Quantity2<SpeedDim>`, and the only ways to move between dimensions are the ones physics
//! allows: divide by a [`Duration`] to differentiate, multiply by one to integrate, multiply a scalar by a
//! [`Direction2`] to give it a heading, take a [`length`](Quantity2::length) or a
//! [`projection`](Quantity2::projected_on) to get back to a scalar.
//!
//! # What this crate solves
//!
//! - Prevents unit-confusion bugs such as adding a velocity to a displacement.
//! - Gives every operator a precise result type, so `velocity * dt` is known to be a displacement.
//! - Keeps the raw payload one call away ([`NumericValue`]) for rendering or physics code.
//!
//! # What this crate does not try to solve
//!
//! - Unit conversion: everything is in metres and seconds.
//! - 3D quantities.
//! - Runtime unit checking: illegal combinations do not compile.
//!
//! # Quick start
//!
//! ```rust
//! use spacetime::*;
//!
//! let dt = Duration::new(0.5);
//! let gravity: Acceleration2 = STANDARD_GRAVITY * -Direction2::UNIT_Y;
//!
//! let mut velocity = Velocity2::from_xy(4.0, 0.0);
//! let mut offset = Difference2::ZERO;
//! for _ in 0..2 {
//!     velocity += gravity * dt;
//!     offset += velocity * dt;
//! }
//!
//! assert_eq!(offset.x(), Unit::new(4.0));
//! assert!(offset.y() < Unit::ZERO);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use spacetime::{Difference2, Velocity2};
//!
//! let d = Difference2::from_xy(1.0, 0.0);
//! let v = Velocity2::from_xy(1.0, 0.0);
//! let _ = d + v; // cannot add a velocity to a displacement
//! ```
//!
//! ```compile_fail
//! use spacetime::{Acceleration, Duration};
//!
//! // acceleration has no further rate
//! let _ = Acceleration::new(1.0) / Duration::new(1.0);
//! ```
//!
//! # Modules
//!
//! Dimensions are grouped under modules (also re-exported at the crate root for convenience):
//!
//! - `spacetime::length` ([`Unit`], [`Difference2`])
//! - `spacetime::time` ([`Duration`])
//! - `spacetime::speed` ([`Speed`], [`Velocity2`])
//! - `spacetime::acceleration` ([`Acceleration`], [`Acceleration2`])
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `spacetime-core`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! spacetime = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Operators never panic and never return `Result`; they follow IEEE-754 behavior. Taking the direction of a
//! zero-length vector yields [`Direction2::FALLBACK`]; [`Direction2::try_of`] reports a [`DirectionError`] instead.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use spacetime_core::*;

/// Derive macro used by `spacetime-core` to define dimension marker types.
///
/// This macro expands in terms of `crate::Dimension` and the lattice traits, so it is intended for use inside
/// `spacetime-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use spacetime_derive::Dimension;

pub use spacetime_core::units::acceleration;
pub use spacetime_core::units::length;
pub use spacetime_core::units::speed;
pub use spacetime_core::units::time;

pub use spacetime_core::units::acceleration::*;
pub use spacetime_core::units::length::*;
pub use spacetime_core::units::speed::*;
pub use spacetime_core::units::time::*;
