//! Core type system for strongly typed kinematic quantities.
//!
//! `spacetime-core` provides a small, zero-cost model of the kinematic chain used by real-time simulations:
//!
//! - A *dimension* is a zero-sized marker type implementing [`Dimension`] (length, time, speed, acceleration).
//! - A scalar tagged with a dimension is a [`Quantity<D>`], backed by an `f64`.
//! - A planar vector tagged with a dimension is a [`Quantity2<D>`], backed by a [`DVec2`].
//! - An orientation without magnitude is a [`Direction2`].
//! - Dividing by a [`Duration`](time::Duration) moves one step down the derivative lattice ([`Differentiate`]),
//!   multiplying by one moves one step up ([`Integrate`]).
//!
//! Most users should depend on `spacetime` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions: a velocity cannot be added to a displacement.
//! - A closed algebra between them: `Velocity2 * Duration` is a `Difference2`, `Difference2 / Duration` is a
//!   `Velocity2`, and so on.
//! - Zero runtime overhead for dimension tags (phantom types only).
//!
//! # What this crate does not try to solve
//!
//! - Unit systems other than metres and seconds; there is no conversion between units.
//! - 3D quantities.
//! - Simulation logic (stepping, collision, …) beyond the arithmetic primitives.
//!
//! # Quick start
//!
//! ```rust
//! use spacetime_core::length::{Difference2, Unit};
//! use spacetime_core::speed::{Speed, Velocity2};
//! use spacetime_core::time::Duration;
//! use spacetime_core::{DVec2, Direction2};
//!
//! let v: Velocity2 = Speed::new(3.0) * Direction2::of(DVec2::new(1.0, 0.0));
//! let moved: Difference2 = v * Duration::new(2.0);
//! assert_eq!(moved.length(), Unit::new(6.0));
//! assert_eq!(moved / Duration::new(2.0), v);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `spacetime-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! spacetime-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//!
//! # Panics and errors
//!
//! Operators never panic and never return `Result`. They follow IEEE-754 behavior: dividing by a zero scalar or a
//! zero [`Duration`](time::Duration) yields infinities or NaN. The one exception is normalization: taking the
//! direction of a zero-length vector yields the documented [`Direction2::FALLBACK`] rather than NaN, and
//! [`Direction2::try_of`] reports a [`DirectionError`] for callers that prefer to reject such input.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod direction;
mod math;
mod numeric;
mod quantity;
mod squared;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{Differentiate, Dimension, Integrate, Planar};
pub use direction::{Direction2, DirectionError};
pub use numeric::NumericValue;
pub use quantity::Quantity;
pub use squared::Squared;
pub use vector::{ProjectionAxis, Quantity2};

/// The raw 2D vector type backing [`Quantity2`] and [`Direction2`].
pub use glam::DVec2;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined dimension modules
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined dimension modules.
///
/// These are defined in `spacetime-core` so they can implement the lattice traits without running into Rust's
/// orphan rules.
pub mod units;

pub use units::acceleration;
pub use units::length;
pub use units::speed;
pub use units::time;
