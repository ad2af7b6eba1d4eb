//! Predefined dimensions grouped by module.
//!
//! `spacetime-core` ships the four dimensions of the kinematic chain so that the derivative lattice, formatting and
//! 2D counterparts work out of the box without downstream crates having to fight Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`length`]: distance ([`length::Unit`]) and displacement ([`length::Difference2`]).
//! - [`time`]: elapsed time ([`time::Duration`]), the factor that links every other dimension.
//! - [`speed`]: speed ([`speed::Speed`]) and velocity ([`speed::Velocity2`]).
//! - [`acceleration`]: scalar ([`acceleration::Acceleration`]) and 2D ([`acceleration::Acceleration2`]) acceleration.
//!
//! The lattice, read left to right by dividing by a duration and right to left by multiplying by one:
//!
//! ```text
//! Length  --/t-->  Speed  --/t-->  Acceleration
//!         <--*t--         <--*t--
//! ```

pub mod acceleration;
pub mod length;
pub mod speed;
pub mod time;
