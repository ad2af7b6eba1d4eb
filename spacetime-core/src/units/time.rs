//! Elapsed time.
//!
//! [`Duration`] is the conversion factor of the whole lattice: dividing by it differentiates, multiplying by it
//! integrates. It converts from [`core::time::Duration`] so a host loop can feed its frame time straight in.
//!
//! ```rust
//! use spacetime_core::time::Duration;
//!
//! let frame = Duration::from(core::time::Duration::from_millis(250));
//! assert_eq!(frame.value(), 0.25);
//! ```

use crate::Quantity;
use spacetime_derive::Dimension;

/// Dimension tag for time. Values are in seconds.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Dimension)]
#[dimension(symbol = "s")]
pub struct Time;

/// Elapsed time in seconds (a "time span").
pub type Duration = Quantity<Time>;

impl From<core::time::Duration> for Duration {
    #[inline]
    fn from(duration: core::time::Duration) -> Self {
        Self::new(duration.as_secs_f64())
    }
}

impl Quantity<Time> {
    /// Converts to a [`core::time::Duration`].
    ///
    /// Returns `None` for negative, infinite or NaN spans, which `core::time::Duration` cannot represent.
    pub fn to_std(self) -> Option<core::time::Duration> {
        core::time::Duration::try_from_secs_f64(self.value()).ok()
    }
}
