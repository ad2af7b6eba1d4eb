//! Float helpers that are not available in `core`.

#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sqrt(x)
    }
}

#[inline]
pub(crate) fn hypot(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.hypot(y)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::hypot(x, y)
    }
}

#[inline]
pub(crate) fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        y.atan2(x)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::atan2(y, x)
    }
}

#[inline]
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    {
        angle.sin_cos()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sincos(angle)
    }
}

#[inline]
pub(crate) fn signum(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.signum()
    }
    #[cfg(not(feature = "std"))]
    {
        if x.is_nan() {
            f64::NAN
        } else {
            libm::copysign(1.0, x)
        }
    }
}
