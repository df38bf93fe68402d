//! Siri two-compartment equation.
//!
//! Converts body density (g/cc) into a body-fat percentage:
//!
//! ```text
//! body fat % = (4.95 / density - 4.50) * 100
//! ```
//!
//! The conversion is a raw division. A zero density yields an infinite
//! percentage here; the engine rejects that case before calling in.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::density::cast;

/// Numerator of the Siri equation.
pub const SIRI_NUMERATOR: f64 = 4.95;

/// Offset subtracted after the division.
pub const SIRI_OFFSET: f64 = 4.50;

/// Body-fat percentage for a body density in g/cc.
#[inline]
pub fn body_fat_percent<T: Float>(density: T) -> T {
    (cast::<T>(SIRI_NUMERATOR) / density - cast::<T>(SIRI_OFFSET)) * cast::<T>(100.0)
}
