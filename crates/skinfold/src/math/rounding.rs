//! Decimal rounding for presentation values.
//!
//! Results are kept at full precision; these helpers produce the values a
//! form shows (density to 4 places, body fat to 2 places).
//!
//! Rounding is decided on the exact binary value: the nearest decimal with
//! `places` digits wins, and an exact tie goes away from zero. The numeric
//! and text forms share that rule, so `format!("{:.4}", round_to(x, 4))`
//! always equals `to_fixed(x, 4)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::Display;
use num_traits::Float;

// Internal dependencies
use crate::math::density::cast;

/// Decimal places shown for body density.
pub const DENSITY_DECIMALS: u32 = 4;

/// Decimal places shown for body-fat percentage.
pub const BODY_FAT_DECIMALS: u32 = 2;

/// True when `value` lies exactly halfway between two `places`-digit decimals.
///
/// A binary value is such a tie exactly when `value * 2^(places + 1)` is an
/// odd integer; scaling by a power of two is exact.
pub fn is_decimal_tie<T: Float>(value: T, places: u32) -> bool {
    let scaled = value.abs() * cast::<T>(2.0).powi(places as i32 + 1);
    scaled.is_finite() && scaled.fract() == T::zero() && scaled % cast::<T>(2.0) == T::one()
}

/// Format `value` with exactly `places` decimal places.
///
/// Non-ties use the correctly rounded digits of the standard formatter;
/// exact ties round away from zero. Non-finite values format as usual.
pub fn to_fixed<T: Float + Display>(value: T, places: u32) -> String {
    let places = places as usize;
    if !is_decimal_tie(value, places as u32) {
        return format!("{:.*}", places, value);
    }

    // A tie has exactly one more decimal digit, a trailing 5.
    let mut digits: Vec<char> = format!("{:.*}", places + 1, value).chars().collect();
    digits.pop();
    if places == 0 {
        digits.pop();
    }
    increment_magnitude(&mut digits);
    digits.into_iter().collect()
}

/// Round `value` to `places` decimal places, agreeing with [`to_fixed`].
///
/// Non-finite values are returned unchanged.
pub fn round_to<T: Float + Display>(value: T, places: u32) -> T {
    if !value.is_finite() {
        return value;
    }
    T::from_str_radix(&to_fixed(value, places), 10).unwrap_or(value)
}

// Add one unit in the last place to a decimal string, carrying through nines.
fn increment_magnitude(digits: &mut Vec<char>) {
    let start = usize::from(digits.first() == Some(&'-'));
    let mut i = digits.len();
    while i > start {
        i -= 1;
        match digits[i] {
            '.' => continue,
            '9' => digits[i] = '0',
            d => {
                digits[i] = char::from(d as u8 + 1);
                return;
            }
        }
    }
    digits.insert(start, '1');
}
