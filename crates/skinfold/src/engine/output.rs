//! Output type for body-composition calculations.
//!
//! ## Purpose
//!
//! This module defines [`CalculationResult`], the body density and body-fat
//! percentage produced by one calculation, together with the presentation
//! helpers a form needs.
//!
//! ## Design notes
//!
//! * **Full precision**: Fields hold unrounded values; rounding only happens
//!   in the accessor and formatting helpers.
//! * **Fixed decimals**: Text output always shows 4 decimal places for density
//!   and 2 for body fat, trailing zeros included. Exact ties round away from
//!   zero, and the rounded accessors always agree with the text.
//! * **Ergonomics**: Implements `Display` with the labels and units of the
//!   reference form.
//!
//! ## Invariants
//!
//! * A result only exists when every input was valid; all fields are finite.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::rounding::{round_to, to_fixed, BODY_FAT_DECIMALS, DENSITY_DECIMALS};

// ============================================================================
// Result Structure
// ============================================================================

/// Body density and body-fat estimate for one subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult<T> {
    /// Sum of the three (averaged) skinfolds in millimetres.
    pub site_sum: T,

    /// Body density in g/cc, unrounded.
    pub body_density: T,

    /// Body fat in percent, unrounded.
    pub body_fat_percent: T,
}

impl<T: Float + Display> CalculationResult<T> {
    /// Body density rounded to 4 decimal places.
    pub fn rounded_density(&self) -> T {
        round_to(self.body_density, DENSITY_DECIMALS)
    }

    /// Body-fat percentage rounded to 2 decimal places.
    pub fn rounded_body_fat(&self) -> T {
        round_to(self.body_fat_percent, BODY_FAT_DECIMALS)
    }

    /// Density as shown on a form, e.g. `"1.0740"`.
    pub fn density_text(&self) -> String {
        to_fixed(self.body_density, DENSITY_DECIMALS)
    }

    /// Body fat as shown on a form, e.g. `"10.35"`.
    pub fn body_fat_text(&self) -> String {
        to_fixed(self.body_fat_percent, BODY_FAT_DECIMALS)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for CalculationResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Body Density: {} g/cc", self.density_text())?;
        write!(f, "Body Fat Percentage: {}%", self.body_fat_text())
    }
}
