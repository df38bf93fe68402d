//! Jackson-Pollock 3-site body-density equations.
//!
//! ## Purpose
//!
//! This module holds the sex-specific regression coefficients and evaluates
//! body density (g/cc) from the sum of three skinfolds and the subject's age.
//!
//! ## Design notes
//!
//! * **Coefficients as data**: Each sex is a [`DensityEquation`] constant.
//! * **Fixed evaluation order**: `b0 - b1*s + b2*s*s - b3*age`, left to right,
//!   so results are reproducible to the last bit across call sites.
//!
//! ## Key concepts
//!
//! * **Skinfold sum**: Total of the three site values in millimetres.
//! * **Quadratic in the sum**: Density falls with the sum and flattens out.
//!
//! ## Invariants
//!
//! * Coefficients are only valid for a sum of exactly three sites.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs or detect a degenerate density.
//! * Other regressions (7-site, Durnin-Womersley) are not provided.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::subject::Sex;

// ============================================================================
// Density Equation
// ============================================================================

/// # Coefficients
///
/// | Sex    | b0       | b1        | b2        | b3        |
/// |--------|----------|-----------|-----------|-----------|
/// | Male   | 1.10938  | 0.0008267 | 0.0000016 | 0.0002574 |
/// | Female | 1.099421 | 0.0009929 | 0.0000023 | 0.0001392 |
///
/// Body density = b0 - b1 * sum + b2 * sum^2 - b3 * age
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityEquation {
    /// Constant term.
    pub intercept: f64,

    /// Coefficient subtracted per millimetre of skinfold sum.
    pub linear: f64,

    /// Coefficient added per squared millimetre of skinfold sum.
    pub quadratic: f64,

    /// Coefficient subtracted per year of age.
    pub age: f64,
}

impl DensityEquation {
    /// Male 3-site equation.
    pub const MALE: Self = Self {
        intercept: 1.10938,
        linear: 0.0008267,
        quadratic: 0.0000016,
        age: 0.0002574,
    };

    /// Female 3-site equation.
    pub const FEMALE: Self = Self {
        intercept: 1.099421,
        linear: 0.0009929,
        quadratic: 0.0000023,
        age: 0.0001392,
    };

    /// Equation for the given sex.
    pub const fn for_sex(sex: Sex) -> Self {
        match sex {
            Sex::Male => Self::MALE,
            Sex::Female => Self::FEMALE,
        }
    }

    /// Evaluate body density for a skinfold sum (mm) and age (years).
    #[inline]
    pub fn body_density<T: Float>(&self, sum: T, age: T) -> T {
        let b0 = cast::<T>(self.intercept);
        let b1 = cast::<T>(self.linear);
        let b2 = cast::<T>(self.quadratic);
        let b3 = cast::<T>(self.age);

        b0 - b1 * sum + b2 * sum * sum - b3 * age
    }
}

// Convert a coefficient into the working float type.
#[inline]
pub(crate) fn cast<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
