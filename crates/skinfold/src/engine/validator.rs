//! Input validation for body-composition calculations.
//!
//! ## Purpose
//!
//! This module checks numeric inputs against the domain of the 3-site
//! method before any arithmetic runs, and checks the computed density
//! before the Siri division.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordered**: Checks run in entry order (age first, then sites) so the
//!   reported field is the first one a user would fix.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Physical Domain**: Skinfold thickness cannot be negative.
//! * **Degenerate Density**: A zero density makes the Siri step undefined.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not parse text (see the input layer).
//! * This module does not clamp or correct invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{Field, InvalidInput};
use crate::primitives::reading::SITE_COUNT;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for body-composition inputs.
///
/// Provides static methods that return `Result<(), InvalidInput>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Scalar Validation
    // ========================================================================

    /// Validate a single numeric value for finiteness.
    pub fn validate_finite<T: Float>(value: T, field: Field) -> Result<(), InvalidInput> {
        if !value.is_finite() {
            return Err(InvalidInput::NonFinite {
                field,
                value: to_f64(value),
            });
        }
        Ok(())
    }

    /// Validate the subject's age.
    pub fn validate_age<T: Float>(age: T) -> Result<(), InvalidInput> {
        Self::validate_finite(age, Field::Age)
    }

    /// Validate one skinfold measurement: finite and not negative.
    pub fn validate_measurement<T: Float>(value: T, field: Field) -> Result<(), InvalidInput> {
        Self::validate_finite(value, field)?;
        if value < T::zero() {
            return Err(InvalidInput::NegativeMeasurement {
                field,
                value: to_f64(value),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Collection Validation
    // ========================================================================

    /// Validate the number of sites supplied.
    pub fn validate_site_count(got: usize) -> Result<(), InvalidInput> {
        if got != SITE_COUNT {
            return Err(InvalidInput::WrongSiteCount { got });
        }
        Ok(())
    }

    /// Validate every replicate reading of one site.
    pub fn validate_replicates<T: Float>(site: usize, replicates: &[T]) -> Result<(), InvalidInput> {
        Self::validate_readings_at(Some(site), replicates)
    }

    /// Validate a set of readings whose site is unknown.
    pub fn validate_readings<T: Float>(readings: &[T]) -> Result<(), InvalidInput> {
        Self::validate_readings_at(None, readings)
    }

    fn validate_readings_at<T: Float>(
        site: Option<usize>,
        readings: &[T],
    ) -> Result<(), InvalidInput> {
        if readings.is_empty() {
            return Err(match site {
                Some(site) => InvalidInput::EmptySite { site },
                None => InvalidInput::NoReadings,
            });
        }
        for (reading, &value) in readings.iter().enumerate() {
            Self::validate_measurement(value, Field::replicate(site, reading))?;
        }
        Ok(())
    }

    /// Validate already-reduced site values.
    pub fn validate_site_values<T: Float>(values: &[T]) -> Result<(), InvalidInput> {
        Self::validate_site_count(values.len())?;
        for (site, &value) in values.iter().enumerate() {
            Self::validate_measurement(value, Field::Site { site })?;
        }
        Ok(())
    }

    // ========================================================================
    // Result Validation
    // ========================================================================

    /// Validate a computed body density before the Siri division.
    pub fn validate_density<T: Float>(density: T) -> Result<(), InvalidInput> {
        if density == T::zero() || !density.is_finite() {
            return Err(InvalidInput::DegenerateDensity {
                density: to_f64(density),
            });
        }
        Ok(())
    }
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
