//! Body-composition calculator.
//!
//! ## Purpose
//!
//! This module turns three validated site values and a subject into a
//! [`CalculationResult`]: skinfold sum, Jackson-Pollock body density, then
//! Siri body-fat percentage.
//!
//! ## Design notes
//!
//! * **Validate first**: Age and site values are checked before the sum is
//!   taken, so no arithmetic ever sees a NaN or an infinity.
//! * **Stateless**: The calculator is a unit struct; every call is independent
//!   and safe to run concurrently.
//! * **No partial results**: The call either returns every field or an error.
//!
//! ## Key concepts
//!
//! 1. Sum the three site values.
//! 2. Evaluate the sex-specific density equation.
//! 3. Reject a zero (or overflowed) density.
//! 4. Apply the Siri equation.
//!
//! ## Non-goals
//!
//! * This module does not average replicates (see the aggregator).
//! * This module does not round or format (see the output type).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::aggregator::InputAggregator;
use crate::engine::output::CalculationResult;
use crate::engine::validator::Validator;
use crate::math::density::DensityEquation;
use crate::math::siri::body_fat_percent;
use crate::primitives::errors::InvalidInput;
use crate::primitives::reading::{CalculationInput, SITE_COUNT};
use crate::primitives::subject::Subject;

// ============================================================================
// Calculator
// ============================================================================

/// Jackson-Pollock 3-site body-composition calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyCompositionCalculator;

impl BodyCompositionCalculator {
    /// Compute density and body fat from one value per site.
    pub fn calculate<T: Float>(
        subject: &Subject<T>,
        sites: &[T; SITE_COUNT],
    ) -> Result<CalculationResult<T>, InvalidInput> {
        Validator::validate_age(subject.age)?;
        Validator::validate_site_values(sites)?;

        let site_sum = sites.iter().fold(T::zero(), |acc, &v| acc + v);
        let body_density =
            DensityEquation::for_sex(subject.sex).body_density(site_sum, subject.age);
        Validator::validate_density(body_density)?;

        let body_fat_percent = body_fat_percent(body_density);
        if !body_fat_percent.is_finite() {
            // Subnormal densities overflow the division.
            return Err(InvalidInput::DegenerateDensity {
                density: body_density.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(CalculationResult {
            site_sum,
            body_density,
            body_fat_percent,
        })
    }
}

impl<T: Float> CalculationInput<T> {
    /// Average each site's readings, then calculate.
    ///
    /// The subject and every reading are validated before any arithmetic.
    pub fn evaluate(&self) -> Result<CalculationResult<T>, InvalidInput> {
        Validator::validate_age(self.subject.age)?;
        let means: Vec<T> = InputAggregator::average_sites(&self.sites)?;
        let sites = [means[0], means[1], means[2]];
        BodyCompositionCalculator::calculate(&self.subject, &sites)
    }
}
