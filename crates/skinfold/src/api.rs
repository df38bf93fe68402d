//! High-level API for body-composition estimates.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the two free functions
//! [`calculate`] and [`average_site`], and a fluent builder that fixes the
//! subject once and then evaluates any number of readings.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder, with parameters set at most once.
//! * **Validated**: The subject is validated when `.build()` is called; site
//!   readings are validated on every calculation.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`BodyCompositionBuilder`] via `BodyComposition::new()`.
//! 2. Set `.sex()` and `.age()`.
//! 3. Call `.build()` to get a [`BodyCompositionModel`].
//! 4. Call `.calculate()` with one value per site, or
//!    `.calculate_replicates()` with several readings per site.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::aggregator::InputAggregator;
use crate::engine::calculator::BodyCompositionCalculator;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::CalculationResult;
pub use crate::input::{parse_measurement, parse_number, RawInput};
pub use crate::math::density::DensityEquation;
pub use crate::primitives::errors::{Field, InvalidInput, USER_MESSAGE};
pub use crate::primitives::reading::{CalculationInput, SiteReading, SITE_COUNT};
pub use crate::primitives::subject::{Sex, Subject};

// ============================================================================
// Free Functions
// ============================================================================

/// Estimate body density and body fat from one value per site.
///
/// Fails with [`InvalidInput`] when the age or any site value is not finite,
/// when a site value is negative, or when the computed density is zero.
pub fn calculate<T: Float>(
    subject: Subject<T>,
    site_values: [T; SITE_COUNT],
) -> Result<CalculationResult<T>, InvalidInput> {
    BodyCompositionCalculator::calculate(&subject, &site_values)
}

/// Arithmetic mean of one site's replicate readings.
///
/// Fails with [`InvalidInput`] when no readings are given or any reading is
/// not finite or negative. Errors name readings by position only, since the
/// site is unknown here.
pub fn average_site<T: Float>(replicates: &[T]) -> Result<T, InvalidInput> {
    InputAggregator::average(replicates)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a subject-bound calculator.
#[derive(Debug, Clone)]
pub struct BodyCompositionBuilder<T> {
    /// Coefficient set selector.
    pub sex: Option<Sex>,

    /// Age in years.
    pub age: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BodyCompositionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BodyCompositionBuilder<T> {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self {
            sex: None,
            age: None,
            duplicate_param: None,
        }
    }

    /// Set the subject's sex.
    pub fn sex(mut self, sex: Sex) -> Self {
        if self.sex.is_some() {
            self.duplicate_param = Some("sex");
        }
        self.sex = Some(sex);
        self
    }

    /// Set the subject's age in years.
    pub fn age(mut self, age: T) -> Self {
        if self.age.is_some() {
            self.duplicate_param = Some("age");
        }
        self.age = Some(age);
        self
    }

    /// Set sex and age from an existing subject.
    pub fn subject(self, subject: Subject<T>) -> Self {
        self.sex(subject.sex).age(subject.age)
    }

    /// Validate the configuration and produce a model.
    pub fn build(self) -> Result<BodyCompositionModel<T>, InvalidInput> {
        if let Some(parameter) = self.duplicate_param {
            return Err(InvalidInput::DuplicateParameter { parameter });
        }
        let sex = self
            .sex
            .ok_or(InvalidInput::MissingParameter { field: Field::Sex })?;
        let age = self
            .age
            .ok_or(InvalidInput::MissingParameter { field: Field::Age })?;
        Validator::validate_age(age)?;

        Ok(BodyCompositionModel {
            subject: Subject::new(sex, age),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Calculator bound to one validated subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyCompositionModel<T> {
    subject: Subject<T>,
}

impl<T: Float> BodyCompositionModel<T> {
    /// The subject this model was built for.
    pub fn subject(&self) -> Subject<T> {
        self.subject
    }

    /// Calculate from one value per site.
    ///
    /// Fails with [`InvalidInput::WrongSiteCount`] unless exactly three values
    /// are supplied.
    pub fn calculate(&self, site_values: &[T]) -> Result<CalculationResult<T>, InvalidInput> {
        let sites: &[T; SITE_COUNT] = site_values
            .try_into()
            .map_err(|_| InvalidInput::WrongSiteCount {
                got: site_values.len(),
            })?;
        BodyCompositionCalculator::calculate(&self.subject, sites)
    }

    /// Average each site's readings, then calculate.
    ///
    /// Accepts plain slices, arrays or [`SiteReading`]s. Every reading is
    /// validated before any averaging happens.
    pub fn calculate_replicates<S>(&self, sites: &[S]) -> Result<CalculationResult<T>, InvalidInput>
    where
        S: AsRef<[T]>,
    {
        Validator::validate_site_count(sites.len())?;
        let means: Vec<T> = InputAggregator::average_sites(sites)?;
        self.calculate(&means)
    }
}
