//! Raw text input from a form front-end.
//!
//! ## Purpose
//!
//! Form front-ends collect every field as text. This module turns that text
//! into a typed [`CalculationInput`], owning the "is this a finite number"
//! decision so front-ends only have to render results or errors.
//!
//! ## Design notes
//!
//! * **Strict parsing**: Surrounding whitespace is ignored, anything else that
//!   is not a complete decimal number (`""`, `"abc"`, `"12mm"`) is rejected.
//! * **All or nothing**: Every field is parsed before any arithmetic; the
//!   first failure is reported and no numbers escape.
//! * **Borrowed**: `RawInput` borrows the form's strings; nothing is copied
//!   unless an error needs to quote the offending text.
//!
//! ## Key concepts
//!
//! * **Field order**: Sex, age, then sites in order, readings in order.
//!
//! ## Non-goals
//!
//! * This module does not convert units or accept locale decimal commas.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::CalculationResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::{Field, InvalidInput};
use crate::primitives::reading::{CalculationInput, SiteReading};
use crate::primitives::subject::{Sex, Subject};

// ============================================================================
// Scalar Parsing
// ============================================================================

/// Parse one numeric form field.
///
/// Fails with [`InvalidInput::NotANumber`] for empty or malformed text and
/// with [`InvalidInput::NonFinite`] for text such as `"inf"` or `"NaN"`.
pub fn parse_number<T: Float>(field: Field, raw: &str) -> Result<T, InvalidInput> {
    let value = T::from_str_radix(raw.trim(), 10).map_err(|_| InvalidInput::NotANumber {
        field,
        raw: raw.into(),
    })?;
    Validator::validate_finite(value, field)?;
    Ok(value)
}

/// Parse one skinfold reading: a finite, non-negative number of millimetres.
pub fn parse_measurement<T: Float>(field: Field, raw: &str) -> Result<T, InvalidInput> {
    let value = parse_number(field, raw)?;
    Validator::validate_measurement(value, field)?;
    Ok(value)
}

// ============================================================================
// Raw Form
// ============================================================================

/// Unparsed form contents.
///
/// `sites` holds one entry per site; each entry holds that site's readings.
#[derive(Debug, Clone, Copy)]
pub struct RawInput<'a> {
    /// Sex selection text.
    pub sex: &'a str,

    /// Age text.
    pub age: &'a str,

    /// Reading texts grouped by site.
    pub sites: &'a [&'a [&'a str]],
}

impl<'a> RawInput<'a> {
    /// Bundle raw form fields.
    pub const fn new(sex: &'a str, age: &'a str, sites: &'a [&'a [&'a str]]) -> Self {
        Self { sex, age, sites }
    }

    /// Parse every field into a typed input.
    pub fn parse<T: Float>(&self) -> Result<CalculationInput<T>, InvalidInput> {
        let sex: Sex = self.sex.parse()?;
        let age = parse_number::<T>(Field::Age, self.age)?;
        Validator::validate_site_count(self.sites.len())?;

        let mut sites = Vec::with_capacity(self.sites.len());
        for (site, readings) in self.sites.iter().enumerate() {
            if readings.is_empty() {
                return Err(InvalidInput::EmptySite { site });
            }
            let values = readings
                .iter()
                .enumerate()
                .map(|(reading, raw)| parse_measurement(Field::Replicate { site, reading }, raw))
                .collect::<Result<Vec<T>, _>>()?;
            sites.push(SiteReading::replicates(values));
        }

        CalculationInput::from_sites(Subject::new(sex, age), sites)
    }

    /// Parse, average and calculate in one step.
    pub fn evaluate<T: Float>(&self) -> Result<CalculationResult<T>, InvalidInput> {
        self.parse::<T>()?.evaluate()
    }
}
