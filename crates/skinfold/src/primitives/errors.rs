//! Error types for body-composition calculations.
//!
//! ## Purpose
//!
//! This module defines the single failure kind of the crate, [`InvalidInput`],
//! and the [`Field`] identifiers used to point at the offending input.
//!
//! ## Design notes
//!
//! * **One kind**: Every variant means "the input was rejected and no result
//!   exists". Variants only add context for diagnosis.
//! * **Contextual**: Errors carry the field and the raw text or value.
//! * **No-std**: Supports `no_std` environments by using `alloc` for owned text.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Parsing failures**: Empty, non-numeric or non-finite text.
//! 2. **Domain failures**: Negative skinfolds, unknown sex, wrong site count.
//! 3. **Builder failures**: Missing or duplicated parameters.
//! 4. **Degenerate results**: A computed body density of zero.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not present errors to end users.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

/// Message shown by form front-ends that do not report per-field detail.
pub const USER_MESSAGE: &str = "Please enter valid numeric values for all fields.";

// ============================================================================
// Field Identifier
// ============================================================================

/// Identifies which input a validation failure refers to.
///
/// Site and reading indices are zero-based in memory and rendered one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The sex selection.
    Sex,

    /// The subject's age in years.
    Age,

    /// A site value after replicates have been reduced.
    Site {
        /// Zero-based site index.
        site: usize,
    },

    /// One replicate reading at a site.
    Replicate {
        /// Zero-based site index.
        site: usize,
        /// Zero-based reading index within the site.
        reading: usize,
    },

    /// One reading of a set that has no site position.
    Reading {
        /// Zero-based reading index.
        reading: usize,
    },

    /// The mean of a set of readings that has no site position.
    Mean,
}

impl Field {
    /// A replicate reading, at a site when the position is known.
    pub fn replicate(site: Option<usize>, reading: usize) -> Self {
        match site {
            Some(site) => Self::Replicate { site, reading },
            None => Self::Reading { reading },
        }
    }

    /// The reduced value of a set of readings.
    pub fn reduced(site: Option<usize>) -> Self {
        site.map_or(Self::Mean, |site| Self::Site { site })
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Sex => write!(f, "sex"),
            Self::Age => write!(f, "age"),
            Self::Site { site } => write!(f, "site {}", site + 1),
            Self::Replicate { site, reading } => {
                write!(f, "site {} reading {}", site + 1, reading + 1)
            }
            Self::Reading { reading } => write!(f, "reading {}", reading + 1),
            Self::Mean => write!(f, "mean of readings"),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// The input to a body-composition calculation was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// Raw text is empty or does not parse as a decimal number.
    NotANumber {
        /// Field the text was entered in.
        field: Field,
        /// The text as supplied.
        raw: String,
    },

    /// Value is NaN or infinite.
    NonFinite {
        /// Field holding the value.
        field: Field,
        /// The offending value.
        value: f64,
    },

    /// Skinfold thickness below zero millimetres.
    NegativeMeasurement {
        /// Field holding the value.
        field: Field,
        /// The offending value.
        value: f64,
    },

    /// Sex text other than `male` or `female`.
    UnknownSex(String),

    /// A site was supplied without any readings.
    EmptySite {
        /// Zero-based site index.
        site: usize,
    },

    /// A set of readings with no site position was empty.
    NoReadings,

    /// The 3-site equations need exactly three sites.
    WrongSiteCount {
        /// Number of sites supplied.
        got: usize,
    },

    /// A required builder parameter was never set.
    MissingParameter {
        /// The field the parameter sets.
        field: Field,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Computed body density is zero or not finite, so the Siri step is undefined.
    DegenerateDensity {
        /// The computed density.
        density: f64,
    },
}

impl InvalidInput {
    /// The field this error refers to, when it refers to a single field.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::NotANumber { field, .. }
            | Self::NonFinite { field, .. }
            | Self::NegativeMeasurement { field, .. }
            | Self::MissingParameter { field } => Some(*field),
            Self::UnknownSex(_) => Some(Field::Sex),
            Self::EmptySite { site } => Some(Field::Site { site: *site }),
            _ => None,
        }
    }

    /// Generic message for front-ends that show a single alert.
    pub fn user_message(&self) -> &'static str {
        USER_MESSAGE
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NotANumber { field, raw } => {
                write!(f, "Invalid input: {field} is not a number: {raw:?}")
            }
            Self::NonFinite { field, value } => {
                write!(f, "Invalid input: {field} is not finite: {value}")
            }
            Self::NegativeMeasurement { field, value } => {
                write!(f, "Invalid input: {field} is negative: {value} mm")
            }
            Self::UnknownSex(raw) => {
                write!(f, "Invalid input: sex must be male or female, got {raw:?}")
            }
            Self::EmptySite { site } => {
                write!(f, "Invalid input: site {} has no readings", site + 1)
            }
            Self::WrongSiteCount { got } => {
                write!(f, "Invalid input: expected 3 sites, got {got}")
            }
            Self::NoReadings => write!(f, "Invalid input: no readings given"),
            Self::MissingParameter { field } => {
                write!(f, "Invalid input: parameter '{field}' was not set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Invalid input: parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::DegenerateDensity { density } => {
                write!(f, "Invalid input: degenerate body density {density}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for InvalidInput {}
