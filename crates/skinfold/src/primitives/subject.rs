//! The measured person: sex and age.
//!
//! ## Purpose
//!
//! This module defines [`Sex`], which selects the density coefficient set, and
//! [`Subject`], which pairs it with an age.
//!
//! ## Design notes
//!
//! * **Closed enum**: `Sex` has exactly two members and no default. Text that
//!   is neither `male` nor `female` is rejected rather than mapped to a branch.
//! * **Lenient casing**: Parsing ignores ASCII case and surrounding whitespace.
//!
//! ## Invariants
//!
//! * A `Subject` is a plain value; it is not validated on construction. Age
//!   finiteness is checked by the engine before any arithmetic.

// External dependencies
use core::fmt::{Display, Formatter};
use core::str::FromStr;

// Internal dependencies
use crate::primitives::errors::InvalidInput;

// ============================================================================
// Sex
// ============================================================================

/// Sex of the subject, selecting the Jackson-Pollock coefficient set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Male coefficients.
    Male,

    /// Female coefficients.
    Female,
}

impl Sex {
    /// Lowercase name as accepted by [`FromStr`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("male") {
            Ok(Self::Male)
        } else if trimmed.eq_ignore_ascii_case("female") {
            Ok(Self::Female)
        } else {
            Err(InvalidInput::UnknownSex(s.into()))
        }
    }
}

// ============================================================================
// Subject
// ============================================================================

/// A measured person.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subject<T> {
    /// Coefficient set selector.
    pub sex: Sex,

    /// Age in years.
    pub age: T,
}

impl<T> Subject<T> {
    /// Create a subject.
    pub const fn new(sex: Sex, age: T) -> Self {
        Self { sex, age }
    }

    /// Shorthand for a male subject.
    pub const fn male(age: T) -> Self {
        Self::new(Sex::Male, age)
    }

    /// Shorthand for a female subject.
    pub const fn female(age: T) -> Self {
        Self::new(Sex::Female, age)
    }
}
