//! Skinfold readings and the complete calculation input.
//!
//! ## Purpose
//!
//! This module defines [`SiteReading`], the replicate measurements taken at a
//! single skinfold site, and [`CalculationInput`], the immutable bundle handed
//! to the calculator.
//!
//! ## Design notes
//!
//! * **Replicates**: A site holds one or more readings. One reading per site
//!   and three averaged readings per site are both just `SiteReading`s.
//! * **Fixed arity**: `CalculationInput` stores exactly three sites in an
//!   array; the slice constructor is the only place the count is checked.
//!
//! ## Invariants
//!
//! * `CalculationInput::sites` always has length 3.
//!
//! ## Non-goals
//!
//! * This module does not average or validate readings (see the engine).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::InvalidInput;
use crate::primitives::subject::Subject;

/// Number of skinfold sites the 3-site equations are calibrated for.
pub const SITE_COUNT: usize = 3;

// ============================================================================
// Site Reading
// ============================================================================

/// Replicate skinfold measurements (mm) at one anatomical site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteReading<T> {
    replicates: Vec<T>,
}

impl<T: Copy> SiteReading<T> {
    /// A site measured once.
    pub fn single(value: T) -> Self {
        Self {
            replicates: Vec::from([value]),
        }
    }

    /// A site measured several times.
    pub fn replicates(values: Vec<T>) -> Self {
        Self { replicates: values }
    }

    /// Copy the readings out of any slice-like collection.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            replicates: values.to_vec(),
        }
    }

    /// The raw readings in entry order.
    pub fn values(&self) -> &[T] {
        &self.replicates
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.replicates.len()
    }

    /// True when the site carries no readings.
    pub fn is_empty(&self) -> bool {
        self.replicates.is_empty()
    }
}

impl<T> AsRef<[T]> for SiteReading<T> {
    fn as_ref(&self) -> &[T] {
        &self.replicates
    }
}

impl<T: Copy> From<T> for SiteReading<T> {
    fn from(value: T) -> Self {
        Self::single(value)
    }
}

// ============================================================================
// Calculation Input
// ============================================================================

/// Everything the calculator needs: a subject and three site readings.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationInput<T> {
    /// The measured person.
    pub subject: Subject<T>,

    /// Readings for the three sites, in site order.
    pub sites: [SiteReading<T>; SITE_COUNT],
}

impl<T: Copy> CalculationInput<T> {
    /// Create an input from exactly three sites.
    pub fn new(subject: Subject<T>, sites: [SiteReading<T>; SITE_COUNT]) -> Self {
        Self { subject, sites }
    }

    /// Create an input from one value per site.
    pub fn from_values(subject: Subject<T>, values: [T; SITE_COUNT]) -> Self {
        Self::new(subject, values.map(SiteReading::single))
    }

    /// Create an input from a slice of per-site readings.
    ///
    /// Fails with [`InvalidInput::WrongSiteCount`] unless exactly three sites
    /// are supplied.
    pub fn from_sites(subject: Subject<T>, sites: Vec<SiteReading<T>>) -> Result<Self, InvalidInput> {
        let got = sites.len();
        let sites: [SiteReading<T>; SITE_COUNT] = sites
            .try_into()
            .map_err(|_| InvalidInput::WrongSiteCount { got })?;
        Ok(Self::new(subject, sites))
    }
}
