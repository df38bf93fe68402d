//! Replicate reduction for skinfold sites.
//!
//! ## Purpose
//!
//! Forms that take several caliper readings per site reduce each site to the
//! arithmetic mean of its readings before the density equation runs. This
//! module is that pre-step; single-reading forms pass through it unchanged.
//!
//! ## Design notes
//!
//! * **Validate then sum**: Every reading is checked before any is added.
//! * **Any arity**: One, three or any other positive number of readings.
//! * **Exact for one reading**: The mean of `[x]` is `x / 1 == x`.
//!
//! ## Invariants
//!
//! * Output is finite and non-negative whenever the call succeeds.
//! * Identical inputs always give identical output.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::{Field, InvalidInput};
use crate::primitives::reading::SiteReading;

// ============================================================================
// Input Aggregator
// ============================================================================

/// Reduces replicate readings to one value per site.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputAggregator;

impl InputAggregator {
    /// Mean of the readings at site `site` (zero-based, used in errors).
    pub fn average_site<T: Float>(site: usize, replicates: &[T]) -> Result<T, InvalidInput> {
        Validator::validate_replicates(site, replicates)?;
        Self::mean_unchecked(Some(site), replicates)
    }

    /// Mean of a set of readings with no site position.
    ///
    /// Errors name the reading alone ([`Field::Reading`], [`Field::Mean`]).
    pub fn average<T: Float>(readings: &[T]) -> Result<T, InvalidInput> {
        Validator::validate_readings(readings)?;
        Self::mean_unchecked(None, readings)
    }

    /// Mean of each site's readings, in site order.
    ///
    /// Every reading of every site is validated before any mean is computed.
    pub fn average_sites<T, S>(sites: &[S]) -> Result<Vec<T>, InvalidInput>
    where
        T: Float,
        S: AsRef<[T]>,
    {
        for (site, replicates) in sites.iter().enumerate() {
            Validator::validate_replicates(site, replicates.as_ref())?;
        }
        sites
            .iter()
            .enumerate()
            .map(|(site, replicates)| Self::mean_unchecked(Some(site), replicates.as_ref()))
            .collect()
    }

    // Sum then divide; a sum that overflows is reported against the site.
    fn mean_unchecked<T: Float>(site: Option<usize>, replicates: &[T]) -> Result<T, InvalidInput> {
        let n = T::from(replicates.len()).unwrap_or_else(T::nan);
        let sum = replicates.iter().fold(T::zero(), |acc, &v| acc + v);
        let mean = sum / n;
        Validator::validate_finite(mean, Field::reduced(site))?;
        Ok(mean)
    }
}

impl<T: Float> SiteReading<T> {
    /// Mean of this site's readings.
    ///
    /// The reading has no position of its own, so errors name readings only.
    /// Use [`InputAggregator::average_sites`] when the position matters.
    pub fn mean(&self) -> Result<T, InvalidInput> {
        InputAggregator::average(self.values())
    }
}
