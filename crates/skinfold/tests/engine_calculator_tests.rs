//! Tests for the body-composition calculator.
//!
//! These tests verify the calculation pipeline used for:
//! - Jackson-Pollock 3-site body density (male and female coefficients)
//! - Siri body-fat conversion
//! - Rejection of invalid and degenerate inputs
//!
//! ## Test Organization
//!
//! 1. **Golden Values** - Frozen reference results derived from the formulas
//! 2. **Sex Selection** - Coefficient sets differ
//! 3. **Validation** - Non-finite, negative and degenerate inputs
//! 4. **Purity** - Repeated calls are bit-identical
//! 5. **Replicates** - CalculationInput::evaluate

use approx::assert_relative_eq;

use skinfold::internals::engine::calculator::BodyCompositionCalculator;
use skinfold::internals::primitives::errors::{Field, InvalidInput};
use skinfold::internals::primitives::reading::{CalculationInput, SiteReading};
use skinfold::internals::primitives::subject::Subject;

// ============================================================================
// Golden Value Tests
// ============================================================================

/// Test the male reference case.
///
/// sum = 36, D = 1.10938 - 0.0008267*36 + 0.0000016*36^2 - 0.0002574*25.
#[test]
fn test_male_golden_values() {
    let result =
        BodyCompositionCalculator::calculate(&Subject::male(25.0), &[10.0, 12.0, 14.0]).unwrap();

    assert_relative_eq!(result.site_sum, 36.0, epsilon = 1e-12);
    assert_relative_eq!(result.body_density, 1.0752574, epsilon = 1e-12);
    assert_relative_eq!(result.body_fat_percent, 10.354888048201350, epsilon = 1e-9);
    assert_eq!(result.density_text(), "1.0753");
    assert_eq!(result.body_fat_text(), "10.35");
}

/// Test the female reference case.
#[test]
fn test_female_golden_values() {
    let result =
        BodyCompositionCalculator::calculate(&Subject::female(25.0), &[10.0, 12.0, 14.0])
            .unwrap();

    assert_relative_eq!(result.body_density, 1.0631774, epsilon = 1e-12);
    assert_relative_eq!(result.body_fat_percent, 15.585517525109172, epsilon = 1e-9);
    assert_eq!(result.density_text(), "1.0632");
    assert_eq!(result.body_fat_text(), "15.59");
}

/// Test a larger skinfold sum and older subject.
#[test]
fn test_golden_values_larger_sum() {
    let male =
        BodyCompositionCalculator::calculate(&Subject::male(40.0), &[15.0, 20.0, 25.0]).unwrap();
    let female =
        BodyCompositionCalculator::calculate(&Subject::female(40.0), &[15.0, 20.0, 25.0])
            .unwrap();

    assert_relative_eq!(male.body_density, 1.055242, epsilon = 1e-12);
    assert_eq!(male.body_fat_text(), "19.09");
    assert_relative_eq!(female.body_density, 1.042559, epsilon = 1e-12);
    assert_eq!(female.body_fat_text(), "24.79");
}

/// Test the calculator in single precision.
#[test]
fn test_f32_close_to_f64() {
    let result =
        BodyCompositionCalculator::calculate(&Subject::male(25.0_f32), &[10.0, 12.0, 14.0])
            .unwrap();

    assert_relative_eq!(result.body_density, 1.0752574_f32, epsilon = 1e-5);
    assert_relative_eq!(result.body_fat_percent, 10.354888_f32, epsilon = 1e-2);
}

// ============================================================================
// Sex Selection Tests
// ============================================================================

/// Test that male and female coefficients give different results.
#[test]
fn test_sexes_differ() {
    for sites in [[5.0, 5.0, 5.0], [10.0, 12.0, 14.0], [30.0, 25.0, 40.0]] {
        let male = BodyCompositionCalculator::calculate(&Subject::male(35.0), &sites).unwrap();
        let female =
            BodyCompositionCalculator::calculate(&Subject::female(35.0), &sites).unwrap();
        assert_ne!(male.body_density, female.body_density);
        assert_ne!(male.body_fat_percent, female.body_fat_percent);
    }
}

/// Test that density falls with age for a fixed sum.
#[test]
fn test_density_decreases_with_age() {
    let young = BodyCompositionCalculator::calculate(&Subject::male(20.0), &[10.0, 12.0, 14.0])
        .unwrap();
    let old = BodyCompositionCalculator::calculate(&Subject::male(60.0), &[10.0, 12.0, 14.0])
        .unwrap();

    assert!(old.body_density < young.body_density);
    assert!(old.body_fat_percent > young.body_fat_percent);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test rejection of non-finite age.
#[test]
fn test_rejects_non_finite_age() {
    for age in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let res = BodyCompositionCalculator::calculate(&Subject::male(age), &[10.0, 12.0, 14.0]);
        assert!(
            matches!(res, Err(InvalidInput::NonFinite { field: Field::Age, .. })),
            "age {age} should be rejected"
        );
    }
}

/// Test rejection of non-finite site values, naming the site.
#[test]
fn test_rejects_non_finite_site() {
    let res = BodyCompositionCalculator::calculate(&Subject::female(30.0), &[10.0, f64::NAN, 14.0]);

    assert!(matches!(
        res,
        Err(InvalidInput::NonFinite {
            field: Field::Site { site: 1 },
            ..
        })
    ));
}

/// Test rejection of negative skinfolds.
#[test]
fn test_rejects_negative_site() {
    let res = BodyCompositionCalculator::calculate(&Subject::male(30.0), &[10.0, 12.0, -0.5]);

    match res {
        Err(InvalidInput::NegativeMeasurement { field, value }) => {
            assert_eq!(field, Field::Site { site: 2 });
            assert_relative_eq!(value, -0.5);
        }
        other => panic!("expected NegativeMeasurement, got {other:?}"),
    }
}

/// Test that zero skinfolds are accepted.
#[test]
fn test_accepts_zero_sites() {
    let result = BodyCompositionCalculator::calculate(&Subject::male(0.0), &[0.0, 0.0, 0.0]).unwrap();

    assert_relative_eq!(result.body_density, 1.10938, epsilon = 1e-12);
}

/// Test that an exactly zero density is reported, not turned into infinity.
///
/// With a zero skinfold sum the female density is 1.099421 - 0.0001392 * age,
/// which is exactly 0.0 in f64 for this age.
#[test]
fn test_zero_density_is_invalid_input() {
    let res = BodyCompositionCalculator::calculate(
        &Subject::female(7898.139367816092),
        &[0.0, 0.0, 0.0],
    );

    match res {
        Err(InvalidInput::DegenerateDensity { density }) => assert_eq!(density, 0.0),
        other => panic!("expected DegenerateDensity, got {other:?}"),
    }
}

/// Test that overflowing arithmetic is reported instead of returning NaN.
#[test]
fn test_overflow_is_invalid_input() {
    let res = BodyCompositionCalculator::calculate(&Subject::male(25.0), &[1e300, 1e300, 1e300]);

    assert!(matches!(res, Err(InvalidInput::DegenerateDensity { .. })));
}

// ============================================================================
// Purity Tests
// ============================================================================

/// Test that identical calls give bit-identical output.
#[test]
fn test_idempotent() {
    let subject = Subject::female(41.5);
    let sites: [f64; 3] = [17.25, 22.5, 9.75];

    let first = BodyCompositionCalculator::calculate(&subject, &sites).unwrap();
    let second = BodyCompositionCalculator::calculate(&subject, &sites).unwrap();

    assert_eq!(first.body_density.to_bits(), second.body_density.to_bits());
    assert_eq!(
        first.body_fat_percent.to_bits(),
        second.body_fat_percent.to_bits()
    );
}

// ============================================================================
// Replicate Input Tests
// ============================================================================

/// Test that averaged replicates match the single-value path.
#[test]
fn test_evaluate_replicates_matches_single_values() {
    let input = CalculationInput::new(
        Subject::male(25.0),
        [
            SiteReading::replicates(vec![9.0, 10.0, 11.0]),
            SiteReading::replicates(vec![11.0, 12.0, 13.0]),
            SiteReading::replicates(vec![14.0, 14.0, 14.0]),
        ],
    );
    let averaged = input.evaluate().unwrap();
    let single =
        BodyCompositionCalculator::calculate(&Subject::male(25.0), &[10.0, 12.0, 14.0]).unwrap();

    assert_eq!(averaged, single);
}

/// Test that one reading per site passes through unchanged.
#[test]
fn test_evaluate_single_readings() {
    let input = CalculationInput::from_values(Subject::female(25.0), [10.0, 12.0, 14.0]);

    assert_eq!(input.evaluate().unwrap().density_text(), "1.0632");
}

/// Test that a bad reading anywhere fails the whole input.
#[test]
fn test_evaluate_rejects_bad_replicate() {
    let input = CalculationInput::new(
        Subject::male(25.0),
        [
            SiteReading::replicates(vec![9.0, 10.0, 11.0]),
            SiteReading::replicates(vec![11.0, 12.0, 13.0]),
            SiteReading::replicates(vec![14.0, f64::INFINITY, 14.0]),
        ],
    );

    assert!(matches!(
        input.evaluate(),
        Err(InvalidInput::NonFinite {
            field: Field::Replicate { site: 2, reading: 1 },
            ..
        })
    ));
}

/// Test that age is reported before site problems.
#[test]
fn test_evaluate_reports_age_first() {
    let input = CalculationInput::new(
        Subject::male(f64::NAN),
        [
            SiteReading::single(-1.0),
            SiteReading::single(12.0),
            SiteReading::single(14.0),
        ],
    );

    assert!(matches!(
        input.evaluate(),
        Err(InvalidInput::NonFinite { field: Field::Age, .. })
    ));
}
