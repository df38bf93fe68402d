//! Tests for calculation results and their formatting.
//!
//! ## Test Organization
//!
//! 1. **Rounded Accessors** - Numeric presentation values
//! 2. **Text Formatting** - Fixed decimals with trailing zeros
//! 3. **Rounding Agreement** - Accessors and text share one rounding rule
//! 4. **Display** - Labels and units

use approx::assert_relative_eq;

use skinfold::internals::engine::calculator::BodyCompositionCalculator;
use skinfold::internals::engine::output::CalculationResult;
use skinfold::internals::primitives::subject::{Sex, Subject};

fn result(density: f64, body_fat: f64) -> CalculationResult<f64> {
    CalculationResult {
        site_sum: 36.0,
        body_density: density,
        body_fat_percent: body_fat,
    }
}

// ============================================================================
// Rounded Accessor Tests
// ============================================================================

/// Test rounded accessors keep the stored values untouched.
#[test]
fn test_rounded_accessors() {
    let r = result(1.0752574, 10.354888);

    assert_relative_eq!(r.rounded_density(), 1.0753, epsilon = 1e-12);
    assert_relative_eq!(r.rounded_body_fat(), 10.35, epsilon = 1e-12);
    assert_eq!(r.body_density, 1.0752574);
}

// ============================================================================
// Text Formatting Tests
// ============================================================================

/// Test that trailing zeros are kept.
#[test]
fn test_trailing_zeros() {
    let r = result(1.08, 20.0);

    assert_eq!(r.density_text(), "1.0800");
    assert_eq!(r.body_fat_text(), "20.00");
}

/// Test a computed result that rounds to a trailing zero.
#[test]
fn test_computed_trailing_zero() {
    let r = BodyCompositionCalculator::calculate(&Subject::male(30.0), &[10.0, 12.0, 14.0])
        .unwrap();

    assert_eq!(r.density_text(), "1.0740");
    assert_eq!(r.body_fat_text(), "10.91");
}

/// Test negative body fat (very lean, high density) formats with a sign.
#[test]
fn test_negative_body_fat_text() {
    let r = result(1.2, -37.5);

    assert_eq!(r.body_fat_text(), "-37.50");
}

// ============================================================================
// Rounding Agreement Tests
// ============================================================================

/// Test a density stored just below a tie rounds down in both forms.
#[test]
fn test_rounded_accessors_match_text_below_tie() {
    // Density is 1.08824999999999993960..., just under 1.08825.
    let r = BodyCompositionCalculator::calculate(&Subject::female(45.0), &[5.0, 0.0, 0.0])
        .unwrap();

    assert_eq!(r.density_text(), "1.0882");
    assert_eq!(r.body_fat_text(), "4.86");
    assert_eq!(format!("{:.4}", r.rounded_density()), r.density_text());
    assert_eq!(format!("{:.2}", r.rounded_body_fat()), r.body_fat_text());
}

/// Test exact binary ties round away from zero in both forms.
#[test]
fn test_exact_ties_round_away_from_zero() {
    let r = result(1.03125, 10.125);

    assert_eq!(r.density_text(), "1.0313");
    assert_eq!(r.body_fat_text(), "10.13");
    assert_eq!(format!("{:.4}", r.rounded_density()), r.density_text());
    assert_eq!(format!("{:.2}", r.rounded_body_fat()), r.body_fat_text());
    assert_eq!(
        r.to_string(),
        "Body Density: 1.0313 g/cc\nBody Fat Percentage: 10.13%"
    );
}

/// Test accessors and text agree across a grid of computed results.
#[test]
fn test_rounded_accessors_match_text_grid() {
    for sex in [Sex::Male, Sex::Female] {
        for age in 18..=80 {
            for sum in 0..=120 {
                let subject = Subject::new(sex, age as f64);
                let sites = [sum as f64 * 0.5, 0.0, 0.25];
                let r = BodyCompositionCalculator::calculate(&subject, &sites).unwrap();

                assert_eq!(format!("{:.4}", r.rounded_density()), r.density_text());
                assert_eq!(format!("{:.2}", r.rounded_body_fat()), r.body_fat_text());
            }
        }
    }
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the two-line display.
#[test]
fn test_display() {
    let r = result(1.0752574, 10.354888);

    assert_eq!(
        r.to_string(),
        "Body Density: 1.0753 g/cc\nBody Fat Percentage: 10.35%"
    );
}
