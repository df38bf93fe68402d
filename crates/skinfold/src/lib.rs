//! # skinfold: Jackson-Pollock 3-site body-fat estimation for Rust
//!
//! Estimates body density and body-fat percentage from three skinfold
//! thickness measurements using the Jackson-Pollock 3-site regression and
//! the Siri equation.
//!
//! ## What is the 3-site method?
//!
//! A pinch caliper measures skinfold thickness (mm) at three standardised
//! anatomical sites. Their sum and the subject's age feed a sex-specific
//! quadratic regression that predicts body density (g/cc). The Siri equation
//! then converts density to a body-fat percentage:
//!
//! ```text
//! male:    D = 1.10938  - 0.0008267 s + 0.0000016 s^2 - 0.0002574 age
//! female:  D = 1.099421 - 0.0009929 s + 0.0000023 s^2 - 0.0001392 age
//! body fat % = (4.95 / D - 4.50) * 100
//! ```
//!
//! ## Quick Start
//!
//! ### One reading per site
//!
//! ```rust
//! use skinfold::prelude::*;
//!
//! let result = calculate(Subject::male(25.0), [10.0, 12.0, 14.0])?;
//!
//! assert_eq!(result.density_text(), "1.0753");
//! assert_eq!(result.body_fat_text(), "10.35");
//! println!("{}", result);
//! # Result::<(), InvalidInput>::Ok(())
//! ```
//!
//! ```text
//! Body Density: 1.0753 g/cc
//! Body Fat Percentage: 10.35%
//! ```
//!
//! ### Several readings per site
//!
//! Replicate readings are averaged per site before the formula runs:
//!
//! ```rust
//! use skinfold::prelude::*;
//!
//! let model = BodyComposition::new().sex(Female).age(30.0).build()?;
//!
//! let result = model.calculate_replicates(&[
//!     [9.5, 10.0, 10.5],
//!     [12.0, 12.0, 12.0],
//!     [13.0, 14.0, 15.0],
//! ])?;
//!
//! assert_eq!(result.site_sum, 36.0);
//! # Result::<(), InvalidInput>::Ok(())
//! ```
//!
//! ### Raw form text
//!
//! Front-ends that collect text can delegate parsing:
//!
//! ```rust
//! use skinfold::prelude::*;
//!
//! let form = RawInput::new("male", "25", &[&["10"], &["12"], &["14"]]);
//! let result = form.evaluate::<f64>()?;
//! assert_eq!(result.body_fat_text(), "10.35");
//!
//! let bad = RawInput::new("male", "", &[&["10"], &["12"], &["14"]]);
//! assert!(bad.evaluate::<f64>().is_err());
//! # Result::<(), InvalidInput>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<_, InvalidInput>`. There is exactly one
//! failure kind: the input was rejected and no result exists. Variants carry
//! the offending field for diagnosis; [`InvalidInput::user_message`] gives a
//! single generic message for simple front-ends.
//!
//! ```rust
//! use skinfold::prelude::*;
//!
//! match calculate(Subject::female(f64::NAN), [10.0, 12.0, 14.0]) {
//!     Ok(result) => println!("{}", result),
//!     Err(e) => eprintln!("{} ({})", e.user_message(), e),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency
//! (an allocator is still required):
//!
//! ```toml
//! [dependencies]
//! skinfold = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Jackson, A. S., & Pollock, M. L. (1978). "Generalized equations for predicting body density of men"
//! - Jackson, A. S., Pollock, M. L., & Ward, A. (1980). "Generalized equations for predicting body density of women"
//! - Siri, W. E. (1961). "Body composition from fluid spaces and density"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - value types and the error type.
mod primitives;

// Layer 2: Math - pure formulas.
mod math;

// Layer 3: Engine - validation, averaging and calculation.
mod engine;

// Layer 4: Input - raw text parsing.
mod input;

// High-level API.
mod api;

pub use api::{average_site, calculate};

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        average_site, calculate, parse_measurement, parse_number,
        BodyCompositionBuilder as BodyComposition, BodyCompositionModel, CalculationInput,
        CalculationResult, DensityEquation, Field, InvalidInput, RawInput,
        Sex::{self, Female, Male},
        SiteReading, Subject, SITE_COUNT,
    };
}

// Internal modules for development and testing.
//
// This module re-exports the layers so integration tests can exercise them
// directly. It is not part of the stable API.
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
