//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer runs a calculation: it validates inputs, reduces replicate
//! readings, evaluates the formulas from the math layer and packages the
//! result.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Input
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;

/// Replicate averaging.
pub mod aggregator;

/// Density and body-fat computation.
pub mod calculator;

/// Output types.
pub mod output;
