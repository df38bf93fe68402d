//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure formulas of the method:
//! - Jackson-Pollock 3-site body-density equations
//! - The Siri density to body-fat conversion
//! - Decimal rounding for presentation
//!
//! Nothing here validates input; that happens in the engine.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Input
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sex-specific body-density regressions.
pub mod density;

/// Siri body-fat equation.
pub mod siri;

/// Presentation rounding.
pub mod rounding;
