//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the value types and the error type used throughout
//! the crate. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error type.
pub mod errors;

/// Sex and subject.
pub mod subject;

/// Site readings and calculation input.
pub mod reading;
