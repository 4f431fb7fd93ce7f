//! # Snapshot Testing Support
//!
//! Utilities for testing the converter via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts converted blocks to a stable, serializable
//!   `Snap` format for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for converter correctness (header levels
//!   in range, rectangular tables, no placeholder leaking into output)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
