//! Address processing logic.
//!
//! This module contains the business logic applied to collected addresses:
//! - [`filter`] - Classification and filtering of the address set

mod filter;

// Re-export public functions
pub use filter::{filter_public, filter_public_with};
