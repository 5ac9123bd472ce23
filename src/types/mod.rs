//! Core data types for the college predictor
//!
//! ## Types
//!
//! - [`CollegeRecord`]: one college + course listing from the catalog
//! - [`Cutoff`]: last admitted rank/percentage for one category
//! - [`QueryMode`]: compare by percentage or by rank
//! - [`FilterCriteria`]: one student's query
//! - [`Catalog`]: immutable snapshot of every record
//!
//! ## Decimal Arithmetic
//!
//! Percentages are `rust_decimal::Decimal`. Ranks are `u32` and are lifted
//! into `Decimal` only when computing a distance to the target.

mod record;
mod criteria;
mod catalog;
pub mod score;

// Re-export all types at module level
pub use record::{CollegeRecord, Cutoff, QueryMode};
pub use criteria::FilterCriteria;
pub use catalog::Catalog;
