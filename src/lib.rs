//! # College Predictor
//!
//! Filter and nearest-match ranking of college cutoffs for admission
//! counselling.
//!
//! ## Architecture
//!
//! - **Types**: catalog records, cutoffs, per-query criteria, the catalog
//!   snapshot
//! - **Normalize**: branch synonyms, district clusters, category groups
//! - **Engine**: filter predicate, ranking, dedupe, browse and facets
//!
//! ## Design Principles
//!
//! 1. **Determinism**: identical inputs give identical ordered output
//! 2. **No Floating Point**: percentages use `rust_decimal`
//! 3. **Tables as Data**: normalization tables are passed in, never global
//! 4. **Total Queries**: matching never fails; errors only come from decoding
//!    outside input

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for decoding and validation
pub mod error;

/// Core data types: CollegeRecord, Cutoff, FilterCriteria, Catalog
pub mod types;

/// Normalization tables: branches, locations, categories
pub mod normalize;

/// Matching engine: filter, rank, dedupe
pub mod engine;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{BrowseFilter, CatalogFacets, EngineConfig, MatchResult, MatchingEngine, RankedCollege};
pub use error::{EngineError, Result};
pub use normalize::NormalizerTables;
pub use types::{Catalog, CollegeRecord, Cutoff, FilterCriteria, QueryMode};
