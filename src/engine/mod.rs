//! Matching engine for the college predictor.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: same catalog, criteria and tables always give the same
//!    output, down to the order of ties
//! 2. **Exact Decimal Math**: percentages are `rust_decimal`, never floats
//! 3. **Snapshot Reads**: queries borrow an immutable catalog and allocate
//!    only their own output
//!
//! ## Query Pipeline
//!
//! 1. **Filter** ([`predicate`]): location, branch, category threshold
//! 2. **Rank** ([`ranking`]): exact match, then nearest, then no data;
//!    ties keep catalog order
//! 3. **Truncate**: cut to `result_limit` after ranking, never before
//!
//! The browse listing ([`dedupe`]) and dropdown facets ([`facets`]) run over
//! the same snapshot without the threshold step.
//!
//! ## Example
//!
//! ```
//! use college_predictor::engine::{EngineConfig, MatchingEngine};
//! use college_predictor::normalize::NormalizerTables;
//! use college_predictor::types::{Catalog, CollegeRecord, Cutoff, FilterCriteria};
//!
//! let catalog: Catalog = vec![
//!     CollegeRecord::new("A", "Civil Engineering", "Pune")
//!         .with_cutoff(Cutoff::new("GOPEN", Some(1000), None)),
//!     CollegeRecord::new("B", "Civil Engineering", "Pune")
//!         .with_cutoff(Cutoff::new("GOPEN", Some(3000), None)),
//!     CollegeRecord::new("C", "Civil Engineering", "Pune")
//!         .with_cutoff(Cutoff::new("GOPEN", Some(2200), None)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let engine = MatchingEngine::new(NormalizerTables::builtin(), EngineConfig::default());
//! let result = engine.query(&catalog, &FilterCriteria::by_rank(900));
//!
//! let names: Vec<&str> = result.colleges.iter().map(|c| c.record.college_name.as_str()).collect();
//! assert_eq!(names, vec!["A", "C", "B"]);
//! ```

pub mod config;
pub mod dedupe;
pub mod facets;
pub mod matcher;
pub mod predicate;
pub mod ranking;
pub mod result;

pub use config::{EngineConfig, DEFAULT_RESULT_LIMIT};
pub use dedupe::{browse, dedupe, BrowseFilter};
pub use facets::CatalogFacets;
pub use matcher::MatchingEngine;
pub use predicate::{CategorySelection, ResolvedQuery};
pub use ranking::{RankClass, RankKey};
pub use result::{MatchResult, RankedCollege};
