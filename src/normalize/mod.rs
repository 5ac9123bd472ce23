//! Normalization tables for raw catalog strings.
//!
//! ## Components
//!
//! - [`BranchTable`]: course-name synonyms → canonical branch
//! - [`LocationClusters`]: district key → member towns
//! - [`CategoryMap`]: main category → raw category codes
//! - [`NormalizerTables`]: the three above plus the always-offered branch
//!   list, passed to the engine as configuration
//!
//! Tables are plain data handed to the engine. Nothing here is global, so
//! tests and deployments can swap them freely.
//!
//! ## Example
//!
//! ```
//! use college_predictor::normalize::NormalizerTables;
//!
//! let tables = NormalizerTables::builtin();
//! assert_eq!(
//!     tables.branches.normalize("Computer Technology"),
//!     "Computer Science and Engineering"
//! );
//! assert!(tables.locations.expand_location("Mumbai").contains("Thane"));
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

pub mod branch;
pub mod builtin;
pub mod category;
pub mod location;

pub use branch::BranchTable;
pub use category::CategoryMap;
pub use location::{CitySet, LocationClusters};

/// Comparison key for free-text names: trimmed, inner whitespace collapsed
/// to one space, lower-cased.
///
/// ```
/// use college_predictor::normalize::fold_key;
///
/// assert_eq!(fold_key("  ABC   College "), "abc college");
/// ```
pub fn fold_key(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(word.chars().flat_map(char::to_lowercase));
    }
    out
}

// ============================================================================
// NormalizerTables
// ============================================================================

/// Every static table the engine consults.
#[derive(Debug, Clone)]
pub struct NormalizerTables {
    pub branches: BranchTable,
    pub locations: LocationClusters,
    pub categories: CategoryMap,

    /// Canonical branches always shown in branch pickers
    pub offered_branches: Vec<String>,
}

impl Default for NormalizerTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NormalizerTables {
    /// The bundled Maharashtra tables
    pub fn builtin() -> Self {
        Self {
            branches: builtin_branches(),
            locations: builtin_locations(),
            categories: builtin_categories(),
            offered_branches: builtin::OFFERED_BRANCHES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Tables with nothing in them: every string passes through unchanged
    pub fn empty() -> Self {
        Self {
            branches: BranchTable::default(),
            locations: LocationClusters::default(),
            categories: CategoryMap::default(),
            offered_branches: Vec::new(),
        }
    }

    /// Load tables from a JSON document.
    ///
    /// Sections left out of the document keep the bundled data.
    ///
    /// ```json
    /// {
    ///   "branches": { "Comp Engg": "Computer Science and Engineering" },
    ///   "clusters": { "Mumbai": ["Thane", "Andheri"] },
    ///   "categories": [ { "main": "OBC", "codes": ["GOBC", "LOBC"] } ],
    ///   "offered_branches": ["Civil Engineering"]
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Invalid JSON, a chained branch synonym, or a blank cluster key.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TablesConfig = serde_json::from_str(json)?;
        let tables = config.into_tables()?;
        debug!(
            branch_synonyms = tables.branches.len(),
            clusters = tables.locations.len(),
            main_categories = tables.categories.len(),
            "loaded normalizer tables"
        );
        Ok(tables)
    }
}

fn builtin_branches() -> BranchTable {
    // Covered by test_builtin_tables_valid; an empty table is the fallback.
    BranchTable::new(builtin::BRANCH_SYNONYMS.iter().copied()).unwrap_or_default()
}

fn builtin_locations() -> LocationClusters {
    LocationClusters::new(
        builtin::DISTRICT_CLUSTERS
            .iter()
            .map(|(key, towns)| (*key, towns.iter().copied())),
    )
    .unwrap_or_default()
}

fn builtin_categories() -> CategoryMap {
    CategoryMap::new(
        builtin::MAIN_CATEGORIES
            .iter()
            .map(|(main, codes)| (*main, codes.iter().copied())),
    )
}

// ============================================================================
// JSON configuration
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TablesConfig {
    #[serde(default)]
    branches: Option<BTreeMap<String, String>>,
    #[serde(default)]
    clusters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    categories: Option<Vec<CategoryGroupConfig>>,
    #[serde(default)]
    offered_branches: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryGroupConfig {
    main: String,
    #[serde(default)]
    codes: Vec<String>,
}

impl TablesConfig {
    fn into_tables(self) -> Result<NormalizerTables> {
        let mut tables = NormalizerTables::builtin();
        if let Some(branches) = self.branches {
            tables.branches = BranchTable::new(branches)?;
        }
        if let Some(clusters) = self.clusters {
            tables.locations = LocationClusters::new(clusters)?;
        }
        if let Some(groups) = self.categories {
            tables.categories = CategoryMap::new(groups.into_iter().map(|g| (g.main, g.codes)));
        }
        if let Some(offered) = self.offered_branches {
            tables.offered_branches = offered;
        }
        Ok(tables)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
