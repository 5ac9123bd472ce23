//! Query output types.
//!
//! Results borrow records from the catalog; nothing is cloned.

use rust_decimal::Decimal;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::types::score;
use crate::types::{CollegeRecord, Cutoff, QueryMode};

/// One college in a result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCollege<'a> {
    /// Position of the record in the catalog
    pub catalog_index: usize,

    pub record: &'a CollegeRecord,

    /// Value ranked against the target (cutoff rank or score)
    #[serde(serialize_with = "score::serialize_decimal")]
    pub reference: Option<Decimal>,

    /// Cutoffs the query looked at: the selected category's, or every code
    /// of the selected main category
    pub cutoffs: Vec<&'a Cutoff>,
}

/// Output of one ranked query.
///
/// ## Example
///
/// ```
/// use college_predictor::engine::MatchingEngine;
/// use college_predictor::types::{Catalog, CollegeRecord, Cutoff, FilterCriteria};
///
/// let catalog: Catalog = vec![
///     CollegeRecord::new("A", "Civil Engineering", "Pune")
///         .with_cutoff(Cutoff::new("GOPEN", Some(1000), None)),
///     CollegeRecord::new("B", "Civil Engineering", "Pune")
///         .with_cutoff(Cutoff::new("GOPEN", Some(3000), None)),
/// ]
/// .into_iter()
/// .collect();
///
/// let engine = MatchingEngine::default();
/// let result = engine.query(&catalog, &FilterCriteria::by_rank(2000));
///
/// assert_eq!(result.total_matched, 1);
/// assert_eq!(result.colleges[0].record.college_name, "B");
/// assert_eq!(result.fingerprint_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub mode: QueryMode,

    #[serde(serialize_with = "score::serialize_decimal")]
    pub target: Option<Decimal>,

    /// Ranked and truncated colleges
    pub colleges: Vec<RankedCollege<'a>>,

    /// Matches before truncation
    pub total_matched: usize,
}

impl<'a> MatchResult<'a> {
    /// Whether the display limit cut matches off
    #[inline]
    pub fn truncated(&self) -> bool {
        self.colleges.len() < self.total_matched
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colleges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colleges.is_empty()
    }

    /// Catalog indices in result order
    pub fn indices(&self) -> Vec<usize> {
        self.colleges.iter().map(|c| c.catalog_index).collect()
    }

    /// SHA-256 over the ordered `(catalog index, choice code)` pairs.
    ///
    /// Equal for two runs iff they returned the same records in the same
    /// order (given the same catalog).
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for college in &self.colleges {
            hasher.update((college.catalog_index as u64).to_le_bytes());
            hasher.update(college.record.choice_code.as_bytes());
            hasher.update([0x1e]);
        }
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
