//! The matching engine: filter, rank, truncate.

use tracing::debug;

use crate::engine::config::EngineConfig;
use crate::engine::dedupe::{self, BrowseFilter};
use crate::engine::facets::CatalogFacets;
use crate::engine::predicate::ResolvedQuery;
use crate::engine::ranking::rank_by_closeness;
use crate::engine::result::{MatchResult, RankedCollege};
use crate::normalize::NormalizerTables;
use crate::types::{CollegeRecord, FilterCriteria};

/// Stateless query runner over borrowed catalogs.
///
/// Holds only tables and config, so one engine can serve any number of
/// catalogs and threads.
///
/// ## Example
///
/// ```
/// use college_predictor::engine::MatchingEngine;
/// use college_predictor::types::{Catalog, CollegeRecord, Cutoff, FilterCriteria};
/// use rust_decimal::Decimal;
///
/// let catalog: Catalog = vec![
///     CollegeRecord::new("ABC College", "Computer Engineering", "Thane")
///         .with_cutoff(Cutoff::new("GOPEN", Some(5000), Some(Decimal::new(8950, 2)))),
/// ]
/// .into_iter()
/// .collect();
///
/// let engine = MatchingEngine::default();
/// let criteria = FilterCriteria::by_rank(4800)
///     .with_branch("Computer Science and Engineering")
///     .with_location("Mumbai");
///
/// let result = engine.query(&catalog, &criteria);
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.colleges[0].record.college_name, "ABC College");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    tables: NormalizerTables,
    config: EngineConfig,
}

impl MatchingEngine {
    pub fn new(tables: NormalizerTables, config: EngineConfig) -> Self {
        Self { tables, config }
    }

    #[inline]
    pub fn tables(&self) -> &NormalizerTables {
        &self.tables
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Whether one record satisfies `criteria`
    pub fn matches(&self, record: &CollegeRecord, criteria: &FilterCriteria) -> bool {
        ResolvedQuery::new(criteria, &self.tables, &self.config).matches(record)
    }

    /// Every matching record, in catalog order, not truncated
    pub fn filter<'a>(&self, records: &'a [CollegeRecord], criteria: &FilterCriteria) -> Vec<RankedCollege<'a>> {
        let query = ResolvedQuery::new(criteria, &self.tables, &self.config);
        records
            .iter()
            .enumerate()
            .filter_map(|(catalog_index, record)| {
                query.admit(record).map(|admission| RankedCollege {
                    catalog_index,
                    record,
                    reference: admission.reference,
                    cutoffs: admission.cutoffs,
                })
            })
            .collect()
    }

    /// Every matching record, ranked when a target is set, not truncated
    pub fn rank_all<'a>(&self, records: &'a [CollegeRecord], criteria: &FilterCriteria) -> Vec<RankedCollege<'a>> {
        let mut colleges = self.filter(records, criteria);
        if let Some(target) = criteria.target {
            rank_by_closeness(&mut colleges, target, |college| college.reference);
        }
        colleges
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Run a ranked query.
    ///
    /// # Arguments
    ///
    /// * `records` - catalog snapshot (a `&Catalog` derefs to this)
    /// * `criteria` - what the student asked for
    ///
    /// # Returns
    ///
    /// The full match set ranked by closeness to the target, then cut to
    /// `config.result_limit`. Without a target the catalog order is kept.
    pub fn query<'a>(&self, records: &'a [CollegeRecord], criteria: &FilterCriteria) -> MatchResult<'a> {
        let mut colleges = self.rank_all(records, criteria);
        let total_matched = colleges.len();
        colleges.truncate(self.config.visible(total_matched));

        debug!(
            mode = criteria.mode.label(),
            target = ?criteria.target,
            catalog = records.len(),
            matched = total_matched,
            returned = colleges.len(),
            "ranked query"
        );

        MatchResult {
            mode: criteria.mode,
            target: criteria.target,
            colleges,
            total_matched,
        }
    }

    /// Deduplicated listing for the browse page. See [`dedupe::browse`].
    pub fn browse<'a>(&self, records: &'a [CollegeRecord], filter: &BrowseFilter) -> Vec<(usize, &'a CollegeRecord)> {
        let listing = dedupe::browse(records, filter);
        debug!(catalog = records.len(), listed = listing.len(), "browse listing");
        listing
    }

    /// Dropdown options for `records`
    pub fn facets(&self, records: &[CollegeRecord]) -> CatalogFacets {
        CatalogFacets::collect(records, &self.tables)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
