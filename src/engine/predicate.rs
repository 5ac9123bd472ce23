//! Filter predicate: does one record satisfy a query?
//!
//! ## Rules
//!
//! A record matches when every criterion the student set passes:
//!
//! 1. **Location**: the record's city is in the expanded location set
//! 2. **Branch**: the record's course normalizes to the requested branch
//! 3. **Threshold**: with a target and a concrete category selected, the
//!    category's cutoff must exist and be reachable
//!    - score mode: `target >= cutoff.score`
//!    - rank mode: `target <= cutoff.rank`
//!
//! ## Category selection
//!
//! | Student picked | Compared against |
//! |---|---|
//! | sub-category (valid for main) | that code's cutoff |
//! | main category only | nothing; annotated with every code of the group |
//! | nothing | the default category (`GOPEN`) |
//!
//! A sub-category that is not in the main category's group is ignored. An
//! unknown main category label is ignored.
//!
//! A target outside its mode's range (rank below 1 or fractional, score
//! outside 0-100) matches no record.
//!
//! The criteria are resolved once per query into a [`ResolvedQuery`], so the
//! per-record check does no table work beyond two lookups.

use rust_decimal::Decimal;

use crate::engine::config::EngineConfig;
use crate::normalize::{fold_key, CitySet, NormalizerTables};
use crate::types::{CollegeRecord, Cutoff, FilterCriteria, QueryMode};

/// Which cutoff(s) a query looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelection<'a> {
    /// One concrete category code; thresholds apply
    Single(&'a str),
    /// A main category's whole group; no threshold, annotation only
    Group(&'a [String]),
}

impl<'a> CategorySelection<'a> {
    /// Pick the selection for a query.
    pub fn resolve(
        criteria: &'a FilterCriteria,
        tables: &'a NormalizerTables,
        config: &'a EngineConfig,
    ) -> Self {
        let group = criteria
            .main_category
            .as_deref()
            .and_then(|main| tables.categories.sub_categories(main));

        match (criteria.sub_category.as_deref(), group) {
            (Some(sub), Some(codes)) if codes.iter().any(|c| c == sub) => Self::Single(sub),
            (_, Some(codes)) => Self::Group(codes),
            (Some(sub), None) => Self::Single(sub),
            (None, None) => Self::Single(config.default_category.as_str()),
        }
    }
}

/// A record that passed the predicate, with what the query looked at.
#[derive(Debug, Clone)]
pub struct Admission<'r> {
    /// Cutoffs relevant to the query, in record order
    pub cutoffs: Vec<&'r Cutoff>,
    /// Value ranked against the target; `None` when there is none
    pub reference: Option<Decimal>,
}

/// Criteria with tables applied, ready to test many records.
#[derive(Debug, Clone)]
pub struct ResolvedQuery<'a> {
    pub mode: QueryMode,
    pub target: Option<Decimal>,
    pub selection: CategorySelection<'a>,
    target_in_range: bool,
    tables: &'a NormalizerTables,
    branch_key: Option<String>,
    cities: Option<CitySet>,
}

impl<'a> ResolvedQuery<'a> {
    pub fn new(
        criteria: &'a FilterCriteria,
        tables: &'a NormalizerTables,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            mode: criteria.mode,
            target: criteria.target,
            selection: CategorySelection::resolve(criteria, tables, config),
            target_in_range: criteria.validate().is_ok(),
            tables,
            branch_key: criteria
                .branch
                .as_deref()
                .map(|branch| fold_key(tables.branches.normalize(branch))),
            cities: criteria
                .location
                .as_deref()
                .map(|location| tables.locations.expand_location(location)),
        }
    }

    /// Test one record.
    ///
    /// # Returns
    ///
    /// * `Some(Admission)` - the record matches
    /// * `None` - some criterion failed
    pub fn admit<'r>(&self, record: &'r CollegeRecord) -> Option<Admission<'r>> {
        if !self.target_in_range {
            return None;
        }

        if let Some(cities) = &self.cities {
            if !cities.contains(&record.city) {
                return None;
            }
        }

        if let Some(branch_key) = &self.branch_key {
            if fold_key(self.tables.branches.normalize(&record.course_name)) != *branch_key {
                return None;
            }
        }

        match self.selection {
            CategorySelection::Single(category) => {
                let cutoff = record.cutoff(category);
                let reference = cutoff.and_then(|c| c.value(self.mode));
                if let Some(target) = self.target {
                    let value = reference?;
                    if !reachable(self.mode, target, value) {
                        return None;
                    }
                }
                Some(Admission {
                    cutoffs: cutoff.into_iter().collect(),
                    reference,
                })
            }
            CategorySelection::Group(codes) => Some(Admission {
                cutoffs: record.cutoffs_in(codes),
                reference: None,
            }),
        }
    }

    /// Boolean form of [`ResolvedQuery::admit`]
    #[inline]
    pub fn matches(&self, record: &CollegeRecord) -> bool {
        self.admit(record).is_some()
    }
}

/// Whether a student at `target` clears a cutoff of `value`.
///
/// ```
/// use college_predictor::engine::predicate::reachable;
/// use college_predictor::types::QueryMode;
/// use rust_decimal::Decimal;
///
/// // rank 4800 beats a closing rank of 5000
/// assert!(reachable(QueryMode::ByRank, Decimal::from(4800), Decimal::from(5000)));
/// // 70% does not reach a 72% cutoff
/// assert!(!reachable(QueryMode::ByScore, Decimal::from(70), Decimal::from(72)));
/// ```
#[inline]
pub fn reachable(mode: QueryMode, target: Decimal, value: Decimal) -> bool {
    match mode {
        QueryMode::ByScore => target >= value,
        QueryMode::ByRank => target <= value,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
