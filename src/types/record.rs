//! College records as published by the catalog provider.
//!
//! ## Serialization
//!
//! Field names follow the provider export (`"College Name"`, `"Cutoffs"`,
//! ...). Cutoff values are decoded leniently: see [`crate::types::score`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::score;

// ============================================================================
// QueryMode enum
// ============================================================================

/// Which cutoff representation a query compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// Percentage score, higher is better
    #[default]
    ByScore,
    /// Exam rank, lower is better
    ByRank,
}

impl QueryMode {
    /// Label used in logs and CLI output
    pub fn label(self) -> &'static str {
        match self {
            QueryMode::ByScore => "score",
            QueryMode::ByRank => "rank",
        }
    }
}

// ============================================================================
// Cutoff struct
// ============================================================================

/// Admission cutoff for one reservation category.
///
/// `rank` and `score` describe the same threshold in two units. Either may
/// be missing; a missing value is "no data", never zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cutoff {
    /// Raw category code, e.g. `GOPEN`, `LOBC`
    #[serde(rename = "Category", default)]
    pub category: String,

    /// Last admitted rank
    #[serde(rename = "Rank", default, deserialize_with = "score::deserialize_rank")]
    pub rank: Option<u32>,

    /// Last admitted percentage
    #[serde(
        rename = "Score",
        default,
        deserialize_with = "score::deserialize_score",
        serialize_with = "score::serialize_decimal"
    )]
    pub score: Option<Decimal>,
}

impl Cutoff {
    /// Create a cutoff entry
    ///
    /// # Example
    ///
    /// ```
    /// use college_predictor::types::Cutoff;
    /// use rust_decimal::Decimal;
    ///
    /// let cutoff = Cutoff::new("GOPEN", Some(5000), Some(Decimal::new(8950, 2)));
    /// assert_eq!(cutoff.rank, Some(5000));
    /// ```
    pub fn new(category: impl Into<String>, rank: Option<u32>, score: Option<Decimal>) -> Self {
        Self {
            category: category.into(),
            rank,
            score,
        }
    }

    /// The value a query in `mode` compares against, if present.
    ///
    /// Ranks are lifted into `Decimal` so both modes share one distance
    /// function.
    pub fn value(&self, mode: QueryMode) -> Option<Decimal> {
        match mode {
            QueryMode::ByScore => self.score,
            QueryMode::ByRank => self.rank.map(Decimal::from),
        }
    }

    /// Whether neither representation carries data
    pub fn is_blank(&self) -> bool {
        self.rank.is_none() && self.score.is_none()
    }
}

// ============================================================================
// CollegeRecord struct
// ============================================================================

/// One college + course listing with its per-category cutoffs.
///
/// Records are read-only once loaded. Identifiers are not unique: the same
/// physical college can be listed several times under different spellings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollegeRecord {
    #[serde(rename = "College Code", default)]
    pub college_code: String,

    #[serde(rename = "College Name", default)]
    pub college_name: String,

    #[serde(rename = "Choice Code", default)]
    pub choice_code: String,

    /// Raw program name; see [`crate::normalize::BranchTable`]
    #[serde(rename = "Course Name", default)]
    pub course_name: String,

    /// Raw city name; see [`crate::normalize::LocationClusters`]
    #[serde(rename = "City", default)]
    pub city: String,

    /// Institution status tag, passed through untouched
    #[serde(rename = "Status", default)]
    pub status: String,

    #[serde(rename = "Cutoffs", default, deserialize_with = "deserialize_cutoffs")]
    pub cutoffs: Vec<Cutoff>,
}

impl CollegeRecord {
    /// Create a record with no cutoffs
    ///
    /// # Example
    ///
    /// ```
    /// use college_predictor::types::{CollegeRecord, Cutoff};
    ///
    /// let record = CollegeRecord::new("ABC College", "Computer Engineering", "Thane")
    ///     .with_cutoff(Cutoff::new("GOPEN", Some(5000), None));
    ///
    /// assert!(record.cutoff("GOPEN").is_some());
    /// assert!(record.cutoff("LOBC").is_none());
    /// ```
    pub fn new(
        college_name: impl Into<String>,
        course_name: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            college_name: college_name.into(),
            course_name: course_name.into(),
            city: city.into(),
            ..Self::default()
        }
    }

    /// Set the code identifiers
    pub fn with_codes(mut self, college_code: impl Into<String>, choice_code: impl Into<String>) -> Self {
        self.college_code = college_code.into();
        self.choice_code = choice_code.into();
        self
    }

    /// Set the status tag
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Add or replace the cutoff for the cutoff's category.
    ///
    /// Keeps the one-entry-per-category invariant.
    pub fn with_cutoff(mut self, cutoff: Cutoff) -> Self {
        match self.cutoffs.iter_mut().find(|c| c.category == cutoff.category) {
            Some(existing) => *existing = cutoff,
            None => self.cutoffs.push(cutoff),
        }
        self
    }

    /// Cutoff entry for a category code
    pub fn cutoff(&self, category: &str) -> Option<&Cutoff> {
        self.cutoffs.iter().find(|c| c.category == category)
    }

    /// Cutoffs whose category is in `categories`, in record order
    pub fn cutoffs_in(&self, categories: &[String]) -> Vec<&Cutoff> {
        self.cutoffs
            .iter()
            .filter(|c| categories.iter().any(|cat| *cat == c.category))
            .collect()
    }
}

/// Providers sometimes export `"Cutoffs": null`; treat it as empty. A repeated
/// category keeps its first entry.
fn deserialize_cutoffs<'de, D>(deserializer: D) -> Result<Vec<Cutoff>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<Vec<Cutoff>>::deserialize(deserializer)?.unwrap_or_default();
    let mut cutoffs: Vec<Cutoff> = Vec::with_capacity(raw.len());
    for cutoff in raw {
        if !cutoffs.iter().any(|c| c.category == cutoff.category) {
            cutoffs.push(cutoff);
        }
    }
    Ok(cutoffs)
}

// ============================================================================
// Unit Tests
// ============================================================================
