//! Per-query filter criteria.
//!
//! A `FilterCriteria` is built from user input, used for one query and
//! dropped. Blank strings count as "not selected", which is how the
//! counselling forms send an untouched dropdown.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{EngineError, Result};
use crate::types::record::QueryMode;
use crate::types::score::{decimal_to_rank, in_score_range};

/// What a student asked for.
///
/// ## Example
///
/// ```
/// use college_predictor::types::{FilterCriteria, QueryMode};
///
/// let criteria = FilterCriteria::by_rank(4800)
///     .with_branch("Computer Science and Engineering")
///     .with_location("Mumbai")
///     .with_main_category("");
///
/// assert_eq!(criteria.mode, QueryMode::ByRank);
/// assert_eq!(criteria.location.as_deref(), Some("Mumbai"));
/// assert!(criteria.main_category.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub mode: QueryMode,

    /// Student's percentage or rank; `None` lists without threshold or ranking
    pub target: Option<Decimal>,

    pub branch: Option<String>,
    pub main_category: Option<String>,
    pub sub_category: Option<String>,

    /// City name or cluster key
    pub location: Option<String>,
}

impl FilterCriteria {
    /// Criteria with no target in the given mode
    pub fn new(mode: QueryMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Percentage query
    pub fn by_score(score: Decimal) -> Self {
        Self {
            mode: QueryMode::ByScore,
            target: Some(score),
            ..Self::default()
        }
    }

    /// Rank query
    pub fn by_rank(rank: u32) -> Self {
        Self {
            mode: QueryMode::ByRank,
            target: Some(Decimal::from(rank)),
            ..Self::default()
        }
    }

    /// Build criteria from the text a student typed into the target box.
    ///
    /// Blank input yields criteria without a target.
    ///
    /// # Errors
    ///
    /// * `InvalidNumber` - not a number
    /// * `ScoreOutOfRange` - percentage outside 0-100
    /// * `InvalidRank` - rank not a whole number >= 1
    ///
    /// # Example
    ///
    /// ```
    /// use college_predictor::types::{FilterCriteria, QueryMode};
    ///
    /// let criteria = FilterCriteria::parse_target(QueryMode::ByScore, "78.5").unwrap();
    /// assert!(criteria.target.is_some());
    ///
    /// assert!(FilterCriteria::parse_target(QueryMode::ByScore, "120").is_err());
    /// assert!(FilterCriteria::parse_target(QueryMode::ByRank, "0").is_err());
    /// ```
    pub fn parse_target(mode: QueryMode, input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::new(mode));
        }
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        let value =
            Decimal::from_str(number).map_err(|_| EngineError::InvalidNumber(input.to_string()))?;

        let criteria = Self {
            mode,
            target: Some(value),
            ..Self::default()
        };
        criteria.validate()?;
        Ok(criteria)
    }

    /// Check the target against the mode's valid range.
    ///
    /// The engine applies the same check when it resolves a query: criteria
    /// that fail it match no record, so the query returns an empty result.
    pub fn validate(&self) -> Result<()> {
        let Some(target) = self.target else {
            return Ok(());
        };
        match self.mode {
            QueryMode::ByScore if !in_score_range(target) => Err(EngineError::ScoreOutOfRange(target)),
            QueryMode::ByRank if decimal_to_rank(target).is_none() => {
                Err(EngineError::InvalidRank(target.to_string()))
            }
            _ => Ok(()),
        }
    }

    pub fn with_target(mut self, target: Option<Decimal>) -> Self {
        self.target = target;
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = non_blank(branch.into());
        self
    }

    pub fn with_main_category(mut self, main_category: impl Into<String>) -> Self {
        self.main_category = non_blank(main_category.into());
        self
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = non_blank(sub_category.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location.into());
        self
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_rank_sets_mode_and_target() {
        let criteria = FilterCriteria::by_rank(4800);
        assert_eq!(criteria.mode, QueryMode::ByRank);
        assert_eq!(criteria.target, Some(Decimal::from(4800)));
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn test_blank_strings_are_unset() {
        let criteria = FilterCriteria::by_score(Decimal::from(70))
            .with_branch("  ")
            .with_location("")
            .with_main_category("OBC")
            .with_sub_category("");

        assert!(criteria.branch.is_none());
        assert!(criteria.location.is_none());
        assert_eq!(criteria.main_category.as_deref(), Some("OBC"));
        assert!(criteria.sub_category.is_none());
    }

    #[test]
    fn test_parse_target_score() {
        let criteria = FilterCriteria::parse_target(QueryMode::ByScore, " 89.50% ").unwrap();
        assert_eq!(criteria.target, Some(Decimal::new(8950, 2)));

        assert!(matches!(
            FilterCriteria::parse_target(QueryMode::ByScore, "100.5"),
            Err(EngineError::ScoreOutOfRange(_))
        ));
        assert!(matches!(
            FilterCriteria::parse_target(QueryMode::ByScore, "eighty"),
            Err(EngineError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_target_rank() {
        let criteria = FilterCriteria::parse_target(QueryMode::ByRank, "4800").unwrap();
        assert_eq!(criteria.target, Some(Decimal::from(4800)));

        assert!(matches!(
            FilterCriteria::parse_target(QueryMode::ByRank, "12.5"),
            Err(EngineError::InvalidRank(_))
        ));
        assert!(matches!(
            FilterCriteria::parse_target(QueryMode::ByRank, "-1"),
            Err(EngineError::InvalidRank(_))
        ));
    }

    #[test]
    fn test_parse_target_blank_means_no_target() {
        let criteria = FilterCriteria::parse_target(QueryMode::ByRank, "   ").unwrap();
        assert_eq!(criteria.target, None);
        assert_eq!(criteria.mode, QueryMode::ByRank);
    }
}
