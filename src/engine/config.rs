//! Engine settings.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::normalize::builtin::DEFAULT_CATEGORY;

/// Number of colleges a ranked query returns by default.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Tunables for [`crate::engine::MatchingEngine`].
///
/// Every field has a default, so `{}` is a valid JSON config.
///
/// ## Example
///
/// ```
/// use college_predictor::engine::EngineConfig;
///
/// let config = EngineConfig::from_json_str(r#"{"result_limit": 50}"#).unwrap();
/// assert_eq!(config.result_limit, 50);
/// assert_eq!(config.default_category, "GOPEN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Maximum colleges returned by a query; 0 returns every match
    pub result_limit: usize,

    /// Category compared against when the student picks none
    pub default_category: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    /// Truncation length for `total` matches
    pub(crate) fn visible(&self, total: usize) -> usize {
        if self.result_limit == 0 {
            total
        } else {
            total.min(self.result_limit)
        }
    }
}
