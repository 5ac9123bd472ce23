//! Branch-name normalization.
//!
//! The catalog spells one logical branch many ways ("Computer Engineering",
//! "Computer Technology", "Computer Science and Engineering", ...). A
//! `BranchTable` maps every known spelling to one canonical name and leaves
//! unknown names alone.

use std::collections::HashMap;

use crate::error::{EngineError, Result};
use crate::normalize::fold_key;

/// Synonym table: folded raw spelling → canonical branch name.
///
/// ## Invariant
///
/// A canonical name is either absent as a key or maps to itself, so
/// normalizing twice gives the same answer as normalizing once. The
/// constructor rejects tables that break this.
#[derive(Debug, Clone, Default)]
pub struct BranchTable {
    synonyms: HashMap<String, String>,
}

impl BranchTable {
    /// Build a table from `(raw, canonical)` pairs.
    ///
    /// Later pairs override earlier ones for the same raw spelling.
    ///
    /// # Errors
    ///
    /// `ChainedSynonym` if some canonical name is itself mapped to a
    /// different name.
    ///
    /// # Example
    ///
    /// ```
    /// use college_predictor::normalize::BranchTable;
    ///
    /// let table = BranchTable::new([
    ///     ("Computer Engineering", "Computer Science and Engineering"),
    ///     ("Computer Technology", "Computer Science and Engineering"),
    /// ]).unwrap();
    ///
    /// assert_eq!(table.normalize("Computer Technology"), "Computer Science and Engineering");
    /// assert_eq!(table.normalize("Textile Technology"), "Textile Technology");
    ///
    /// assert!(BranchTable::new([("a", "b"), ("b", "c")]).is_err());
    /// ```
    pub fn new<I, R, C>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (R, C)>,
        R: AsRef<str>,
        C: AsRef<str>,
    {
        let mut synonyms = HashMap::new();
        for (raw, canonical) in pairs {
            synonyms.insert(fold_key(raw.as_ref()), canonical.as_ref().trim().to_string());
        }

        for (raw, canonical) in &synonyms {
            if let Some(next) = synonyms.get(&fold_key(canonical)) {
                if next != canonical {
                    return Err(EngineError::ChainedSynonym {
                        raw: raw.clone(),
                        canonical: canonical.clone(),
                        next: next.clone(),
                    });
                }
            }
        }

        Ok(Self { synonyms })
    }

    /// Canonical name for a raw course name; `raw` itself when unknown.
    ///
    /// Total and pure. Lookup ignores case and extra whitespace.
    pub fn normalize<'a>(&'a self, raw: &'a str) -> &'a str {
        self.synonyms
            .get(&fold_key(raw))
            .map(String::as_str)
            .unwrap_or(raw)
    }

    /// Whether two names denote the same logical branch
    pub fn same_branch(&self, a: &str, b: &str) -> bool {
        fold_key(self.normalize(a)) == fold_key(self.normalize(b))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
