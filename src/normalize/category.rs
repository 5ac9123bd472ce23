//! Reservation category groups.
//!
//! Cutoffs are published per raw code (`GOBC`, `LOBC`, `DEFR-OBC`, ...).
//! Students pick a main category first, then optionally one of its codes.

use crate::normalize::fold_key;

/// Main category label → raw codes, in table order.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    groups: Vec<(String, Vec<String>)>,
}

impl CategoryMap {
    /// Build from `(main, codes)` pairs. A repeated main label extends the
    /// existing group.
    ///
    /// # Example
    ///
    /// ```
    /// use college_predictor::normalize::CategoryMap;
    ///
    /// let map = CategoryMap::new([("OBC", vec!["GOBC", "LOBC"])]);
    /// assert!(map.contains("OBC", "LOBC"));
    /// assert!(!map.contains("OBC", "GOPEN"));
    /// assert_eq!(map.sub_categories("obc").map(|s| s.len()), Some(2));
    /// ```
    pub fn new<I, M, C, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = (M, C)>,
        M: AsRef<str>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::default();
        for (main, codes) in groups {
            let main = main.as_ref().trim();
            let idx = match map.position(main) {
                Some(idx) => idx,
                None => {
                    map.groups.push((main.to_string(), Vec::new()));
                    map.groups.len() - 1
                }
            };
            let entry = &mut map.groups[idx].1;
            for code in codes {
                let code = code.as_ref().trim();
                if !entry.iter().any(|c| c == code) {
                    entry.push(code.to_string());
                }
            }
        }
        map
    }

    fn position(&self, main: &str) -> Option<usize> {
        let key = fold_key(main);
        self.groups.iter().position(|(name, _)| fold_key(name) == key)
    }

    /// Codes of a main category. Label lookup ignores case.
    pub fn sub_categories(&self, main: &str) -> Option<&[String]> {
        self.position(main).map(|idx| self.groups[idx].1.as_slice())
    }

    /// Whether `sub` is one of `main`'s codes
    pub fn contains(&self, main: &str, sub: &str) -> bool {
        self.sub_categories(main)
            .is_some_and(|codes| codes.iter().any(|c| c == sub))
    }

    /// Main labels in table order
    pub fn main_categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
