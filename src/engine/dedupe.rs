//! Duplicate removal and the browse listing.
//!
//! The catalog lists some colleges several times with cosmetic differences
//! ("ABC College" / "abc  college ", "Pune" / " pune "). Two records are the
//! same college when their folded `(college_name, city)` pairs are equal.
//!
//! The first occurrence in catalog order is kept and later ones are dropped,
//! whatever their cutoffs say.

use std::collections::HashSet;

use crate::normalize::fold_key;
use crate::types::CollegeRecord;

/// Identity of a college listing: folded `(name, city)`.
pub fn dedupe_key(record: &CollegeRecord) -> (String, String) {
    (fold_key(&record.college_name), fold_key(&record.city))
}

/// Keep the first record of each `(name, city)` group, in catalog order.
///
/// Returns `(catalog_index, record)` pairs.
///
/// # Example
///
/// ```
/// use college_predictor::engine::dedupe;
/// use college_predictor::types::CollegeRecord;
///
/// let records = vec![
///     CollegeRecord::new("ABC College", "Civil Engineering", "Pune"),
///     CollegeRecord::new("abc college", "Mechanical Engineering", " pune "),
///     CollegeRecord::new("ABC College", "Civil Engineering", "Nashik"),
/// ];
///
/// let unique = dedupe(&records);
/// assert_eq!(unique.len(), 2);
/// assert_eq!(unique[0].1.course_name, "Civil Engineering");
/// assert_eq!(unique[1].0, 2);
/// ```
pub fn dedupe(records: &[CollegeRecord]) -> Vec<(usize, &CollegeRecord)> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(records.len());
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| seen.insert(dedupe_key(record)))
        .collect()
}

// ============================================================================
// Browse filter
// ============================================================================

/// Filters for the "all colleges" listing. No cutoffs are consulted.
///
/// Blank strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseFilter {
    /// Case-insensitive substring of the college name
    pub search: Option<String>,
    /// Exact city
    pub city: Option<String>,
    /// Exact status tag
    pub status: Option<String>,
}

impl BrowseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = non_blank(search.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = non_blank(city.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = non_blank(status.into());
        self
    }

    /// Whether a record passes every set filter. City and status compare
    /// exactly after trimming surrounding whitespace.
    pub fn accepts(&self, record: &CollegeRecord) -> bool {
        if let Some(search) = &self.search {
            if !fold_key(&record.college_name).contains(&fold_key(search)) {
                return false;
            }
        }
        if let Some(city) = &self.city {
            if record.city.trim() != city.trim() {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if record.status.trim() != status.trim() {
                return false;
            }
        }
        true
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Deduplicate, then apply `filter`. Catalog order is kept.
pub fn browse<'a>(records: &'a [CollegeRecord], filter: &BrowseFilter) -> Vec<(usize, &'a CollegeRecord)> {
    let mut listing = dedupe(records);
    listing.retain(|(_, record)| filter.accepts(record));
    listing
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cutoff;

    fn listing() -> Vec<CollegeRecord> {
        vec![
            CollegeRecord::new("ABC College", "Computer Engineering", "Pune").with_status("Government"),
            CollegeRecord::new("abc college", "Civil Engineering", " pune ").with_status("Un-Aided"),
            CollegeRecord::new("XYZ Institute", "Civil Engineering", "Nagpur").with_status("Un-Aided"),
            CollegeRecord::new("ABC College", "Civil Engineering", "Thane").with_status("Government"),
        ]
    }

    #[test]
    fn test_dedupe_first_occurrence_wins() {
        let records = listing();
        let unique = dedupe(&records);
        let indices: Vec<usize> = unique.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 2, 3]);
        assert_eq!(unique[0].1.status, "Government");
    }

    #[test]
    fn test_dedupe_ignores_cutoffs() {
        let records = vec![
            CollegeRecord::new("A", "X", "Pune").with_cutoff(Cutoff::new("GOPEN", Some(10), None)),
            CollegeRecord::new("A", "X", "Pune").with_cutoff(Cutoff::new("GOPEN", Some(1), None)),
        ];
        let unique = dedupe(&records);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].1.cutoffs[0].rank, Some(10));
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let records = listing();
        let once: Vec<CollegeRecord> = dedupe(&records).into_iter().map(|(_, r)| r.clone()).collect();
        let twice = dedupe(&once);
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_dedupe_empty() {
        assert!(dedupe(&[]).is_empty());
    }

    #[test]
    fn test_browse_search_is_case_insensitive() {
        let records = listing();
        let found = browse(&records, &BrowseFilter::new().with_search("xyz"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, 2);
    }

    #[test]
    fn test_browse_city_and_status_exact() {
        let records = listing();
        let pune = browse(&records, &BrowseFilter::new().with_city("Pune"));
        assert_eq!(pune.len(), 1);

        let lower = browse(&records, &BrowseFilter::new().with_city("pune"));
        assert!(lower.is_empty());

        let aided = browse(&records, &BrowseFilter::new().with_status("Un-Aided"));
        // the Un-Aided Pune duplicate is gone before filtering
        assert_eq!(aided.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_browse_city_ignores_surrounding_whitespace() {
        let records = vec![CollegeRecord::new("A", "X", " Pune ").with_status("Government ")];
        assert_eq!(browse(&records, &BrowseFilter::new().with_city("Pune")).len(), 1);
        assert_eq!(browse(&records, &BrowseFilter::new().with_status("Government")).len(), 1);
    }

    #[test]
    fn test_browse_blank_filters_unset() {
        let records = listing();
        let filter = BrowseFilter::new().with_search(" ").with_city("").with_status("");
        assert_eq!(filter, BrowseFilter::default());
        assert_eq!(browse(&records, &filter).len(), 3);
    }
}
