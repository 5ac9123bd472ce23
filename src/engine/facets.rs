//! Dropdown options derived from a catalog snapshot.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::engine::dedupe::dedupe;
use crate::normalize::NormalizerTables;
use crate::types::CollegeRecord;

/// Sorted, de-duplicated values present in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogFacets {
    /// Canonical branch names, plus the always-offered list (also normalized)
    pub branches: Vec<String>,
    /// Cities of the deduplicated listing
    pub cities: Vec<String>,
    /// Status tags of the deduplicated listing
    pub statuses: Vec<String>,
    /// Every cutoff category code seen
    pub categories: Vec<String>,
}

impl CatalogFacets {
    /// Collect facets. Blank values are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use college_predictor::engine::CatalogFacets;
    /// use college_predictor::normalize::NormalizerTables;
    /// use college_predictor::types::CollegeRecord;
    ///
    /// let records = vec![CollegeRecord::new("A", "Computer Technology", "Pune")];
    /// let facets = CatalogFacets::collect(&records, &NormalizerTables::empty());
    ///
    /// assert_eq!(facets.branches, vec!["Computer Technology"]);
    /// assert_eq!(facets.cities, vec!["Pune"]);
    /// ```
    pub fn collect(records: &[CollegeRecord], tables: &NormalizerTables) -> Self {
        let mut branches: BTreeSet<String> = tables
            .offered_branches
            .iter()
            .map(|b| tables.branches.normalize(b).trim().to_string())
            .collect();
        let mut categories = BTreeSet::new();
        for record in records {
            branches.insert(tables.branches.normalize(&record.course_name).trim().to_string());
            categories.extend(record.cutoffs.iter().map(|c| c.category.trim().to_string()));
        }

        let mut cities = BTreeSet::new();
        let mut statuses = BTreeSet::new();
        for (_, record) in dedupe(records) {
            cities.insert(record.city.trim().to_string());
            statuses.insert(record.status.trim().to_string());
        }

        Self {
            branches: sorted(branches),
            cities: sorted(cities),
            statuses: sorted(statuses),
            categories: sorted(categories),
        }
    }
}

fn sorted(set: BTreeSet<String>) -> Vec<String> {
    set.into_iter().filter(|s| !s.is_empty()).collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::dedupe::{browse, BrowseFilter};
    use crate::types::Cutoff;

    #[test]
    fn test_collect_normalizes_branches() {
        let records = vec![
            CollegeRecord::new("A", "Computer Engineering", "Pune"),
            CollegeRecord::new("B", "Computer Technology", "Thane"),
        ];
        let mut tables = NormalizerTables::builtin();
        tables.offered_branches = vec!["Civil Engineering".to_string()];

        let facets = CatalogFacets::collect(&records, &tables);
        assert_eq!(
            facets.branches,
            vec!["Civil Engineering", "Computer Science and Engineering"]
        );
    }

    #[test]
    fn test_collect_cities_statuses_categories() {
        let records = vec![
            CollegeRecord::new("A", "X", "Pune")
                .with_status("Government")
                .with_cutoff(Cutoff::new("LOBC", Some(1), None))
                .with_cutoff(Cutoff::new("GOPEN", Some(1), None)),
            CollegeRecord::new("B", "X", "Nagpur")
                .with_status("")
                .with_cutoff(Cutoff::new("GOPEN", Some(2), None)),
        ];
        let facets = CatalogFacets::collect(&records, &NormalizerTables::empty());

        assert_eq!(facets.cities, vec!["Nagpur", "Pune"]);
        assert_eq!(facets.statuses, vec!["Government"]);
        assert_eq!(facets.categories, vec!["GOPEN", "LOBC"]);
    }

    #[test]
    fn test_every_facet_city_and_status_browses() {
        let records = vec![
            CollegeRecord::new("A", "X", " Pune ").with_status(" Government"),
            CollegeRecord::new("B", "X", "Nagpur\t").with_status("Un-Aided "),
            CollegeRecord::new("C", "X", "Thane").with_status("Un-Aided"),
        ];
        let facets = CatalogFacets::collect(&records, &NormalizerTables::empty());

        for city in &facets.cities {
            let hits = browse(&records, &BrowseFilter::new().with_city(city.as_str()));
            assert!(!hits.is_empty(), "city {city:?}");
        }
        for status in &facets.statuses {
            let hits = browse(&records, &BrowseFilter::new().with_status(status.as_str()));
            assert!(!hits.is_empty(), "status {status:?}");
        }
    }

    #[test]
    fn test_collect_empty_catalog() {
        let facets = CatalogFacets::collect(&[], &NormalizerTables::empty());
        assert_eq!(facets, CatalogFacets::default());
    }
}
