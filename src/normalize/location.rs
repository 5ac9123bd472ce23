//! District clusters for location filtering.
//!
//! Students pick a metro ("Mumbai") while the catalog records the town
//! ("Andheri", "Thane", "Panvel"). A cluster key expands to every town in
//! its district; any other location expands to itself.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{EngineError, Result};
use crate::normalize::fold_key;

/// Set of city names a location query accepts.
///
/// Names are stored folded, and [`CitySet::contains`] folds its argument, so
/// membership ignores case and extra whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CitySet {
    cities: BTreeSet<String>,
}

impl CitySet {
    fn singleton(city: &str) -> Self {
        Self {
            cities: BTreeSet::from([fold_key(city)]),
        }
    }

    /// Whether a raw catalog city is accepted
    pub fn contains(&self, city: &str) -> bool {
        self.cities.contains(&fold_key(city))
    }

    /// Folded names, sorted
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// District cluster table: folded key → folded member towns.
#[derive(Debug, Clone, Default)]
pub struct LocationClusters {
    clusters: BTreeMap<String, CitySet>,
}

impl LocationClusters {
    /// Build clusters from `(key, towns)` pairs.
    ///
    /// The key is always added to its own cluster. A key listed twice has its
    /// towns merged.
    ///
    /// # Errors
    ///
    /// `BlankClusterKey` if a key is empty or whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use college_predictor::normalize::LocationClusters;
    ///
    /// let clusters = LocationClusters::new([("Mumbai", vec!["Thane", "Andheri"])]).unwrap();
    ///
    /// let mumbai = clusters.expand_location("mumbai");
    /// assert!(mumbai.contains("Thane"));
    /// assert!(mumbai.contains("MUMBAI"));
    ///
    /// let thane = clusters.expand_location("Thane");
    /// assert!(thane.contains("thane"));
    /// assert!(!thane.contains("Andheri"));
    /// ```
    pub fn new<I, K, T, C>(clusters: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: IntoIterator<Item = C>,
        C: AsRef<str>,
    {
        let mut table: BTreeMap<String, CitySet> = BTreeMap::new();
        for (key, towns) in clusters {
            let key = fold_key(key.as_ref());
            if key.is_empty() {
                return Err(EngineError::BlankClusterKey);
            }
            let set = table.entry(key.clone()).or_default();
            set.cities.insert(key);
            set.cities
                .extend(towns.into_iter().map(|town| fold_key(town.as_ref())));
        }
        Ok(Self { clusters: table })
    }

    /// Cities a location query accepts.
    ///
    /// A cluster key yields its whole district. Anything else, including a
    /// town that belongs to some cluster, yields just itself. Either way a
    /// record in town `X` of cluster `G` matches both `G` and `X`.
    pub fn expand_location(&self, raw: &str) -> CitySet {
        self.clusters
            .get(&fold_key(raw))
            .cloned()
            .unwrap_or_else(|| CitySet::singleton(raw))
    }

    /// Whether `raw` names a cluster
    pub fn is_cluster(&self, raw: &str) -> bool {
        self.clusters.contains_key(&fold_key(raw))
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
