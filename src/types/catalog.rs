//! Immutable catalog snapshot.
//!
//! The catalog provider is a live document store. The engine does not
//! subscribe to it: the data layer takes a snapshot, builds a `Catalog`,
//! and every query runs against that snapshot. A new snapshot means a new
//! `Catalog` with a new fingerprint.
//!
//! ## Fingerprint
//!
//! The 32-byte fingerprint is a SHA-256 hash over every record in order.
//! Two catalogs with the same records in the same order have the same
//! fingerprint, so callers can key cached results on it.

use std::ops::Deref;

use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::{EngineError, Result};
use crate::types::CollegeRecord;

const FIELD_SEP: u8 = 0x1f;
const RECORD_SEP: u8 = 0x1e;

/// Read-only snapshot of every college record, in provider order.
///
/// ## Example
///
/// ```
/// use college_predictor::types::Catalog;
///
/// let catalog = Catalog::from_json_str(r#"[
///     {"College Name": "ABC College", "City": "Pune", "Course Name": "Civil Engineering",
///      "Cutoffs": [{"Category": "GOPEN", "Rank": "1200", "Score": "91.2%"}]}
/// ]"#).unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.fingerprint_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CollegeRecord>,
    fingerprint: [u8; 32],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    /// Wrap already-decoded records
    pub fn new(records: Vec<CollegeRecord>) -> Self {
        let fingerprint = Self::compute_fingerprint(&records);
        Self {
            records,
            fingerprint,
        }
    }

    /// Decode a provider export.
    ///
    /// Accepts a JSON array of records, an object whose values are records,
    /// or `null` (empty store).
    ///
    /// # Errors
    ///
    /// * `Json` - the text is not JSON
    /// * `CatalogShape` - top level is a string, number or bool
    /// * `CatalogEntry` - an entry is not a record object
    ///
    /// `null` entries (holes left by deleted keys) are skipped.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Decode an already-parsed export. See [`Catalog::from_json_str`].
    pub fn from_value(value: Value) -> Result<Self> {
        let entries: Vec<(String, Value)> = match value {
            Value::Null => Vec::new(),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), item))
                .collect(),
            Value::Object(map) => {
                let mut entries: Vec<(String, Value)> = map.into_iter().collect();
                // Stores keyed by push index come back as "0", "1", ... "10";
                // order those numerically, otherwise keep document order.
                if entries.iter().all(|(key, _)| key.parse::<u64>().is_ok()) {
                    entries.sort_by_key(|(key, _)| key.parse::<u64>().unwrap_or(u64::MAX));
                }
                entries
            }
            Value::Bool(_) => return Err(EngineError::CatalogShape("a boolean")),
            Value::Number(_) => return Err(EngineError::CatalogShape("a number")),
            Value::String(_) => return Err(EngineError::CatalogShape("a string")),
        };

        let mut records = Vec::with_capacity(entries.len());
        let mut holes = 0usize;
        for (key, entry) in entries {
            if entry.is_null() {
                holes += 1;
                continue;
            }
            let record: CollegeRecord = serde_json::from_value(entry)
                .map_err(|source| EngineError::CatalogEntry { key, source })?;
            records.push(record);
        }

        if holes > 0 {
            warn!(null_entries = holes, "catalog has null entries, skipped");
        }

        let blank = records
            .iter()
            .flat_map(|r| r.cutoffs.iter())
            .filter(|c| c.is_blank())
            .count();
        if blank > 0 {
            warn!(blank_cutoffs = blank, "catalog has cutoffs without usable rank or score");
        }

        let catalog = Self::new(records);
        debug!(
            records = catalog.len(),
            fingerprint = %catalog.fingerprint_hex(),
            "loaded catalog snapshot"
        );
        Ok(catalog)
    }

    // ========================================================================
    // Access
    // ========================================================================

    #[inline]
    pub fn records(&self) -> &[CollegeRecord] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// SHA-256 over the records in order
    #[inline]
    pub fn fingerprint(&self) -> [u8; 32] {
        self.fingerprint
    }

    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint)
    }

    fn compute_fingerprint(records: &[CollegeRecord]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for record in records {
            for field in [
                &record.college_code,
                &record.college_name,
                &record.choice_code,
                &record.course_name,
                &record.city,
                &record.status,
            ] {
                hasher.update(field.as_bytes());
                hasher.update([FIELD_SEP]);
            }
            for cutoff in &record.cutoffs {
                hasher.update(cutoff.category.as_bytes());
                hasher.update([FIELD_SEP]);
                if let Some(rank) = cutoff.rank {
                    hasher.update(rank.to_le_bytes());
                }
                hasher.update([FIELD_SEP]);
                if let Some(score) = cutoff.score {
                    // normalize() so 89.50 and 89.5 hash alike
                    hasher.update(score.normalize().to_string().as_bytes());
                }
                hasher.update([FIELD_SEP]);
            }
            hasher.update([RECORD_SEP]);
        }
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }
}

impl Deref for Catalog {
    type Target = [CollegeRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl AsRef<[CollegeRecord]> for Catalog {
    fn as_ref(&self) -> &[CollegeRecord] {
        &self.records
    }
}

impl FromIterator<CollegeRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = CollegeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
