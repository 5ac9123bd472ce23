//! Property tests for the filter and ranking invariants.
//!
//! Catalogs and criteria are generated from small vocabularies so that
//! filters hit often and ties are common.

use college_predictor::engine::ranking::RankKey;
use college_predictor::engine::{EngineConfig, MatchingEngine};
use college_predictor::normalize::builtin::{BRANCH_SYNONYMS, DISTRICT_CLUSTERS};
use college_predictor::normalize::NormalizerTables;
use college_predictor::types::{CollegeRecord, Cutoff, FilterCriteria, QueryMode};

use proptest::prelude::*;
use rust_decimal::Decimal;

// ============================================================================
// STRATEGIES
// ============================================================================

const NAMES: &[&str] = &["ABC College", "abc college", "XYZ Institute", "PQR Polytechnic", "Govt College"];
const CITIES: &[&str] = &["Thane", "Mumbai", "Andheri", "Pune", "pune", "Kothrud", "Nagpur", "Sawantwadi"];
const COURSES: &[&str] = &[
    "Computer Engineering",
    "Computer Technology",
    "Computer Science and Engineering",
    "Information Technology",
    "Civil Engineering",
    "Civil and Environmental Engineering",
    "Underwater Basket Weaving",
];
const CATEGORIES: &[&str] = &["GOPEN", "LOBC", "GOBC", "GSC"];
const LOCATIONS: &[&str] = &["Mumbai", "Thane", "Pune", "Nagpur", "Sawantwadi"];
const BRANCHES: &[&str] = &["Computer Science and Engineering", "Civil Engineering", "Computer Technology"];
const MAINS: &[&str] = &["OBC", "OPEN / GENERAL", "Martian"];

fn pick(options: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(options).prop_map(str::to_string)
}

fn cutoff() -> impl Strategy<Value = Cutoff> {
    (
        pick(CATEGORIES),
        prop::option::weighted(0.8, 1u32..5_000),
        prop::option::weighted(0.8, 0i64..=10_000),
    )
        .prop_map(|(category, rank, score)| Cutoff::new(category, rank, score.map(|s| Decimal::new(s, 2))))
}

fn record() -> impl Strategy<Value = CollegeRecord> {
    (
        pick(NAMES),
        pick(COURSES),
        pick(CITIES),
        prop::collection::vec(cutoff(), 0..4),
        0u32..1000,
    )
        .prop_map(|(name, course, city, cutoffs, choice)| {
            cutoffs.into_iter().fold(
                CollegeRecord::new(name, course, city).with_codes("1", choice.to_string()),
                CollegeRecord::with_cutoff,
            )
        })
}

fn catalog() -> impl Strategy<Value = Vec<CollegeRecord>> {
    prop::collection::vec(record(), 0..60)
}

fn criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::bool::ANY,
        prop::option::weighted(0.8, 1u32..5_000),
        prop::option::of(pick(BRANCHES)),
        prop::option::of(pick(LOCATIONS)),
        prop::option::weighted(0.3, pick(MAINS)),
        prop::option::weighted(0.4, pick(CATEGORIES)),
    )
        .prop_map(|(by_rank, target, branch, location, main, sub)| {
            let mode = if by_rank { QueryMode::ByRank } else { QueryMode::ByScore };
            let target = target.map(|t| match mode {
                QueryMode::ByRank => Decimal::from(t),
                QueryMode::ByScore => Decimal::new(i64::from(t % 10_001), 2),
            });
            FilterCriteria::new(mode)
                .with_target(target)
                .with_branch(branch.unwrap_or_default())
                .with_location(location.unwrap_or_default())
                .with_main_category(main.unwrap_or_default())
                .with_sub_category(sub.unwrap_or_default())
        })
}

fn engine(limit: usize) -> MatchingEngine {
    MatchingEngine::new(
        NormalizerTables::builtin(),
        EngineConfig::default().with_result_limit(limit),
    )
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn query_is_deterministic(records in catalog(), criteria in criteria()) {
        let engine = engine(20);
        let first = engine.query(&records, &criteria);
        let second = engine.query(&records, &criteria);
        prop_assert_eq!(first.indices(), second.indices());
        prop_assert_eq!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn every_result_matches(records in catalog(), criteria in criteria()) {
        let engine = engine(0);
        for college in engine.query(&records, &criteria).colleges {
            prop_assert!(engine.matches(college.record, &criteria));
        }
    }

    #[test]
    fn every_match_is_in_untruncated_set(records in catalog(), criteria in criteria()) {
        let engine = engine(0);
        let result = engine.query(&records, &criteria);
        let expected: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| engine.matches(record, &criteria))
            .map(|(i, _)| i)
            .collect();
        let mut found = result.indices();
        found.sort_unstable();
        prop_assert_eq!(found, expected);
        prop_assert_eq!(result.total_matched, result.len());
    }

    #[test]
    fn ranking_keys_are_sorted_and_ties_stable(records in catalog(), criteria in criteria()) {
        let Some(target) = criteria.target else { return Ok(()); };
        let ranked = engine(0).rank_all(&records, &criteria);
        for pair in ranked.windows(2) {
            let a = RankKey::new(target, pair[0].reference);
            let b = RankKey::new(target, pair[1].reference);
            prop_assert!(a <= b);
            if a == b {
                prop_assert!(pair[0].catalog_index < pair[1].catalog_index);
            }
        }
    }

    #[test]
    fn exact_matches_come_first(records in catalog(), criteria in criteria()) {
        let Some(target) = criteria.target else { return Ok(()); };
        let ranked = engine(0).rank_all(&records, &criteria);
        let exact: Vec<bool> = ranked.iter().map(|c| c.reference == Some(target)).collect();
        let first_inexact = exact.iter().position(|e| !e).unwrap_or(exact.len());
        prop_assert!(exact[first_inexact..].iter().all(|e| !e));
    }

    #[test]
    fn truncation_takes_a_prefix(records in catalog(), criteria in criteria(), limit in 1usize..10) {
        let full = engine(0).query(&records, &criteria);
        let cut = engine(limit).query(&records, &criteria);
        let expected: Vec<usize> = full.indices().into_iter().take(limit).collect();
        prop_assert_eq!(cut.indices(), expected);
        prop_assert_eq!(cut.total_matched, full.total_matched);
    }

    #[test]
    fn no_target_keeps_catalog_order(records in catalog(), criteria in criteria()) {
        let criteria = criteria.with_target(None);
        let indices = engine(0).query(&records, &criteria).indices();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn branch_normalization_is_idempotent(raw in prop::sample::select(BRANCH_SYNONYMS).prop_map(|(raw, _)| raw)) {
        let tables = NormalizerTables::builtin();
        let once = tables.branches.normalize(raw);
        prop_assert_eq!(tables.branches.normalize(once), once);
    }

    #[test]
    fn unknown_branch_passes_through(raw in "[a-z]{3,12} Studies") {
        let tables = NormalizerTables::builtin();
        prop_assert_eq!(tables.branches.normalize(&raw), raw.as_str());
    }
}

#[test]
fn location_expansion_is_symmetric() {
    let tables = NormalizerTables::builtin();
    let engine = MatchingEngine::default();
    for (key, towns) in DISTRICT_CLUSTERS {
        for town in *towns {
            let record = CollegeRecord::new("X", "Civil Engineering", *town);
            let by_key = FilterCriteria::new(QueryMode::ByRank).with_location(*key);
            let by_town = FilterCriteria::new(QueryMode::ByRank).with_location(*town);
            assert!(engine.matches(&record, &by_key), "{town} via {key}");
            assert!(engine.matches(&record, &by_town), "{town} via itself");
            assert!(tables.locations.expand_location(key).contains(key));
        }
    }
}
