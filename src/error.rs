//! Error types for the edges of the engine.
//!
//! Matching, ranking and dedupe are total and never fail. Errors only come
//! from turning outside input into engine values: decoding a catalog
//! snapshot, loading normalizer tables, and parsing a user's target value.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected catalog shape: expected an array or object of records, found {0}")]
    CatalogShape(&'static str),

    #[error("catalog entry {key:?} is not a college record: {source}")]
    CatalogEntry {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("branch synonym {raw:?} maps to {canonical:?}, which itself maps to {next:?}")]
    ChainedSynonym {
        raw: String,
        canonical: String,
        next: String,
    },

    #[error("location cluster key must not be blank")]
    BlankClusterKey,

    #[error("percentage {0} is outside 0-100")]
    ScoreOutOfRange(Decimal),

    #[error("rank must be a whole number of at least 1, got {0:?}")]
    InvalidRank(String),

    #[error("not a number: {0:?}")]
    InvalidNumber(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
