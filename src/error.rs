//! Error type shared by catalog loading and combination queries.

use thiserror::Error;

/// Errors raised while building a catalog or preparing a query.
///
/// Enumeration itself never fails: once [`CombinationEngine::all_of`] or
/// [`CombinationEngine::best_of`] has returned an iterator, every tag in the
/// query is known to the index.
///
/// [`CombinationEngine::all_of`]: crate::combination::CombinationEngine::all_of
/// [`CombinationEngine::best_of`]: crate::combination::CombinationEngine::best_of
#[derive(Error, Debug)]
pub enum RecruitError {
    #[error("unknown tag: {0}")]
    UnknownTag(String),

    #[error("query has {count} tags, at most {max} allowed")]
    TooManyTags { count: usize, max: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RecruitError>;
