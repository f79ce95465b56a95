//! Tag combination engine.
//!
//! Enumerates the power set of a query's tags, intersects the catalog's tag
//! buckets for each subset, and ranks subsets by the worst-case operator
//! they guarantee.
//!
//! # Ranking
//!
//! Recruiting with a tag combination yields one operator drawn from all of
//! its matches, so a combination is only as good as its lowest-rank match
//! (its *floor*). [`CombinationEngine::best_of`] reports the combinations
//! whose floor equals the highest floor on offer. Top-rank operators only
//! appear through tag matching when the senior operator tag is selected, so
//! a top-rank result without that tag is not reported.

mod batch;
mod config;
mod engine;
mod select;
mod subsets;

pub use config::{RecruitConfig, SENIOR_OPERATOR_TAG};
pub use engine::{AllOf, BestOf, Combination, CombinationEngine};
pub use select::{max_of, min_of};
pub use subsets::{subset_of, subsets, Subsets};
