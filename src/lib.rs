//! Recruitment tag combination engine.
//!
//! Given a catalog of operators, each bearing a set of recruitment tags,
//! this crate answers two questions about a handful of offered tags:
//!
//! - **Which operators does each tag combination match?**
//!   ([`CombinationEngine::all_of`](combination::CombinationEngine::all_of))
//! - **Which combinations guarantee the best worst-case outcome?**
//!   ([`CombinationEngine::best_of`](combination::CombinationEngine::best_of))
//!
//! # Modules
//!
//! - [`catalog`]: operator records, the read-only tag index, JSON loading
//!   (feature `serde`), and random tag offers.
//! - [`combination`]: power-set enumeration, first-wins min/max selection,
//!   and the query engine.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` on records and [`catalog::load`].
//! - `parallel`: batch queries on the rayon thread pool.
//!
//! # Example
//!
//! ```
//! use u_recruit::catalog::{CatalogIndex, Operator};
//!
//! let index = CatalogIndex::new(
//!     vec![
//!         Operator::new("Melantha", 3).with_tags(["近卫干员", "输出", "生存"]),
//!         Operator::new("Frostleaf", 4).with_tags(["近卫干员", "减速", "输出"]),
//!         Operator::new("Lappland", 5).with_tags(["近卫干员", "输出", "削弱"]),
//!     ],
//!     Vec::new(),
//!     |_| true,
//! );
//!
//! let best: Vec<_> = index
//!     .engine()
//!     .best_of(&["近卫干员", "削弱"], |_| true)
//!     .unwrap()
//!     .collect();
//! assert_eq!(best.len(), 2);
//! assert_eq!(best[0].tags, vec!["削弱"]);
//! assert_eq!(best[0].operators[0].code_name, "Lappland");
//! ```

pub mod catalog;
pub mod combination;
pub mod error;

pub use error::{RecruitError, Result};
