//! Operator catalog.
//!
//! Holds the operator records, every tag they bear, and the tag → operators
//! mapping the combination engine intersects. Also carries the tag category
//! metadata that presentation layers group tags by.

mod index;
#[cfg(feature = "serde")]
pub mod load;
pub mod roll;
mod types;

pub use index::{Bucket, CatalogIndex};
pub use roll::roll_tags;
pub use types::{Operator, TagCategory};
