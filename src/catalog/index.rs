//! Read-only catalog index.
//!
//! [`CatalogIndex`] is built once from operator and category records and
//! never mutated afterwards, so any number of queries may share it.

use super::types::{Operator, TagCategory};
use crate::combination::{CombinationEngine, RecruitConfig};
use crate::error::Result;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// Operators, their tags, and the tag → operators mapping.
///
/// Operators live in an arena in the order they were accepted; tag buckets
/// store ascending arena positions. Every set operation performed by the
/// engine is therefore identifier-based.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    operators: Vec<Operator>,
    tags: Vec<String>,
    buckets: HashMap<String, Vec<usize>>,
    categories: BTreeMap<String, Vec<String>>,
}

impl CatalogIndex {
    /// Builds the index.
    ///
    /// Operators for which `include_if` returns `false` are discarded
    /// entirely. A record whose `code_name` was already accepted is dropped.
    /// Categories are indexed independently of the operator filter; a
    /// repeated category name keeps its first record.
    pub fn new<O, C, F>(operators: O, categories: C, include_if: F) -> Self
    where
        O: IntoIterator<Item = Operator>,
        C: IntoIterator<Item = TagCategory>,
        F: Fn(&Operator) -> bool,
    {
        let mut index = Self::default();
        let mut seen: HashSet<String> = HashSet::new();
        let mut rejected = 0usize;

        for op in operators {
            if !include_if(&op) {
                rejected += 1;
                continue;
            }
            if !seen.insert(op.code_name.clone()) {
                tracing::warn!(code_name = %op.code_name, "duplicate operator record dropped");
                continue;
            }

            let slot = index.operators.len();
            for tag in &op.tags {
                if !index.buckets.contains_key(tag) {
                    index.tags.push(tag.clone());
                }
                let bucket = index.buckets.entry(tag.clone()).or_default();
                if bucket.last() != Some(&slot) {
                    bucket.push(slot);
                }
            }
            index.operators.push(op);
        }

        for category in categories {
            if index.categories.contains_key(&category.name) {
                tracing::warn!(category = %category.name, "duplicate tag category dropped");
                continue;
            }
            index.categories.insert(category.name, category.tags);
        }

        tracing::debug!(
            operators = index.operators.len(),
            rejected,
            tags = index.tags.len(),
            categories = index.categories.len(),
            "catalog index built"
        );

        index
    }

    /// All accepted operators, in acceptance order.
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Every distinct tag borne by an accepted operator, in first-seen order.
    pub fn all_tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns `true` if some accepted operator bears `tag`.
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.buckets.contains_key(tag)
    }

    /// Operators bearing `tag`, in acceptance order. `None` if no accepted
    /// operator bears it.
    pub fn operators_with_tag(&self, tag: &str) -> Option<Bucket<'_>> {
        self.resolve(tag).map(|(_, slots)| Bucket { index: self, slots })
    }

    /// The full tag → operators mapping, in first-seen tag order.
    pub fn tag_to_operators(&self) -> impl Iterator<Item = (&str, Bucket<'_>)> + '_ {
        self.tags.iter().filter_map(move |tag| {
            self.resolve(tag)
                .map(|(tag, slots)| (tag, Bucket { index: self, slots }))
        })
    }

    /// Category name → tags in source order.
    pub fn tag_categories(&self) -> &BTreeMap<String, Vec<String>> {
        &self.categories
    }

    /// Returns a combination engine over this index with the default config.
    pub fn engine(&self) -> CombinationEngine<'_> {
        CombinationEngine::new(self)
    }

    /// Returns a combination engine over this index with `config`.
    ///
    /// Fails if the config does not validate.
    pub fn engine_with(&self, config: RecruitConfig) -> Result<CombinationEngine<'_>> {
        CombinationEngine::with_config(self, config)
    }

    /// Looks up the interned tag string and its bucket.
    pub(crate) fn resolve(&self, tag: &str) -> Option<(&str, &[usize])> {
        self.buckets
            .get_key_value(tag)
            .map(|(key, bucket)| (key.as_str(), bucket.as_slice()))
    }

    pub(crate) fn operator_at(&self, slot: usize) -> &Operator {
        &self.operators[slot]
    }
}

/// The operators bearing one tag, borrowed from a [`CatalogIndex`].
#[derive(Clone, Copy)]
pub struct Bucket<'a> {
    index: &'a CatalogIndex,
    slots: &'a [usize],
}

impl<'a> Bucket<'a> {
    /// Number of operators bearing the tag.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if `op` (by identifier) bears the tag.
    pub fn contains(&self, op: &Operator) -> bool {
        self.iter().any(|o| o == op)
    }

    /// Operators in acceptance order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Operator> + 'a {
        let index = self.index;
        self.slots.iter().map(move |&slot| index.operator_at(slot))
    }
}

impl fmt::Debug for Bucket<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|op| &op.code_name))
            .finish()
    }
}
