//! Tag combination queries.
//!
//! [`CombinationEngine::all_of`] walks every non-empty subset of a query's
//! tags and reports the operators bearing all of them.
//! [`CombinationEngine::best_of`] keeps only the combinations whose
//! worst-case operator is as good as the best worst case on offer.

use super::config::RecruitConfig;
use super::select::{max_of, min_of};
use super::subsets::subset_of;
use crate::catalog::{CatalogIndex, Operator};
use crate::error::{RecruitError, Result};
use std::fmt;

/// One tag combination and the operators it yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination<'a> {
    /// The selected tags, in query order.
    pub tags: Vec<&'a str>,
    /// Matching operators, in catalog order.
    pub operators: Vec<&'a Operator>,
}

impl<'a> Combination<'a> {
    /// Returns `true` if `tag` is part of this combination.
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }

    /// The lowest-rank operator, first in catalog order on ties.
    pub fn floor(&self) -> Option<&'a Operator> {
        min_of(self.operators.iter().copied(), |a, b| Operator::by_rank(a, b))
    }
}

/// Runs combination queries against a shared [`CatalogIndex`].
///
/// The engine only reads the index; queries may be repeated or interleaved
/// freely and always produce the same sequences.
///
/// # Examples
///
/// ```
/// use u_recruit::catalog::{CatalogIndex, Operator};
///
/// let index = CatalogIndex::new(
///     vec![
///         Operator::new("A", 3).with_tags(["x", "y"]),
///         Operator::new("B", 5).with_tags(["x"]),
///         Operator::new("C", 4).with_tags(["y"]),
///     ],
///     Vec::new(),
///     |_| true,
/// );
///
/// let engine = index.engine();
/// let all: Vec<_> = engine.all_of(&["x", "y"], |_| true).unwrap().collect();
/// assert_eq!(all.len(), 3);
/// assert_eq!(all[2].tags, vec!["x", "y"]);
/// ```
#[derive(Debug, Clone)]
pub struct CombinationEngine<'a> {
    index: &'a CatalogIndex,
    config: RecruitConfig,
}

impl<'a> CombinationEngine<'a> {
    /// Creates an engine with the default configuration.
    pub fn new(index: &'a CatalogIndex) -> Self {
        Self {
            index,
            config: RecruitConfig::default(),
        }
    }

    /// Creates an engine with a custom configuration.
    pub fn with_config(index: &'a CatalogIndex, config: RecruitConfig) -> Result<Self> {
        config.validate().map_err(RecruitError::InvalidConfig)?;
        Ok(Self { index, config })
    }

    /// The index queries run against.
    pub fn index(&self) -> &'a CatalogIndex {
        self.index
    }

    /// The active configuration.
    pub fn config(&self) -> &RecruitConfig {
        &self.config
    }

    /// Enumerates every non-empty combination of `tags` that at least one
    /// catalog operator satisfies.
    ///
    /// Combinations are produced in bit-pattern order. The non-empty check
    /// runs before `filter`, so a yielded combination may carry no
    /// operators once `filter` has been applied.
    ///
    /// Fails if `tags` is longer than `max_query_tags` or names a tag no
    /// catalog operator bears.
    pub fn all_of<S, F>(&self, tags: &[S], filter: F) -> Result<AllOf<'a, F>>
    where
        S: AsRef<str>,
        F: Fn(&Operator) -> bool,
    {
        let scan = self.prepare(tags)?;
        Ok(AllOf { scan, filter })
    }

    /// Enumerates the combinations that guarantee the best worst-case rank.
    ///
    /// A first pass over [`all_of`](Self::all_of) finds the target rank `R`:
    /// the highest floor rank among combinations with any match. A second
    /// pass yields each combination whose floor reaches `R`, restricted to
    /// its operators of exactly rank `R`. A combination whose candidates are
    /// of `top_rank` is dropped unless it contains `senior_tag`.
    pub fn best_of<S, F>(&self, tags: &[S], filter: F) -> Result<BestOf<'a, F>>
    where
        S: AsRef<str>,
        F: Fn(&Operator) -> bool,
    {
        let scan = self.prepare(tags)?;
        Ok(BestOf {
            probe: scan.clone(),
            scan,
            filter,
            phase: Phase::Pending,
            senior_tag: self.config.senior_tag.clone(),
            top_rank: self.config.top_rank,
        })
    }

    fn prepare<S: AsRef<str>>(&self, tags: &[S]) -> Result<Scan<'a>> {
        if tags.len() > self.config.max_query_tags {
            return Err(RecruitError::TooManyTags {
                count: tags.len(),
                max: self.config.max_query_tags,
            });
        }
        let index = self.index;
        let tags = tags
            .iter()
            .map(|tag| {
                let tag = tag.as_ref();
                index
                    .resolve(tag)
                    .ok_or_else(|| RecruitError::UnknownTag(tag.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Scan {
            index,
            end: 1u64 << tags.len(),
            tags,
            next: 0,
        })
    }
}

/// Pattern cursor shared by both query kinds. Yields unfiltered matches.
#[derive(Debug, Clone)]
struct Scan<'a> {
    index: &'a CatalogIndex,
    tags: Vec<(&'a str, &'a [usize])>,
    next: u64,
    end: u64,
}

impl<'a> Scan<'a> {
    /// Advances to the next combination with a non-empty intersection.
    fn advance(&mut self) -> Option<(Vec<&'a str>, Vec<usize>)> {
        while self.next < self.end {
            let pattern = self.next;
            self.next += 1;
            if pattern == 0 {
                continue;
            }

            let picked = subset_of(&self.tags, pattern);
            let mut slots: Vec<usize> = (0..self.index.operators().len()).collect();
            for (_, bucket) in &picked {
                slots.retain(|slot| bucket.binary_search(slot).is_ok());
                if slots.is_empty() {
                    break;
                }
            }
            if slots.is_empty() {
                continue;
            }

            let tags = picked.iter().map(|(tag, _)| *tag).collect();
            return Some((tags, slots));
        }
        None
    }

    fn materialize<F>(
        &self,
        tags: Vec<&'a str>,
        slots: Vec<usize>,
        filter: &F,
    ) -> Combination<'a>
    where
        F: Fn(&Operator) -> bool,
    {
        let index = self.index;
        Combination {
            tags,
            operators: slots
                .into_iter()
                .map(|slot| index.operator_at(slot))
                .filter(|op| filter(*op))
                .collect(),
        }
    }

    fn next_combination<F>(&mut self, filter: &F) -> Option<Combination<'a>>
    where
        F: Fn(&Operator) -> bool,
    {
        let (tags, slots) = self.advance()?;
        Some(self.materialize(tags, slots, filter))
    }
}

/// Iterator returned by [`CombinationEngine::all_of`].
#[derive(Clone)]
pub struct AllOf<'a, F> {
    scan: Scan<'a>,
    filter: F,
}

impl<F> fmt::Debug for AllOf<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllOf")
            .field("scan", &self.scan)
            .finish_non_exhaustive()
    }
}

impl<'a, F> Iterator for AllOf<'a, F>
where
    F: Fn(&Operator) -> bool,
{
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan.next_combination(&self.filter)
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Pending,
    Target(u8),
    Done,
}

/// Iterator returned by [`CombinationEngine::best_of`].
///
/// The target rank is resolved on the first call to `next`.
#[derive(Clone)]
pub struct BestOf<'a, F> {
    probe: Scan<'a>,
    scan: Scan<'a>,
    filter: F,
    phase: Phase,
    senior_tag: String,
    top_rank: u8,
}

impl<F> fmt::Debug for BestOf<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BestOf")
            .field("scan", &self.scan)
            .field("phase", &self.phase)
            .field("senior_tag", &self.senior_tag)
            .field("top_rank", &self.top_rank)
            .finish_non_exhaustive()
    }
}

impl<'a, F> BestOf<'a, F>
where
    F: Fn(&Operator) -> bool,
{
    fn resolve_target(&mut self) -> Option<u8> {
        let mut floors = Vec::new();
        while let Some(combination) = self.probe.next_combination(&self.filter) {
            if let Some(floor) = combination.floor() {
                floors.push(floor);
            }
        }
        let target = max_of(floors, |a, b| Operator::by_rank(a, b)).map(|op| op.rank);
        tracing::trace!(rank = ?target, "best-of target rank");
        target
    }
}

impl<'a, F> Iterator for BestOf<'a, F>
where
    F: Fn(&Operator) -> bool,
{
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let target = match self.phase {
            Phase::Done => return None,
            Phase::Target(rank) => rank,
            Phase::Pending => match self.resolve_target() {
                Some(rank) => {
                    self.phase = Phase::Target(rank);
                    rank
                }
                None => {
                    self.phase = Phase::Done;
                    return None;
                }
            },
        };

        while let Some(combination) = self.scan.next_combination(&self.filter) {
            let Some(floor) = combination.floor() else {
                continue;
            };
            if floor.rank < target {
                continue;
            }

            let candidate: Vec<&Operator> = combination
                .operators
                .iter()
                .copied()
                .filter(|op| op.rank == target)
                .collect();
            let Some(first) = candidate.first() else {
                continue;
            };
            if first.rank == self.top_rank && !combination.contains_tag(&self.senior_tag) {
                tracing::trace!(
                    tags = ?combination.tags,
                    "top-rank combination without marker tag dropped"
                );
                continue;
            }

            return Some(Combination {
                tags: combination.tags,
                operators: candidate,
            });
        }

        self.phase = Phase::Done;
        None
    }
}
