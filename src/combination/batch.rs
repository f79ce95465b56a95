//! Many best-of queries against one shared index.
//!
//! The index is read-only, so queries are independent. With the `parallel`
//! feature enabled and [`RecruitConfig::parallel`](super::RecruitConfig) set,
//! they run on the rayon pool; otherwise they run in sequence.

use super::engine::{Combination, CombinationEngine};
use crate::catalog::Operator;
use crate::error::Result;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl<'a> CombinationEngine<'a> {
    /// Runs [`best_of`](Self::best_of) for every query and collects the
    /// results in query order.
    ///
    /// A failing query (unknown tag, too many tags) yields an `Err` in its
    /// slot without affecting the others.
    pub fn best_of_batch<Q, S, F>(
        &self,
        queries: &[Q],
        filter: F,
    ) -> Vec<Result<Vec<Combination<'a>>>>
    where
        Q: AsRef<[S]> + Sync,
        S: AsRef<str>,
        F: Fn(&Operator) -> bool + Sync,
    {
        let run = |query: &Q| -> Result<Vec<Combination<'a>>> {
            Ok(self.best_of(query.as_ref(), &filter)?.collect())
        };

        #[cfg(feature = "parallel")]
        if self.config().parallel {
            return queries.par_iter().map(run).collect();
        }

        queries.iter().map(run).collect()
    }
}
