//! Random recruitment-tag offers.

use super::index::CatalogIndex;
use rand::Rng;

/// Draws up to `count` distinct tags uniformly from the index's tag set.
///
/// Returns fewer than `count` tags only when the index holds fewer. The
/// returned tags follow draw order.
pub fn roll_tags<'a, R: Rng + ?Sized>(
    index: &'a CatalogIndex,
    count: usize,
    rng: &mut R,
) -> Vec<&'a str> {
    let pool = index.all_tags();
    let amount = count.min(pool.len());
    rand::seq::index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Operator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn index() -> CatalogIndex {
        let ops = vec![
            Operator::new("A", 3).with_tags(["t1", "t2", "t3"]),
            Operator::new("B", 4).with_tags(["t4", "t5", "t6"]),
        ];
        CatalogIndex::new(ops, Vec::new(), |_| true)
    }

    #[test]
    fn test_roll_distinct_known_tags() {
        let index = index();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let tags = roll_tags(&index, 5, &mut rng);
            assert_eq!(tags.len(), 5);
            let unique: HashSet<_> = tags.iter().collect();
            assert_eq!(unique.len(), 5);
            assert!(tags.iter().all(|t| index.contains_tag(t)));
        }
    }

    #[test]
    fn test_roll_clamps_to_pool() {
        let index = index();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(roll_tags(&index, 10, &mut rng).len(), 6);
    }

    #[test]
    fn test_roll_deterministic_with_seed() {
        let index = index();
        let a = roll_tags(&index, 3, &mut StdRng::seed_from_u64(1));
        let b = roll_tags(&index, 3, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_roll_empty_index() {
        let index = CatalogIndex::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(roll_tags(&index, 5, &mut rng).is_empty());
    }
}
