//! Power-set enumeration over bit patterns.
//!
//! Subset `k` of an n-element slice contains element `i` iff bit `i` of `k`
//! is set. Patterns are visited from `0` to `2^n - 1`, so the empty subset
//! comes first and the full set last.

/// Lazy iterator over every subset of a slice.
///
/// Created by [`subsets`]. Cloning it snapshots the current position.
#[derive(Debug, Clone)]
pub struct Subsets<'a, T> {
    items: &'a [T],
    next: u64,
    end: u64,
}

/// Enumerates all `2^n` subsets of `items`, including the empty one.
///
/// Each call starts a fresh enumeration at pattern `0`.
///
/// # Panics
///
/// Panics if `items` has more than 63 elements.
///
/// # Examples
///
/// ```
/// use u_recruit::combination::subsets;
///
/// let all: Vec<Vec<&char>> = subsets(&['a', 'b']).collect();
/// assert_eq!(all, vec![vec![], vec![&'a'], vec![&'b'], vec![&'a', &'b']]);
/// ```
pub fn subsets<T>(items: &[T]) -> Subsets<'_, T> {
    assert!(items.len() < 64, "cannot enumerate subsets of more than 63 items");
    Subsets {
        items,
        next: 0,
        end: 1u64 << items.len(),
    }
}

/// Returns the elements of `items` selected by `pattern`, in slice order.
pub fn subset_of<T>(items: &[T], pattern: u64) -> Vec<&T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| pattern & (1u64 << i) != 0)
        .map(|(_, item)| item)
        .collect()
}

impl<'a, T> Subsets<'a, T> {
    /// Pattern of the subset the next call to `next` will yield.
    pub fn pattern(&self) -> u64 {
        self.next
    }
}

impl<'a, T> Iterator for Subsets<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let subset = subset_of(self.items, self.next);
        self.next += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
