//! First-wins minimum and maximum selection.
//!
//! `Iterator::max_by` keeps the *last* of several equal maxima. Recruitment
//! ranking needs the first-seen element on ties for both directions, so
//! selection replaces the running key only on a strict improvement.

use std::cmp::Ordering;

/// Returns the first minimum of `items` under `compare`.
///
/// Returns `None` for an empty input.
///
/// # Examples
///
/// ```
/// use u_recruit::combination::min_of;
///
/// let items = [(3, 'a'), (1, 'b'), (1, 'c')];
/// let min = min_of(items.iter(), |x, y| x.0.cmp(&y.0));
/// assert_eq!(min, Some(&(1, 'b')));
/// ```
pub fn min_of<I, F>(items: I, mut compare: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut iter = items.into_iter();
    let mut key = iter.next()?;
    for item in iter {
        if compare(&key, &item) == Ordering::Greater {
            key = item;
        }
    }
    Some(key)
}

/// Returns the first maximum of `items` under `compare`.
///
/// Returns `None` for an empty input.
pub fn max_of<I, F>(items: I, mut compare: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut iter = items.into_iter();
    let mut key = iter.next()?;
    for item in iter {
        if compare(&key, &item) == Ordering::Less {
            key = item;
        }
    }
    Some(key)
}
