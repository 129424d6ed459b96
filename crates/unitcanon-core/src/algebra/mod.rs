//! Sorted-list algorithms shared by every canonical form
//!
//! Nothing in here knows about dimensions or magnitudes. Callers supply the
//! ordering of terms and, for [`merge_combine_filter`], how two equivalent
//! terms are folded together.

use std::cmp::Ordering;

/// Split a list at half its length (the left half gets the smaller share).
pub fn split_half<T>(mut list: Vec<T>) -> (Vec<T>, Vec<T>) {
    let right = list.split_off(list.len() / 2);
    (list, right)
}

/// Merge two lists already sorted by `cmp`.
///
/// Stable: on ties the element from `left` comes first.
pub fn merge_by<T, F>(left: Vec<T>, right: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        result.extend(next);
    }

    result
}

/// Stable merge sort.
pub fn sort_by<T, F>(list: Vec<T>, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_impl(list, &mut cmp)
}

fn sort_impl<T, F>(list: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if list.len() < 2 {
        return list;
    }
    let (left, right) = split_half(list);
    let left = sort_impl(left, cmp);
    let right = sort_impl(right, cmp);
    merge_by(left, right, cmp)
}

/// Merge two sorted, duplicate-free lists into one.
///
/// Heads that compare `Equal` are handed to `combine`: `Ok(Some(t))` emits
/// `t`, `Ok(None)` drops both (they cancelled out). Once either list runs
/// dry the rest of the other is appended as is, so the output stays sorted
/// and holds at most one element per equivalence class.
pub fn merge_combine_filter<T, C, F, E>(
    left: Vec<T>,
    right: Vec<T>,
    mut cmp: C,
    mut combine: F,
) -> Result<Vec<T>, E>
where
    C: FnMut(&T, &T) -> Ordering,
    F: FnMut(T, T) -> Result<Option<T>, E>,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        match cmp(l, r) {
            Ordering::Less => result.extend(left.next()),
            Ordering::Greater => result.extend(right.next()),
            Ordering::Equal => {
                if let (Some(l), Some(r)) = (left.next(), right.next()) {
                    result.extend(combine(l, r)?);
                }
            }
        }
    }

    result.extend(left);
    result.extend(right);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    /// (key, count) pairs summed on equal keys, dropped when the sum is 0
    fn add_counts(a: (char, i32), b: (char, i32)) -> Result<Option<(char, i32)>, Infallible> {
        let sum = a.1 + b.1;
        Ok((sum != 0).then_some((a.0, sum)))
    }

    fn by_key(a: &(char, i32), b: &(char, i32)) -> Ordering {
        a.0.cmp(&b.0)
    }

    #[test]
    fn test_split_half() {
        assert_eq!(split_half(vec![1, 2, 3, 4, 5]), (vec![1, 2], vec![3, 4, 5]));
        assert_eq!(split_half(Vec::<i32>::new()), (vec![], vec![]));
    }

    #[test]
    fn test_sort_is_stable() {
        let list = vec![(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')];
        let sorted = sort_by(list, |a, b| a.0.cmp(&b.0));
        assert_eq!(sorted, vec![(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c')]);
    }

    #[test]
    fn test_sort_concatenated_runs() {
        let list = vec![1, 4, 9, 2, 3, 10, 0, 5];
        assert_eq!(sort_by(list, i32::cmp), vec![0, 1, 2, 3, 4, 5, 9, 10]);
    }

    #[test]
    fn test_merge_combine_filter() {
        let left = vec![('a', 1), ('c', 2), ('d', -1)];
        let right = vec![('b', 3), ('c', 1), ('d', 1), ('e', 4)];
        let merged = merge_combine_filter(left, right, by_key, add_counts).unwrap();
        assert_eq!(merged, vec![('a', 1), ('b', 3), ('c', 3), ('e', 4)]);
    }

    #[test]
    fn test_merge_combine_filter_full_cancellation() {
        let left = vec![('x', 2), ('y', -3)];
        let right = vec![('x', -2), ('y', 3)];
        let merged = merge_combine_filter(left, right, by_key, add_counts).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_merge_combine_filter_propagates_errors() {
        let merged = merge_combine_filter(
            vec![('a', 1)],
            vec![('a', 1)],
            by_key,
            |_, _| Err("boom"),
        );
        assert_eq!(merged, Err("boom"));
    }
}
