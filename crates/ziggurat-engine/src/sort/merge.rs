//! Stable bottom-up merge sort over index buffers.
//!
//! `slice::sort_by` may panic when the comparator is not a total order, and the
//! paint-order relation knowingly is not. This sort only asks "does the right
//! element strictly precede the left one", never panics, and gives the same
//! answer for the same input on every platform.

use core::mem;

/// Sorts `indices` so that `before(x, y)` items come first.
///
/// `scratch` is reused between calls to avoid per-frame allocation.
pub(crate) fn sort_indices<F>(indices: &mut Vec<usize>, scratch: &mut Vec<usize>, mut before: F)
where
    F: FnMut(usize, usize) -> bool,
{
    let n = indices.len();
    if n < 2 {
        return;
    }

    scratch.clear();
    scratch.resize(n, 0);

    let mut width = 1;
    while width < n {
        let mut start = 0;
        while start < n {
            let mid = (start + width).min(n);
            let end = (start + 2 * width).min(n);
            merge(&indices[start..mid], &indices[mid..end], &mut scratch[start..end], &mut before);
            start = end;
        }
        mem::swap(indices, scratch);
        width *= 2;
    }
}

fn merge<F>(left: &[usize], right: &[usize], out: &mut [usize], before: &mut F)
where
    F: FnMut(usize, usize) -> bool,
{
    debug_assert_eq!(left.len() + right.len(), out.len());

    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_right = if i == left.len() {
            true
        } else if j == right.len() {
            false
        } else {
            // Ties keep the left element: stability.
            before(right[j], left[i])
        };

        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(values: &[i32]) -> Vec<i32> {
        let mut idx: Vec<usize> = (0..values.len()).collect();
        let mut scratch = Vec::new();
        sort_indices(&mut idx, &mut scratch, |a, b| values[a] < values[b]);
        idx.into_iter().map(|i| values[i]).collect()
    }

    #[test]
    fn sorts_small_inputs() {
        assert_eq!(sorted(&[]), Vec::<i32>::new());
        assert_eq!(sorted(&[3]), vec![3]);
        assert_eq!(sorted(&[2, 1]), vec![1, 2]);
        assert_eq!(sorted(&[5, 1, 4, 2, 3]), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorts_non_power_of_two_lengths() {
        let values: Vec<i32> = (0..37).map(|i| (i * 17) % 37).collect();
        let expected: Vec<i32> = (0..37).collect();
        assert_eq!(sorted(&values), expected);
    }

    #[test]
    fn stable_for_equal_keys() {
        let keys = [1, 0, 1, 0, 1];
        let mut idx: Vec<usize> = (0..keys.len()).collect();
        let mut scratch = Vec::new();
        sort_indices(&mut idx, &mut scratch, |a, b| keys[a] < keys[b]);
        assert_eq!(idx, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn cyclic_relation_terminates_with_a_permutation() {
        // Rock-paper-scissors: 0 < 1 < 2 < 0.
        let before = |a: usize, b: usize| (a + 1) % 3 == b;
        let mut idx = vec![0, 1, 2, 0, 1, 2, 2, 1];
        let mut scratch = Vec::new();
        sort_indices(&mut idx, &mut scratch, before);

        let mut counts = [0; 3];
        for i in &idx {
            counts[*i] += 1;
        }
        assert_eq!(counts, [2, 3, 3]);
    }

    #[test]
    fn reuses_scratch_between_calls() {
        let mut scratch = Vec::new();
        let mut a = vec![3, 2, 1, 0];
        sort_indices(&mut a, &mut scratch, |x, y| x < y);
        let mut b = vec![1, 0];
        sort_indices(&mut b, &mut scratch, |x, y| x < y);
        assert_eq!(a, vec![0, 1, 2, 3]);
        assert_eq!(b, vec![0, 1]);
    }
}
