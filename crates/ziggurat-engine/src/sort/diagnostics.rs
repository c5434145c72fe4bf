//! Transitivity checks for the paint-order relation.

use super::{RenderItem, is_painted_before};

/// Three items `[a, b, c]` with `a` before `b`, `b` before `c`, but not `a` before `c`.
pub type Triple = [usize; 3];

/// Lists intransitive triples among `items`, at most `limit` of them.
///
/// Each cycle is reported once, rotated so that its smallest index comes first.
/// O(n³); intended for tests and debug logging.
pub fn find_intransitive_triples(items: &[RenderItem], limit: usize) -> Vec<Triple> {
    let n = items.len();
    let before = |i: usize, j: usize| is_painted_before(&items[i], &items[j]);

    let mut found = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (a + 1)..n {
                if found.len() >= limit {
                    return found;
                }
                if c == b {
                    continue;
                }
                if before(a, b) && before(b, c) && !before(a, c) {
                    found.push([a, b, c]);
                }
            }
        }
    }
    found
}

/// Logs intransitive triples at `warn`. Returns how many were found.
pub(crate) fn report_intransitive(items: &[RenderItem], limit: usize) -> usize {
    let triples = find_intransitive_triples(items, limit);
    for [a, b, c] in &triples {
        log::warn!(
            "intransitive paint order: shape {}:{} < {}:{} < {}:{} but not {}:{} < {}:{}",
            items[*a].shape,
            items[*a].frame,
            items[*b].shape,
            items[*b].frame,
            items[*c].shape,
            items[*c].frame,
            items[*a].shape,
            items[*a].frame,
            items[*c].shape,
            items[*c].frame,
        );
    }
    triples.len()
}
