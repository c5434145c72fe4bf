//! Dependency-graph paint order.
//!
//! Builds an edge `a -> b` for every pair of items whose screen silhouettes
//! overlap and where `a` is painted before `b`. Pairs that do not overlap on
//! screen are left unconstrained. The relation is not transitive, so the graph
//! may contain cycles; each one is broken at its weakest edge (the edge that
//! most contradicts distance from the camera) before the topological walk
//! continues.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use super::{RenderItem, is_painted_before};

/// Result of [`dependency_order`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphOrder {
    /// Item indices in paint order.
    pub order: Vec<usize>,
    /// Number of edges in the dependency graph.
    pub edge_count: usize,
    /// Edges `(before, after)` dropped to break cycles, in the order they were dropped.
    pub broken_edges: Vec<(usize, usize)>,
}

/// Orders `items` topologically over their overlap dependencies.
///
/// `fallback` is normally a permutation of `0..items.len()`; among items that
/// are ready at the same time, the one earlier in `fallback` is painted first.
/// Out-of-range and repeated entries are ignored, and items it leaves out rank
/// after all listed ones in index order.
pub fn dependency_order(items: &[RenderItem], fallback: &[usize]) -> GraphOrder {
    let n = items.len();
    let rank = fallback_rank(n, fallback);

    let mut succs: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut edge_count = 0;

    for i in 0..n {
        for j in (i + 1)..n {
            if !items[i].overlaps(&items[j]) {
                continue;
            }
            let (u, v) = if is_painted_before(&items[i], &items[j]) {
                (i, j)
            } else if is_painted_before(&items[j], &items[i]) {
                (j, i)
            } else {
                continue;
            };
            succs[u].push(v);
            preds[v].push(u);
            edge_count += 1;
        }
    }

    let mut indegree: Vec<usize> = preds.iter().map(Vec::len).collect();
    let mut done = vec![false; n];
    let mut broken: HashSet<(usize, usize)> = HashSet::new();
    let mut broken_edges = Vec::new();
    let mut order = Vec::with_capacity(n);

    let mut ready: BinaryHeap<Reverse<(usize, usize)>> = (0..n)
        .filter(|&i| indegree[i] == 0)
        .map(|i| Reverse((rank[i], i)))
        .collect();

    while order.len() < n {
        let Some(Reverse((_, u))) = ready.pop() else {
            match weakest_cycle_edge(items, &preds, &done, &broken, &rank) {
                Some((u, v)) => {
                    log::trace!(
                        "breaking paint cycle at {u} -> {v} (shape {} before shape {})",
                        items[u].shape,
                        items[v].shape
                    );
                    broken.insert((u, v));
                    broken_edges.push((u, v));
                    indegree[v] -= 1;
                    if indegree[v] == 0 {
                        ready.push(Reverse((rank[v], v)));
                    }
                }
                None => {
                    // In-degrees out of sync with the edge set; release the earliest node.
                    log::warn!("dependency order stalled without a cycle");
                    if let Some(i) = (0..n).filter(|&i| !done[i]).min_by_key(|&i| rank[i]) {
                        indegree[i] = 0;
                        ready.push(Reverse((rank[i], i)));
                    }
                }
            }
            continue;
        };

        done[u] = true;
        order.push(u);

        for &v in &succs[u] {
            if broken.contains(&(u, v)) {
                continue;
            }
            indegree[v] -= 1;
            if indegree[v] == 0 {
                ready.push(Reverse((rank[v], v)));
            }
        }
    }

    log::debug!(
        "dependency order: {n} items, {edge_count} edges, {} cycle(s) broken",
        broken_edges.len()
    );

    GraphOrder {
        order,
        edge_count,
        broken_edges,
    }
}

/// Position of each item in `fallback`, unique per item.
fn fallback_rank(n: usize, fallback: &[usize]) -> Vec<usize> {
    let mut rank: Vec<Option<usize>> = vec![None; n];
    for (pos, &i) in fallback.iter().enumerate() {
        match rank.get_mut(i) {
            Some(slot) if slot.is_none() => *slot = Some(pos),
            Some(_) => {}
            None => log::warn!("dependency order: fallback index {i} out of range for {n} items"),
        }
    }

    rank.into_iter()
        .enumerate()
        .map(|(i, r)| r.unwrap_or(fallback.len() + i))
        .collect()
}

/// Finds a cycle among unfinished nodes and returns its weakest edge.
///
/// Only called when no node is ready, so every unfinished node has at least one
/// live predecessor and walking predecessors must revisit a node.
fn weakest_cycle_edge(
    items: &[RenderItem],
    preds: &[Vec<usize>],
    done: &[bool],
    broken: &HashSet<(usize, usize)>,
    rank: &[usize],
) -> Option<(usize, usize)> {
    let live_pred = |v: usize| {
        preds[v]
            .iter()
            .copied()
            .filter(|&p| !done[p] && !broken.contains(&(p, v)))
            .min_by_key(|&p| rank[p])
    };

    let start = (0..items.len()).filter(|&i| !done[i]).min_by_key(|&i| rank[i])?;

    let mut seen_at = vec![None; items.len()];
    let mut path = Vec::new();
    let mut cur = start;

    let cycle_start = loop {
        seen_at[cur] = Some(path.len());
        path.push(cur);
        let p = live_pred(cur)?;
        if let Some(at) = seen_at[p] {
            break at;
        }
        cur = p;
    };

    // path[i + 1] -> path[i] are edges; path[cycle_start] -> path[last] closes the cycle.
    let cycle = &path[cycle_start..];
    let closing = (*cycle.first()?, *cycle.last()?);
    let edges = cycle
        .windows(2)
        .map(|w| (w[1], w[0]))
        .chain(core::iter::once(closing));

    // Strict `>` keeps the first maximum, so ties resolve the same way every run.
    let mut weakest: Option<((usize, usize), i64)> = None;
    for (u, v) in edges {
        let score = items[u].nearness() - items[v].nearness();
        if weakest.is_none_or(|(_, best)| score > best) {
            weakest = Some(((u, v), score));
        }
    }
    weakest.map(|(edge, _)| edge)
}
