//! Traced Dijkstra over the routing graph
//!
//! All edge weights are non-negative by construction (wait and travel times),
//! so plain Dijkstra is exact. The search records the incoming edge of every
//! settled vertex so the winning path can be replayed edge by edge.

use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use super::graph::RouteEdge;

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeIndex,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap); costs are
// finite, so total_cmp is a proper ordering here
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path from `start` to `target`. Returns the total cost and the
/// path's edges in traversal order, or `None` when `target` is unreachable.
pub(crate) fn shortest_path(
    graph: &DiGraph<(), RouteEdge>,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<(f64, Vec<EdgeIndex>)> {
    let mut distances: HashMap<NodeIndex, f64> = HashMap::new();
    let mut incoming: HashMap<NodeIndex, (NodeIndex, EdgeIndex)> = HashMap::new();
    let mut heap = BinaryHeap::new();

    distances.insert(start, 0.0);
    heap.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().minutes();

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    incoming.insert(next, (node, edge.id()));
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        incoming.insert(next, (node, edge.id()));
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    let &cost = distances.get(&target)?;
    if target != start && !incoming.contains_key(&target) {
        return None;
    }

    // Replay the path backward through the recorded incoming edges
    let mut edges = Vec::new();
    let mut current = target;
    while current != start {
        let &(prev, edge) = incoming.get(&current)?;
        edges.push(edge);
        current = prev;
    }
    edges.reverse();

    Some((cost, edges))
}
