//! Helpers shared by the unit tests of this crate

use rand::Rng;

use crate::prelude::*;

/// Creates a random connected simple graph whose keys equal its nodes `0..n`:
/// a random spanning tree plus (up to) `extra` additional edges.
/// Edges are inserted in random order of endpoints, so node `0` is not necessarily a leaf.
pub(crate) fn random_connected_graph<R: Rng>(rng: &mut R, n: Node, extra: usize) -> Graph<Node> {
    let mut graph = Graph::new();
    for u in 0..n {
        graph.add_vertex(u);
    }

    for v in 1..n {
        let u = rng.random_range(0..v);
        if rng.random_bool(0.5) {
            graph.add_bidirectional_edge(u, v);
        } else {
            graph.add_bidirectional_edge(v, u);
        }
    }

    let mut added = 0;
    for _ in 0..(extra * 20) {
        if added == extra {
            break;
        }

        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v || graph.has_edge(u, v) {
            continue;
        }

        graph.add_bidirectional_edge(u, v);
        added += 1;
    }

    graph
}

/// Returns `m - n + 1` for a connected simple graph
pub(crate) fn cyclomatic_number_of_connected<K>(graph: &Graph<K>) -> usize {
    if graph.is_empty() {
        return 0;
    }
    graph.number_of_undirected_edges() as usize + 1 - graph.len()
}
