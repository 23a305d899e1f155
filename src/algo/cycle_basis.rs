use fxhash::FxHashMap;
use tracing::{debug, trace};

use super::*;

/// Derives one fundamental cycle per undirected back edge of a [`SpanningTree`].
///
/// Each back edge is stored twice in [`SpanningTree::back_edges`]; the direction `(u, v)` is
/// processed iff its reverse `(v, u)` comes later in that sequence. For a processed back edge the
/// tree is viewed with exactly this edge restored, which closes exactly one simple cycle; a
/// depth-first search from `u` reports that cycle as a closed walk starting at `u`.
///
/// The number of cycles equals [`SpanningTree::dimension`].
pub struct CycleBasisExtractor<'a, K> {
    graph: &'a Graph<K>,
    tree: &'a SpanningTree,
}

impl<'a, K> CycleBasisExtractor<'a, K> {
    /// Creates an extractor for `tree`, which must have been built from `graph`
    pub fn new(graph: &'a Graph<K>, tree: &'a SpanningTree) -> Self {
        Self { graph, tree }
    }

    /// Returns the back edges that each yield one fundamental cycle, in processing order
    pub fn selected_back_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let positions: FxHashMap<Edge, usize> = self
            .tree
            .back_edges()
            .iter()
            .enumerate()
            .map(|(i, &e)| (e, i))
            .collect();

        self.tree
            .back_edges()
            .iter()
            .enumerate()
            .filter(move |(i, e)| positions.get(&e.reverse()).is_some_and(|p| p > i))
            .map(|(_, &e)| e)
    }

    /// Returns the fundamental cycles as closed walks: consecutive nodes are adjacent and the
    /// last node is adjacent to the first one
    pub fn extract(&self) -> Vec<Vec<Node>> {
        let tree_view = EdgeOverlay::new(self.graph, self.tree.back_edge_set());

        let mut cycles = Vec::with_capacity(self.tree.dimension());
        for back_edge in self.selected_back_edges() {
            match fundamental_cycle(tree_view.with_restored(back_edge), back_edge.0) {
                Some(walk) => {
                    trace!(%back_edge, ?walk, "found fundamental cycle");
                    cycles.push(walk);
                }
                None => debug_assert!(false, "back edge {back_edge} does not close a cycle"),
            }
        }

        debug!(cycles = cycles.len(), "extracted cycle basis");
        cycles
    }
}

/// Searches depth-first from `start` and returns the current search path as soon as a
/// neighbor other than the parent is found on it. On a forest with one additional edge
/// incident to `start` this is the unique cycle through that edge.
pub fn fundamental_cycle<G>(graph: G, start: Node) -> Option<Vec<Node>>
where
    G: AdjacencyList,
{
    let mut visited = graph.vertex_bitset_unset();
    let mut on_path = graph.vertex_bitset_unset();
    let mut path = vec![start];

    visited.set_node(start);
    on_path.set_node(start);
    let mut stack = vec![DfsFrame::new(start, start, graph.neighbors_of(start))];

    while let Some(frame) = stack.last_mut() {
        let (u, parent) = (frame.node, frame.parent);
        let Some(v) = frame.next_neighbor() else {
            stack.pop();
            path.pop();
            on_path.clear_node(u);
            continue;
        };

        if v == u {
            continue;
        }

        if !visited.set_node(v) {
            on_path.set_node(v);
            path.push(v);
            stack.push(DfsFrame::new(v, u, graph.neighbors_of(v)));
        } else if v != parent && on_path.has_node(v) {
            return Some(path);
        }
    }

    None
}
