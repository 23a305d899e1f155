use fxhash::FxHashSet;

use crate::{ops::*, *};

/// A read-only view of a graph in which a set of edges is hidden.
///
/// Instead of removing edges from the underlying graph and re-adding them later, algorithms
/// build an overlay over an immutable graph and pass it around by value. A single undirected
/// edge can be *restored*, i.e. made visible again in both directions, without touching the
/// excluded set itself.
///
/// An overlay can only hide edges; it never shows edges the underlying graph does not have.
pub struct EdgeOverlay<'a, G> {
    graph: &'a G,
    excluded: &'a FxHashSet<Edge>,
    restored: Option<Edge>,
}

impl<G> Clone for EdgeOverlay<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for EdgeOverlay<'_, G> {}

impl<'a, G> EdgeOverlay<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a view of `graph` without the edges in `excluded`
    pub fn new(graph: &'a G, excluded: &'a FxHashSet<Edge>) -> Self {
        Self {
            graph,
            excluded,
            restored: None,
        }
    }

    /// Returns a copy of this view in which `edge` and its reverse are visible again.
    /// Only one edge can be restored at a time; a previously restored edge is hidden again.
    pub fn with_restored(mut self, edge: Edge) -> Self {
        self.restored = Some(edge);
        self
    }

    /// Returns *true* if `edge` is not hidden by this view
    pub fn is_visible(&self, edge: Edge) -> bool {
        !self.excluded.contains(&edge)
            || self
                .restored
                .is_some_and(|r| r == edge || r == edge.reverse())
    }
}

impl<G> GraphNodeOrder for EdgeOverlay<'_, G>
where
    G: AdjacencyList,
{
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }
}

impl<G> AdjacencyList for EdgeOverlay<'_, G>
where
    G: AdjacencyList,
{
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph
            .neighbors_of(u)
            .filter(move |&v| self.is_visible(Edge(u, v)))
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.graph.has_edge(u, v) && self.is_visible(Edge(u, v))
    }
}
