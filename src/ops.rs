use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new_unset(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (directed) edge records of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex, i.e. all `v` with
    /// an edge `(u, v)`. Every neighbor is reported exactly once even if parallel edges exist.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of distinct neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns *true* if the edge `(u, v)` exists
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.neighbors_of(u).any(|w| w == v)
    }
}

impl<G: GraphNodeOrder> GraphNodeOrder for &G {
    fn number_of_nodes(&self) -> NumNodes {
        (**self).number_of_nodes()
    }
}

impl<G: AdjacencyList> AdjacencyList for &G {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        (**self).neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        (**self).degree_of(u)
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        (**self).has_edge(u, v)
    }
}
