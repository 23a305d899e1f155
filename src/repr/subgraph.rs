use std::fmt::{Debug, Display};

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use crate::*;

/// An edge subset of a [`Graph`] together with the nodes it touches.
///
/// This is the output type of the cycle space enumeration. Nodes refer to the graph the
/// subgraph was decoded from; use [`Subgraph::keys`] or [`Subgraph::display`] to translate
/// them back to vertex keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subgraph {
    vertices: Vec<Node>,
    edges: Vec<Edge>,
}

impl Subgraph {
    /// Creates a subgraph from its node and edge sequences
    pub fn new(vertices: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// Returns the nodes in the order they were first touched
    pub fn vertices(&self) -> &[Node] {
        &self.vertices
    }

    /// Returns the directed edge records
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of nodes
    pub fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }

    /// Returns the number of directed edge records
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns the number of distinct undirected edges that are not loops
    pub fn number_of_undirected_edges(&self) -> NumEdges {
        self.edges
            .iter()
            .filter(|e| e.0 < e.1)
            .collect::<FxHashSet<_>>()
            .len() as NumEdges
    }

    /// Returns *true* if the subgraph has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the edges as a set
    pub fn edge_set(&self) -> FxHashSet<Edge> {
        self.edges.iter().copied().collect()
    }

    /// Returns *true* if every node has even degree in the underlying simple graph, i.e.
    /// degrees are counted over distinct undirected edges and loops are ignored.
    /// This holds for every element of a cycle space, even if it contains several records of
    /// a parallel edge.
    pub fn is_even(&self) -> bool {
        let mut degrees: FxHashMap<Node, NumEdges> = FxHashMap::default();
        for Edge(u, v) in self
            .edges
            .iter()
            .filter(|e| !e.is_loop())
            .map(Edge::normalized)
            .unique()
        {
            *degrees.entry(u).or_insert(0) += 1;
            *degrees.entry(v).or_insert(0) += 1;
        }
        degrees.values().all(|d| d % 2 == 0)
    }

    /// Returns an iterator over the vertex keys of the subgraph
    pub fn keys<'a, K>(&'a self, graph: &'a Graph<K>) -> impl Iterator<Item = &'a K> + 'a {
        self.vertices.iter().map(move |&u| graph.key_of(u))
    }

    /// Returns a formatter that prints the vertex keys of the subgraph, e.g. `[(0, 0), (0, 1)]`
    pub fn display<'a, K: Debug>(&'a self, graph: &'a Graph<K>) -> SubgraphDisplay<'a, K> {
        SubgraphDisplay {
            subgraph: self,
            graph,
        }
    }
}

/// Prints the vertex keys of a [`Subgraph`], see [`Subgraph::display`]
pub struct SubgraphDisplay<'a, K> {
    subgraph: &'a Subgraph,
    graph: &'a Graph<K>,
}

impl<K: Debug> Display for SubgraphDisplay<'_, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.subgraph.keys(self.graph))
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn square_is_even() {
        let graph = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]);
        let square = Subgraph::new(vec![0, 1, 2, 3], graph.edges().to_vec());

        assert!(square.is_even());
        assert_eq!(square.number_of_undirected_edges(), 4);
        assert_eq!(square.number_of_edges(), 8);
        assert_eq!(format!("{}", square.display(&graph)), r#"["a", "b", "c", "d"]"#);
    }

    #[test]
    fn path_is_not_even() {
        let path = Subgraph::new(
            vec![0, 1, 2],
            vec![Edge(0, 1), Edge(1, 0), Edge(1, 2), Edge(2, 1)],
        );
        assert!(!path.is_even());
        assert!(!path.is_empty());
        assert!(Subgraph::default().is_even());
    }

    #[test]
    fn parallel_records_count_once() {
        // triangle whose edge {0, 1} is stored twice, plus a loop at 1
        let triangle = Subgraph::new(
            vec![1, 0, 2],
            vec![
                Edge(1, 0),
                Edge(0, 1),
                Edge(0, 2),
                Edge(2, 0),
                Edge(2, 1),
                Edge(1, 2),
                Edge(1, 0),
                Edge(0, 1),
                Edge(1, 1),
            ],
        );
        assert!(triangle.is_even());
        assert_eq!(triangle.number_of_undirected_edges(), 3);

        let doubled_path = Subgraph::new(
            vec![0, 1, 2],
            vec![Edge(0, 1), Edge(1, 0), Edge(0, 1), Edge(1, 0), Edge(1, 2), Edge(2, 1)],
        );
        assert!(!doubled_path.is_even());
    }
}
