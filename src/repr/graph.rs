use std::hash::Hash;

use fxhash::FxHashMap;
use smallvec::SmallVec;

use crate::{ops::*, *};

/// An undirected graph over caller-provided vertex keys.
///
/// Vertices are deduplicated by key equality and numbered in insertion order.
/// Edges are kept as a sequence of **directed** records in insertion order; every
/// call to [`Graph::add_bidirectional_edge`] appends `(a, b)` followed by `(b, a)`.
/// The position of an edge in this sequence is what incidence vectors index, so the
/// sequence is never reordered: [`Graph::remove_edge`] only ever shifts later records down.
///
/// Parallel edges are kept in the edge sequence but collapse in the neighborhood of a
/// node, i.e. [`AdjacencyList::neighbors_of`] reports every neighbor once, in the order
/// in which the first edge towards it was inserted.
#[derive(Clone, Debug)]
pub struct Graph<K> {
    keys: Vec<K>,
    nodes: FxHashMap<K, Node>,
    edges: Vec<Edge>,
    multiplicity: FxHashMap<Edge, NumEdges>,
    adjacency: Vec<SmallVec<[Node; 4]>>,
}

impl<K> Default for Graph<K> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            nodes: FxHashMap::default(),
            edges: Vec::new(),
            multiplicity: FxHashMap::default(),
            adjacency: Vec::new(),
        }
    }
}

impl<K> Graph<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph by calling [`Graph::add_bidirectional_edge`] for every pair in order
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, K)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_bidirectional_edge(a, b);
        }
        graph
    }

    /// Returns the node of `key`, creating it if the key was not seen before
    pub fn add_vertex(&mut self, key: K) -> Node {
        if let Some(&u) = self.nodes.get(&key) {
            return u;
        }

        let u = self.keys.len() as Node;
        debug_assert!(u < INVALID_NODE);

        self.nodes.insert(key.clone(), u);
        self.keys.push(key);
        self.adjacency.push(SmallVec::new());
        u
    }

    /// Looks up or creates the nodes for `a` and `b` and appends the edges `(a, b)` and `(b, a)`
    /// (in this order) to the edge sequence. Returns `Edge(a, b)`.
    ///
    /// Calling this twice with the same pair appends the two records twice.
    pub fn add_bidirectional_edge(&mut self, a: K, b: K) -> Edge {
        let u = self.add_vertex(a);
        let v = self.add_vertex(b);

        self.push_edge(Edge(u, v));
        self.push_edge(Edge(v, u));

        Edge(u, v)
    }

    /// Returns the node assigned to `key` if it exists
    pub fn node_of(&self, key: &K) -> Option<Node> {
        self.nodes.get(key).copied()
    }
}

impl<K> Graph<K> {
    /// Returns the key of node `u`
    /// ** Panics if `u >= n` **
    pub fn key_of(&self, u: Node) -> &K {
        &self.keys[u as usize]
    }

    /// Returns all keys in insertion order, i.e. `keys()[u]` is the key of node `u`
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Returns the sequence of directed edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns how often `edge` occurs in the edge sequence
    pub fn multiplicity_of(&self, edge: Edge) -> NumEdges {
        self.multiplicity.get(&edge).copied().unwrap_or(0)
    }

    /// Returns the number of distinct undirected edges that are not loops
    pub fn number_of_undirected_edges(&self) -> NumEdges {
        self.multiplicity
            .keys()
            .filter(|e| e.0 < e.1 && self.multiplicity.contains_key(&e.reverse()))
            .count() as NumEdges
    }

    /// Removes the first occurrence of `edge` from the edge sequence.
    /// The relative order of all other edges is preserved.
    /// Returns *true* if the edge was present.
    pub fn remove_edge(&mut self, edge: Edge) -> bool {
        let Some(pos) = self.edges.iter().position(|&e| e == edge) else {
            return false;
        };
        self.edges.remove(pos);

        if let Some(count) = self.multiplicity.get_mut(&edge) {
            *count -= 1;
            if *count == 0 {
                self.multiplicity.remove(&edge);
                self.adjacency[edge.0 as usize].retain(|v| *v != edge.1);
            }
        }

        true
    }

    fn push_edge(&mut self, edge: Edge) {
        debug_assert!(self.edges.len() < NumEdges::MAX as usize);

        let count = self.multiplicity.entry(edge).or_insert(0);
        if *count == 0 {
            self.adjacency[edge.0 as usize].push(edge.1);
        }
        *count += 1;

        self.edges.push(edge);
    }
}

impl<K> GraphNodeOrder for Graph<K> {
    fn number_of_nodes(&self) -> NumNodes {
        self.keys.len() as NumNodes
    }
}

impl<K> GraphEdgeOrder for Graph<K> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl<K> AdjacencyList for Graph<K> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adjacency[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adjacency[u as usize].len() as NumNodes
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.multiplicity.contains_key(&Edge(u, v))
    }
}
