use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::{debug, warn};

use super::*;

/// Which part of a graph a search should span
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComponentPolicy {
    /// Only the connected component of the root is spanned; all other nodes are ignored
    #[default]
    RootComponent,
    /// After the root component, the search restarts at the smallest unreached node until
    /// every node is reached, producing a spanning forest
    AllComponents,
    /// Like [`ComponentPolicy::AllComponents`], but a graph with more than one component is
    /// rejected with [`CycleSpaceError::Disconnected`]
    RequireConnected,
}

/// Configurable depth-first classification of a graph into tree edges and back edges.
///
/// The search starts at the root (by default the first inserted node). Whenever it meets an
/// already visited neighbor that is not the parent of the current node, both directions of that
/// edge become back edges and are hidden from every neighborhood read afterwards.
/// Self-loops are neither traversed nor classified.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanningTreeBuilder {
    root: Option<Node>,
    policy: ComponentPolicy,
}

impl SpanningTreeBuilder {
    /// Creates a builder rooted at the first node that only spans the root component
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root of the search
    pub fn set_root(&mut self, root: Node) {
        self.root = Some(root);
    }

    /// Sets the root of the search
    pub fn with_root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }

    /// Sets how nodes outside of the root component are treated
    pub fn set_component_policy(&mut self, policy: ComponentPolicy) {
        self.policy = policy;
    }

    /// Sets how nodes outside of the root component are treated
    pub fn with_component_policy(mut self, policy: ComponentPolicy) -> Self {
        self.set_component_policy(policy);
        self
    }

    /// Returns the configured root, if any
    pub fn root(&self) -> Option<Node> {
        self.root
    }

    /// Returns the configured component policy
    pub fn component_policy(&self) -> ComponentPolicy {
        self.policy
    }

    /// Runs the search on `graph`.
    ///
    /// A graph without nodes yields an empty tree regardless of the configured root.
    ///
    /// # Errors
    /// - [`CycleSpaceError::RootOutOfRange`] if the configured root is not a node of `graph`,
    /// - [`CycleSpaceError::Disconnected`] if the policy is [`ComponentPolicy::RequireConnected`]
    ///   and `graph` has more than one component.
    pub fn build<K>(&self, graph: &Graph<K>) -> Result<SpanningTree, CycleSpaceError> {
        let n = graph.number_of_nodes();
        if n == 0 {
            return Ok(SpanningTree::empty());
        }

        let root = self.root.unwrap_or(0);
        if root >= n {
            return Err(CycleSpaceError::RootOutOfRange {
                root,
                number_of_nodes: n,
            });
        }

        let mut search = BackEdgeSearch::new(graph);
        let mut roots = vec![root];
        search.search_from(root);

        match self.policy {
            ComponentPolicy::RootComponent => {
                let unreached = search.visited.count_zeros();
                if unreached > 0 {
                    warn!(
                        root,
                        unreached, "nodes outside of the root component are ignored"
                    );
                }
            }
            ComponentPolicy::AllComponents | ComponentPolicy::RequireConnected => {
                while let Some(u) = search.visited.first_zero() {
                    let u = u as Node;
                    search.search_from(u);
                    roots.push(u);
                }

                if self.policy == ComponentPolicy::RequireConnected && roots.len() > 1 {
                    return Err(CycleSpaceError::Disconnected {
                        components: roots.len(),
                    });
                }
            }
        }

        let back_edges = graph
            .edges()
            .iter()
            .copied()
            .filter(|e| search.back_edges.contains(e))
            .unique()
            .collect_vec();

        debug!(
            roots = roots.len(),
            reached = search.visited.count_ones(),
            back_edges = back_edges.len(),
            "classified edges into spanning tree and back edges"
        );

        Ok(SpanningTree {
            roots,
            reached: search.visited,
            back_edge_set: search.back_edges,
            back_edges,
        })
    }
}

struct BackEdgeSearch<'a, K> {
    graph: &'a Graph<K>,
    visited: NodeBitSet,
    back_edges: FxHashSet<Edge>,
}

impl<'a, K> BackEdgeSearch<'a, K> {
    fn new(graph: &'a Graph<K>) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            back_edges: FxHashSet::default(),
        }
    }

    /// Neighbors of `u` that are not hidden as back edges yet
    fn snapshot(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph
            .neighbors_of(u)
            .filter(move |&v| !self.back_edges.contains(&Edge(u, v)))
    }

    fn search_from(&mut self, root: Node) {
        self.visited.set_node(root);
        let mut stack = vec![DfsFrame::new(root, root, self.snapshot(root))];

        while let Some(frame) = stack.last_mut() {
            let (u, parent) = (frame.node, frame.parent);
            let Some(v) = frame.next_neighbor() else {
                stack.pop();
                continue;
            };

            if v == u {
                continue;
            }

            if !self.visited.set_node(v) {
                stack.push(DfsFrame::new(v, u, self.snapshot(v)));
            } else if v != parent {
                self.back_edges.insert(Edge(v, u));
                self.back_edges.insert(Edge(u, v));
            }
        }
    }
}

/// Result of a [`SpanningTreeBuilder`] search
#[derive(Debug, Clone)]
pub struct SpanningTree {
    roots: Vec<Node>,
    reached: NodeBitSet,
    back_edge_set: FxHashSet<Edge>,
    back_edges: Vec<Edge>,
}

impl SpanningTree {
    fn empty() -> Self {
        Self {
            roots: Vec::new(),
            reached: NodeBitSet::new_unset(0),
            back_edge_set: FxHashSet::default(),
            back_edges: Vec::new(),
        }
    }

    /// Returns the node the search started at, or `None` for a graph without nodes
    pub fn root(&self) -> Option<Node> {
        self.roots.first().copied()
    }

    /// Returns the start node of every spanned component (the root first)
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Returns *true* if `u` was reached by the search
    pub fn is_reached(&self, u: Node) -> bool {
        (u as usize) < self.reached.len() && self.reached.has_node(u)
    }

    /// Returns the number of nodes reached by the search
    pub fn number_of_reached_nodes(&self) -> NumNodes {
        self.reached.count_ones() as NumNodes
    }

    /// Returns an iterator over all nodes that were not reached
    pub fn unreached_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.reached.unset_nodes()
    }

    /// Returns *true* if `edge` is a back edge (in either direction)
    pub fn is_back_edge(&self, edge: Edge) -> bool {
        self.back_edge_set.contains(&edge)
    }

    /// Returns all back edges (both directions) as a set
    pub fn back_edge_set(&self) -> &FxHashSet<Edge> {
        &self.back_edge_set
    }

    /// Returns all back edges (both directions) ordered by their first occurrence in the
    /// edge sequence of the graph
    pub fn back_edges(&self) -> &[Edge] {
        &self.back_edges
    }

    /// Returns the edge sequence of `graph` without back edges, in order.
    /// Edges of components that were not spanned are included.
    pub fn tree_edges<'a, K>(&'a self, graph: &'a Graph<K>) -> impl Iterator<Item = Edge> + 'a {
        graph
            .edges()
            .iter()
            .copied()
            .filter(move |e| !self.is_back_edge(*e))
    }

    /// Returns the number of undirected back edges, i.e. the dimension of the cycle space
    /// of the spanned components
    pub fn dimension(&self) -> usize {
        debug_assert_eq!(self.back_edges.len() % 2, 0);
        self.back_edges.len() / 2
    }
}
