use std::iter::FusedIterator;

use tracing::debug;

use super::*;

/// Largest supported cycle space dimension; combinations are indexed by `u64` subsets
pub const MAX_DIMENSION: usize = 63;

/// Configurable computation of the cycle space of a [`Graph`].
///
/// The basis is computed by a [`SpanningTreeBuilder`] (configured through
/// [`CycleSpaceEnumerator::with_root`] and [`CycleSpaceEnumerator::with_component_policy`])
/// followed by a [`CycleBasisExtractor`].
///
/// # Complexity
/// A cycle space of dimension `k` has `2^k - 1` non-empty elements and enumerating them is
/// inherently exponential in `k`. Use [`CycleSpaceEnumerator::with_max_dimension`] to reject
/// graphs whose cyclomatic number is too large *before* any element is produced.
///
/// # Example
/// ```rust
/// use cyclespace::{prelude::*, algo::*};
///
/// let graph = Graph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 0)]);
/// let space = CycleSpaceEnumerator::new()
///     .with_max_dimension(10)
///     .cycle_space(&graph)
///     .unwrap();
///
/// assert_eq!(space.dimension(), 2);
/// assert_eq!(space.subgraphs().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleSpaceEnumerator {
    tree: SpanningTreeBuilder,
    max_dimension: Option<usize>,
}

impl CycleSpaceEnumerator {
    /// Creates an enumerator rooted at the first node of the graph that only considers the
    /// root component and accepts dimensions up to [`MAX_DIMENSION`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root of the spanning tree search
    pub fn set_root(&mut self, root: Node) {
        self.tree.set_root(root);
    }

    /// Sets the root of the spanning tree search
    pub fn with_root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }

    /// Sets how nodes outside of the root component are treated
    pub fn set_component_policy(&mut self, policy: ComponentPolicy) {
        self.tree.set_component_policy(policy);
    }

    /// Sets how nodes outside of the root component are treated
    pub fn with_component_policy(mut self, policy: ComponentPolicy) -> Self {
        self.set_component_policy(policy);
        self
    }

    /// Sets the largest accepted dimension; values above [`MAX_DIMENSION`] are capped
    pub fn set_max_dimension(&mut self, limit: usize) {
        self.max_dimension = Some(limit);
    }

    /// Sets the largest accepted dimension; values above [`MAX_DIMENSION`] are capped
    pub fn with_max_dimension(mut self, limit: usize) -> Self {
        self.set_max_dimension(limit);
        self
    }

    /// Returns the largest accepted dimension
    pub fn max_dimension(&self) -> usize {
        self.max_dimension
            .map_or(MAX_DIMENSION, |limit| limit.min(MAX_DIMENSION))
    }

    /// Computes the spanning tree of `graph` with the configured root and policy
    ///
    /// # Errors
    /// See [`SpanningTreeBuilder::build`]
    pub fn spanning_tree<K>(&self, graph: &Graph<K>) -> Result<SpanningTree, CycleSpaceError> {
        self.tree.build(graph)
    }

    /// Computes a basis of the cycle space of `graph`.
    ///
    /// # Errors
    /// - [`CycleSpaceError::DimensionTooLarge`] if the dimension exceeds
    ///   [`CycleSpaceEnumerator::max_dimension`],
    /// - see [`SpanningTreeBuilder::build`] for all other errors.
    pub fn cycle_space<'a, K>(
        &self,
        graph: &'a Graph<K>,
    ) -> Result<CycleSpace<'a>, CycleSpaceError> {
        let tree = self.spanning_tree(graph)?;

        let dimension = tree.dimension();
        let limit = self.max_dimension();
        if dimension > limit {
            return Err(CycleSpaceError::DimensionTooLarge { dimension, limit });
        }

        let walks = CycleBasisExtractor::new(graph, &tree).extract();
        let codec = IncidenceCodec::for_graph(graph);
        let basis = walks.iter().map(|walk| codec.encode(walk)).collect();

        debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            dimension,
            "computed cycle space basis"
        );

        Ok(CycleSpace {
            codec,
            walks,
            basis,
        })
    }

    /// Returns every non-empty element of the cycle space of `graph` as a [`Subgraph`],
    /// see [`CycleSpace::subgraphs`] for the order.
    ///
    /// # Errors
    /// See [`CycleSpaceEnumerator::cycle_space`]
    pub fn enumerate<K>(&self, graph: &Graph<K>) -> Result<Vec<Subgraph>, CycleSpaceError> {
        let space = self.cycle_space(graph)?;
        debug!(
            elements = space.number_of_elements(),
            "enumerating cycle space"
        );
        Ok(space.subgraphs().collect())
    }
}

/// A basis of the cycle space of a graph, given both as closed walks and as incidence vectors
/// over the edge sequence of the graph
#[derive(Debug, Clone)]
pub struct CycleSpace<'a> {
    codec: IncidenceCodec<'a>,
    walks: Vec<Vec<Node>>,
    basis: Vec<IncidenceVector>,
}

impl<'a> CycleSpace<'a> {
    /// Returns the number of basis vectors
    pub fn dimension(&self) -> usize {
        self.basis.len()
    }

    /// Returns the number of non-empty elements, i.e. `2^k - 1`
    pub fn number_of_elements(&self) -> u64 {
        (1u64 << self.dimension()) - 1
    }

    /// Returns the fundamental cycles as closed walks
    pub fn basis_walks(&self) -> &[Vec<Node>] {
        &self.walks
    }

    /// Returns the incidence vectors of the fundamental cycles; vector `j` encodes walk `j`
    pub fn basis(&self) -> &[IncidenceVector] {
        &self.basis
    }

    /// Returns the codec all vectors of this space are encoded with
    pub fn codec(&self) -> IncidenceCodec<'a> {
        self.codec
    }

    /// Returns the XOR of all basis vectors `j` for which bit `j` of `subset` is set
    /// ** Panics if `subset` has a bit set at or above [`CycleSpace::dimension`] **
    pub fn combination(&self, subset: u64) -> IncidenceVector {
        assert!(
            subset >> self.dimension() == 0,
            "subset {subset:#b} exceeds dimension {}",
            self.dimension()
        );

        let mut result = IncidenceVector::zero(self.codec.width());
        let mut remaining = subset;
        while remaining != 0 {
            let j = remaining.trailing_zeros() as usize;
            result ^= &self.basis[j];
            remaining &= remaining - 1;
        }
        result
    }

    /// Returns an iterator over all non-empty combinations of basis vectors in binary counting
    /// order of their subset index: `b_0, b_1, b_0 ^ b_1, b_2, b_0 ^ b_2, ...`
    pub fn combinations(&self) -> Combinations<'_, 'a> {
        Combinations {
            space: self,
            next: 1,
            end: 1u64 << self.dimension(),
        }
    }

    /// Returns [`CycleSpace::combinations`] decoded into subgraphs of the graph
    pub fn subgraphs(&self) -> impl Iterator<Item = Subgraph> + '_ {
        self.combinations()
            .map(move |vector| self.codec.decode(&vector))
    }
}

/// Iterator over the non-empty elements of a [`CycleSpace`], see [`CycleSpace::combinations`]
pub struct Combinations<'s, 'a> {
    space: &'s CycleSpace<'a>,
    next: u64,
    end: u64,
}

impl Combinations<'_, '_> {
    /// Returns the subset index of the element that is returned next
    pub fn next_subset(&self) -> u64 {
        self.next
    }
}

impl Iterator for Combinations<'_, '_> {
    type Item = IncidenceVector;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        let vector = self.space.combination(self.next);
        self.next += 1;
        Some(vector)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

impl FusedIterator for Combinations<'_, '_> {}

/// Cycle space computations with default settings, available directly on a [`Graph`]
pub trait CycleSpaceOps {
    /// Returns the fundamental cycles of the component of the first node as closed walks
    ///
    /// # Errors
    /// See [`CycleSpaceEnumerator::cycle_space`]
    fn cycle_basis(&self) -> Result<Vec<Vec<Node>>, CycleSpaceError>;

    /// Returns `m - n + c` where `m` is the number of distinct undirected edges without loops,
    /// `n` the number of nodes, and `c` the number of connected components
    fn cyclomatic_number(&self) -> usize;

    /// Returns every non-empty element of the cycle space of the component of the first node
    /// in binary counting order of the basis subsets.
    /// The result has `2^k - 1` elements for cyclomatic number `k`.
    ///
    /// # Errors
    /// See [`CycleSpaceEnumerator::enumerate`]
    fn list_all_cycles(&self) -> Result<Vec<Subgraph>, CycleSpaceError>;
}

impl<K> CycleSpaceOps for Graph<K> {
    fn cycle_basis(&self) -> Result<Vec<Vec<Node>>, CycleSpaceError> {
        let tree = SpanningTreeBuilder::new().build(self)?;
        Ok(CycleBasisExtractor::new(self, &tree).extract())
    }

    fn cyclomatic_number(&self) -> usize {
        SpanningTreeBuilder::new()
            .with_component_policy(ComponentPolicy::AllComponents)
            .build(self)
            .map_or(0, |forest| {
                (self.number_of_undirected_edges() as usize + forest.roots().len())
                    .saturating_sub(self.len())
            })
    }

    fn list_all_cycles(&self) -> Result<Vec<Subgraph>, CycleSpaceError> {
        CycleSpaceEnumerator::new().enumerate(self)
    }
}

/// Returns every non-empty element of the cycle space of `graph`, see
/// [`CycleSpaceOps::list_all_cycles`].
///
/// # Errors
/// - [`CycleSpaceError::MissingGraph`] if `graph` is `None`,
/// - see [`CycleSpaceEnumerator::enumerate`] for all other errors.
pub fn list_all_cycles<K>(graph: Option<&Graph<K>>) -> Result<Vec<Subgraph>, CycleSpaceError> {
    graph
        .ok_or(CycleSpaceError::MissingGraph)?
        .list_all_cycles()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use fxhash::FxHashSet;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn sorted_edges(subgraph: &Subgraph) -> Vec<Edge> {
        subgraph.edges().iter().copied().sorted().collect_vec()
    }

    fn two_squares() -> Graph<(i32, i32)> {
        Graph::from_edges([
            ((0, 0), (0, 1)),
            ((0, 1), (3, 1)),
            ((3, 1), (3, 0)),
            ((3, 0), (0, 0)),
            ((3, 1), (6, 1)),
            ((6, 1), (6, 0)),
            ((6, 0), (3, 0)),
        ])
    }

    #[test]
    fn two_squares_sharing_an_edge() {
        let graph = two_squares();
        let cycles = graph.list_all_cycles().unwrap();

        assert_eq!(
            cycles
                .iter()
                .map(|c| c.number_of_undirected_edges())
                .collect_vec(),
            vec![4, 4, 6]
        );

        let left: FxHashSet<(i32, i32)> = [(0, 0), (0, 1), (3, 1), (3, 0)].into_iter().collect();
        let right: FxHashSet<(i32, i32)> = [(3, 1), (6, 1), (6, 0), (3, 0)].into_iter().collect();
        assert_eq!(cycles[0].keys(&graph).copied().collect::<FxHashSet<_>>(), left);
        assert_eq!(cycles[1].keys(&graph).copied().collect::<FxHashSet<_>>(), right);
        assert_eq!(cycles[2].number_of_nodes(), 6);

        // the outer hexagon does not use the shared edge
        let shared = Edge(2, 3);
        assert!(cycles[0].edge_set().contains(&shared));
        assert!(cycles[1].edge_set().contains(&shared));
        assert!(!cycles[2].edge_set().contains(&shared));
        assert!(!cycles[2].edge_set().contains(&shared.reverse()));

        assert!(cycles.iter().all(Subgraph::is_even));
    }

    #[test]
    fn basis_of_two_squares() {
        let graph = two_squares();
        let space = CycleSpaceEnumerator::new().cycle_space(&graph).unwrap();

        assert_eq!(space.dimension(), 2);
        assert_eq!(space.number_of_elements(), 3);
        assert_eq!(space.basis_walks().len(), 2);
        assert!(space.basis_walks().iter().all(|walk| walk.len() == 4));
        assert_eq!(space.combination(3), &space.basis()[0] ^ &space.basis()[1]);
        assert_eq!(space.combinations().count(), 3);
    }

    #[test]
    fn triangle() {
        let graph = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a")]);
        let cycles = graph.list_all_cycles().unwrap();

        assert_eq!(cycles.len(), 1);
        assert_eq!(
            cycles[0].edge_set(),
            graph.edges().iter().copied().collect::<FxHashSet<_>>()
        );
        assert_eq!(cycles[0].number_of_nodes(), 3);
    }

    #[test]
    fn trees_and_empty_graphs_have_no_cycles() {
        let graph = Graph::from_edges([(0, 1)]);
        assert!(graph.list_all_cycles().unwrap().is_empty());
        assert_eq!(graph.cyclomatic_number(), 0);

        let graph: Graph<u32> = Graph::new();
        assert!(graph.list_all_cycles().unwrap().is_empty());
        assert!(graph.cycle_basis().unwrap().is_empty());
        assert_eq!(graph.cyclomatic_number(), 0);
    }

    #[test]
    fn parallel_cycle_edge_and_loop() {
        // edge sequence: (0,1) (1,0) (1,2) (2,1) (2,0) (0,2) (0,1) (1,0) (1,1) (1,1)
        let graph = Graph::from_edges([(0, 1), (1, 2), (2, 0), (0, 1), (1, 1)]);
        assert_eq!(graph.number_of_edges(), 10);
        assert_eq!(graph.cyclomatic_number(), 1);

        let space = CycleSpaceEnumerator::new().cycle_space(&graph).unwrap();
        assert_eq!(space.dimension(), 1);
        assert_eq!(space.number_of_elements(), 1);

        let vector = &space.basis()[0];
        assert_eq!(format!("{vector}"), "1111111100");
        assert_eq!((0..10).filter(|&i| vector.contains_edge_at(i)).count(), 8);
        assert!(vector.contains_edge_at(0));
        assert!(vector.contains_edge_at(6));
        assert!(!vector.contains_edge_at(8));
        assert!(!vector.contains_edge_at(9));

        let cycles = graph.list_all_cycles().unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(
            cycles[0].edges(),
            &[
                Edge(1, 0),
                Edge(0, 1),
                Edge(0, 2),
                Edge(2, 0),
                Edge(2, 1),
                Edge(1, 2),
                Edge(1, 0),
                Edge(0, 1)
            ]
        );
        assert!(cycles[0].is_even());
        assert_eq!(cycles[0].number_of_undirected_edges(), 3);
        assert!(cycles[0].edges().iter().all(|e| !e.is_loop()));
    }

    #[test]
    fn parallel_back_edge_closes_one_cycle() {
        let graph = Graph::from_edges([(0, 1), (1, 2), (2, 0), (2, 0)]);
        assert_eq!(graph.cyclomatic_number(), 1);

        let tree = SpanningTreeBuilder::new().build(&graph).unwrap();
        assert_eq!(tree.back_edges(), &[Edge(2, 0), Edge(0, 2)]);
        assert_eq!(tree.dimension(), 1);

        let cycles = graph.list_all_cycles().unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].number_of_edges(), 8);
        assert_eq!(cycles[0].number_of_undirected_edges(), 3);
        assert!(cycles[0].is_even());
    }

    #[test]
    fn missing_graph() {
        assert_eq!(
            list_all_cycles::<u32>(None).unwrap_err(),
            CycleSpaceError::MissingGraph
        );

        let graph = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
        assert_eq!(list_all_cycles(Some(&graph)).unwrap().len(), 1);
    }

    #[test]
    fn dimension_limit() {
        let graph = grid(3, 3);
        assert_eq!(
            CycleSpaceEnumerator::new()
                .with_max_dimension(3)
                .enumerate(&graph)
                .unwrap_err(),
            CycleSpaceError::DimensionTooLarge {
                dimension: 4,
                limit: 3
            }
        );

        let cycles = CycleSpaceEnumerator::new()
            .with_max_dimension(4)
            .enumerate(&graph)
            .unwrap();
        assert_eq!(cycles.len(), 15);
        assert_eq!(
            CycleSpaceEnumerator::new()
                .with_max_dimension(1000)
                .max_dimension(),
            MAX_DIMENSION
        );
    }

    #[test]
    fn disconnected_graphs() {
        let mut graph = Graph::new();
        graph.connect_cycle([0, 1, 2]);
        graph.connect_cycle([3, 4, 5, 6]);
        graph.add_bidirectional_edge(4, 6);

        assert_eq!(graph.cyclomatic_number(), 3);
        assert_eq!(graph.list_all_cycles().unwrap().len(), 1);

        let cycles = CycleSpaceEnumerator::new()
            .with_root(graph.node_of(&5).unwrap())
            .enumerate(&graph)
            .unwrap();
        assert_eq!(cycles.len(), 3);
        assert!(cycles.iter().flat_map(|c| c.vertices()).all(|&u| u >= 3));

        let cycles = CycleSpaceEnumerator::new()
            .with_component_policy(ComponentPolicy::AllComponents)
            .enumerate(&graph)
            .unwrap();
        assert_eq!(cycles.len(), 7);
        assert_eq!(cycles.iter().map(sorted_edges).unique().count(), 7);

        assert_eq!(
            CycleSpaceEnumerator::new()
                .with_component_policy(ComponentPolicy::RequireConnected)
                .enumerate(&graph)
                .unwrap_err(),
            CycleSpaceError::Disconnected { components: 2 }
        );
    }

    #[test]
    fn combinations_follow_binary_counting() {
        let graph = grid(3, 2);
        let space = CycleSpaceEnumerator::new().cycle_space(&graph).unwrap();
        assert_eq!(space.dimension(), 2);

        let combinations = space.combinations().collect_vec();
        assert_eq!(combinations[0], space.basis()[0]);
        assert_eq!(combinations[1], space.basis()[1]);
        assert_eq!(combinations[2], &space.basis()[0] ^ &space.basis()[1]);

        let mut iter = space.combinations();
        assert_eq!(iter.next_subset(), 1);
        iter.next();
        assert_eq!(iter.next_subset(), 2);
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    fn random_connected_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [3, 6, 12, 25] {
            for extra in [0, 2, 5, 9] {
                for _ in 0..3 {
                    let graph = random_connected_graph(rng, n, extra);
                    let k = cyclomatic_number_of_connected(&graph);
                    assert_eq!(graph.cyclomatic_number(), k);

                    let cycles = graph.list_all_cycles().unwrap();
                    assert_eq!(cycles.len(), (1 << k) - 1);
                    assert!(cycles.iter().all(|c| !c.is_empty() && c.is_even()));
                    assert_eq!(
                        cycles.iter().map(sorted_edges).unique().count(),
                        cycles.len()
                    );

                    // every basis walk survives the encode/decode round trip
                    let space = CycleSpaceEnumerator::new().cycle_space(&graph).unwrap();
                    for (walk, vector) in space.basis_walks().iter().zip(space.basis()) {
                        assert_eq!(
                            space.codec().decode(vector).edge_set(),
                            IncidenceCodec::closed_walk_edges(walk)
                        );
                        assert!((vector ^ vector).is_zero());
                    }
                }
            }
        }
    }

    #[test]
    fn every_root_spans_the_same_space() {
        let graph = grid(3, 3);

        let reference = graph
            .list_all_cycles()
            .unwrap()
            .iter()
            .map(sorted_edges)
            .sorted()
            .collect_vec();

        for root in graph.vertices() {
            let cycles = CycleSpaceEnumerator::new()
                .with_root(root)
                .enumerate(&graph)
                .unwrap()
                .iter()
                .map(sorted_edges)
                .sorted()
                .collect_vec();
            assert_eq!(cycles, reference);
        }
    }
}
