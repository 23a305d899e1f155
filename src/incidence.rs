/*!
# Incidence Vectors

An [`IncidenceVector`] is a bitmask over the edge sequence of a [`Graph`] that marks which
(directed) edges belong to an edge set. XOR of two incidence vectors is the symmetric
difference of the underlying edge sets, which makes them the vectors of the cycle space over GF(2).

The bit layout follows the textual form `b_0 b_1 ... b_{m-1}` where `b_i` belongs to the `i`-th
edge of the sequence and the string is read as a binary number **most significant bit first**.
Hence the first edge of the sequence is the highest-order bit and bit position `i` (counted from
the least significant bit) belongs to edge `m - 1 - i`. [`IncidenceCodec`] converts between closed
walks, incidence vectors, and [`Subgraph`]s.
*/

use std::{
    fmt::{Debug, Display},
    ops::{BitXor, BitXorAssign},
};

use bitvec::prelude::*;
use fxhash::FxHashSet;
use itertools::Itertools;

use crate::*;

/// Arbitrary-width bitmask with one bit per edge of an edge sequence
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IncidenceVector {
    /// Bit `i` is the bit of value `2^i`
    bits: BitVec<usize, Lsb0>,
}

impl IncidenceVector {
    /// Creates the all-zero vector for an edge sequence of length `width`
    pub fn zero(width: usize) -> Self {
        Self {
            bits: bitvec![usize, Lsb0; 0; width],
        }
    }

    /// Creates a vector of length `width` in which the given edge **indices** are set
    /// ** Panics if any index is `>= width` **
    pub fn from_edge_indices<I>(width: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut vector = Self::zero(width);
        for idx in indices {
            vector.bits.set(width - 1 - idx, true);
        }
        vector
    }

    /// Returns the number of edges this vector ranges over
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Returns the bit at position `i`, counted from the least significant bit
    /// ** Panics if `i >= width` **
    pub fn bit(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// Returns *true* if the edge at index `idx` of the edge sequence is marked
    /// ** Panics if `idx >= width` **
    pub fn contains_edge_at(&self, idx: usize) -> bool {
        self.bit(self.width() - 1 - idx)
    }

    /// Returns the position of the highest set bit plus one, or `0` for the zero vector
    pub fn bit_length(&self) -> usize {
        self.bits.last_one().map_or(0, |i| i + 1)
    }

    /// Returns the number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Returns *true* if no bit is set
    pub fn is_zero(&self) -> bool {
        self.bits.not_any()
    }

    /// Returns an iterator over all set bit positions in ascending order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Returns an iterator over the indices of all marked edges.
    /// As bits are visited in ascending order, edge indices are **descending**.
    pub fn edge_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let width = self.width();
        self.iter_set_bits().map(move |i| width - 1 - i)
    }

    /// XORs `other` into `self`
    /// ** Panics if the widths differ **
    pub fn xor_assign(&mut self, other: &Self) {
        assert_eq!(
            self.width(),
            other.width(),
            "incidence vectors of different width"
        );

        // unused bits of the last word are zero in both operands
        for (a, b) in self
            .bits
            .as_raw_mut_slice()
            .iter_mut()
            .zip(other.bits.as_raw_slice())
        {
            *a ^= *b;
        }
    }
}

impl BitXorAssign<&IncidenceVector> for IncidenceVector {
    fn bitxor_assign(&mut self, rhs: &IncidenceVector) {
        self.xor_assign(rhs);
    }
}

impl BitXor for &IncidenceVector {
    type Output = IncidenceVector;

    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.xor_assign(rhs);
        result
    }
}

/// Prints the vector as binary string, most significant bit (= first edge) first
impl Display for IncidenceVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in (0..self.width()).rev() {
            write!(f, "{}", if self.bits[i] { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl Debug for IncidenceVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IncidenceVector({}, {self})", self.width())
    }
}

/// Converts between closed walks, incidence vectors, and subgraphs of a fixed edge sequence
#[derive(Clone, Copy, Debug)]
pub struct IncidenceCodec<'a> {
    edges: &'a [Edge],
}

impl<'a> IncidenceCodec<'a> {
    /// Creates a codec for the given edge sequence.
    /// The sequence must not change while vectors of this codec are in use.
    pub fn new(edges: &'a [Edge]) -> Self {
        Self { edges }
    }

    /// Creates a codec over the edge sequence of a graph
    pub fn for_graph<K>(graph: &'a Graph<K>) -> Self {
        Self::new(graph.edges())
    }

    /// Returns the width of all vectors produced by this codec
    pub fn width(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edge sequence of this codec
    pub fn edges(&self) -> &'a [Edge] {
        self.edges
    }

    /// Returns both directions of every edge along the closed walk, including the edge from
    /// the last node back to the first one
    pub fn closed_walk_edges(walk: &[Node]) -> FxHashSet<Edge> {
        let mut edges = FxHashSet::default();

        if let (Some(&first), Some(&last)) = (walk.first(), walk.last()) {
            for (&u, &v) in walk.iter().tuple_windows() {
                edges.insert(Edge(u, v));
                edges.insert(Edge(v, u));
            }

            edges.insert(Edge(first, last));
            edges.insert(Edge(last, first));
        }

        edges
    }

    /// Returns the incidence vector of the closed walk: every record of the edge sequence
    /// that belongs to [`IncidenceCodec::closed_walk_edges`] is marked
    pub fn encode(&self, walk: &[Node]) -> IncidenceVector {
        let walk_edges = Self::closed_walk_edges(walk);
        IncidenceVector::from_edge_indices(
            self.width(),
            self.edges
                .iter()
                .positions(|e| walk_edges.contains(e)),
        )
    }

    /// Returns the subgraph of all marked edges.
    ///
    /// Edges appear in ascending bit order, i.e. descending edge-sequence order; nodes appear in
    /// the order they are first touched by these edges (source before destination).
    /// ** Panics if the width of `vector` differs from the length of the edge sequence **
    pub fn decode(&self, vector: &IncidenceVector) -> Subgraph {
        assert_eq!(vector.width(), self.width());

        let mut seen = FxHashSet::default();
        let mut vertices = Vec::new();
        let mut edges = Vec::with_capacity(vector.count_ones());

        for idx in vector.edge_indices() {
            let edge = self.edges[idx];
            for u in [edge.0, edge.1] {
                if seen.insert(u) {
                    vertices.push(u);
                }
            }
            edges.push(edge);
        }

        Subgraph::new(vertices, edges)
    }
}
