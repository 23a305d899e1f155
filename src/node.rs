/*!
# Node Representation

Vertices are identified by an opaque key chosen by the caller (a coordinate, a name, ...).
Internally, every distinct key is assigned a `Node = u32` in insertion order, so the
`i`-th inserted key becomes node `i`. All algorithms work on these handles and only
translate back to keys when presenting results.
*/

use bitvec::prelude::*;

/// Nodes are numbered `0` to `n - 1` in key-insertion order
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitVec<usize, Lsb0>;

/// Convenience operations on a [`NodeBitSet`] using [`Node`] indices.
pub trait NodeBitSetOps {
    /// Creates an empty bitset with one entry per node
    fn new_unset(n: NumNodes) -> Self;

    /// Sets bit `u` and returns its previous value
    fn set_node(&mut self, u: Node) -> bool;

    /// Clears bit `u` and returns its previous value
    fn clear_node(&mut self, u: Node) -> bool;

    /// Returns *true* if bit `u` is set
    fn has_node(&self, u: Node) -> bool;

    /// Returns an iterator over all nodes whose bit is **not** set
    fn unset_nodes(&self) -> impl Iterator<Item = Node> + '_;
}

impl NodeBitSetOps for NodeBitSet {
    fn new_unset(n: NumNodes) -> Self {
        bitvec![usize, Lsb0; 0; n as usize]
    }

    fn set_node(&mut self, u: Node) -> bool {
        self.replace(u as usize, true)
    }

    fn clear_node(&mut self, u: Node) -> bool {
        self.replace(u as usize, false)
    }

    fn has_node(&self, u: Node) -> bool {
        self[u as usize]
    }

    fn unset_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.iter_zeros().map(|u| u as Node)
    }
}
