/*!
# Cycle Space Algorithms

The cycle space of an undirected graph is computed in three steps, each available on its own:
- [`SpanningTreeBuilder`] classifies edges into tree edges and back edges by a depth-first search,
- [`CycleBasisExtractor`] derives one fundamental cycle per back edge,
- [`CycleSpaceEnumerator`] encodes the fundamental cycles as [`IncidenceVector`]s and decodes every
  non-empty XOR-combination into a [`Subgraph`].

For most use-cases the [`CycleSpaceOps`] trait on [`Graph`] suffices:
```rust
use cyclespace::{prelude::*, algo::*};

let graph = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a")]);
let cycles = graph.list_all_cycles().unwrap();
assert_eq!(cycles.len(), 1);
```

All searches use explicit stacks and never modify the graph.
*/

mod cycle_basis;
mod cycle_space;
mod spanning_tree;

use smallvec::SmallVec;

use crate::prelude::*;

pub use cycle_basis::*;
pub use cycle_space::*;
pub use spanning_tree::*;

/// Work-stack entry of an iterative depth-first search.
///
/// The neighborhood of `node` is read once when the frame is created;
/// later changes to the searched view do not affect it.
struct DfsFrame {
    node: Node,
    parent: Node,
    neighbors: SmallVec<[Node; 8]>,
    next: usize,
}

impl DfsFrame {
    fn new<I>(node: Node, parent: Node, neighbors: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        Self {
            node,
            parent,
            neighbors: neighbors.into_iter().collect(),
            next: 0,
        }
    }

    fn next_neighbor(&mut self) -> Option<Node> {
        let v = self.neighbors.get(self.next).copied()?;
        self.next += 1;
        Some(v)
    }
}
