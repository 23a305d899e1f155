/*!
`cyclespace` computes the **cycle space** of undirected graphs: every edge subset that can be
written as the symmetric difference (XOR) of fundamental cycles.

# Representation

Vertices are identified by an arbitrary key `K: Eq + Hash + Clone` (a coordinate, a name, ...).
Internally, keys are numbered in insertion order and represented as **nodes** `u32`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.
Every undirected connection is stored as two directed edge records `(u, v)` and `(v, u)`.
The order of these records in [`Graph::edges`] defines the bit positions of all
[`IncidenceVector`](crate::incidence::IncidenceVector)s and is never changed by any algorithm.

# Algorithm

1. A depth-first search from a root classifies edges into spanning-tree edges and back edges
   ([`SpanningTreeBuilder`](crate::algo::SpanningTreeBuilder)).
2. Every undirected back edge closes exactly one cycle with the tree; these fundamental cycles
   form a basis of the cycle space ([`CycleBasisExtractor`](crate::algo::CycleBasisExtractor)).
3. The basis cycles are encoded as incidence vectors, all `2^k - 1` non-empty XOR-combinations are
   formed and decoded into [`Subgraph`]s ([`CycleSpaceEnumerator`](crate::algo::CycleSpaceEnumerator)).

Note that the result is **exponential** in the cyclomatic number `k`. Elements of the cycle space
are not necessarily simple cycles: they may be edge-disjoint unions of cycles.

# Usage

- [`prelude`] includes definitions for nodes, edges, the graph and subgraph representations,
  incidence vectors, and errors,
- [`algo`] includes the spanning tree search, basis extraction, and enumeration, as well as
  the [`CycleSpaceOps`](crate::algo::CycleSpaceOps) trait implemented on [`Graph`],
- [`gens`] includes generators for paths, cycles, cliques, and grids.

```rust
use cyclespace::{prelude::*, algo::*};

let mut graph = Graph::new();
graph.add_bidirectional_edge((0, 0), (0, 1));
graph.add_bidirectional_edge((0, 1), (1, 1));
graph.add_bidirectional_edge((1, 1), (1, 0));
graph.add_bidirectional_edge((1, 0), (0, 0));

let cycles = graph.list_all_cycles().unwrap();
assert_eq!(cycles.len(), 1);
assert_eq!(cycles[0].number_of_undirected_edges(), 4);
```

# Logging

Phase summaries are emitted via [`tracing`] at `debug` level, single fundamental cycles at
`trace` level. Nodes not reached from the root are reported at `warn` level.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod incidence;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use algo::list_all_cycles;
pub use prelude::*;

/// `cyclespace::prelude` includes definitions for nodes and edges, the graph operation traits,
/// all representations, incidence vectors, and the error type.
pub mod prelude {
    pub use super::{edge::*, error::*, incidence::*, node::*, ops::*, repr::*};
}
