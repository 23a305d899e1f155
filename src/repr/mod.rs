/*!
# Graph Representation

- [`Graph`]: the keyed, undirected input graph with a stable edge order,
- [`EdgeOverlay`]: a by-value view that hides a set of edges of a graph,
- [`Subgraph`]: an edge subset of a graph as produced by the cycle space enumeration.
*/

mod graph;
mod overlay;
mod subgraph;

pub use graph::*;
pub use overlay::*;
pub use subgraph::*;
