/*!
# Graph Generators

Deterministic constructors for small graphs with a known cycle structure:
- [`GeneratorSubstructures`] adds paths, cycles, and cliques over vertex keys to an existing graph,
- [`grid`] builds a rectangular lattice over `(x, y)` coordinates.
*/

use crate::prelude::*;

mod grid;
mod substructures;

pub use grid::*;
pub use substructures::*;
