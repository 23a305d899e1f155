use super::*;

/// Creates a `width x height` lattice whose vertices are the coordinates `(x, y)` with
/// `x < width` and `y < height`. Horizontal edges of each row are inserted first (bottom
/// to top), followed by the vertical edges of each column (left to right).
///
/// A grid with `width, height >= 1` has cyclomatic number `(width - 1) * (height - 1)`, one
/// fundamental cycle per unit square.
///
/// # Example
/// ```rust
/// use cyclespace::{prelude::*, gens::*};
///
/// let g = grid(3, 2);
/// assert_eq!(g.number_of_nodes(), 6);
/// assert_eq!(g.number_of_undirected_edges(), 7);
/// ```
pub fn grid(width: u32, height: u32) -> Graph<(u32, u32)> {
    let mut graph = Graph::new();

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex((x, y));
        }
    }

    for y in 0..height {
        for x in 1..width {
            graph.add_bidirectional_edge((x - 1, y), (x, y));
        }
    }

    for x in 0..width {
        for y in 1..height {
            graph.add_bidirectional_edge((x, y - 1), (x, y));
        }
    }

    graph
}
