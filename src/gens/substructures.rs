/*!
# Substructure Generators

This module provides utility methods to add common motifs to an already existing graph:

- **Paths**
- **Cycles**
- **Cliques**

Vertices are given by their keys and created on demand.

# Example

```rust
use cyclespace::{prelude::*, gens::*};

let mut g = Graph::new();
g.connect_path(["a", "b", "c"]);
g.connect_cycle(["c", "d", "e"]);

assert_eq!(g.number_of_nodes(), 5);
assert_eq!(g.number_of_undirected_edges(), 5);
```
*/

use std::hash::Hash;

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures<K> {
    /// Connects the given vertices in order with a **simple path**.
    ///
    /// Each consecutive pair of vertices is connected by a single undirected edge.
    fn connect_path<P>(&mut self, keys_on_path: P)
    where
        P: IntoIterator<Item = K>;

    /// Connects the given vertices with a **cycle**.
    ///
    /// - Consecutive vertices are connected by edges.
    /// - Additionally, the last vertex is connected back to the first.
    fn connect_cycle<C>(&mut self, keys_in_cycle: C)
    where
        C: IntoIterator<Item = K>;

    /// Connects all given vertices pairwise into a **clique** (complete subgraph) without loops.
    fn connect_clique(&mut self, keys: &[K]);
}

impl<K> GeneratorSubstructures<K> for Graph<K>
where
    K: Eq + Hash + Clone,
{
    fn connect_path<P>(&mut self, keys_on_path: P)
    where
        P: IntoIterator<Item = K>,
    {
        for (a, b) in keys_on_path.into_iter().tuple_windows() {
            self.add_bidirectional_edge(a, b);
        }
    }

    fn connect_cycle<C>(&mut self, keys_in_cycle: C)
    where
        C: IntoIterator<Item = K>,
    {
        let mut iter = keys_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first.clone();
            for cur in iter {
                self.add_bidirectional_edge(prev, cur.clone());
                prev = cur;
            }

            self.add_bidirectional_edge(prev, first);
        }
    }

    fn connect_clique(&mut self, keys: &[K]) {
        for (a, b) in keys.iter().tuple_combinations() {
            self.add_bidirectional_edge(a.clone(), b.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::algo::*;

    use super::*;

    #[test]
    fn test_connect_path() {
        {
            let mut g: Graph<u32> = Graph::new();
            g.connect_path([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = Graph::new();
            g.connect_path([1]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = Graph::new();
            g.connect_path([0, 3, 1, 4]);
            assert_eq!(
                g.edges(),
                &[
                    Edge(0, 1),
                    Edge(1, 0),
                    Edge(1, 2),
                    Edge(2, 1),
                    Edge(2, 3),
                    Edge(3, 2)
                ]
            );
            assert_eq!(g.keys(), &[0, 3, 1, 4]);
            assert_eq!(g.cyclomatic_number(), 0);
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g: Graph<u32> = Graph::new();
            g.connect_cycle([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = Graph::new();
            g.connect_cycle([1]);
            assert_eq!(g.edges(), &[Edge(0, 0), Edge(0, 0)]);
            assert_eq!(g.cyclomatic_number(), 0);
        }

        {
            let mut g = Graph::new();
            g.connect_cycle(["a", "b", "c", "d"]);
            assert_eq!(g.number_of_undirected_edges(), 4);
            assert_eq!(g.edges().last(), Some(&Edge(0, 3)));
            assert_eq!(g.cyclomatic_number(), 1);
        }
    }

    #[test]
    fn test_connect_clique() {
        let mut g = Graph::new();
        g.connect_clique(&[1, 2, 4, 5]);

        assert_eq!(g.number_of_undirected_edges(), 6);
        assert_eq!(g.cyclomatic_number(), 3);
        assert_eq!(g.list_all_cycles().unwrap().len(), 7);
    }
}
