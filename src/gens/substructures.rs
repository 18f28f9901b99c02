/*!
# Substructure Generators

Adds common motifs (**paths**, **cycles**, **cliques**) to an already existing graph.
Useful for building test instances with known statistics.

# Example

```rust
use graphstats::{prelude::*, gens::*};

let mut g = SortedAdjArray::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert_eq!(
    g.connections().collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Connections that already exist are left untouched.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the
    /// last node is connected back to the first. Fewer than three nodes yield a path.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes pairwise into a **clique**.
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>;
}

impl<G: GraphEdgeEditing> GeneratorSubstructures for G {
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.set_connection(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.set_connection(prev, cur);
                prev = cur;
            }

            self.set_connection(prev, first);
        }
    }

    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (&u, &v) in nodes.iter().tuple_combinations() {
            self.set_connection(u, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_path() {
        {
            let mut g = AdjMatrix::new(6);
            g.connect_path([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjMatrix::new(6);
            g.connect_path([1]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = SortedAdjArray::new(6);
            g.connect_path([0, 3, 1, 4]);
            assert_eq!(
                g.connections().collect_vec(),
                vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = SortedAdjArray::new(6);
            g.connect_cycle([1]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjMatrix::new(6);
            g.connect_cycle([0, 3, 1, 4]);
            assert_eq!(
                g.connections().collect_vec(),
                vec![Edge(0, 3), Edge(0, 4), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_clique() {
        {
            let mut g = AdjMatrix::new(6);
            g.connect_clique([1]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = SortedAdjArray::new(6);
            g.connect_clique([1, 2, 4, 5]);
            assert_eq!(g.number_of_edges(), 6);
            assert!(g.is_connected(5, 1));
        }
    }
}
