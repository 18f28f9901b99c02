/*!
# Graph Representations

Both representations are undirected, simple (no loops, no multi-connections) and have a
fixed number of nodes `n >= 1`. They share one implementation, [`UndirectedGraph`], which
is generic over the container used for each node's [`Neighborhood`]:

- [`AdjMatrix`] stores one bit per node pair. Testing and editing a connection is `O(1)`,
  memory is `O(n^2)` regardless of the number of connections.
- [`SortedAdjArray`] stores a strictly ascending list of neighbors per node. Testing a
  connection is `O(log deg)`, editing is `O(deg)`. Neighbors can be accessed by index in
  ascending order, which all statistic calculators rely on.

Whole graphs can be copied between representations via [`SetGraph`] or converted with the
helpers in [`crate::utils`].
*/

use std::fmt;

use crate::{prelude::*, testing::test_graph_ops};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;

/// Representation using an Adjacency-Matrix
pub type AdjMatrix = UndirectedGraph<BitNeighborhood>;

/// Representation using sorted Adjacency-Arrays
pub type SortedAdjArray = UndirectedGraph<SortedNeighborhood>;

impl AdjMatrix {
    /// Returns the row of `u` in the adjacency matrix
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &NodeBitSet {
        self.nbs(u).as_bitset()
    }
}

impl fmt::Display for AdjMatrix {
    /// One line per node; `●` marks a connection, `○` its absence and `＼` the diagonal
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in self.vertices() {
            if u > 0 {
                writeln!(f)?;
            }
            for v in self.vertices() {
                let symbol = if u == v {
                    '＼'
                } else if self.is_connected(u, v) {
                    '●'
                } else {
                    '○'
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SortedAdjArray {
    /// One line per node: the node followed by its sorted neighbors
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in self.vertices() {
            if u > 0 {
                writeln!(f)?;
            }
            write!(f, "{u} ")?;
            for v in self.as_neighbors_slice(u) {
                write!(f, " {v}")?;
            }
        }
        Ok(())
    }
}

impl SetGraph<SortedAdjArray> for AdjMatrix {
    fn set_graph(&mut self, other: &SortedAdjArray) -> Result<()> {
        self.ensure_same_size(other.number_of_nodes())?;
        self.replay_connections(other);
        Ok(())
    }
}

impl SetGraph<AdjMatrix> for SortedAdjArray {
    /// Re-derives every neighbor list from the matrix rows
    fn set_graph(&mut self, other: &AdjMatrix) -> Result<()> {
        self.ensure_same_size(other.number_of_nodes())?;
        *self = other
            .vertices()
            .map(|u| SortedNeighborhood::from_sorted(other.neighbors_of(u)))
            .collect();
        Ok(())
    }
}


// ---------- Testing ----------

test_graph_ops!(
    test_adj_matrix,
    AdjMatrix,
    (GraphNew, AdjacencyList, AdjacencyTest, GraphEdgeEditing)
);

test_graph_ops!(
    test_sorted_adj_array,
    SortedAdjArray,
    (GraphNew, AdjacencyList, AdjacencyTest, GraphEdgeEditing)
);
