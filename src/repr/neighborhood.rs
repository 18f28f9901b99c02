use stream_bitset::prelude::*;

use super::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all neighbors in the Neighborhood in ascending order
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `v` is in the Neighborhood
    /// ** Might panic if `v >= n` **
    fn has_neighbor(&self, v: Node) -> bool;

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    /// ** Might panic if `u >= n` **
    fn try_add_neighbor(&mut self, u: Node) -> bool;

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    /// ** Might panic if `u >= n` **
    fn try_remove_neighbor(&mut self, u: Node) -> bool;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborhoodSlice: Neighborhood {
    /// Returns a slice-reference of the neighborhood
    fn as_slice(&self) -> &[Node];
}

/// A Neighborhood kept as a strictly ascending `Vec<Node>`.
///
/// Lookups use binary search, insertions and removals shift the tail of the list.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct SortedNeighborhood(Vec<Node>);

impl Neighborhood for SortedNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Vec::new())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.binary_search(&v).is_ok()
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        match self.0.binary_search(&u) {
            Ok(_) => true,
            Err(pos) => {
                self.0.insert(pos, u);
                false
            }
        }
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        match self.0.binary_search(&u) {
            Ok(pos) => {
                self.0.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

impl NeighborhoodSlice for SortedNeighborhood {
    fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

impl SortedNeighborhood {
    /// Builds a neighborhood from ascending, duplicate-free neighbors
    pub(crate) fn from_sorted(neighbors: impl Iterator<Item = Node>) -> Self {
        let nbs: Vec<Node> = neighbors.collect();
        debug_assert!(nbs.windows(2).all(|w| w[0] < w[1]));
        Self(nbs)
    }
}

/// A Neighborhood represented by a NodeBitSet, ie. one row of an adjacency matrix
#[derive(Default, Clone, Debug, PartialEq)]
pub struct BitNeighborhood(NodeBitSet);

impl Neighborhood for BitNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self(NodeBitSet::new(n))
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.cardinality()
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter_set_bits()
    }

    fn has_neighbor(&self, u: Node) -> bool {
        self.0.get_bit(u)
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        self.0.set_bit(u)
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        self.0.clear_bit(u)
    }

    fn clear(&mut self) {
        self.0.clear_all();
    }
}

impl BitNeighborhood {
    /// Returns the underlying bitset
    pub fn as_bitset(&self) -> &NodeBitSet {
        &self.0
    }
}
