use std::ops::Range;

use stream_bitset::prelude::*;

use crate::{edge::*, error::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all nodes `0..n`.
    /// The range does not borrow `self` and may be used while mutating the graph.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns an error if `u` is not a node of this graph
    fn check_node(&self, u: Node) -> Result<()> {
        let n = self.number_of_nodes();
        if u < n {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange { node: u, n })
        }
    }

    /// ** Panics if `u >= n` **
    #[inline]
    #[track_caller]
    fn assert_node(&self, u: Node) {
        let n = self.number_of_nodes();
        assert!(u < n, "node {u} is out of range for a graph with {n} nodes");
    }
}

/// Provides getters pertaining to the connection-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of connections of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no connections
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & connections
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighbors of a given vertex in ascending order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns a NodeBitSet containing the neighbors of `u`
    /// ** Panics if `u >= n` **
    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(self.number_of_nodes(), self.neighbors_of(u))
    }

    /// Returns an iterator over all connections `(u, v)` with `u < v` of a given vertex.
    /// ** Panics if `u >= n` **
    fn connections_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .filter(move |&v| u < v)
            .map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all connections in canonical order:
    /// every connected pair exactly once as `Edge(u, v)` with `u < v`,
    /// sorted by `u` and then by `v`.
    fn connections(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| self.connections_of(u))
    }
}

/// Trait for index-based access to ordered neighborhoods
pub trait NeighborsSlice: AdjacencyList {
    /// Returns the sorted neighborhood of a given vertex as a slice
    /// ** Panics if `u >= n` **
    fn as_neighbors_slice(&self, u: Node) -> &[Node];

    /// Returns the ith neighbor (0-indexed, ascending order) of a given vertex
    /// ** Panics if `u >= n || i >= deg(u)` **
    #[inline]
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        self.as_neighbors_slice(u)[i as usize]
    }
}

/// Trait to test existence of connections in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if `u` and `v` are connected.
    /// Always *false* for `u == v`.
    /// ** Panics if `u >= n || v >= n` **
    fn is_connected(&self, u: Node, v: Node) -> bool;

    /// Like [`AdjacencyTest::is_connected`] but reports invalid nodes as an error
    fn try_is_connected(&self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.is_connected(u, v))
    }
}

/// Trait for creating a new graph without connections
pub trait GraphNew: Sized {
    /// Creates a graph with `n` isolated nodes.
    /// Returns [`GraphError::InvalidNodeCount`] if `n == 0`.
    fn try_new(n: NumNodes) -> Result<Self>;

    /// Creates a graph with `n` isolated nodes.
    /// ** Panics if `n == 0` **
    #[track_caller]
    fn new(n: NumNodes) -> Self {
        match Self::try_new(n) {
            Ok(graph) => graph,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Provides functions to insert/delete connections
pub trait GraphEdgeEditing: GraphNew + AdjacencyTest {
    /// Connects `u` and `v`.
    /// Returns *true* if the graph changed, ie. `u != v` and they were not connected before.
    /// ** Panics if `u >= n || v >= n` **
    fn set_connection(&mut self, u: Node, v: Node) -> bool;

    /// Disconnects `u` and `v`.
    /// Returns *true* if the graph changed, ie. they were connected before.
    /// ** Panics if `u >= n || v >= n` **
    fn remove_connection(&mut self, u: Node, v: Node) -> bool;

    /// Like [`GraphEdgeEditing::set_connection`] but reports invalid nodes as an error
    fn try_set_connection(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.set_connection(u, v))
    }

    /// Like [`GraphEdgeEditing::remove_connection`] but reports invalid nodes as an error
    fn try_remove_connection(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.remove_connection(u, v))
    }

    /// Connects all pairs in the collection
    fn set_connections(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.set_connection(u, v);
        }
    }

    /// Removes all connections of the graph
    fn clear_connections(&mut self);
}

/// Bulk-replaces all connections of `self` with those of a graph of the same size
pub trait SetGraph<G> {
    /// Replaces all connections of `self` by the connections of `other`.
    /// Returns [`GraphError::SizeMismatch`] if the node counts differ.
    fn set_graph(&mut self, other: &G) -> Result<()>;
}

/// A super trait for creating a graph from scratch from a set of connections and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over connections.
    /// Loops and duplicates are ignored.
    /// ** Panics if `n == 0` or any endpoint is `>= n` **
    fn from_connections(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_connections(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.set_connections(edges);
        graph
    }
}
