/*!
# Graph Generators

Builders for random graphs and helpers to add deterministic substructures.

The typical usage workflow of a generator is:

1. Create a generator instance (e.g., `Gnm::new()`).
2. Set parameters using the builder methods (e.g., `.nodes(n).edges(m)`).
3. Generate connections via `generate(rng)`.

The [`RandomGraph`] trait wraps this into a single constructor for every representation.
*/

use rand::Rng;

use crate::prelude::*;

mod gnm;
mod substructures;

pub use gnm::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Builder-variant of [`NumNodesGen::set_nodes`]
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of connections.
pub trait NumEdgesGen: Sized {
    /// Sets the number of connections in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Builder-variant of [`NumEdgesGen::set_edges`]
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// General trait for a configurable random connection generator.
pub trait GraphGenerator {
    /// Generates a list of random connections, each normalized and distinct.
    ///
    /// # Errors
    /// Returns an error if the generator is configured with impossible parameters.
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a uniformly random graph with `n` nodes and exactly `m` connections.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeCount`] for `n == 0` and
    /// [`GraphError::TooManyConnections`] if `m > n * (n - 1) / 2`.
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self>
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphEdgeEditing,
{
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self>
    where
        R: Rng,
    {
        let edges = Gnm::new().nodes(n).edges(m).generate(rng)?;
        let mut graph = Self::try_new(n)?;
        graph.set_connections(edges);
        Ok(graph)
    }
}
