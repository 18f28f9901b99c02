/*!
# Errors

Contract violations that the caller can recover from are reported as [`GraphError`].
Undefined statistic values are not errors; they are reported as `f64::NAN`.
*/

use thiserror::Error;

use crate::prelude::*;

/// Errors reported by graph construction, checked accessors and algorithm configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A graph needs at least one node
    #[error("number of nodes should be at least 1, got {0}")]
    InvalidNodeCount(NumNodes),

    /// Two graphs of different sizes were combined
    #[error("graph sizes differ: {expected} vs {actual}")]
    SizeMismatch { expected: NumNodes, actual: NumNodes },

    /// A node index outside of `0..n` was passed
    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: Node, n: NumNodes },

    /// A configuration value is outside of its valid range `(0, 1]`
    #[error("'{name}' should be in the range (0, 1], got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// More connections were requested than a simple graph can hold
    #[error("number of connections should be in the range [0, {max}], got {m}")]
    TooManyConnections { m: NumEdges, max: u64 },
}

pub type Result<T> = std::result::Result<T, GraphError>;
