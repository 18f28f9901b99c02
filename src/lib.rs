/*!
`graphstats` is a small in-memory engine for **unweighted undirected simple graphs** and
per-node network statistics.

# Representation

Nodes are `u32` values in the range `0..n` where `n >= 1` is fixed at construction.
A connection is an unordered pair of distinct nodes; enumerations always report it as
`Edge(u, v)` with `u < v`.

Two interchangeable representations are provided (see [`repr`]):

- [`AdjMatrix`](crate::repr::AdjMatrix): bit matrix, `O(1)` tests and edits, `O(n^2)` memory
- [`SortedAdjArray`](crate::repr::SortedAdjArray): sorted neighbor lists with indexed access

# Usage

- [`prelude`] includes nodes, connections, errors, the graph operation traits and both representations,
- [`algo`] splits a graph into its connected components,
- [`stats`] computes per-node statistics (degree, clustering coefficient, average path length, spreading speed),
- [`utils`] converts between representations and aggregates statistic results,
- [`gens`] builds random graphs and adds paths/cycles/cliques to existing ones.

Statistics that are mathematically undefined for a node (or the whole graph) are reported as
`f64::NAN` rather than as an error. A typical pipeline keeps the largest connected component
before running the path based statistics:

```rust
use graphstats::{prelude::*, algo::*, stats::*};

let mut graph = SortedAdjArray::new(5);
graph.set_connections([(0, 1), (1, 2), (2, 0), (3, 4)]);

let largest = graph.split_into_components().swap_remove(0);
let apl = AveragePathLength.calculate_all(largest.graph());
assert_eq!(apl, vec![1.0, 1.0, 1.0]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub mod stats;
pub(crate) mod testing;
pub mod utils;

/// `graphstats::prelude` includes definitions for nodes, connections and errors, all basic graph operation traits as well as both representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
