/*!
# Node Statistics

Per-node statistics of a [`SortedAdjArray`]. Every calculator implements [`NodeStatistic`]
and returns one `f64` per node, indexed like the nodes of the graph.

Values that are mathematically undefined for a node are reported as `f64::NAN`:
- [`ClusteringCoefficient`] for nodes with less than two neighbors (unless configured otherwise),
- [`AveragePathLength`] for **every** node if the graph is not connected,
- [`SpreadingSpeed`] for seeds whose diffusion stalls before informing enough nodes.

Path based statistics are usually computed on the largest connected component only,
see [`crate::algo::SplitComponents`].

```rust
use graphstats::{prelude::*, stats::*};

let graph = SortedAdjArray::from_connections(4, [(0, 1), (1, 2), (2, 3)]);

assert_eq!(NodeDegree.calculate_all(&graph), vec![1.0, 2.0, 2.0, 1.0]);
assert_eq!(NodeDegree.calculate(&graph), 1.5);

let statistics: Vec<Box<dyn NodeStatistic>> = vec![
    Box::new(NodeDegree),
    Box::new(ClusteringCoefficient::default()),
    Box::new(AveragePathLength),
    Box::new(SpreadingSpeed::default()),
];
let names: Vec<_> = statistics.iter().map(|s| s.abbreviation()).collect();
assert_eq!(names, vec!["ND", "CC", "APL", "SS"]);
```
*/

use crate::{prelude::*, utils::network_average};

mod clustering;
mod degree;
mod path_length;
mod spreading;

pub use clustering::*;
pub use degree::*;
pub use path_length::*;
pub use spreading::*;

/// A statistic that assigns a value to every node of a graph
pub trait NodeStatistic {
    /// Human readable name of the statistic
    fn name(&self) -> &'static str;

    /// Short name of the statistic, e.g. for column headers
    fn abbreviation(&self) -> &'static str;

    /// Computes the statistic for every node.
    /// The returned vector has exactly one entry per node.
    fn calculate_all(&self, graph: &SortedAdjArray) -> Vec<f64>;

    /// Computes the network average of the statistic, ignoring undefined (`NaN`) node values.
    /// Returns `NaN` if the statistic is undefined for all nodes.
    fn calculate(&self, graph: &SortedAdjArray) -> f64 {
        network_average(&self.calculate_all(graph), true)
    }
}
