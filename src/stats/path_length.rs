use stream_bitset::prelude::*;
use tracing::{debug, trace};

use super::*;

/// Mean shortest path length from every node to all other nodes.
///
/// Instead of running a BFS per node, all distances are discovered level by level:
/// a dense *visibility map* starts as the adjacency matrix, and in pass `l` every node
/// sees the union of the rows of its neighbors from pass `l - 1`. Pairs that become visible
/// for the first time are at distance exactly `l`.
///
/// If the graph is not connected the statistic is `NaN` for **all** nodes, not only for
/// those outside the largest component.
#[derive(Debug, Copy, Clone, Default)]
pub struct AveragePathLength;

/// Scratch space of [`AveragePathLength`], reusable across calls on graphs of the same size
#[derive(Debug, Clone)]
pub struct PathLengthBuffers {
    visibility: AdjMatrix,
    snapshot: AdjMatrix,
    visible: NodeBitSet,
}

impl PathLengthBuffers {
    /// Allocates buffers for graphs with `n` nodes.
    /// ** Panics if `n == 0` **
    pub fn new(n: NumNodes) -> Self {
        Self {
            visibility: AdjMatrix::new(n),
            snapshot: AdjMatrix::new(n),
            visible: NodeBitSet::new(n),
        }
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.visibility.number_of_nodes()
    }
}

impl AveragePathLength {
    /// Like [`NodeStatistic::calculate_all`] but works in caller provided buffers.
    ///
    /// Returns [`GraphError::SizeMismatch`] if the buffers were allocated for another size.
    ///
    /// ** Panics if the expansion neither completes nor stalls within `n` passes **, which
    /// can only happen if the adjacency is not symmetric.
    pub fn calculate_all_with(
        &self,
        graph: &SortedAdjArray,
        buffers: &mut PathLengthBuffers,
    ) -> Result<Vec<f64>> {
        let PathLengthBuffers {
            visibility,
            snapshot,
            visible,
        } = buffers;

        visibility.set_graph(graph)?;

        let n = graph.number_of_nodes();
        let mut sums: Vec<u64> = graph.degrees().map(u64::from).collect();
        let mut remaining: Vec<NumNodes> = graph.degrees().map(|d| n - 1 - d).collect();

        if remaining.iter().all(|&r| r == 0) {
            debug!(n, passes = 1, "average path length completed");
            return Ok(averages(&sums, n));
        }

        // one more pass than the longest possible distance so that stalling is detected
        for path_length in 2..=n {
            snapshot.copy_from(visibility);
            let mut changed = false;

            for u in 0..n - 1 {
                if remaining[u as usize] == 0 {
                    continue;
                }

                visible.clear_all();
                for x in graph.neighbors_of(u) {
                    visible.set_bits(snapshot.neighbors_of(x));
                }

                for v in u + 1..n {
                    if visible.get_bit(v) && visibility.set_connection(u, v) {
                        remaining[u as usize] -= 1;
                        remaining[v as usize] -= 1;
                        sums[u as usize] += path_length as u64;
                        sums[v as usize] += path_length as u64;
                        changed = true;
                    }
                }
            }

            trace!(path_length, changed, "path length pass");

            if remaining.iter().all(|&r| r == 0) {
                debug!(n, passes = path_length, "average path length completed");
                return Ok(averages(&sums, n));
            }

            if !changed {
                debug!(n, passes = path_length, "graph is not connected");
                return Ok(vec![f64::NAN; n as usize]);
            }
        }

        panic!("average path length did not converge within {n} passes");
    }
}

fn averages(sums: &[u64], n: NumNodes) -> Vec<f64> {
    let others = (n - 1) as f64;
    sums.iter().map(|&s| s as f64 / others).collect()
}

impl NodeStatistic for AveragePathLength {
    fn name(&self) -> &'static str {
        "Average Path Length"
    }

    fn abbreviation(&self) -> &'static str {
        "APL"
    }

    fn calculate_all(&self, graph: &SortedAdjArray) -> Vec<f64> {
        let mut buffers = PathLengthBuffers::new(graph.number_of_nodes());
        match self.calculate_all_with(graph, &mut buffers) {
            Ok(result) => result,
            Err(err) => unreachable!("buffers are allocated for the graph: {err}"),
        }
    }
}
