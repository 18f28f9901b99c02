use fxhash::FxHashSet;

use super::*;

/// Generator for uniform `G(n,m)` random graphs with `n` nodes and `m` connections.
///
/// Connections are drawn by rejection sampling: a uniformly random pair of distinct nodes is
/// accepted if it has not been drawn before. This is fast as long as the graph is not close
/// to complete.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnm {
    n: NumNodes,
    m: NumEdges,
}

impl Gnm {
    /// Creates a new empty `G(n,m)` generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the largest number of connections a simple graph with `n` nodes can have
    pub fn max_edges(n: NumNodes) -> u64 {
        let n = n as u64;
        n * n.saturating_sub(1) / 2
    }

    fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(GraphError::InvalidNodeCount(self.n));
        }

        let max = Self::max_edges(self.n);
        if self.m as u64 > max {
            return Err(GraphError::TooManyConnections { m: self.m, max });
        }

        Ok(())
    }
}

impl NumNodesGen for Gnm {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for Gnm {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl GraphGenerator for Gnm {
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng,
    {
        self.validate()?;

        let mut seen: FxHashSet<Edge> = FxHashSet::default();
        let mut edges = Vec::with_capacity(self.m as usize);

        while edges.len() < self.m as usize {
            let u = rng.random_range(0..self.n);
            let v = rng.random_range(0..self.n);
            if u == v {
                continue;
            }

            let e = Edge(u, v).normalized();
            if seen.insert(e) {
                edges.push(e);
            }
        }

        Ok(edges)
    }
}
