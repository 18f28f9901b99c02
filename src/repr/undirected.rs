use super::*;

/// An undirected simple graph with a fixed number of nodes
#[derive(Clone, Debug, PartialEq)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

impl<Nbs: Neighborhood> UndirectedGraph<Nbs> {
    /// ** Panics if `u >= n` **
    #[inline]
    #[track_caller]
    pub(crate) fn nbs(&self, u: Node) -> &Nbs {
        self.assert_node(u);
        &self.nbs[u as usize]
    }

    pub(crate) fn ensure_same_size(&self, other_n: NumNodes) -> Result<()> {
        let n = self.number_of_nodes();
        if n == other_n {
            Ok(())
        } else {
            Err(GraphError::SizeMismatch {
                expected: n,
                actual: other_n,
            })
        }
    }

    /// Clears `self` and re-inserts every connection of `other`.
    /// Both graphs must have the same number of nodes.
    pub(crate) fn replay_connections<G: AdjacencyList>(&mut self, other: &G) {
        debug_assert_eq!(self.number_of_nodes(), other.number_of_nodes());
        self.clear_connections();
        for Edge(u, v) in other.connections() {
            self.set_connection(u, v);
        }
    }

    /// Overwrites `self` with `other` reusing the existing allocations.
    /// ** Panics if the number of nodes differs **
    pub(crate) fn copy_from(&mut self, other: &Self) {
        assert_eq!(self.nbs.len(), other.nbs.len());
        for (dst, src) in self.nbs.iter_mut().zip(&other.nbs) {
            dst.clone_from(src);
        }
        self.num_edges = other.num_edges;
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs(u).neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs(u).num_of_neighbors()
    }
}

impl<Nbs: NeighborhoodSlice> NeighborsSlice for UndirectedGraph<Nbs> {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.nbs(u).as_slice()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn is_connected(&self, u: Node, v: Node) -> bool {
        self.assert_node(v);
        self.nbs(u).has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn try_new(n: NumNodes) -> Result<Self> {
        if n == 0 {
            return Err(GraphError::InvalidNodeCount(n));
        }

        Ok(Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        })
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn set_connection(&mut self, u: Node, v: Node) -> bool {
        self.assert_node(u);
        self.assert_node(v);

        if u == v || self.nbs[u as usize].try_add_neighbor(v) {
            return false;
        }

        assert!(
            !self.nbs[v as usize].try_add_neighbor(u),
            "asymmetric adjacency between {u} and {v}"
        );
        self.num_edges += 1;
        true
    }

    fn remove_connection(&mut self, u: Node, v: Node) -> bool {
        self.assert_node(u);
        self.assert_node(v);

        if u == v || !self.nbs[u as usize].try_remove_neighbor(v) {
            return false;
        }

        assert!(
            self.nbs[v as usize].try_remove_neighbor(u),
            "asymmetric adjacency between {u} and {v}"
        );
        self.num_edges -= 1;
        true
    }

    fn clear_connections(&mut self) {
        for nbs in &mut self.nbs {
            nbs.clear();
        }
        self.num_edges = 0;
    }
}

impl<Nbs: Neighborhood> SetGraph<UndirectedGraph<Nbs>> for UndirectedGraph<Nbs> {
    fn set_graph(&mut self, other: &Self) -> Result<()> {
        self.ensure_same_size(other.number_of_nodes())?;
        self.copy_from(other);
        Ok(())
    }
}

impl<Nbs: Neighborhood> FromIterator<Nbs> for UndirectedGraph<Nbs> {
    /// Assembles a graph from per-node neighborhoods which must already be symmetric
    fn from_iter<I: IntoIterator<Item = Nbs>>(iter: I) -> Self {
        let nbs: Vec<Nbs> = iter.into_iter().collect();
        let degree_sum: u64 = nbs.iter().map(|n| n.num_of_neighbors() as u64).sum();
        debug_assert_eq!(degree_sum % 2, 0);
        Self {
            nbs,
            num_edges: (degree_sum / 2) as NumEdges,
        }
    }
}
