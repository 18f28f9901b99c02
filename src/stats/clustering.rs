use super::*;

/// Value of the clustering coefficient for nodes with less than two neighbors
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LowDegreePolicy {
    /// The coefficient is undefined (`NaN`), as proposed by Bansal et al.
    #[default]
    Undefined,
    /// The coefficient is `0`, as proposed by Watts and Strogatz
    Zero,
}

impl LowDegreePolicy {
    fn value(self) -> f64 {
        match self {
            LowDegreePolicy::Undefined => f64::NAN,
            LowDegreePolicy::Zero => 0.0,
        }
    }
}

/// Local clustering coefficient: the fraction of pairs of neighbors that are connected
/// themselves. Always in `[0, 1]` or `NaN`.
#[derive(Debug, Copy, Clone, Default)]
pub struct ClusteringCoefficient {
    policy: LowDegreePolicy,
}

impl ClusteringCoefficient {
    pub fn new(policy: LowDegreePolicy) -> Self {
        Self { policy }
    }

    /// Nodes with less than two neighbors are undefined
    pub fn bansal() -> Self {
        Self::new(LowDegreePolicy::Undefined)
    }

    /// Nodes with less than two neighbors have coefficient `0`
    pub fn watts_strogatz() -> Self {
        Self::new(LowDegreePolicy::Zero)
    }

    pub fn policy(&self) -> LowDegreePolicy {
        self.policy
    }
}

impl NodeStatistic for ClusteringCoefficient {
    fn name(&self) -> &'static str {
        "Clustering Coefficient"
    }

    fn abbreviation(&self) -> &'static str {
        "CC"
    }

    fn calculate_all(&self, graph: &SortedAdjArray) -> Vec<f64> {
        graph
            .vertices()
            .map(|u| local_clustering_coefficient(graph, u, self.policy))
            .collect()
    }
}

/// Computes the clustering coefficient of a single node.
/// ** Panics if `u >= n` **
pub fn local_clustering_coefficient(
    graph: &SortedAdjArray,
    u: Node,
    policy: LowDegreePolicy,
) -> f64 {
    let degree = graph.degree_of(u);
    if degree < 2 {
        return policy.value();
    }

    let mut triangles = 0u64;
    for i in 1..degree {
        let x = graph.ith_neighbor(u, i);
        for j in 0..i {
            if graph.is_connected(x, graph.ith_neighbor(u, j)) {
                triangles += 1;
            }
        }
    }

    let degree = degree as u64;
    triangles as f64 / (degree * (degree - 1) / 2) as f64
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::{GeneratorSubstructures, RandomGraph};

    #[test]
    fn triangle_and_path() {
        let triangle = SortedAdjArray::from_connections(3, [(0, 1), (1, 2), (2, 0)]);
        assert_eq!(
            ClusteringCoefficient::default().calculate_all(&triangle),
            vec![1.0; 3]
        );

        let path = SortedAdjArray::from_connections(4, [(0, 1), (1, 2), (2, 3)]);
        let bansal = ClusteringCoefficient::bansal().calculate_all(&path);
        assert!(bansal[0].is_nan() && bansal[3].is_nan());
        assert_eq!(&bansal[1..3], &[0.0, 0.0]);

        assert_eq!(
            ClusteringCoefficient::watts_strogatz().calculate_all(&path),
            vec![0.0; 4]
        );
        assert_eq!(ClusteringCoefficient::bansal().calculate(&path), 0.0);
    }

    #[test]
    fn partial_clustering() {
        // node 0 has neighbors 1, 2, 3 of which only 1 and 2 are connected
        let graph = SortedAdjArray::from_connections(4, [(0, 1), (0, 2), (0, 3), (1, 2)]);
        let cc = local_clustering_coefficient(&graph, 0, LowDegreePolicy::Undefined);
        assert!((cc - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(
            local_clustering_coefficient(&graph, 1, LowDegreePolicy::Undefined),
            1.0
        );
        assert_eq!(
            local_clustering_coefficient(&graph, 3, LowDegreePolicy::Zero),
            0.0
        );
    }

    #[test]
    fn clique_has_full_clustering() {
        let mut graph = SortedAdjArray::new(8);
        graph.connect_clique(2..7);
        let ws = ClusteringCoefficient::watts_strogatz();
        assert_eq!(ws.policy(), LowDegreePolicy::Zero);
        assert_eq!(ClusteringCoefficient::default().policy(), LowDegreePolicy::Undefined);

        let cc = ws.calculate_all(&graph);
        assert_eq!(cc, vec![0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn always_within_unit_interval() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        for n in [8, 20, 60] {
            for m in [n, 3 * n] {
                let graph = SortedAdjArray::gnm(rng, n, m).unwrap();
                for cc in ClusteringCoefficient::bansal().calculate_all(&graph) {
                    assert!(cc.is_nan() || (0.0..=1.0).contains(&cc));
                }
            }
        }
    }
}
