use super::*;

/// Number of neighbors of every node
#[derive(Debug, Copy, Clone, Default)]
pub struct NodeDegree;

impl NodeStatistic for NodeDegree {
    fn name(&self) -> &'static str {
        "Node degree"
    }

    fn abbreviation(&self) -> &'static str {
        "ND"
    }

    fn calculate_all(&self, graph: &SortedAdjArray) -> Vec<f64> {
        graph.degrees().map(f64::from).collect()
    }
}
