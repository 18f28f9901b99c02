use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// Connected components of undirected graphs via label propagation.
///
/// Every node starts with its own index as label. Each pass walks all connections in canonical
/// order and sets both endpoints to the smaller of their labels, until a pass changes nothing.
/// At the fixed point every node is labelled with the smallest node of its component.
pub trait Connectivity: AdjacencyList {
    /// Returns for every node the smallest node of its connected component.
    ///
    /// ** Panics if the labels do not reach a fixed point within `n` passes **, which can
    /// only happen if the adjacency is not symmetric.
    fn component_labels(&self) -> Vec<Node>;

    /// Returns the nodes of every connected component.
    ///
    /// Components are ordered by their smallest node and list their nodes in ascending order.
    /// The position of a node within its list is its index in the component.
    fn isolated_subgraphs(&self) -> Vec<Vec<Node>> {
        let labels = self.component_labels();

        let mut class_of_label: Vec<Option<usize>> = vec![None; labels.len()];
        let mut classes: Vec<Vec<Node>> = Vec::new();

        for (u, &label) in labels.iter().enumerate() {
            let class = *class_of_label[label as usize].get_or_insert_with(|| {
                classes.push(Vec::new());
                classes.len() - 1
            });
            classes[class].push(u as Node);
        }

        classes
    }

    /// Returns the number of connected components
    fn number_of_components(&self) -> NumNodes {
        self.component_labels()
            .into_iter()
            .enumerate()
            .filter(|&(u, label)| u as Node == label)
            .count() as NumNodes
    }

    /// Returns *true* if every node can reach every other node
    fn is_connected_graph(&self) -> bool {
        self.number_of_components() == 1
    }
}

impl<G: AdjacencyList> Connectivity for G {
    fn component_labels(&self) -> Vec<Node> {
        let n = self.number_of_nodes();
        let mut labels = self.vertices().collect_vec();
        if n <= 1 {
            return labels;
        }

        for pass in 1..=n {
            let mut changed = false;

            for Edge(u, v) in self.connections() {
                let (lu, lv) = (labels[u as usize], labels[v as usize]);
                if lu != lv {
                    let min = lu.min(lv);
                    labels[u as usize] = min;
                    labels[v as usize] = min;
                    changed = true;
                }
            }

            trace!(pass, changed, "component label pass");

            if !changed {
                debug!(n, passes = pass, "component labels converged");
                return labels;
            }
        }

        panic!("component labels did not converge within {n} passes");
    }
}
