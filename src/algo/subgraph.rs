/*!
# Component Splitting

Extracts every connected component of a graph into its own, densely relabelled
[`SortedAdjArray`]. Statistics such as the average path length are only meaningful on
connected graphs, so a common pattern is to keep only the largest component.
*/

use std::cmp::Reverse;

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::debug;

use super::*;

/// A connected component extracted from a larger graph.
///
/// Node `i` of the component graph corresponds to node `nodes()[i]` of the original graph.
/// The relabelling preserves the relative order of nodes.
#[derive(Clone, Debug)]
pub struct Component {
    graph: SortedAdjArray,
    nodes: Vec<Node>,
    new_ids: FxHashMap<Node, Node>,
}

impl Component {
    /// Returns the component as a standalone graph
    pub fn graph(&self) -> &SortedAdjArray {
        &self.graph
    }

    /// Consumes the component and returns its graph
    pub fn into_graph(self) -> SortedAdjArray {
        self.graph
    }

    /// Returns the number of nodes in the component
    pub fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }

    /// Returns the original nodes, indexed by their new id
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the original id of node `new` of the component
    /// ** Panics if `new` is not a node of the component **
    pub fn old_id_of(&self, new: Node) -> Node {
        self.nodes[new as usize]
    }

    /// Returns the id within the component of the original node `old`,
    /// or `None` if `old` belongs to another component
    pub fn new_id_of(&self, old: Node) -> Option<Node> {
        self.new_ids.get(&old).copied()
    }

    /// Writes per-node values computed on the component graph back to the positions of the
    /// original nodes in `target`.
    /// ** Panics if `values` does not have one entry per component node or `target` is too short **
    pub fn write_back<T: Copy>(&self, values: &[T], target: &mut [T]) {
        assert_eq!(values.len(), self.nodes.len());
        for (&old, &value) in self.nodes.iter().zip(values) {
            target[old as usize] = value;
        }
    }
}

/// Splits a graph into its connected components
pub trait SplitComponents: Connectivity {
    /// Returns all connected components sorted by descending size.
    /// Components of equal size keep the order of their smallest original node.
    fn split_into_components(&self) -> Vec<Component>;

    /// Returns the component with the most nodes.
    /// Always `Some` for the representations of this crate, which have at least one node.
    fn largest_component(&self) -> Option<Component> {
        self.split_into_components().into_iter().next()
    }
}

impl<G: AdjacencyList> SplitComponents for G {
    fn split_into_components(&self) -> Vec<Component> {
        let classes = self.isolated_subgraphs();

        let mut class_of: Vec<usize> = vec![0; self.len()];
        let mut new_id: Vec<Node> = vec![0; self.len()];
        for (class, nodes) in classes.iter().enumerate() {
            for (new, &old) in nodes.iter().enumerate() {
                class_of[old as usize] = class;
                new_id[old as usize] = new as Node;
            }
        }

        let mut graphs = classes
            .iter()
            .map(|nodes| SortedAdjArray::new(nodes.len() as NumNodes))
            .collect_vec();

        for Edge(u, v) in self.connections() {
            let class = class_of[u as usize];
            debug_assert_eq!(class, class_of[v as usize]);
            graphs[class].set_connection(new_id[u as usize], new_id[v as usize]);
        }

        let mut components = graphs
            .into_iter()
            .zip(classes)
            .map(|(graph, nodes)| {
                let new_ids = nodes
                    .iter()
                    .enumerate()
                    .map(|(new, &old)| (old, new as Node))
                    .collect();
                Component {
                    graph,
                    nodes,
                    new_ids,
                }
            })
            .collect_vec();

        components.sort_by_key(|c| Reverse(c.number_of_nodes()));

        debug!(
            n = self.number_of_nodes(),
            components = components.len(),
            largest = components.first().map_or(0, |c| c.number_of_nodes()),
            "split graph into connected components"
        );

        components
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn two_disjoint_pairs() {
        let graph = SortedAdjArray::from_connections(4, [(0, 1), (2, 3)]);
        let components = graph.split_into_components();

        assert_eq!(components.len(), 2);
        for (component, nodes) in components.iter().zip([[0 as Node, 1], [2, 3]]) {
            assert_eq!(component.number_of_nodes(), 2);
            assert_eq!(component.nodes(), &nodes);
            assert_eq!(component.graph().connections().collect_vec(), vec![Edge(0, 1)]);
        }

        assert_eq!(components[1].new_id_of(3), Some(1));
        assert_eq!(components[1].new_id_of(0), None);
        assert_eq!(components[1].old_id_of(0), 2);
    }

    #[test]
    fn sorted_by_size_and_relabelled() {
        let graph = AdjMatrix::from_connections(
            10,
            [(0, 6), (1, 2), (2, 4), (4, 5), (5, 7), (7, 8), (8, 9), (9, 1)],
        );
        let components = graph.split_into_components();

        let sizes = components.iter().map(|c| c.number_of_nodes()).collect_vec();
        assert_eq!(sizes, vec![7, 2, 1]);

        let largest = &components[0];
        assert_eq!(largest.nodes(), &[1, 2, 4, 5, 7, 8, 9]);
        assert_eq!(
            largest.graph().connections().collect_vec(),
            vec![
                Edge(0, 1),
                Edge(0, 6),
                Edge(1, 2),
                Edge(2, 3),
                Edge(3, 4),
                Edge(4, 5),
                Edge(5, 6)
            ]
        );
        assert!(largest.graph().is_connected_graph());

        assert_eq!(components[2].nodes(), &[3]);
        assert!(components[2].graph().is_singleton_graph());
    }

    #[test]
    fn largest_component_and_write_back() {
        let graph = SortedAdjArray::from_connections(5, [(3, 4), (0, 2), (2, 4)]);
        let largest = graph.largest_component().unwrap();
        assert_eq!(largest.nodes(), &[0, 2, 3, 4]);
        assert!(SortedAdjArray::new(1).largest_component().is_some());

        let mut values = vec![f64::NAN; 5];
        largest.write_back(&[1.0, 2.0, 3.0, 4.0], &mut values);
        assert_eq!(&values[2..], &[2.0, 3.0, 4.0]);
        assert_eq!(values[0], 1.0);
        assert!(values[1].is_nan());

        let graph = largest.into_graph();
        assert_eq!(
            graph.connections().collect_vec(),
            vec![Edge(0, 1), Edge(1, 3), Edge(2, 3)]
        );
    }
}
