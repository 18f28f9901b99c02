//! Property tests over random small graphs.
//!
//! - Average path length is undefined everywhere iff the graph is not connected
//! - Components partition the nodes and are connected themselves
//! - Clustering coefficients lie in `[0, 1]` or are `NaN`
//! - Both representations agree after conversion

use graphstats::{algo::*, prelude::*, stats::*, utils::*};
use itertools::Itertools;
use proptest::prelude::*;
use stream_bitset::prelude::*;

/// A node count in `1..max_n` together with up to `3 * max_n` random pairs (loops allowed)
fn graph_strategy(max_n: NumNodes) -> impl Strategy<Value = SortedAdjArray> {
    (1..max_n).prop_flat_map(move |n| {
        prop::collection::vec((0..n, 0..n), 0..(3 * max_n as usize))
            .prop_map(move |pairs| SortedAdjArray::from_connections(n, pairs))
    })
}

proptest! {
    #[test]
    fn apl_undefined_iff_disconnected(graph in graph_strategy(16)) {
        let apl = AveragePathLength.calculate_all(&graph);
        prop_assert_eq!(apl.len(), graph.len());

        if graph.number_of_nodes() == 1 {
            prop_assert!(apl[0].is_nan());
        } else if graph.is_connected_graph() {
            prop_assert!(apl.iter().all(|&x| x >= 1.0 && x <= (graph.len() - 1) as f64));
        } else {
            prop_assert!(apl.iter().all(|x| x.is_nan()));
        }
    }

    #[test]
    fn components_partition_nodes(graph in graph_strategy(24)) {
        let components = graph.split_into_components();

        let mut seen = graph.vertex_bitset_unset();
        for component in &components {
            prop_assert!(component.graph().is_connected_graph());
            prop_assert_eq!(component.nodes().len(), component.number_of_nodes() as usize);

            for (new, &old) in component.nodes().iter().enumerate() {
                prop_assert!(!seen.set_bit(old));
                prop_assert_eq!(component.new_id_of(old), Some(new as Node));
            }

            // connections of the component map back onto connections of the graph
            for Edge(u, v) in component.graph().connections() {
                prop_assert!(graph.is_connected(component.old_id_of(u), component.old_id_of(v)));
            }
        }
        prop_assert_eq!(seen.cardinality(), graph.number_of_nodes());

        let total: NumEdges = components.iter().map(|c| c.graph().number_of_edges()).sum();
        prop_assert_eq!(total, graph.number_of_edges());

        let sizes = components.iter().map(|c| c.number_of_nodes()).collect_vec();
        prop_assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn clustering_in_unit_interval(graph in graph_strategy(20)) {
        for cc in ClusteringCoefficient::bansal().calculate_all(&graph) {
            prop_assert!(cc.is_nan() || (0.0..=1.0).contains(&cc));
        }
        for cc in ClusteringCoefficient::watts_strogatz().calculate_all(&graph) {
            prop_assert!((0.0..=1.0).contains(&cc));
        }
    }

    #[test]
    fn representations_agree(graph in graph_strategy(20)) {
        let dense = graph.to_adj_matrix();
        prop_assert_eq!(
            dense.connections().collect_vec(),
            graph.connections().collect_vec()
        );
        prop_assert_eq!(count_connections(&*dense), graph.number_of_edges());
        prop_assert_eq!(&*dense.to_sorted_adj_array(), &graph);
    }
}
