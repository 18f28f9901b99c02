/*!
# Utilities

Provides helpers that work on any graph representation:
- conversions between [`AdjMatrix`] and [`SortedAdjArray`] that avoid copies when the
  input already has the requested representation (see [`ToAdjMatrix`] / [`ToSortedAdjArray`]),
- simple counts over the degree sequence,
- [`network_average`] to aggregate per-node statistic results.
*/

use std::borrow::Cow;

use crate::prelude::*;

/// Conversion into an adjacency matrix
pub trait ToAdjMatrix {
    /// Returns the graph as an [`AdjMatrix`], borrowing if no conversion is needed
    fn to_adj_matrix(&self) -> Cow<'_, AdjMatrix>;
}

/// Conversion into sorted adjacency arrays
pub trait ToSortedAdjArray {
    /// Returns the graph as a [`SortedAdjArray`], borrowing if no conversion is needed
    fn to_sorted_adj_array(&self) -> Cow<'_, SortedAdjArray>;
}

impl ToAdjMatrix for AdjMatrix {
    fn to_adj_matrix(&self) -> Cow<'_, AdjMatrix> {
        Cow::Borrowed(self)
    }
}

impl ToAdjMatrix for SortedAdjArray {
    fn to_adj_matrix(&self) -> Cow<'_, AdjMatrix> {
        Cow::Owned(AdjMatrix::from_connections(
            self.number_of_nodes(),
            self.connections(),
        ))
    }
}

impl ToSortedAdjArray for SortedAdjArray {
    fn to_sorted_adj_array(&self) -> Cow<'_, SortedAdjArray> {
        Cow::Borrowed(self)
    }
}

impl ToSortedAdjArray for AdjMatrix {
    fn to_sorted_adj_array(&self) -> Cow<'_, SortedAdjArray> {
        Cow::Owned(
            self.vertices()
                .map(|u| SortedNeighborhood::from_sorted(self.neighbors_of(u)))
                .collect(),
        )
    }
}

/// Returns the number of connections of any graph by enumerating them.
/// Representations of this crate also track this number, see [`GraphEdgeOrder`].
pub fn count_connections<G: AdjacencyList>(graph: &G) -> NumEdges {
    graph.connections().count() as NumEdges
}

/// Returns the number of nodes without any neighbor
pub fn count_isolated_nodes<G: AdjacencyList>(graph: &G) -> NumNodes {
    graph.degrees().filter(|&d| d == 0).count() as NumNodes
}

/// Returns the number of nodes with exactly one neighbor
pub fn count_leaf_nodes<G: AdjacencyList>(graph: &G) -> NumNodes {
    graph.degrees().filter(|&d| d == 1).count() as NumNodes
}

/// Arithmetic mean of `values`.
///
/// If `skip_invalid` is set, `NaN` entries are excluded from the mean.
/// Returns `NaN` if no entries remain.
pub fn network_average(values: &[f64], skip_invalid: bool) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|x| !(skip_invalid && x.is_nan()))
        .fold((0.0, 0usize), |(sum, count), x| (sum + x, count + 1));

    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn conversions_borrow_if_possible() {
        let sparse = SortedAdjArray::from_connections(4, [(0, 1), (1, 3)]);
        assert!(matches!(sparse.to_sorted_adj_array(), Cow::Borrowed(_)));

        let dense = sparse.to_adj_matrix();
        assert!(matches!(dense, Cow::Owned(_)));
        assert!(matches!(dense.to_adj_matrix(), Cow::Borrowed(_)));
        assert_eq!(
            dense.connections().collect_vec(),
            sparse.connections().collect_vec()
        );

        let back = dense.to_sorted_adj_array();
        assert!(matches!(back, Cow::Owned(_)));
        assert_eq!(&*back, &sparse);
    }

    #[test]
    fn counts() {
        // isolated node 2, one connected pair
        let graph = SortedAdjArray::from_connections(3, [(0, 1)]);
        assert_eq!(count_connections(&graph), 1);
        assert_eq!(count_isolated_nodes(&graph), 1);
        assert_eq!(count_leaf_nodes(&graph), 2);

        let graph = AdjMatrix::from_connections(5, [(0, 1), (0, 2), (0, 3), (3, 4)]);
        assert_eq!(count_connections(&graph), 4);
        assert_eq!(count_isolated_nodes(&graph), 0);
        assert_eq!(count_leaf_nodes(&graph), 3);
    }

    #[test]
    fn averages() {
        assert_eq!(network_average(&[1.0, 2.0, 6.0], false), 3.0);
        assert_eq!(network_average(&[1.0, f64::NAN, 3.0], true), 2.0);
        assert!(network_average(&[1.0, f64::NAN, 3.0], false).is_nan());
        assert!(network_average(&[f64::NAN, f64::NAN], true).is_nan());
        assert!(network_average(&[], false).is_nan());
    }
}
