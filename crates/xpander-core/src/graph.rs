//! Lifted graph model: dense 0/1 adjacency with meta-node structure.

use ndarray::Array2;

use crate::error::{XpanderError, XpanderResult};

/// Undirected simple graph produced by a k-lift of the complete graph
/// on `degree + 1` meta-nodes.
///
/// Node `i` belongs to meta-node `i / k` with intra-group index
/// `i % k`. The adjacency matrix is symmetric with zero diagonal; an
/// accepted graph is exactly `degree`-regular.
#[derive(Debug, Clone, PartialEq)]
pub struct LiftedGraph {
    adj: Array2<f64>,
    degree: usize,
    lift: usize,
}

impl LiftedGraph {
    /// Empty (edgeless) graph on `(degree + 1) * lift` nodes.
    pub(crate) fn empty(degree: usize, lift: usize) -> Self {
        let n = (degree + 1) * lift;
        Self {
            adj: Array2::zeros((n, n)),
            degree,
            lift,
        }
    }

    /// Insert the undirected edge `(i, j)` by setting both matrix
    /// entries.
    pub(crate) fn connect(&mut self, i: usize, j: usize) {
        self.adj[[i, j]] = 1.0;
        self.adj[[j, i]] = 1.0;
    }

    /// Rebuild a graph from an edge iterator, e.g. a parsed edge list.
    ///
    /// Rejects out-of-range endpoints and self-loops.
    pub fn from_edges<I>(degree: usize, lift: usize, edges: I) -> XpanderResult<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::empty(degree, lift);
        let n = graph.n();
        for (i, j) in edges {
            if i >= n || j >= n {
                return Err(XpanderError::InvalidInput(format!(
                    "edge ({i}, {j}) out of range for {n} nodes"
                )));
            }
            if i == j {
                return Err(XpanderError::InvalidInput(format!("self-loop at node {i}")));
            }
            graph.connect(i, j);
        }
        Ok(graph)
    }

    /// Number of nodes, `(degree + 1) * lift`.
    pub fn n(&self) -> usize {
        self.adj.nrows()
    }

    /// Target degree `d` of the lift.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Lift multiplicity `k` (nodes per meta-node group).
    pub fn lift(&self) -> usize {
        self.lift
    }

    /// Meta-node group of node `i`.
    pub fn meta_node_of(&self, i: usize) -> usize {
        i / self.lift
    }

    /// Index of node `i` within its meta-node group.
    pub fn intra_index_of(&self, i: usize) -> usize {
        i % self.lift
    }

    /// Actual degree of node `i` (row sum).
    pub fn degree_of(&self, i: usize) -> usize {
        self.adj.row(i).sum() as usize
    }

    /// Borrow the dense adjacency matrix.
    pub fn adjacency(&self) -> &Array2<f64> {
        &self.adj
    }

    /// True if the adjacency is symmetric with zero diagonal.
    pub fn is_valid_adjacency(&self) -> bool {
        let n = self.n();
        for i in 0..n {
            if self.adj[[i, i]] != 0.0 {
                return false;
            }
            for j in (i + 1)..n {
                if self.adj[[i, j]] != self.adj[[j, i]] {
                    return false;
                }
            }
        }
        true
    }

    /// Edges `(i, j)` with `i < j`, ascending lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.n();
        (0..n).flat_map(move |i| {
            ((i + 1)..n).filter_map(move |j| (self.adj[[i, j]] == 1.0).then_some((i, j)))
        })
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_dimensions() {
        let g = LiftedGraph::empty(3, 2);
        assert_eq!(g.n(), 8);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_valid_adjacency());
    }

    #[test]
    fn meta_node_layout() {
        let g = LiftedGraph::empty(2, 3);
        // 9 nodes in 3 groups of 3
        assert_eq!(g.meta_node_of(0), 0);
        assert_eq!(g.meta_node_of(2), 0);
        assert_eq!(g.meta_node_of(3), 1);
        assert_eq!(g.meta_node_of(8), 2);
        assert_eq!(g.intra_index_of(4), 1);
        assert_eq!(g.intra_index_of(8), 2);
    }

    #[test]
    fn edges_in_ascending_order() {
        let mut g = LiftedGraph::empty(2, 1);
        g.connect(1, 2);
        g.connect(0, 2);
        g.connect(0, 1);
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn connect_is_symmetric() {
        let mut g = LiftedGraph::empty(1, 2);
        g.connect(0, 3);
        assert_eq!(g.adjacency()[[0, 3]], 1.0);
        assert_eq!(g.adjacency()[[3, 0]], 1.0);
        assert_eq!(g.degree_of(0), 1);
        assert_eq!(g.degree_of(3), 1);
        assert!(g.is_valid_adjacency());
    }

    #[test]
    fn from_edges_rejects_out_of_range() {
        let result = LiftedGraph::from_edges(1, 1, vec![(0, 5)]);
        assert!(matches!(result, Err(XpanderError::InvalidInput(_))));
    }

    #[test]
    fn from_edges_rejects_self_loop() {
        let result = LiftedGraph::from_edges(1, 1, vec![(1, 1)]);
        assert!(matches!(result, Err(XpanderError::InvalidInput(_))));
    }
}
