/*!
# Adjacency Matrix Representation

[`AdjMatrixGraph`] stores a dense, row-major `n x n` grid of weights together with the sentinel
value `infinity`. Neighbors of a vertex are the columns of its row that hold an edge according to
the [`CellEncoding`] of the graph, scanned in ascending order.
*/

use std::fmt::{Display, Formatter};

use tracing::{debug, info};

use super::{macros::impl_common_graph_ops, *};
use crate::testing::test_graph_contract;

/// A labelled, weighted graph storing a dense weight grid.
///
/// # Type parameters
/// - `L`: label of a vertex
/// - `W`: weight of an edge
#[derive(Debug, Clone, PartialEq)]
pub struct AdjMatrixGraph<L, W> {
    labels: Vec<L>,
    grid: Vec<W>,
    num_edges: NumEdges,
    infinity: W,
    encoding: CellEncoding,
}

impl_common_graph_ops!(AdjMatrixGraph);

impl<L, W: Weight> AdjMatrixGraph<L, W> {
    /// Creates an empty graph without nodes.
    /// The sentinel is zero until the first `build`.
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            grid: Vec::new(),
            num_edges: 0,
            infinity: W::zero(),
            encoding: CellEncoding::default(),
        }
    }
}

impl<L: Label, W: Weight> AdjMatrixGraph<L, W> {
    /// Returns the sentinel denoting "no edge"
    pub fn infinity(&self) -> W {
        self.infinity
    }

    /// Returns how cells are interpreted
    pub fn encoding(&self) -> CellEncoding {
        self.encoding
    }

    /// Returns the row of `u` as a slice.
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[W] {
        let n = self.len();
        let start = u as usize * n;
        &self.grid[start..start + n]
    }

    /// Returns the raw cell value at `(u, v)`, which may be the sentinel.
    /// ** Panics if `u >= n` or `v >= n` **
    pub fn cell(&self, u: Node, v: Node) -> W {
        self.row(u)[v as usize]
    }

    /// Returns the weight of edge `(u, v)` if the cell holds an edge.
    /// ** Panics if `u >= n` or `v >= n` **
    ///
    /// # Examples
    /// ```
    /// use dualgraph::prelude::*;
    ///
    /// let g = AdjMatrixGraph::from_data(MatrixGraphData::new(
    ///     vec!['A', 'B'],
    ///     vec![vec![0, 7], vec![99, 0]],
    ///     1,
    ///     99,
    /// )).unwrap();
    ///
    /// assert_eq!(g.weight(0, 1), Some(7));
    /// assert_eq!(g.weight(1, 0), None);
    /// assert_eq!(g.weight(0, 0), None);
    /// assert_eq!(g.cell(1, 0), 99);
    /// ```
    pub fn weight(&self, u: Node, v: Node) -> Option<W> {
        let cell = self.cell(u, v);
        self.encoding.is_edge(cell, self.infinity).then_some(cell)
    }

    /// Returns the package of an equivalent [`AdjListGraph`].
    ///
    /// Every cell holding an edge becomes one entry; entries of a vertex are ordered by column.
    /// The edge count is carried over unchanged.
    pub fn to_list_data(&self) -> ListGraphData<L, W> {
        let neighbors: Vec<Vec<(Node, W)>> = self
            .vertices()
            .map(|u| self.weighted_neighbors_of(u).collect())
            .collect();

        info!(
            nodes = self.len(),
            edges = self.num_edges,
            encoding = ?self.encoding,
            "converted adjacency matrix to adjacency list"
        );

        ListGraphData::new(self.labels.clone(), neighbors, self.num_edges)
    }

    /// Width of a single column in the rendered grid
    fn column_width(&self) -> usize {
        let widest_index = self.len().saturating_sub(1).to_string().len();
        let widest_cell = self
            .grid
            .iter()
            .filter(|&&c| c != self.infinity)
            .map(|c| c.to_string().len())
            .max()
            .unwrap_or(0);

        (widest_index.max(widest_cell) + 1).max(3)
    }
}

impl<L: Label, W: Weight> WeightedAdjacencyList for AdjMatrixGraph<L, W> {
    type Weight = W;

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        let (encoding, infinity) = (self.encoding, self.infinity);
        self.row(u)
            .iter()
            .copied()
            .enumerate()
            .filter(move |&(_, c)| encoding.is_edge(c, infinity))
            .map(|(v, c)| (v as Node, c))
    }
}

impl<L: Label, W: Weight> GraphBuild for AdjMatrixGraph<L, W> {
    type Data = MatrixGraphData<L, W>;

    fn build(&mut self, data: Self::Data) -> error::Result<()> {
        let n = data.validate()?;

        self.grid = data.grid.into_iter().flatten().collect();
        self.labels = data.labels;
        self.num_edges = data.num_edges;
        self.infinity = data.infinity;
        self.encoding = data.encoding;

        debug!(
            nodes = n,
            edges = self.num_edges,
            encoding = ?self.encoding,
            "built adjacency matrix graph"
        );
        Ok(())
    }
}

/// Renders the grid with a header row of column indices; the sentinel is shown as `.`
impl<L: Label, W: Weight> Display for AdjMatrixGraph<L, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = self.column_width();
        let n = self.len();

        write!(f, "   |")?;
        for v in self.vertices() {
            write!(f, "{v:>width$}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(4 + width * n))?;

        for u in self.vertices() {
            write!(f, "{u:>3}|")?;
            for &c in self.row(u) {
                if c == self.infinity {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{:>width$}", c.to_string())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

test_graph_contract!(
    test_adj_matrix_graph,
    AdjMatrixGraph<String, i32>,
    |data: ListGraphData<String, i32>| {
        let list = AdjListGraph::from_data(data).unwrap();
        AdjMatrixGraph::from_data(list.to_matrix_data(DEFAULT_INFINITY)).unwrap()
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    const INF: i32 = 100;

    fn matrix(grid: Vec<Vec<i32>>) -> AdjMatrixGraph<char, i32> {
        let labels = ('A'..).take(grid.len()).collect_vec();
        let m = grid.iter().flatten().filter(|&&c| c != 0 && c != INF).count();
        AdjMatrixGraph::from_data(MatrixGraphData::new(labels, grid, m as NumEdges, INF)).unwrap()
    }

    fn list(directed: bool, n: usize, edges: &[(Node, Node, i32)]) -> AdjListGraph<char, i32> {
        let labels = ('A'..).take(n).collect_vec();
        let data = ListGraphData::from_edges(
            labels,
            directed,
            edges.iter().map(|&(u, v, w)| WeightedEdge::new(u, v, w)),
        )
        .unwrap();
        AdjListGraph::from_data(data).unwrap()
    }

    #[test]
    fn neighbors_in_column_order() {
        let g = matrix(vec![
            vec![0, INF, 4, 2],
            vec![INF, 0, INF, INF],
            vec![1, INF, 0, 6],
            vec![INF, INF, INF, 0],
        ]);

        assert_eq!(g.weighted_neighbors_of(0).collect_vec(), vec![(2, 4), (3, 2)]);
        assert_eq!(g.degree_of(1), 0);
        assert_eq!(g.neighbors_of(2).collect_vec(), vec![0, 3]);
        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.number_of_edge_entries(), 4);
        assert_eq!(g.row(2), &[1, INF, 0, 6]);
    }

    #[test]
    fn sentinel_only_keeps_zero_and_diagonal() {
        let data = MatrixGraphData::new(vec!['A', 'B'], vec![vec![3, 0], vec![INF, INF]], 2, INF)
            .cell_encoding(CellEncoding::SentinelOnly);
        let g = AdjMatrixGraph::from_data(data).unwrap();

        assert_eq!(g.encoding(), CellEncoding::SentinelOnly);
        assert_eq!(g.weighted_neighbors_of(0).collect_vec(), vec![(0, 3), (1, 0)]);
        assert_eq!(g.weight(0, 1), Some(0));
    }

    #[test]
    fn failed_build_keeps_previous_state() {
        let mut g = matrix(vec![vec![0, 5], vec![INF, 0]]);
        let bad = MatrixGraphData::new(vec!['X', 'Y'], vec![vec![0, 1], vec![1]], 1, 7);

        assert!(g.build(bad).is_err());
        assert_eq!(g.number_of_nodes(), 2);
        assert_eq!(g.infinity(), INF);
        assert_eq!(g.weight(0, 1), Some(5));
    }

    #[test]
    fn undirected_pair_conversion() {
        let l = list(false, 2, &[(0, 1, 1)]);
        let data = l.to_matrix_data(INF);
        assert_eq!(data.grid, vec![vec![0, 1], vec![1, 0]]);

        let g = AdjMatrixGraph::from_data(data).unwrap();
        let back = g.to_list_data();
        assert_eq!(back.neighbors, vec![vec![(1, 1)], vec![(0, 1)]]);
        assert_eq!(back.num_edges, 1);
    }

    #[test]
    fn zero_weight_edge_vanishes_in_round_trip() {
        let l = list(true, 2, &[(0, 1, 0)]);
        let g = AdjMatrixGraph::from_data(l.to_matrix_data(INF)).unwrap();

        assert_eq!(g.cell(0, 1), 0);
        assert_eq!(g.weight(0, 1), None);
        assert!(g.to_string().contains("  0|  0  0"));

        let back = AdjListGraph::from_data(g.to_list_data()).unwrap();
        assert_eq!(back.degree_of(0), 0);
    }

    #[test]
    fn list_round_trip_keeps_positive_edges() {
        let l = list(
            true,
            4,
            &[(0, 1, 5), (0, 1, 9), (1, 2, 3), (2, 2, 7), (3, 0, 2), (2, 3, 0)],
        );
        let g = AdjMatrixGraph::from_data(l.to_matrix_data(INF)).unwrap();
        let back = AdjListGraph::from_data(g.to_list_data()).unwrap();

        assert_eq!(back.entries_of(0), &[(1, 9)]);
        assert_eq!(back.entries_of(1), &[(2, 3)]);
        assert!(back.entries_of(2).is_empty());
        assert_eq!(back.entries_of(3), &[(0, 2)]);
    }

    #[test]
    fn matrix_round_trip_keeps_cells_and_zeroes_diagonal() {
        let grid = vec![vec![4, 5, INF], vec![INF, 0, 3], vec![8, INF, 6]];
        let g = matrix(grid);

        let l = AdjListGraph::from_data(g.to_list_data()).unwrap();
        let again = AdjMatrixGraph::from_data(l.to_matrix_data(INF)).unwrap();

        for (u, v) in (0..3).cartesian_product(0..3) {
            if u == v {
                assert_eq!(again.cell(u, v), 0);
            } else {
                assert_eq!(again.cell(u, v), g.cell(u, v));
            }
        }
    }

    #[test]
    fn strict_round_trip_keeps_loops_and_zero_weights() {
        let l = list(true, 2, &[(0, 0, 4), (0, 1, 0)]);
        let data = l.to_matrix_data_with(INF, CellEncoding::SentinelOnly);
        let g = AdjMatrixGraph::from_data(data).unwrap();

        let back = g.to_list_data();
        assert_eq!(back.neighbors, vec![vec![(0, 4), (1, 0)], vec![]]);
    }

    #[test]
    fn display() {
        let g = matrix(vec![vec![0, 5], vec![INF, 0]]);
        assert_eq!(g.to_string(), "   |  0  1\n----------\n  0|  0  5\n  1|  .  0\n");

        let wide = matrix(vec![vec![0, 1234], vec![INF, 0]]);
        assert_eq!(
            wide.to_string(),
            "   |    0    1\n--------------\n  0|    0 1234\n  1|    .    0\n"
        );
    }

    #[test]
    fn empty_graph() {
        let g = AdjMatrixGraph::<char, i32>::from_data(MatrixGraphData::new(vec![], vec![], 0, INF))
            .unwrap();
        assert!(g.is_empty());
        assert!(g.to_list_data().labels.is_empty());
        assert_eq!(g.to_string(), "   |\n----\n");
    }
}
