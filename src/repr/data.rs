//! # Data Packages
//!
//! Each representation is built from an owned data package. Converting a graph into the other
//! representation produces such a package: the receiving graph takes it by value, so a graph and
//! a graph derived from it never share storage.

use super::*;

/// How a cell of an adjacency matrix encodes the absence of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellEncoding {
    /// A cell holding zero *or* the infinity sentinel is "no edge".
    ///
    /// Zero-weight edges are therefore indistinguishable from missing edges, and converting a
    /// list into a matrix writes zero onto the diagonal, dropping self-loops.
    #[default]
    ZeroOrSentinel,
    /// Only the infinity sentinel is "no edge"; zero weights and self-loops are kept.
    SentinelOnly,
}

impl CellEncoding {
    /// Returns *true* if a cell value denotes an edge under this encoding
    pub fn is_edge<W: Weight>(&self, cell: W, infinity: W) -> bool {
        match self {
            CellEncoding::ZeroOrSentinel => !cell.is_zero_weight() && cell != infinity,
            CellEncoding::SentinelOnly => cell != infinity,
        }
    }
}

/// Build package of an [`AdjListGraph`]: labels, per-vertex `(neighbor, weight)` entries in
/// traversal order, and the edge count.
#[derive(Debug, Clone, PartialEq)]
pub struct ListGraphData<L, W> {
    pub labels: Vec<L>,
    pub neighbors: Vec<Vec<(Node, W)>>,
    pub num_edges: NumEdges,
}

impl<L, W> Default for ListGraphData<L, W> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            neighbors: Vec::new(),
            num_edges: 0,
        }
    }
}

impl<L, W> ListGraphData<L, W> {
    pub fn new(labels: Vec<L>, neighbors: Vec<Vec<(Node, W)>>, num_edges: NumEdges) -> Self {
        Self {
            labels,
            neighbors,
            num_edges,
        }
    }

    /// Materializes a package from raw edge triples in the given order.
    ///
    /// For an undirected graph every edge `(u, v, w)` is stored as `u -> v` and `v -> u`;
    /// the edge count is the number of triples either way.
    /// Fails if an endpoint does not name a vertex.
    ///
    /// # Examples
    /// ```
    /// use dualgraph::prelude::*;
    ///
    /// let data = ListGraphData::from_edges(
    ///     vec!["A", "B"],
    ///     false,
    ///     [WeightedEdge::new(0, 1, 1)],
    /// ).unwrap();
    ///
    /// assert_eq!(data.neighbors, vec![vec![(1, 1)], vec![(0, 1)]]);
    /// assert_eq!(data.num_edges, 1);
    /// ```
    pub fn from_edges<I>(labels: Vec<L>, directed: bool, edges: I) -> error::Result<Self>
    where
        I: IntoIterator<Item = WeightedEdge<W>>,
        W: Copy,
    {
        let n = checked_number_of_nodes(labels.len())?;
        let mut neighbors: Vec<Vec<(Node, W)>> = (0..n).map(|_| Vec::new()).collect();
        let mut num_edges: NumEdges = 0;

        for WeightedEdge {
            source,
            target,
            weight,
        } in edges
        {
            check_node(source, n)?;
            check_node(target, n)?;

            neighbors[source as usize].push((target, weight));
            if !directed {
                neighbors[target as usize].push((source, weight));
            }
            num_edges += 1;
        }

        Ok(Self::new(labels, neighbors, num_edges))
    }

    /// Returns the number of vertices described by the package
    pub fn number_of_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Checks that there is one row per label and every neighbor is in range
    pub(crate) fn validate(&self) -> error::Result<NumNodes> {
        let n = checked_number_of_nodes(self.labels.len())?;
        if self.neighbors.len() != self.labels.len() {
            return Err(GraphError::RowCountMismatch {
                expected: self.labels.len(),
                found: self.neighbors.len(),
            });
        }

        for &(v, _) in self.neighbors.iter().flatten() {
            check_node(v, n)?;
        }

        Ok(n)
    }
}

/// Build package of an [`AdjMatrixGraph`]: labels, a square weight grid, the edge count,
/// the sentinel denoting "no edge" and how cells are to be read.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGraphData<L, W> {
    pub labels: Vec<L>,
    pub grid: Vec<Vec<W>>,
    pub num_edges: NumEdges,
    pub infinity: W,
    pub encoding: CellEncoding,
}

impl<L, W> MatrixGraphData<L, W> {
    /// Creates a package using [`CellEncoding::ZeroOrSentinel`]
    pub fn new(labels: Vec<L>, grid: Vec<Vec<W>>, num_edges: NumEdges, infinity: W) -> Self {
        Self {
            labels,
            grid,
            num_edges,
            infinity,
            encoding: CellEncoding::default(),
        }
    }

    /// Updates the cell encoding
    pub fn cell_encoding(mut self, encoding: CellEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Returns the number of vertices described by the package
    pub fn number_of_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Checks that the grid is `n x n` for `n` labels
    pub(crate) fn validate(&self) -> error::Result<NumNodes> {
        let n = checked_number_of_nodes(self.labels.len())?;
        let expected = self.labels.len();
        if self.grid.len() != expected {
            return Err(GraphError::RowCountMismatch {
                expected,
                found: self.grid.len(),
            });
        }

        if let Some((row, cells)) = self
            .grid
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(GraphError::ColumnCountMismatch {
                row,
                expected,
                found: cells.len(),
            });
        }

        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_directed_keeps_order_and_duplicates() {
        let data = ListGraphData::from_edges(
            vec!['A', 'B', 'C'],
            true,
            [
                WeightedEdge::new(0, 2, 3),
                WeightedEdge::new(0, 1, 5),
                WeightedEdge::new(0, 2, 7),
                WeightedEdge::new(2, 2, 1),
            ],
        )
        .unwrap();

        assert_eq!(data.neighbors[0], vec![(2, 3), (1, 5), (2, 7)]);
        assert!(data.neighbors[1].is_empty());
        assert_eq!(data.neighbors[2], vec![(2, 1)]);
        assert_eq!(data.num_edges, 4);
    }

    #[test]
    fn from_edges_rejects_out_of_range() {
        let res = ListGraphData::from_edges(vec!['A', 'B'], false, [WeightedEdge::new(0, 2, 1)]);
        assert_eq!(
            res,
            Err(GraphError::NodeOutOfRange {
                node: 2,
                num_nodes: 2
            })
        );
    }

    #[test]
    fn validate_list_package() {
        let data: ListGraphData<char, i32> = ListGraphData::new(vec!['A'], vec![], 0);
        assert_eq!(
            data.validate(),
            Err(GraphError::RowCountMismatch {
                expected: 1,
                found: 0
            })
        );

        let data = ListGraphData::new(vec!['A'], vec![vec![(1, 3)]], 1);
        assert!(matches!(
            data.validate(),
            Err(GraphError::NodeOutOfRange { node: 1, .. })
        ));

        assert_eq!(ListGraphData::<char, i32>::default().validate(), Ok(0));
    }

    #[test]
    fn validate_matrix_package() {
        let data = MatrixGraphData::new(vec!['A', 'B'], vec![vec![0, 1], vec![1]], 1, 99);
        assert_eq!(
            data.validate(),
            Err(GraphError::ColumnCountMismatch {
                row: 1,
                expected: 2,
                found: 1
            })
        );

        let data = MatrixGraphData::new(vec!['A', 'B'], vec![vec![0, 1]], 1, 99);
        assert!(matches!(
            data.validate(),
            Err(GraphError::RowCountMismatch { .. })
        ));
    }

    #[test]
    fn cell_encodings() {
        let inf = 100;
        assert!(CellEncoding::ZeroOrSentinel.is_edge(5, inf));
        assert!(!CellEncoding::ZeroOrSentinel.is_edge(0, inf));
        assert!(!CellEncoding::ZeroOrSentinel.is_edge(inf, inf));

        assert!(CellEncoding::SentinelOnly.is_edge(5, inf));
        assert!(CellEncoding::SentinelOnly.is_edge(0, inf));
        assert!(!CellEncoding::SentinelOnly.is_edge(inf, inf));
    }
}
