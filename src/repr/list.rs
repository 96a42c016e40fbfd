/*!
# Adjacency List Representation

[`AdjListGraph`] keeps every edge entry it was built with, in the order it was given.
That order is the traversal order of the neighborhood, so two lists with the same entries in a
different order may be traversed differently.
*/

use std::fmt::{Display, Formatter};

use tracing::{debug, info};

use super::{macros::impl_common_graph_ops, *};
use crate::testing::test_graph_contract;

/// A labelled, weighted graph storing one `(neighbor, weight)` list per vertex.
///
/// # Type parameters
/// - `L`: label of a vertex
/// - `W`: weight of an edge
#[derive(Debug, Clone, PartialEq)]
pub struct AdjListGraph<L, W> {
    labels: Vec<L>,
    nbs: Vec<Vec<(Node, W)>>,
    num_edges: NumEdges,
}

impl_common_graph_ops!(AdjListGraph);

impl<L, W: Weight> AdjListGraph<L, W> {
    /// Creates an empty graph without nodes
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            nbs: Vec::new(),
            num_edges: 0,
        }
    }
}

impl<L: Label, W: Weight> AdjListGraph<L, W> {
    /// Returns the stored entries of a given vertex as a slice.
    /// ** Panics if `u >= n` **
    pub fn entries_of(&self, u: Node) -> &[(Node, W)] {
        &self.nbs[u as usize]
    }

    /// Returns the package of an equivalent [`AdjMatrixGraph`] using
    /// [`CellEncoding::ZeroOrSentinel`].
    ///
    /// The grid starts out as `infinity` everywhere, every stored entry is written in order
    /// (so the last of several parallel edges wins) and the diagonal is set to zero afterwards,
    /// regardless of any stored self-loop.
    ///
    /// # Examples
    /// ```
    /// use dualgraph::prelude::*;
    ///
    /// let list = AdjListGraph::from_data(ListGraphData::from_edges(
    ///     vec!['A', 'B'],
    ///     false,
    ///     [WeightedEdge::new(0, 1, 1)],
    /// ).unwrap()).unwrap();
    ///
    /// let data = list.to_matrix_data(99);
    /// assert_eq!(data.grid, vec![vec![0, 1], vec![1, 0]]);
    /// assert_eq!(data.num_edges, 1);
    /// ```
    pub fn to_matrix_data(&self, infinity: W) -> MatrixGraphData<L, W> {
        self.to_matrix_data_with(infinity, CellEncoding::ZeroOrSentinel)
    }

    /// Like [`AdjListGraph::to_matrix_data`] with a custom cell encoding.
    ///
    /// Under [`CellEncoding::SentinelOnly`] the diagonal is left as stored, so self-loops and
    /// zero-weight edges survive the conversion.
    pub fn to_matrix_data_with(&self, infinity: W, encoding: CellEncoding) -> MatrixGraphData<L, W> {
        let n = self.len();
        let mut grid = vec![vec![infinity; n]; n];

        for (row, entries) in grid.iter_mut().zip(&self.nbs) {
            for &(v, w) in entries {
                row[v as usize] = w;
            }
        }

        if encoding == CellEncoding::ZeroOrSentinel {
            for (u, row) in grid.iter_mut().enumerate() {
                row[u] = W::zero();
            }
        }

        info!(
            nodes = n,
            edges = self.num_edges,
            ?encoding,
            "converted adjacency list to adjacency matrix"
        );

        MatrixGraphData {
            labels: self.labels.clone(),
            grid,
            num_edges: self.num_edges,
            infinity,
            encoding,
        }
    }
}

impl<L: Label, W: Weight> WeightedAdjacencyList for AdjListGraph<L, W> {
    type Weight = W;

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl<L: Label, W: Weight> GraphBuild for AdjListGraph<L, W> {
    type Data = ListGraphData<L, W>;

    fn build(&mut self, data: Self::Data) -> error::Result<()> {
        let n = data.validate()?;

        self.labels = data.labels;
        self.nbs = data.neighbors;
        self.num_edges = data.num_edges;

        debug!(
            nodes = n,
            edges = self.num_edges,
            entries = self.number_of_edge_entries(),
            "built adjacency list graph"
        );
        Ok(())
    }
}

/// One line per vertex: `u: label` followed by ` ([v]label@weight)` for every stored entry.
impl<L: Label, W: Weight> Display for AdjListGraph<L, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for u in self.vertices() {
            write!(f, "{u}: {}", self.label_of(u))?;
            for &(v, w) in self.entries_of(u) {
                write!(f, " ([{v}]{}@{w})", self.label_of(v))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

test_graph_contract!(
    test_adj_list_graph,
    AdjListGraph<String, i32>,
    |data: ListGraphData<String, i32>| AdjListGraph::from_data(data).unwrap()
);
