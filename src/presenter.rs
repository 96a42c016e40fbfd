/*!
# Presentation

[`GraphPresenter`] walks a graph through both representations and prints every intermediate step:

1. build an [`AdjListGraph`], display it and print all three traversal reports,
2. convert it into an [`AdjMatrixGraph`], display it and print its traversal reports,
3. convert it back, rebuild the list graph and display it once more.

An input without vertices stops the presentation right after the first step.
*/

use std::io::{Result, Write};

use tracing::info;

use crate::{algo::*, prelude::*};

/// Configurable driver for the presentation
#[derive(Debug, Clone)]
pub struct GraphPresenter<W> {
    /// Sentinel written into matrix cells without an edge
    infinity: W,
    /// How the matrix interprets its cells
    encoding: CellEncoding,
}

impl Default for GraphPresenter<i32> {
    fn default() -> Self {
        Self::new(DEFAULT_INFINITY)
    }
}

impl<W: Weight> GraphPresenter<W> {
    /// Creates a presenter using `infinity` and [`CellEncoding::ZeroOrSentinel`]
    pub fn new(infinity: W) -> Self {
        Self {
            infinity,
            encoding: CellEncoding::default(),
        }
    }

    /// Updates the cell encoding used for the matrix representation
    pub fn cell_encoding(mut self, encoding: CellEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Runs the full presentation of `data` and writes it to `writer`.
    ///
    /// # Errors
    /// Fails if the package is inconsistent or writing fails.
    pub fn present<L, Wr>(&self, data: ListGraphData<L, W>, mut writer: Wr) -> Result<()>
    where
        L: Label,
        Wr: Write,
    {
        let mut list = AdjListGraph::from_data(data)?;

        if list.is_empty() {
            info!("received an empty graph");
            writeln!(writer, "EMPTY GRAPH RECEIVED. PRESENTATION EXIT.")?;
            return writer.flush();
        }

        Self::display_list(&list, &mut writer)?;
        Self::write_traversals(&list, &mut writer)?;

        let matrix_data = list.to_matrix_data_with(self.infinity, self.encoding);
        writeln!(writer, "<CONVERTED FROM ADJ-LIST GRAPH TO ADJ-MATRIX GRAPH.>")?;
        writeln!(writer)?;

        let matrix = AdjMatrixGraph::from_data(matrix_data)?;
        writeln!(writer, "[DISPLAYING ADJ-MATRIX GRAPH]")?;
        writeln!(writer, "{matrix}")?;
        Self::write_traversals(&matrix, &mut writer)?;

        let list_data = matrix.to_list_data();
        writeln!(writer, "<CONVERTED FROM ADJ-MATRIX GRAPH TO ADJ-LIST GRAPH.>")?;
        writeln!(writer)?;

        list.build(list_data)?;
        Self::display_list(&list, &mut writer)?;

        writer.flush()
    }

    fn display_list<L: Label, Wr: Write>(list: &AdjListGraph<L, W>, writer: &mut Wr) -> Result<()> {
        writeln!(writer, "[DISPLAYING ADJ-LIST GRAPH]")?;
        writeln!(writer, "{list}")
    }

    /// Recursive DFS, iterative DFS and BFS, each followed by an empty line
    fn write_traversals<G, Wr>(graph: &G, writer: &mut Wr) -> Result<()>
    where
        G: Graph<Weight = W>,
        Wr: Write,
    {
        for result in [
            graph.depth_first_traversal(false),
            graph.depth_first_traversal(true),
            graph.breadth_first_traversal(),
        ] {
            writeln!(writer, "{}", result.report(graph))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(
        presenter: &GraphPresenter<i32>,
        labels: Vec<char>,
        directed: bool,
        edges: &[(Node, Node, i32)],
    ) -> String {
        let data = ListGraphData::from_edges(
            labels,
            directed,
            edges.iter().map(|&(u, v, w)| WeightedEdge::new(u, v, w)),
        )
        .unwrap();

        let mut out = Vec::new();
        presenter.present(data, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_graph() {
        let out = present(&GraphPresenter::default(), vec![], true, &[]);
        assert_eq!(out, "EMPTY GRAPH RECEIVED. PRESENTATION EXIT.\n");
    }

    #[test]
    fn undirected_pair() {
        let reports = "\
[DFS(RECURSIVE) RESULTS]
TRAVERSAL LIST: ([0]A) ([1]B)
TRAVERSAL NUMBERS: ([0]A:0) ([1]B:1)
SPANNING TREE EDGES: ([0]A-[1]B@1)

[DFS(ITERATIVE) RESULTS]
TRAVERSAL LIST: ([0]A) ([1]B)
TRAVERSAL NUMBERS: ([0]A:0) ([1]B:1)
SPANNING TREE EDGES: ([0]A-[1]B@1)

[BFS RESULTS]
TRAVERSAL LIST: ([0]A) ([1]B)
TRAVERSAL NUMBERS: ([0]A:0) ([1]B:1)
SPANNING TREE EDGES: ([0]A-[1]B@1)

";
        let list = "\
[DISPLAYING ADJ-LIST GRAPH]
0: A ([1]B@1)
1: B ([0]A@1)

";
        let expected = format!(
            "{list}{reports}\
<CONVERTED FROM ADJ-LIST GRAPH TO ADJ-MATRIX GRAPH.>

[DISPLAYING ADJ-MATRIX GRAPH]
   |  0  1
----------
  0|  0  1
  1|  1  0

{reports}\
<CONVERTED FROM ADJ-MATRIX GRAPH TO ADJ-LIST GRAPH.>

{list}"
        );

        let out = present(&GraphPresenter::default(), vec!['A', 'B'], false, &[(0, 1, 1)]);
        assert_eq!(out, expected);
    }

    #[test]
    fn zero_weight_edge_is_shown_but_lost() {
        let out = present(&GraphPresenter::new(99), vec!['A', 'B'], true, &[(0, 1, 0)]);

        assert!(out.starts_with("[DISPLAYING ADJ-LIST GRAPH]\n0: A ([1]B@0)\n1: B\n"));
        assert!(out.contains("  0|  0  0\n  1|  .  0\n"));
        assert!(out.ends_with("[DISPLAYING ADJ-LIST GRAPH]\n0: A\n1: B\n\n"));
    }

    #[test]
    fn strict_encoding_keeps_zero_weight() {
        let presenter = GraphPresenter::new(99).cell_encoding(CellEncoding::SentinelOnly);
        let out = present(&presenter, vec!['A', 'B'], true, &[(0, 1, 0)]);

        assert!(out.ends_with("[DISPLAYING ADJ-LIST GRAPH]\n0: A ([1]B@0)\n1: B\n\n"));
    }

    #[test]
    fn inconsistent_package_is_rejected() {
        let data: ListGraphData<char, i32> = ListGraphData::new(vec!['A'], vec![vec![(3, 1)]], 1);
        let mut out = Vec::new();

        let err = GraphPresenter::default().present(data, &mut out).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert!(out.is_empty());
    }
}
