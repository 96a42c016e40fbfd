//! # Graph Input
//!
//! A graph file names its orientation, its vertex labels and a list of weighted edges.
//! [`GraphInputReader`] parses it into a [`GraphInput`], which keeps the edges exactly as given;
//! [`GraphInput::into_list_data`] then materializes the adjacency entries of an [`AdjListGraph`].

use std::{
    io::{BufRead, ErrorKind},
    path::Path,
    str::FromStr,
};

use tracing::{debug, warn};

use super::*;
use crate::error;

/// A parsed graph file: orientation, one label per vertex and the edges in file order
#[derive(Debug, Clone, PartialEq)]
pub struct GraphInput<L, W> {
    pub directed: bool,
    pub labels: Vec<L>,
    pub edges: Vec<WeightedEdge<W>>,
}

impl<L, W> GraphInput<L, W> {
    pub fn new(directed: bool, labels: Vec<L>, edges: Vec<WeightedEdge<W>>) -> Self {
        Self {
            directed,
            labels,
            edges,
        }
    }

    /// Returns the number of vertices
    pub fn number_of_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of edges as given in the input
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Builds the adjacency-list package.
    /// Undirected edges are stored in both directions; entries keep the input order.
    ///
    /// # Examples
    /// ```
    /// use dualgraph::{prelude::*, io::*};
    ///
    /// let input: GraphInput<String, i32> = GraphInput::try_read("0 2 1\nA B\n0 1 1\n".as_bytes()).unwrap();
    /// let data = input.into_list_data().unwrap();
    ///
    /// assert_eq!(data.neighbors, vec![vec![(1, 1)], vec![(0, 1)]]);
    /// assert_eq!(data.num_edges, 1);
    /// ```
    pub fn into_list_data(self) -> error::Result<ListGraphData<L, W>>
    where
        W: Copy,
    {
        ListGraphData::from_edges(self.labels, self.directed, self.edges)
    }
}

impl<L: FromStr, W: FromStr> GraphInput<L, W> {
    /// Tries to read the input from a given reader using default settings
    pub fn try_read<R: BufRead>(reader: R) -> Result<Self> {
        GraphInputReader::default().try_read_graph(reader)
    }

    /// Tries to read the input from a given file using default settings
    pub fn try_read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        GraphInputReader::default().try_read_graph_file(path)
    }
}

/// A GraphReader for the graph input format
#[derive(Debug, Clone)]
pub struct GraphInputReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for GraphInputReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl GraphInputReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier. An empty identifier disables comment skipping.
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> GraphInputReader {
        self.comment_identifier = c.into();
        self
    }

    /// Splits all non-comment lines into whitespace-separated tokens
    fn tokenize<R: BufRead>(&self, reader: R) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !self.comment_identifier.is_empty()
                && line.trim_start().starts_with(self.comment_identifier.as_str())
            {
                continue;
            }
            tokens.extend(line.split_whitespace().map(String::from));
        }
        Ok(tokens)
    }
}

/// Accepts `true`/`false` as well as integers, where any non-zero value means directed
fn parse_directed(token: Option<&str>) -> Result<bool> {
    let token = token.ok_or_else(|| {
        io_error!(
            ErrorKind::InvalidData,
            "Premature end of input when parsing directed flag."
        )
    })?;

    if let Ok(flag) = token.parse::<bool>() {
        return Ok(flag);
    }

    token.parse::<i64>().map(|x| x != 0).map_err(|_| {
        io_error!(
            ErrorKind::InvalidData,
            format!("Invalid value {token:?} found. Cannot parse directed flag.")
        )
    })
}

impl<L: FromStr, W: FromStr> GraphReader<GraphInput<L, W>> for GraphInputReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<GraphInput<L, W>> {
        let tokens = self.tokenize(reader)?;
        let mut tokens = tokens.iter().map(String::as_str);

        let directed = parse_directed(tokens.next())?;
        let n: usize = parse_next_value!(tokens, "vertex count");
        let m: usize = parse_next_value!(tokens, "edge count");

        raise_error_unless!(
            n < INVALID_NODE as usize,
            ErrorKind::InvalidData,
            format!("Vertex count {n} exceeds the maximum number of nodes.")
        );

        let mut labels = Vec::new();
        for u in 0..n {
            let label: L = parse_next_value!(tokens, format!("label of vertex {u}"));
            labels.push(label);
        }

        let mut edges = Vec::new();
        for i in 0..m {
            let source: Node = parse_next_value!(tokens, format!("source of edge {i}"));
            let target: Node = parse_next_value!(tokens, format!("target of edge {i}"));
            let weight: W = parse_next_value!(tokens, format!("weight of edge {i}"));

            raise_error_unless!(
                (source as usize) < n && (target as usize) < n,
                ErrorKind::InvalidData,
                format!("Edge {i} ({source}, {target}) references a vertex outside of 0..{n}.")
            );

            edges.push(WeightedEdge::new(source, target, weight));
        }

        let trailing = tokens.count();
        if trailing > 0 {
            warn!(trailing, "ignoring tokens after the last edge");
        }

        debug!(directed, nodes = n, edges = m, "read graph input");
        Ok(GraphInput::new(directed, labels, edges))
    }
}

/// Reads the input and builds an [`AdjListGraph`] from it in one go
impl<L, W> GraphReader<AdjListGraph<L, W>> for GraphInputReader
where
    L: Label + FromStr,
    W: Weight + FromStr,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<AdjListGraph<L, W>> {
        let input: GraphInput<L, W> = self.try_read_graph(reader)?;
        Ok(AdjListGraph::from_data(input.into_list_data()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;

    fn read(text: &str) -> Result<GraphInput<String, i32>> {
        GraphInput::try_read(text.as_bytes())
    }

    fn error_message(text: &str) -> String {
        let err = read(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        err.to_string()
    }

    #[test]
    fn directed_input() {
        let input = read("1 3 2\nA B C\n0 1 5\n1 2 3\n").unwrap();

        assert!(input.directed);
        assert_eq!(input.labels, vec!["A", "B", "C"]);
        assert_eq!(
            input.edges,
            vec![WeightedEdge::new(0, 1, 5), WeightedEdge::new(1, 2, 3)]
        );
        assert_eq!(input.number_of_nodes(), 3);
        assert_eq!(input.number_of_edges(), 2);

        let data = input.into_list_data().unwrap();
        assert_eq!(data.neighbors, vec![vec![(1, 5)], vec![(2, 3)], vec![]]);
    }

    #[test]
    fn tokens_span_lines_and_comments_are_skipped() {
        let text = "# header\n  # indented comment\ntrue\n2\n1 X\nY 0\n1\n7\n";
        let input = read(text).unwrap();

        assert!(input.directed);
        assert_eq!(input.labels, vec!["X", "Y"]);
        assert_eq!(input.edges, vec![WeightedEdge::new(0, 1, 7)]);
    }

    #[test]
    fn directed_flag_variants() {
        assert!(!read("0 0 0").unwrap().directed);
        assert!(!read("false 0 0").unwrap().directed);
        assert!(read("2 0 0").unwrap().directed);
        assert!(error_message("maybe 0 0").contains("directed flag"));
    }

    #[test]
    fn custom_comment_identifier() {
        let reader = GraphInputReader::new().comment_identifier("%");
        let input: GraphInput<String, i32> = reader
            .try_read_graph("% c\n0 1 0\nA\n".as_bytes())
            .unwrap();
        assert_eq!(input.labels, vec!["A"]);
    }

    #[test]
    fn empty_comment_identifier_skips_nothing() {
        let reader = GraphInputReader::new().comment_identifier("");
        let input: GraphInput<String, i32> = reader
            .try_read_graph("false 2 1\nA B\n0 1 4\n".as_bytes())
            .unwrap();
        assert!(!input.directed);
        assert_eq!(input.labels, vec!["A", "B"]);
        assert_eq!(input.edges, vec![WeightedEdge::new(0, 1, 4)]);
    }

    #[test]
    fn malformed_inputs() {
        assert!(error_message("").contains("directed flag"));
        assert!(error_message("1 2").contains("edge count"));
        assert!(error_message("1 x 0").contains("vertex count"));
        assert!(error_message("1 2 1\nA").contains("label of vertex 1"));
        assert!(error_message("1 2 1\nA B\n0 1").contains("weight of edge 0"));
        assert!(error_message("1 2 1\nA B\n0 1 w").contains("weight of edge 0"));
        assert!(error_message("1 2 1\nA B\n0 2 4").contains("outside of 0..2"));
        assert!(error_message("1 2 1\nA B\n-1 0 4").contains("source of edge 0"));
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let input = read("1 1 0\nA\nextra tokens").unwrap();
        assert_eq!(input.labels, vec!["A"]);
        assert!(input.edges.is_empty());
    }

    #[test]
    fn read_list_graph_directly() {
        let graph: AdjListGraph<String, i32> = GraphInputReader::new()
            .try_read_graph("0 3 2\nA B C\n0 1 5\n1 2 3\n".as_bytes())
            .unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.number_of_edge_entries(), 4);
        assert_eq!(graph.breadth_first_traversal().order(), &[0, 1, 2]);
    }

    #[test]
    fn missing_file() {
        let res = GraphInput::<String, i32>::try_read_file("/this/file/does/not/exist.txt");
        assert_eq!(res.unwrap_err().kind(), ErrorKind::NotFound);
    }
}
