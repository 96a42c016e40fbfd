use std::{fmt::Display, ops::Range};

use itertools::Itertools;

use crate::{error::Result, prelude::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all vertices.
    /// In contrast to self.vertices(), the range does not borrow self.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        node_bitset_unset(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges the graph was built with.
    ///
    /// This is the count carried by the build package: for an undirected input it counts
    /// every input edge once, even though both directions are stored.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Access to the caller-supplied payload of every vertex
pub trait LabelledNodes: GraphNodeOrder {
    type Label: Label;

    /// Returns the label of a given vertex
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> &Self::Label;

    /// Returns an iterator over all labels in index order
    fn labels(&self) -> impl Iterator<Item = &Self::Label> + '_ {
        self.vertices().map(|u| self.label_of(u))
    }
}

macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

/// Traits pertaining getters for weighted neighborhoods & edges.
///
/// This is the only thing traversals need to know about a representation: every algorithm in
/// [`crate::algo`] is written once against this trait.
pub trait WeightedAdjacencyList: GraphNodeOrder + Sized {
    type Weight: Weight;

    /// Returns an iterator over `(neighbor, weight)` of all outgoing edges of a given vertex
    /// in the natural order of the representation.
    /// ** Panics if `u >= n` **
    ///
    /// # Examples
    /// ```
    /// use dualgraph::prelude::*;
    ///
    /// let g = AdjListGraph::from_data(ListGraphData::from_edges(
    ///     vec!['A', 'B', 'C'],
    ///     true,
    ///     [WeightedEdge::new(0, 2, 4), WeightedEdge::new(0, 1, 9)],
    /// ).unwrap()).unwrap();
    ///
    /// assert_eq!(g.weighted_neighbors_of(0).collect::<Vec<_>>(), vec![(2, 4), (1, 9)]);
    /// ```
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Self::Weight)> + '_;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.weighted_neighbors_of(u).count() as NumNodes
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    node_iterator!(degrees, degree_of, NumNodes);

    /// Returns *true* if at least one edge `(u, v)` exists.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.neighbors_of(u).contains(&v)
    }

    /// Returns an iterator over outgoing weighted edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge::new(u, v, w))
    }

    /// Returns an iterator over all stored weighted edges, grouped by source in index order
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.weighted_edges_of(u))
    }

    /// Returns the number of stored directed edge entries.
    /// Unlike [`GraphEdgeOrder::number_of_edges`], undirected edges are counted twice.
    fn number_of_edge_entries(&self) -> usize {
        self.degrees().map(|d| d as usize).sum()
    }
}

/// Building a graph from the data package of its representation.
///
/// `build` either replaces the whole state of the graph or, if the package is inconsistent,
/// returns an error and leaves the graph untouched.
pub trait GraphBuild: Sized + Default {
    /// The owned data package consumed by `build`
    type Data;

    /// Replaces all existing state by the contents of `data`.
    fn build(&mut self, data: Self::Data) -> Result<()>;

    /// Creates a new graph from a data package
    fn from_data(data: Self::Data) -> Result<Self> {
        let mut graph = Self::default();
        graph.build(data)?;
        Ok(graph)
    }
}

/// The capability set shared by both representations.
///
/// `Display` renders the representation-specific view of the stored structure; the
/// traversals are provided for every implementor by [`Traversal`](crate::algo::Traversal).
pub trait Graph:
    LabelledNodes + GraphEdgeOrder + WeightedAdjacencyList + GraphBuild + Display
{
}

impl<G> Graph for G where
    G: LabelledNodes + GraphEdgeOrder + WeightedAdjacencyList + GraphBuild + Display
{
}
