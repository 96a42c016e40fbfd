/*!
`dualgraph` is a small library for **labelled**, **weighted** graphs that can be stored in two
interchangeable representations:

- [`AdjListGraph`](crate::repr::AdjListGraph) keeps an insertion-ordered list of
  `(neighbor, weight)` entries per vertex,
- [`AdjMatrixGraph`](crate::repr::AdjMatrixGraph) keeps a dense weight grid with an
  "infinity" sentinel for missing edges.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Each node carries a caller-supplied label; every edge carries a weight. Neither labels nor weights
are interpreted beyond printing and comparing (see [`weight`]).

Graphs may be **directed** or **undirected**. An undirected input edge is stored in both
directions, so representations themselves only ever see directed adjacency.

# Design

Both representations implement the same set of traits (bundled as [`Graph`](crate::ops::Graph)):
they can be built from an owned data package, displayed, and traversed. Traversals are written
once against [`WeightedAdjacencyList`](crate::ops::WeightedAdjacencyList) and provided for every
graph by [`Traversal`](crate::algo::Traversal):

- recursive depth-first search,
- iterative depth-first search with deferred marking,
- breadth-first search with eager marking.

Each traversal covers the whole graph, restarting at the smallest unvisited node.

Converting between the representations is lossy in well-defined ways; see [`repr`].

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, weights, the graph operation traits and both
  representations,
- [`algo`] includes the traversals (`graph.breadth_first_traversal()`, `graph.dfs_forest()`, ...),
- [`io`] reads graphs from the whitespace-separated text format,
- [`presenter`] runs a graph through both representations and prints every step.

In most use-cases, `use dualgraph::{prelude::*, algo::*};` suffices for your needs.

```
use dualgraph::{prelude::*, algo::*};

let g = AdjListGraph::from_data(ListGraphData::from_edges(
    vec!['A', 'B', 'C'],
    true,
    [WeightedEdge::new(0, 1, 5), WeightedEdge::new(1, 2, 3)],
).unwrap()).unwrap();

let dfs = g.depth_first_traversal(false);
assert_eq!(dfs.order(), &[0, 1, 2]);
assert_eq!(dfs.tree_edges(), &[WeightedEdge::new(0, 1, 5), WeightedEdge::new(1, 2, 3)]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod presenter;
pub mod repr;
pub(crate) mod testing;
pub mod weight;

/// `dualgraph::prelude` includes definitions for nodes, edges and weights, all basic graph operation traits as well as both representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*, weight::*};
}
