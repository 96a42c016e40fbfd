/*!
# Graph Representations

Two storage backends implement the same contract ([`Graph`]):

- [`AdjListGraph`] stores, per vertex, an insertion-ordered list of `(neighbor, weight)` entries.
  Duplicate edges and self-loops are kept and traversed.
- [`AdjMatrixGraph`] stores a dense `n x n` weight grid together with an "infinity" sentinel.
  Whether a cell denotes an edge is decided by its [`CellEncoding`].

Both are built from owned data packages ([`ListGraphData`], [`MatrixGraphData`]) and each can
produce the package of the other representation:

```
use dualgraph::{prelude::*, algo::*};

let list = AdjListGraph::from_data(ListGraphData::from_edges(
    vec!['A', 'B', 'C'],
    true,
    [WeightedEdge::new(0, 1, 5), WeightedEdge::new(1, 2, 3)],
).unwrap()).unwrap();

let matrix = AdjMatrixGraph::from_data(list.to_matrix_data(DEFAULT_INFINITY)).unwrap();
assert_eq!(matrix.weight(0, 1), Some(5));
assert_eq!(matrix.weight(0, 2), None);

let back = AdjListGraph::from_data(matrix.to_list_data()).unwrap();
assert_eq!(
    back.breadth_first_traversal().order(),
    list.breadth_first_traversal().order()
);
```

## Lossy conversions

With the default [`CellEncoding::ZeroOrSentinel`] a round trip list -> matrix -> list
- collapses duplicate edges between the same pair to the last one stored,
- writes zero onto the diagonal, which drops every self-loop,
- drops zero-weight edges, as zero also means "no edge".

[`CellEncoding::SentinelOnly`] keeps zero weights and self-loops; only duplicates collapse.
*/

use crate::{
    error::{self, GraphError, check_node, checked_number_of_nodes},
    prelude::*,
};

mod data;
mod list;
mod matrix;

pub use data::*;
pub use list::*;
pub use matrix::*;

pub(crate) mod macros {
    /// Implements the order and label getters shared by all representations.
    /// Expects the fields `labels: Vec<L>` and `num_edges: NumEdges`.
    macro_rules! impl_common_graph_ops {
        ($struct:ident) => {
            impl<L: Label, W: Weight> GraphNodeOrder for $struct<L, W> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.labels.len() as NumNodes
                }
            }

            impl<L: Label, W: Weight> GraphEdgeOrder for $struct<L, W> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<L: Label, W: Weight> LabelledNodes for $struct<L, W> {
                type Label = L;

                fn label_of(&self, u: Node) -> &L {
                    &self.labels[u as usize]
                }
            }

            impl<L, W> Default for $struct<L, W>
            where
                W: Weight,
            {
                fn default() -> Self {
                    Self::new()
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}
