use std::fmt::Display;

use crate::node::Node;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An edge `source -> target` carrying a weight.
/// It is up to the user whether an edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct WeightedEdge<W> {
    pub source: Node,
    pub target: Node,
    pub weight: W,
}

impl<W> WeightedEdge<W> {
    pub fn new(source: Node, target: Node, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl<W: Display> Display for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})@{}", self.source, self.target, self.weight)
    }
}
