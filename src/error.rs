//! Errors raised when a graph is built from an inconsistent data package.

use thiserror::Error;

use crate::prelude::*;

/// Reasons a data package is rejected by [`GraphBuild::build`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A neighbor or edge endpoint does not name an existing vertex.
    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: Node, num_nodes: NumNodes },

    /// The number of adjacency rows differs from the number of labels.
    #[error("expected {expected} adjacency rows (one per label), found {found}")]
    RowCountMismatch { expected: usize, found: usize },

    /// A matrix row does not have one cell per vertex.
    #[error("matrix row {row} has {found} cells, expected {expected}")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// More vertices than a `Node` can address.
    #[error("{0} vertices exceed the maximum number of nodes")]
    TooManyNodes(usize),
}

/// Result type for graph construction.
pub type Result<T> = std::result::Result<T, GraphError>;

impl From<GraphError> for std::io::Error {
    fn from(value: GraphError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, value)
    }
}

/// Checks that `num_labels` vertices are addressable and returns their count.
pub(crate) fn checked_number_of_nodes(num_labels: usize) -> Result<NumNodes> {
    NumNodes::try_from(num_labels)
        .ok()
        .filter(|&n| n != INVALID_NODE)
        .ok_or(GraphError::TooManyNodes(num_labels))
}

/// Fails with [`GraphError::NodeOutOfRange`] unless `node < num_nodes`.
pub(crate) fn check_node(node: Node, num_nodes: NumNodes) -> Result<()> {
    if node < num_nodes {
        Ok(())
    } else {
        Err(GraphError::NodeOutOfRange { node, num_nodes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = GraphError::NodeOutOfRange {
            node: 7,
            num_nodes: 3,
        };
        assert_eq!(
            err.to_string(),
            "node 7 is out of range for a graph with 3 nodes"
        );

        let io: std::io::Error = err.into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn node_checks() {
        assert_eq!(checked_number_of_nodes(4), Ok(4));
        assert!(check_node(2, 3).is_ok());
        assert_eq!(
            check_node(3, 3),
            Err(GraphError::NodeOutOfRange {
                node: 3,
                num_nodes: 3
            })
        );
    }
}
