/*!
# Weights and Labels

Edge weights and vertex labels are generic. A [`Weight`] only needs to be copyable, comparable,
printable and have a zero; no arithmetic is ever performed on it. A [`Label`] only needs to be
clonable and printable.
*/

use std::fmt::{Debug, Display};

use num::Zero;

/// Bounds required of an edge weight.
///
/// The zero value doubles as the "self-distance" written onto the diagonal of an
/// adjacency matrix and, under [`CellEncoding::ZeroOrSentinel`](crate::repr::CellEncoding),
/// as an implicit "no edge" marker.
pub trait Weight: Copy + PartialEq + PartialOrd + Zero + Display + Debug {
    /// Returns *true* if the weight equals the zero value
    fn is_zero_weight(&self) -> bool {
        self.is_zero()
    }
}

impl<W> Weight for W where W: Copy + PartialEq + PartialOrd + Zero + Display + Debug {}

/// Bounds required of a vertex label.
pub trait Label: Clone + Display + Debug {}

impl<L> Label for L where L: Clone + Display + Debug {}

/// Default "infinite cost" sentinel of the adjacency matrix (`0x3F3F3F3F`)
pub const DEFAULT_INFINITY: i32 = 0x3F3F3F3F;
