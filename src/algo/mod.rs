/*!
# Graph Algorithms

Traversals are written once against [`WeightedAdjacencyList`] and are thus available on every
representation in this crate. Everything is re-exported at the top level of this module, so you
can simply do:
```rust
use dualgraph::algo::*;
```
Traversals are provided both as lazy **iterators** over discoveries and as complete, owned
[`TraversalResult`]s.
*/

mod traversal;

use crate::prelude::*;

pub use traversal::*;
