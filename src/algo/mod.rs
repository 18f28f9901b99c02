/*!
# Graph Algorithms

This module provides the **connected component** machinery used before computing
statistics that assume a connected graph. All algorithms are re-exported at the top level
of this module, so you can simply do:
```rust
use graphstats::algo::*;
```
*/

mod connectivity;
mod subgraph;

use crate::prelude::*;

pub use connectivity::*;
pub use subgraph::*;
