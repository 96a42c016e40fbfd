/*!
# IO

Reading graphs from the whitespace-separated text format:

```text
# comment lines start with the comment identifier
<directed> <vertex_count> <edge_count>
<label_0> ... <label_{n-1}>
<source> <target> <weight>    (edge_count times)
```

Tokens may be spread over lines arbitrarily. `directed` is `0`/`1` (any non-zero integer means
directed) or `false`/`true`. Vertex indices are zero-based.

Output is provided by the `Display` implementations of the graphs and of
[`TraversalReport`](crate::algo::TraversalReport).

## Traits

[`GraphReader`] is implemented by readers for a specific target type; the reader in [`input`]
can produce a raw [`GraphInput`] or directly an [`AdjListGraph`].
*/

pub mod input;

use std::{
    fs::File,
    io::{BufRead, BufReader, Result},
    path::Path,
};

use crate::prelude::*;

pub use input::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next token of an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let token = $iterator.next().ok_or_else(|| {
            io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of input when parsing {}.", $name)
            )
        })?;

        token.parse().map_err(|_| {
            io_error!(
                ErrorKind::InvalidData,
                format!("Invalid value {:?} found. Cannot parse {}.", token, $name)
            )
        })?
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
