//! Interactive prompt
//!
//! Provides a line-editor loop that explains one term per line.

mod repl;

pub use repl::{JargonRepl, ReplCommand};
