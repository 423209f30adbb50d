//! Edge-list provider: reads whitespace-separated text into wayfinder graphs.
//!
//! Each non-blank line not starting with `#` is one of
//!
//! - `node`: declares a node without edges,
//! - `tail head`: an unweighted edge,
//! - `tail head weight`: a weighted edge with an `i64` weight.
//!
//! Labels are arbitrary tokens and receive dense ids in first-seen order.

mod errors;
mod source;

pub use errors::EdgeListError;
pub use source::{EdgeList, LabelledEdge};
