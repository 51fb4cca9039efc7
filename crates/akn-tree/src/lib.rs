//! Binary decision tree over champion attributes.
//!
//! The tree is fitted once from an attribute table and never changes
//! afterwards. Nodes live in a petgraph arena and are addressed by their
//! position in depth-first preorder, which is also the traversal order
//! used to pick the "next" question.
//!
//! ## Types
//!
//! - [`Counts`] — Training-row counts per label at a leaf
//! - [`Node`] — Either a split on one attribute or a leaf
//! - [`Branch`] — The yes/no edge between a split and its children
//! - [`Tree`] — The fitted tree and its traversal interface
mod branch;
mod counts;
mod fit;
mod node;
mod tree;

pub use branch::*;
pub use counts::*;
pub use node::*;
pub use tree::*;
