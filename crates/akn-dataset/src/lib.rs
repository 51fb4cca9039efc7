//! Champion attribute tables.
//!
//! An attribute table holds one row per champion: a unique label plus a
//! fixed set of binary attributes, each of which becomes a yes/no question.
//!
//! ## Types
//!
//! - [`Table`] — Validated rows of binary attributes keyed by label
//! - [`DatasetError`] — Why a table could not be loaded
mod error;
mod parse;
mod table;

pub use error::*;
pub use parse::*;
pub use table::*;
