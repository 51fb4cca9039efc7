//! Champion guessing game over a fitted decision tree.
//!
//! This facade crate re-exports all public akn crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, and logging setup
//! - [`dataset`] — Attribute table and CSV loading
//! - [`tree`] — Decision tree and CART fitting
//! - [`engine`] — Guess engine state machine and Bayesian confidence
//! - [`session`] — Rounds, prompts, and the `Player` seam
//! - [`players`] — Player implementations
pub use akn_core     as core;
pub use akn_dataset  as dataset;
pub use akn_engine   as engine;
pub use akn_players  as players;
pub use akn_session  as session;
pub use akn_tree     as tree;

// Re-export commonly used types at the root
pub use akn_core::*;

#[cfg(feature = "cli")]
mod options;
#[cfg(feature = "cli")]
pub use options::*;
