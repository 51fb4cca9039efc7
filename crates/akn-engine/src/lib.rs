//! Guess engine.
//!
//! Walks a fitted [`akn_tree::Tree`] one answer at a time and scores the
//! leaf it lands on with a single-step Bayesian update. The engine is a
//! synchronous state machine: it never blocks and never renders, it only
//! consumes answers and exposes the resulting [`State`].
//!
//! ## Confidence model
//!
//! The prior starts at [`akn_core::PRIOR`] and is overwritten, not
//! accumulated, by each yes/no answer: only the most recent one counts.
//! At a leaf the posterior is `p·l / (p·l + (1 - p)(1 - l))` where `l` is
//! the share of the leaf's rows carrying the predicted label.
mod answer;
mod bayes;
mod engine;
mod error;
mod guess;
mod state;

pub use answer::*;
pub use bayes::*;
pub use engine::*;
pub use error::*;
pub use guess::*;
pub use state::*;
