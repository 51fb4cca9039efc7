//! Game session.
//!
//! A [`Session`] owns a [`Player`] and borrows a fitted tree, and drives
//! rounds of the guess engine until the player quits or declines to play
//! again. It replaces ambient game globals with one explicit context.
//!
//! The player is both the input source (`prompt`, which blocks until a
//! raw response is available) and the presentation sink (`notify`).
//! Unrecognized responses are reported and the same prompt is asked again.
mod event;
mod player;
mod portrait;
mod prompt;
mod session;

pub use event::*;
pub use player::*;
pub use portrait::*;
pub use prompt::*;
pub use session::*;
