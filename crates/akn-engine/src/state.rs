use super::*;
use akn_core::*;

/// Where a round stands.
///
/// `AwaitingAnswer` holds the split whose question is outstanding.
/// `Guessed` becomes `AwaitingConfirmation` once the guess has been shown.
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    AwaitingAnswer(Index),
    Guessed(Guess),
    AwaitingConfirmation(Guess),
    Finished(Outcome),
}

/// How a round ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Correct(Guess),
    Abandoned,
}

impl State {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
    /// The guess on the table, if any.
    pub fn guess(&self) -> Option<&Guess> {
        match self {
            Self::Guessed(guess) => Some(guess),
            Self::AwaitingConfirmation(guess) => Some(guess),
            Self::Finished(Outcome::Correct(guess)) => Some(guess),
            _ => None,
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingAnswer(node) => write!(f, "awaiting answer at node {}", node),
            Self::Guessed(guess) => write!(f, "guessed {} at node {}", guess.label(), guess.node()),
            Self::AwaitingConfirmation(guess) => write!(f, "awaiting confirmation of {}", guess.label()),
            Self::Finished(Outcome::Correct(guess)) => write!(f, "finished: {} was right", guess.label()),
            Self::Finished(Outcome::Abandoned) => write!(f, "finished: abandoned"),
        }
    }
}
