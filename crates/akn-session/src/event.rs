use super::*;
use akn_engine::Guess;

/// Structured output for the presentation layer. The session never renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A round is starting; rounds count from 1.
    Round(usize),
    /// The engine reached a leaf.
    Guess(Guess),
    /// Where the guessed champion's picture is, or should have been.
    Portrait(Portrait),
    /// The player confirmed the guess.
    Correct(Guess),
    /// The player rejected the guess; traversal resumes.
    Continue,
    /// A response did not parse and the prompt will be repeated.
    Unrecognized(String),
    /// The player declined another round.
    Farewell,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Round(n) => write!(f, "Round {}", n),
            Self::Guess(guess) => write!(f, "{}", guess),
            Self::Portrait(Portrait::Found(path)) => write!(f, "[{}]", path.display()),
            Self::Portrait(Portrait::Missing(path)) => {
                write!(f, "[no portrait at {}]", path.display())
            }
            Self::Correct(_) => write!(f, "I guessed the correct champion! Well done!"),
            Self::Continue => write!(f, "Let me continue guessing."),
            Self::Unrecognized(raw) => write!(f, "Sorry, I did not understand {:?}.", raw),
            Self::Farewell => write!(f, "Thank you for playing! <3"),
        }
    }
}
