use akn_engine::Guess;

/// Something the player must answer before the session can continue.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    /// Does the champion have this attribute? yes / no / unknown / quit.
    Question(String),
    /// Was the presented guess right? yes / no / quit.
    Confirmation(Guess),
    /// Start another round? yes / no / quit.
    Replay,
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Question(attribute) => write!(f, "The champion {}?", attribute),
            Self::Confirmation(_) => write!(f, "Did I guess correctly? (yes/no)"),
            Self::Replay => write!(f, "Do you want to play again? (yes/no)"),
        }
    }
}
