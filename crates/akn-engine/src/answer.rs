/// A response to a question about the champion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    Yes,
    No,
    Unknown,
    Quit,
}

/// A response to a yes/no prompt: confirming a guess or playing again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reply {
    Yes,
    No,
    Quit,
}

/// Single-key shorthands:
/// Y, N, I (I don't know), S (stop).
impl TryFrom<&str> for Answer {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "y" | "yes" => Ok(Self::Yes),
            "n" | "no" => Ok(Self::No),
            "i" | "idk" | "?" | "unknown" | "dunno" => Ok(Self::Unknown),
            "s" | "q" | "quit" | "stop" | "exit" => Ok(Self::Quit),
            other => Err(format!("unrecognized answer {:?}", other)),
        }
    }
}

impl TryFrom<&str> for Reply {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Answer::try_from(s)? {
            Answer::Yes => Ok(Self::Yes),
            Answer::No => Ok(Self::No),
            Answer::Quit => Ok(Self::Quit),
            Answer::Unknown => Err(format!("{:?} is not a yes or no", s.trim())),
        }
    }
}

impl From<Reply> for Answer {
    fn from(reply: Reply) -> Self {
        match reply {
            Reply::Yes => Self::Yes,
            Reply::No => Self::No,
            Reply::Quit => Self::Quit,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
            Self::Unknown => write!(f, "unknown"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Answer::from(*self).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_and_shorthands() {
        assert_eq!(Answer::try_from("Y"), Ok(Answer::Yes));
        assert_eq!(Answer::try_from(" no \n"), Ok(Answer::No));
        assert_eq!(Answer::try_from("i"), Ok(Answer::Unknown));
        assert_eq!(Answer::try_from("idk"), Ok(Answer::Unknown));
        assert_eq!(Answer::try_from("S"), Ok(Answer::Quit));
        assert!(Answer::try_from("").is_err());
        assert!(Answer::try_from("perhaps").is_err());
    }

    #[test]
    fn replies_reject_unknown() {
        assert_eq!(Reply::try_from("yes"), Ok(Reply::Yes));
        assert_eq!(Reply::try_from("N"), Ok(Reply::No));
        assert_eq!(Reply::try_from("quit"), Ok(Reply::Quit));
        assert!(Reply::try_from("idk").is_err());
        assert!(Reply::try_from("nope").is_err());
    }
}
