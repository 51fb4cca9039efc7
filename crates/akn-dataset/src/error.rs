/// Errors raised while loading or validating an attribute table.
///
/// All of them are fatal: a game never starts from a malformed table.
#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Empty,
    NoAttributes,
    MissingLabel(String),
    DuplicateLabel(String),
    DuplicateColumn(String),
    MissingValue { row: usize, column: String },
    InvalidValue { row: usize, column: String, value: String },
    Ragged { row: usize, expected: usize, found: usize },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "invalid dataset: {}", e),
            Self::Empty => write!(f, "invalid dataset: no rows"),
            Self::NoAttributes => write!(f, "invalid dataset: no attribute columns"),
            Self::MissingLabel(c) => write!(f, "invalid dataset: label column {:?} not found", c),
            Self::DuplicateLabel(l) => write!(f, "invalid dataset: label {:?} appears twice", l),
            Self::DuplicateColumn(c) => write!(f, "invalid dataset: column {:?} appears twice", c),
            Self::MissingValue { row, column } => {
                write!(f, "invalid dataset: row {} has no value for {:?}", row, column)
            }
            Self::InvalidValue { row, column, value } => write!(
                f,
                "invalid dataset: row {} has non-binary value {:?} for {:?}",
                row, value, column
            ),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "invalid dataset: row {} has {} fields, expected {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
