/// The edge from a split node to one of its children.
///
/// `No` is the left child and always directly follows its parent in
/// traversal order; `Yes` is the right child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Branch {
    No,
    Yes,
}

impl From<bool> for Branch {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Yes,
            false => Self::No,
        }
    }
}

impl From<Branch> for bool {
    fn from(branch: Branch) -> Self {
        branch == Branch::Yes
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::No => f.pad("no"),
            Self::Yes => f.pad("yes"),
        }
    }
}
