use akn_core::*;

/// Traversal ran past the last node without reaching a leaf.
///
/// Raised when "unknown" finds no later question or when a rejected guess
/// points past the end of the tree. Fatal for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted {
    pub from: Index,
    pub nodes: usize,
}

impl std::fmt::Display for Exhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "traversal exhausted: nothing left after node {} of {}",
            self.from, self.nodes
        )
    }
}

impl std::error::Error for Exhausted {}
