use super::*;
use akn_core::*;

/// A vertex of the decision tree.
///
/// A `Split` asks about one attribute and has exactly two children, one
/// per [`Branch`]. A `Leaf` is terminal and remembers how many training
/// rows of each label reached it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Node {
    Split(Attribute),
    Leaf(Counts),
}

impl Node {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
    /// The attribute tested here, if this is a split.
    pub fn attribute(&self) -> Option<Attribute> {
        match self {
            Self::Split(attribute) => Some(*attribute),
            Self::Leaf(_) => None,
        }
    }
    /// The label distribution held here, if this is a leaf.
    pub fn counts(&self) -> Option<&Counts> {
        match self {
            Self::Split(_) => None,
            Self::Leaf(counts) => Some(counts),
        }
    }
}
