use super::*;
use akn_core::*;
use akn_tree::Tree;

/// A scored guess at a leaf.
///
/// Derived from the leaf's label counts and the prior carried by the
/// traversal; nothing here is stored in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Guess {
    node: Index,
    label: String,
    likelihood: Probability,
    prior: Probability,
    posterior: Probability,
}

impl Guess {
    /// Scores the leaf at `node`. `None` if `node` is not a leaf.
    pub fn score(tree: &Tree, node: Index, prior: Probability) -> Option<Self> {
        let counts = tree.counts(node)?;
        let likelihood = counts.likelihood();
        Some(Self {
            node,
            label: tree.class(counts.argmax()).to_string(),
            likelihood,
            prior,
            posterior: posterior(prior, likelihood),
        })
    }
    /// Leaf the guess was made at.
    pub fn node(&self) -> Index {
        self.node
    }
    /// Predicted champion.
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn likelihood(&self) -> Probability {
        self.likelihood
    }
    /// Prior in effect when the leaf was reached (before the epsilon floor).
    pub fn prior(&self) -> Probability {
        self.prior
    }
    /// Confidence in the guess.
    pub fn probability(&self) -> Probability {
        self.posterior
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "I think the champion is {} with a probability of {:.2}%.",
            self.label,
            self.posterior * 100.
        )
    }
}
