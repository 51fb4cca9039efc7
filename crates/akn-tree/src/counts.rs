use akn_core::*;

/// Training-row counts per label, indexed by [`Class`].
///
/// Leaves store one of these. The predicted label is the most frequent
/// class (lowest class index on ties), and its share of the total is the
/// likelihood fed into the confidence update.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Counts(Vec<Count>);

impl Counts {
    /// Zero counts over `n` classes.
    pub fn new(n: usize) -> Self {
        Self(vec![0; n])
    }
    /// Adds one observation of `class`.
    pub fn increment(mut self, class: Class) -> Self {
        self.0[class] += 1;
        self
    }
    /// Number of classes this distribution ranges over.
    pub fn n(&self) -> usize {
        self.0.len()
    }
    pub fn count(&self, class: Class) -> Count {
        self.0.get(class).copied().unwrap_or(0)
    }
    pub fn total(&self) -> Count {
        self.0.iter().sum()
    }
    /// Classes with at least one observation, in class order.
    pub fn support(&self) -> impl Iterator<Item = (Class, Count)> + '_ {
        self.0
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, count)| *count > 0)
    }
    /// True when at most one class was observed.
    pub fn is_pure(&self) -> bool {
        self.support().count() <= 1
    }
    /// Most frequent class. The first maximum wins.
    pub fn argmax(&self) -> Class {
        self.0
            .iter()
            .enumerate()
            .fold((0, 0), |(best, most), (class, &count)| match count > most {
                true => (class, count),
                false => (best, most),
            })
            .0
    }
    /// Share of observations belonging to the most frequent class.
    pub fn likelihood(&self) -> Probability {
        match self.total() {
            0 => 0.,
            total => self.count(self.argmax()) as Probability / total as Probability,
        }
    }
    /// Gini impurity: 1 - Σ p².
    pub fn gini(&self) -> Probability {
        match self.total() {
            0 => 0.,
            total => {
                1. - self
                    .0
                    .iter()
                    .map(|&c| c as Probability / total as Probability)
                    .map(|p| p * p)
                    .sum::<Probability>()
            }
        }
    }
}

impl From<Vec<Count>> for Counts {
    fn from(counts: Vec<Count>) -> Self {
        Self(counts)
    }
}

impl std::fmt::Display for Counts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let support = self
            .support()
            .map(|(class, count)| format!("{}:{}", class, count))
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{{{}}}", support)
    }
}
