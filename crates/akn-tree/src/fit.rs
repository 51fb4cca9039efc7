use super::*;
use akn_core::*;
use akn_dataset::Table;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// Impurity decreases closer than this are ties.
const TOLERANCE: Probability = 1e-6;

/// Greedy CART fitting with Gini impurity.
///
/// Grows the tree depth-first, `No` subtree before `Yes` subtree, so node
/// indices come out in preorder. Attributes are scanned in column order.
/// Ties in impurity decrease go to the more balanced split, then to the
/// lower column, so the fit is deterministic.
///
/// With unique labels every valid split has the same Gini decrease,
/// which leaves balance as the deciding criterion in practice.
pub(crate) struct Fitter<'t> {
    table: &'t Table,
    classes: Vec<String>,
    targets: Vec<Class>,
    graph: DiGraph<Node, Branch>,
}

impl<'t> From<&'t Table> for Fitter<'t> {
    fn from(table: &'t Table) -> Self {
        let mut classes = table.labels().to_vec();
        classes.sort();
        let targets = table
            .labels()
            .iter()
            .map(|label| classes.binary_search(label).unwrap_or_default())
            .collect();
        Self {
            table,
            classes,
            targets,
            graph: DiGraph::with_capacity(2 * table.n(), 2 * table.n()),
        }
    }
}

impl<'t> Fitter<'t> {
    pub fn fit(mut self) -> Tree {
        let rows = (0..self.table.n()).collect::<Vec<usize>>();
        self.grow(rows, None);
        Tree::from_parts(self.graph, self.table.attributes().to_vec(), self.classes)
    }

    fn grow(&mut self, rows: Vec<usize>, parent: Option<(NodeIndex, Branch)>) {
        let counts = self.counts(&rows);
        let split = match counts.is_pure() {
            true => None,
            false => self.best(&rows, &counts),
        };
        let node = match split {
            Some(attribute) => Node::Split(attribute),
            None => Node::Leaf(counts),
        };
        let index = self.graph.add_node(node);
        if let Some((head, branch)) = parent {
            self.graph.add_edge(head, index, branch);
        }
        if let Some(attribute) = split {
            let (yes, no) = rows
                .into_iter()
                .partition::<Vec<usize>, _>(|&row| self.table.value(row, attribute));
            self.grow(no, Some((index, Branch::No)));
            self.grow(yes, Some((index, Branch::Yes)));
        }
    }

    fn counts(&self, rows: &[usize]) -> Counts {
        rows.iter()
            .map(|&row| self.targets[row])
            .fold(Counts::new(self.classes.len()), Counts::increment)
    }

    /// Attribute with the largest Gini decrease among splits that leave
    /// both sides non-empty.
    fn best(&self, rows: &[usize], counts: &Counts) -> Option<Attribute> {
        let n = rows.len() as Probability;
        let impurity = counts.gini();
        let mut best = None::<(Attribute, Probability, usize)>;
        for attribute in 0..self.table.width() {
            let (yes, no) = rows
                .iter()
                .copied()
                .partition::<Vec<usize>, _>(|&row| self.table.value(row, attribute));
            if yes.is_empty() || no.is_empty() {
                continue;
            }
            let yes = self.counts(&yes);
            let no = self.counts(&no);
            let decrease = impurity
                - yes.total() as Probability / n * yes.gini()
                - no.total() as Probability / n * no.gini();
            let balance = yes.total().min(no.total());
            match best {
                Some((_, top, _)) if decrease < top - TOLERANCE => {}
                Some((_, top, even)) if decrease <= top + TOLERANCE && balance <= even => {}
                _ => best = Some((attribute, decrease, balance)),
            }
        }
        best.map(|(attribute, ..)| attribute)
    }
}
