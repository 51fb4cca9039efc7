use super::*;
use akn_core::*;
use akn_dataset::Table;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// A fitted decision tree.
///
/// Vertices are [`Node`]s, edges are [`Branch`]es. Node indices follow
/// depth-first preorder with the `No` subtree first, so the root is 0 and
/// the `No` child of any split `k` is `k + 1`.
///
/// # Traversal
///
/// - `is_terminal(index)` — Whether a node is a leaf
/// - `attribute(index)` — Attribute tested at a split
/// - `follow(index, branch)` — Child reached by answering yes or no
/// - `successor(index)` — Next split in traversal order
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(into = "Layout", try_from = "Layout")]
pub struct Tree {
    graph: DiGraph<Node, Branch>,
    attributes: Vec<String>,
    classes: Vec<String>,
}

impl Tree {
    /// Fits a tree to every row of the table.
    pub fn fit(table: &Table) -> Self {
        let tree = fit::Fitter::from(table).fit();
        log::info!(
            "{:<32}{} nodes, {} leaves, depth {}",
            "fitted      decision tree",
            tree.n(),
            tree.leaves().count(),
            tree.depth()
        );
        tree
    }
    /// Assembles a tree from an already-built graph.
    pub(crate) fn from_parts(
        graph: DiGraph<Node, Branch>,
        attributes: Vec<String>,
        classes: Vec<String>,
    ) -> Self {
        Self {
            graph,
            attributes,
            classes,
        }
    }

    /// Number of nodes.
    pub fn n(&self) -> usize {
        self.graph.node_count()
    }
    pub fn root(&self) -> Index {
        0
    }
    pub fn node(&self, index: Index) -> Option<&Node> {
        self.graph.node_weight(NodeIndex::new(index))
    }
    /// Out-of-range indices are not terminal.
    pub fn is_terminal(&self, index: Index) -> bool {
        self.node(index).map_or(false, Node::is_terminal)
    }
    pub fn attribute(&self, index: Index) -> Option<Attribute> {
        self.node(index).and_then(Node::attribute)
    }
    pub fn counts(&self, index: Index) -> Option<&Counts> {
        self.node(index).and_then(Node::counts)
    }
    /// Child reached from a split by taking `branch`.
    pub fn follow(&self, index: Index, branch: Branch) -> Option<Index> {
        if index >= self.n() {
            return None;
        }
        self.graph
            .edges_directed(NodeIndex::new(index), petgraph::Direction::Outgoing)
            .find(|edge| *edge.weight() == branch)
            .map(|edge| edge.target().index())
    }
    /// First split strictly after `index` in traversal order.
    pub fn successor(&self, index: Index) -> Option<Index> {
        (index + 1..self.n()).find(|&i| !self.is_terminal(i))
    }
    /// Indices of all leaves in traversal order.
    pub fn leaves(&self) -> impl Iterator<Item = Index> + '_ {
        (0..self.n()).filter(|&i| self.is_terminal(i))
    }
    /// Longest root-to-leaf path, counted in edges.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root(), 0)];
        while let Some((index, depth)) = stack.pop() {
            if index >= self.n() {
                continue;
            }
            deepest = deepest.max(depth);
            for branch in [Branch::No, Branch::Yes] {
                if let Some(child) = self.follow(index, branch) {
                    stack.push((child, depth + 1));
                }
            }
        }
        deepest
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }
    /// Distinct labels in ascending order; a [`Class`] indexes into this.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
    pub fn class(&self, class: Class) -> &str {
        &self.classes[class]
    }
    /// Name of the attribute tested at a split.
    pub fn question(&self, index: Index) -> Option<&str> {
        self.attribute(index)
            .and_then(|a| self.attributes.get(a))
            .map(String::as_str)
    }

    fn show(&self, f: &mut std::fmt::Formatter, index: Index, prefix: &str) -> std::fmt::Result {
        let children = [Branch::No, Branch::Yes]
            .into_iter()
            .filter_map(|b| self.follow(index, b).map(|c| (b, c)))
            .collect::<Vec<_>>();
        let n = children.len();
        for (i, (branch, child)) in children.into_iter().enumerate() {
            let last = i == n - 1;
            let gaps = if last { "    " } else { "│   " };
            let stem = if last { "└" } else { "├" };
            writeln!(f, "{}{}──{:<3} → {}", prefix, stem, branch, self.label(child))?;
            self.show(f, child, &format!("{}{}", prefix, gaps))?;
        }
        Ok(())
    }
    fn label(&self, index: Index) -> String {
        match self.node(index) {
            Some(Node::Split(_)) => format!("[{}] {}?", index, self.question(index).unwrap_or("")),
            Some(Node::Leaf(counts)) => format!(
                "[{}] {} ({}/{})",
                index,
                self.class(counts.argmax()),
                counts.count(counts.argmax()),
                counts.total()
            ),
            None => format!("[{}] ?", index),
        }
    }
}

/// Structural equality: same nodes in the same order, same edges, same names.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes
            && self.classes == other.classes
            && self.n() == other.n()
            && (0..self.n()).all(|i| {
                self.node(i) == other.node(i)
                    && self.follow(i, Branch::No) == other.follow(i, Branch::No)
                    && self.follow(i, Branch::Yes) == other.follow(i, Branch::Yes)
            })
    }
}

impl Eq for Tree {}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.n() == 0 {
            return Ok(());
        }
        writeln!(f, "ROOT   {}", self.label(self.root()))?;
        self.show(f, self.root(), "")
    }
}

// ============================================================================
// FLAT LAYOUT
// ============================================================================

/// Serialized form of a [`Tree`]: the node array plus child indices.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Layout {
    attributes: Vec<String>,
    classes: Vec<String>,
    nodes: Vec<Vertex>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Vertex {
    node: Node,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    no: Option<Index>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    yes: Option<Index>,
}

/// Why a serialized tree could not be rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    DanglingChild(Index),
    MissingChild(Index),
    UnknownAttribute(Index),
    UnknownClass(Index),
    LeafWithChild(Index),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingChild(i) => write!(f, "node {} points past the end of the tree", i),
            Self::MissingChild(i) => write!(f, "split {} lacks a yes or no child", i),
            Self::UnknownAttribute(i) => write!(f, "split {} tests an unknown attribute", i),
            Self::UnknownClass(i) => write!(f, "leaf {} counts an unknown class", i),
            Self::LeafWithChild(i) => write!(f, "leaf {} has children", i),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<Tree> for Layout {
    fn from(tree: Tree) -> Self {
        let nodes = (0..tree.n())
            .map(|i| Vertex {
                node: tree.graph[NodeIndex::new(i)].clone(),
                no: tree.follow(i, Branch::No),
                yes: tree.follow(i, Branch::Yes),
            })
            .collect();
        Self {
            attributes: tree.attributes,
            classes: tree.classes,
            nodes,
        }
    }
}

impl TryFrom<Layout> for Tree {
    type Error = LayoutError;
    fn try_from(layout: Layout) -> Result<Self, Self::Error> {
        let n = layout.nodes.len();
        let mut graph = DiGraph::with_capacity(n, n.saturating_sub(1));
        for (i, vertex) in layout.nodes.iter().enumerate() {
            match &vertex.node {
                Node::Split(a) if *a >= layout.attributes.len() => {
                    return Err(LayoutError::UnknownAttribute(i));
                }
                Node::Split(_) if vertex.no.is_none() || vertex.yes.is_none() => {
                    return Err(LayoutError::MissingChild(i));
                }
                Node::Leaf(c) if c.n() != layout.classes.len() => {
                    return Err(LayoutError::UnknownClass(i));
                }
                Node::Leaf(_) if vertex.no.is_some() || vertex.yes.is_some() => {
                    return Err(LayoutError::LeafWithChild(i));
                }
                _ => {}
            }
            graph.add_node(vertex.node.clone());
        }
        for (i, vertex) in layout.nodes.iter().enumerate() {
            for (branch, child) in [(Branch::No, vertex.no), (Branch::Yes, vertex.yes)] {
                if let Some(child) = child {
                    if child >= n || child <= i {
                        return Err(LayoutError::DanglingChild(i));
                    }
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(child), branch);
                }
            }
        }
        Ok(Self::from_parts(graph, layout.attributes, layout.classes))
    }
}
