use crate::dataset::Table;
use crate::session::Portraits;
use crate::tree::Tree;
use anyhow::Context;
use std::path::PathBuf;

/// Runtime options shared by every binary.
#[derive(clap::Args, Debug, Clone)]
pub struct Options {
    /// Attribute table: one label column plus binary attribute columns
    #[arg(long, default_value = "data/champions.csv")]
    pub dataset: PathBuf,
    /// Name of the column holding the champion identity
    #[arg(long, default_value = akn_core::LABEL_COLUMN)]
    pub label: String,
    /// Directory of champion portraits, shown after each guess
    #[arg(long)]
    pub portraits: Option<PathBuf>,
    /// Only warnings and errors on the terminal
    #[arg(long, short)]
    pub quiet: bool,
}

impl Options {
    /// Starts terminal and file logging at the requested verbosity.
    pub fn log(&self) -> anyhow::Result<()> {
        let level = match self.quiet {
            true => log::LevelFilter::Warn,
            false => log::LevelFilter::Info,
        };
        akn_core::log(level).map_err(|e| anyhow::anyhow!("failed to start logging: {}", e))
    }
    pub fn table(&self) -> anyhow::Result<Table> {
        Table::load(&self.dataset, &self.label)
            .with_context(|| format!("loading {}", self.dataset.display()))
    }
    /// Loads the table and fits the tree the game plays on.
    pub fn fit(&self) -> anyhow::Result<(Table, Tree)> {
        let table = self.table()?;
        let tree = Tree::fit(&table);
        Ok((table, tree))
    }
    pub fn portraits(&self) -> Portraits {
        Portraits::from(self.portraits.clone())
    }
}
