use super::*;
use akn_core::*;
use std::collections::HashSet;
use std::path::Path;

/// Champions and their binary attributes.
///
/// Rows are champions, columns are yes/no attributes. Every row carries a
/// unique label and a value for every attribute, so any column can serve
/// as a split predicate.
///
/// # Invariants
///
/// - at least one row and one attribute column
/// - labels are unique
/// - every row has exactly one value per attribute
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    attributes: Vec<String>,
    labels: Vec<String>,
    rows: Vec<Vec<bool>>,
}

impl Table {
    /// Builds a table from already-decoded rows, enforcing the invariants.
    pub fn new(
        attributes: Vec<String>,
        labels: Vec<String>,
        rows: Vec<Vec<bool>>,
    ) -> Result<Self, DatasetError> {
        if attributes.is_empty() {
            return Err(DatasetError::NoAttributes);
        }
        if labels.is_empty() {
            return Err(DatasetError::Empty);
        }
        let mut seen = HashSet::new();
        for attribute in attributes.iter() {
            if !seen.insert(attribute.as_str()) {
                return Err(DatasetError::DuplicateColumn(attribute.clone()));
            }
        }
        let mut seen = HashSet::new();
        for label in labels.iter() {
            if !seen.insert(label.as_str()) {
                return Err(DatasetError::DuplicateLabel(label.clone()));
            }
        }
        if labels.len() != rows.len() {
            return Err(DatasetError::Ragged {
                row: labels.len().min(rows.len()),
                expected: labels.len(),
                found: rows.len(),
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() < attributes.len() {
                return Err(DatasetError::MissingValue {
                    row: i,
                    column: attributes[row.len()].clone(),
                });
            }
            if row.len() > attributes.len() {
                return Err(DatasetError::Ragged {
                    row: i,
                    expected: attributes.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self {
            attributes,
            labels,
            rows,
        })
    }

    /// Parses delimited text with a header line. `label` names the identity column;
    /// every other column is read as a binary attribute.
    pub fn parse(text: &str, label: &str) -> Result<Self, DatasetError> {
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());
        let header = lines.next().map(fields).ok_or(DatasetError::Empty)?;
        let position = header
            .iter()
            .position(|c| c == label)
            .ok_or_else(|| DatasetError::MissingLabel(label.to_string()))?;
        let attributes = header
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != position)
            .map(|(_, c)| c.clone())
            .collect::<Vec<String>>();
        let mut labels = Vec::new();
        let mut rows = Vec::new();
        for (i, line) in lines.enumerate() {
            let cells = fields(line);
            if cells.len() > header.len() {
                return Err(DatasetError::Ragged {
                    row: i,
                    expected: header.len(),
                    found: cells.len(),
                });
            }
            let mut row = Vec::with_capacity(attributes.len());
            for (j, column) in header.iter().enumerate() {
                let cell = cells.get(j).map(String::as_str).unwrap_or("");
                if cell.is_empty() {
                    return Err(DatasetError::MissingValue {
                        row: i,
                        column: column.clone(),
                    });
                }
                if j == position {
                    labels.push(cell.to_string());
                    continue;
                }
                match binary(cell) {
                    Some(value) => row.push(value),
                    None => {
                        return Err(DatasetError::InvalidValue {
                            row: i,
                            column: column.clone(),
                            value: cell.to_string(),
                        });
                    }
                }
            }
            rows.push(row);
        }
        let table = Self::new(attributes, labels, rows)?;
        log::debug!(
            "parsed table with {} champions and {} attributes",
            table.n(),
            table.width()
        );
        Ok(table)
    }

    /// Reads and parses a table from disk.
    pub fn load(path: impl AsRef<Path>, label: &str) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        log::info!("{:<32}{:<32}", "loading     dataset", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text, label)
    }

    /// Number of champions.
    pub fn n(&self) -> usize {
        self.rows.len()
    }
    /// Number of attribute columns.
    pub fn width(&self) -> usize {
        self.attributes.len()
    }
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }
    pub fn attribute(&self, attribute: Attribute) -> &str {
        &self.attributes[attribute]
    }
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
    pub fn label(&self, row: usize) -> &str {
        &self.labels[row]
    }
    pub fn row(&self, row: usize) -> &[bool] {
        &self.rows[row]
    }
    /// The value of one attribute for one champion.
    pub fn value(&self, row: usize, attribute: Attribute) -> bool {
        self.rows[row][attribute]
    }
    /// Row index of the champion with this label.
    pub fn find(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

impl std::str::FromStr for Table {
    type Err = DatasetError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, LABEL_COLUMN)
    }
}
