use akn_core::PORTRAIT_EXTENSION;
use std::path::Path;
use std::path::PathBuf;

/// Result of looking up a champion's picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Portrait {
    Found(PathBuf),
    Missing(PathBuf),
}

/// Directory of champion pictures named after their labels.
///
/// `Dr. Mundo` lives at `<directory>/drmundo.jpg`: lowercased, with spaces
/// and dots dropped. A missing file is never an error.
#[derive(Debug, Clone, Default)]
pub struct Portraits {
    directory: Option<PathBuf>,
}

impl Portraits {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(directory.into()),
        }
    }
    /// File name a label's picture is expected under.
    pub fn file(label: &str) -> String {
        let stem = label
            .chars()
            .filter(|c| *c != ' ' && *c != '.')
            .collect::<String>()
            .to_lowercase();
        format!("{}.{}", stem, PORTRAIT_EXTENSION)
    }
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
    /// `None` when no directory is configured.
    pub fn locate(&self, label: &str) -> Option<Portrait> {
        let path = self.directory.as_ref()?.join(Self::file(label));
        match path.is_file() {
            true => Some(Portrait::Found(path)),
            false => Some(Portrait::Missing(path)),
        }
    }
}

impl From<Option<PathBuf>> for Portraits {
    fn from(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }
}
