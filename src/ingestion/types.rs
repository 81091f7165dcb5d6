use std::fmt;
use std::path::PathBuf;

/// Where a loaded corpus came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    /// The sample corpus compiled into the binary.
    Bundled,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Bundled => write!(f, "bundled sample"),
        }
    }
}

/// A cleaned corpus: trimmed, non-blank lines in file order.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub source: InputSource,
    pub lines: Vec<String>,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
