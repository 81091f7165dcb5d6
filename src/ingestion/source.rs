use super::types::{Corpus, InputSource};
use crate::config::InputLocation;
use crate::error::{Result, WordCountError};

use std::path::Path;

const SAMPLE_TEXT: &str = include_str!("../../data/sample.txt");

/// Loads the corpus named by `location`.
///
/// An explicit location that does not exist is an error. A default location
/// that does not exist falls back to the bundled sample.
pub fn load_corpus(location: &InputLocation) -> Result<Corpus> {
    match location {
        InputLocation::Explicit(path) => {
            if !path.exists() {
                return Err(WordCountError::InputNotFound { path: path.clone() });
            }
            read_file(path)
        }
        InputLocation::Default(path) => {
            if path.exists() {
                read_file(path)
            } else {
                tracing::info!("Using sample text data");
                Ok(sample_corpus())
            }
        }
    }
}

pub fn sample_corpus() -> Corpus {
    Corpus {
        source: InputSource::Bundled,
        lines: clean_lines(SAMPLE_TEXT),
    }
}

/// Trims every line and drops the blank ones.
pub fn clean_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_file(path: &Path) -> Result<Corpus> {
    tracing::info!(file_path = %path.display(), "Reading input from file");

    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            WordCountError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            WordCountError::InputUnreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    Ok(Corpus {
        source: InputSource::File(path.to_path_buf()),
        lines: clean_lines(&text),
    })
}
