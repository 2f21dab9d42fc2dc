use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only text log of every submission.
#[derive(Debug, Clone)]
pub struct SubmissionJournal {
    path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
#[error("failed to append to submission journal {path}: {source}")]
pub struct JournalError {
    path: String,
    #[source]
    source: std::io::Error,
}

impl SubmissionJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &str) -> Result<(), JournalError> {
        let wrap = |source| JournalError {
            path: self.path.display().to_string(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(wrap)?;
        file.write_all(entry.as_bytes()).map_err(wrap)
    }
}
