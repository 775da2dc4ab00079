use std::{fs::OpenOptions, io::Write, path::PathBuf};

use chrono::Local;

use crate::prelude::*;

/// Append-only sink for the poll journal.
pub trait Journal {
    fn append(&mut self, message: &str) -> Result;
}

/// One `<timestamp> - <message>` line per entry, never rotated or truncated.
pub struct FileJournal {
    path: PathBuf,
}

impl FileJournal {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Journal for FileJournal {
    /// The file is opened and closed per entry, so no handle outlives an iteration.
    fn append(&mut self, message: &str) -> Result {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open the journal at `{}`", self.path.display()))?;
        writeln!(
            file,
            "{timestamp} - {message}",
            timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
        )?;
        Ok(())
    }
}
