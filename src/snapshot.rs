use std::{fs, path::PathBuf};

use serde_json::Value;

use crate::prelude::*;

/// Destination for the latest reading.
pub trait SnapshotSink {
    /// Human-readable location, quoted in the journal on success.
    fn location(&self) -> String;

    /// Replace the previous reading entirely with the new one.
    fn replace(&mut self, reading: &Value) -> Result;
}

/// Indented JSON at a fixed path, overwritten in place on every success.
///
/// No atomic rename: an external reader may observe a partially written file.
pub struct FileSnapshot {
    path: PathBuf,
}

impl FileSnapshot {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SnapshotSink for FileSnapshot {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn replace(&mut self, reading: &Value) -> Result {
        let contents = serde_json::to_vec_pretty(reading)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write the snapshot to `{}`", self.path.display()))
    }
}
