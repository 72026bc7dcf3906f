use super::IdStore;
use crate::error::{GistSyncError, Result};
use crate::model::TrackedGist;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// In-memory store for tests. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    ids: BTreeMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a tracked file, as if a gist had been created in an earlier run.
    pub fn with_tracked(mut self, filename: &str, remote_id: &str) -> Self {
        self.ids.insert(filename.to_string(), remote_id.to_string());
        self
    }
}

impl IdStore for InMemoryStore {
    fn exists(&self, filename: &str) -> bool {
        self.ids.contains_key(filename)
    }

    fn read(&self, filename: &str) -> Result<String> {
        self.ids
            .get(filename)
            .cloned()
            .ok_or_else(|| GistSyncError::Store(format!("no id recorded for {}", filename)))
    }

    fn write(&mut self, filename: &str, remote_id: &str) -> Result<()> {
        self.ids.insert(filename.to_string(), remote_id.to_string());
        Ok(())
    }

    fn sidecar_path(&self, filename: &str) -> PathBuf {
        PathBuf::from(format!(".gistids/{}.id", filename))
    }

    fn list(&self) -> Result<Vec<TrackedGist>> {
        Ok(self
            .ids
            .iter()
            .map(|(filename, remote_id)| TrackedGist {
                filename: filename.clone(),
                remote_id: remote_id.clone(),
            })
            .collect())
    }
}
