use crate::error::{GistSyncError, Result};

/// A local file with a recorded remote gist id.
///
/// A `TrackedGist` exists for a filename if and only if a gist has previously
/// been created for that file by this tool. The remote id never changes on
/// update, so the record is written exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedGist {
    pub filename: String,
    pub remote_id: String,
}

/// Terminal outcome of processing a single filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A new gist was created and its id persisted.
    Created { remote_id: String },
    /// An existing gist was updated; the store was not touched.
    Updated { remote_id: String },
    /// Processing aborted for this file; no store mutation.
    Failed { reason: String },
}

/// One filename's result within a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub filename: String,
    pub outcome: SyncOutcome,
}

impl SyncReport {
    pub fn new(filename: impl Into<String>, outcome: SyncOutcome) -> Self {
        Self {
            filename: filename.into(),
            outcome,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, SyncOutcome::Failed { .. })
    }
}

/// Extracts the remote gist id from the URL the gist tool prints on create.
///
/// The id is the final `/`-separated path segment. A URL containing no `/` is
/// accepted as-is and yields the whole string; only empty output is rejected.
pub fn remote_id_from_url(url: &str) -> Result<String> {
    if url.is_empty() {
        return Err(GistSyncError::Parse("empty output".to_string()));
    }
    let id = url.rsplit('/').next().unwrap_or(url);
    Ok(id.to_string())
}
