//! # Identifier storage
//!
//! The store maps a tracked filename to the remote gist id recorded for it.
//! Storage is abstracted behind the [`IdStore`] trait so the command layer can
//! be tested against [`memory::InMemoryStore`] without touching the
//! filesystem; [`fs::FileStore`] is the production backend.
//!
//! ## On-disk format (`FileStore`)
//!
//! ```text
//! .gistids/
//! ├── notes.txt.id        # contains exactly the remote id, no newline
//! └── snippet.rs.id
//! ```
//!
//! One sidecar file per tracked filename, named `<filename>.id`, holding the
//! remote id as plain text. The store only ever writes inside the dotfolder;
//! the tracked files themselves are never touched.

use crate::error::Result;
use crate::model::TrackedGist;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for remote-id storage.
pub trait IdStore {
    /// True iff a sidecar exists for `filename`. Probe errors other than
    /// "confirmed absent" count as existing, so a create is never attempted
    /// for a file that may already be tracked.
    fn exists(&self, filename: &str) -> bool;

    /// Read the recorded remote id: the first line of the sidecar with the
    /// terminator stripped. An empty sidecar yields an empty string.
    fn read(&self, filename: &str) -> Result<String>;

    /// Record the remote id for `filename`, creating the dotfolder if needed.
    /// Writes the id verbatim, no trailing newline.
    fn write(&mut self, filename: &str, remote_id: &str) -> Result<()>;

    /// Path of the sidecar for `filename`, for diagnostics.
    fn sidecar_path(&self, filename: &str) -> PathBuf;

    /// All tracked files with their ids. An absent dotfolder is an empty list.
    fn list(&self) -> Result<Vec<TrackedGist>>;
}
