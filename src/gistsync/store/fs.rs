use super::IdStore;
use crate::error::{GistSyncError, Result};
use crate::model::TrackedGist;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Production store: one `<filename>.id` sidecar per tracked file inside the
/// dotfolder (`.gistids` by default).
pub struct FileStore {
    id_dir: PathBuf,
}

impl FileStore {
    pub fn new(id_dir: impl Into<PathBuf>) -> Self {
        Self {
            id_dir: id_dir.into(),
        }
    }

    pub fn id_dir(&self) -> &Path {
        &self.id_dir
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(GistSyncError::Io)?;
            }
        }
        Ok(())
    }

    fn collect_tracked(&self, dir: &Path, tracked: &mut Vec<TrackedGist>) -> Result<()> {
        for entry in fs::read_dir(dir).map_err(GistSyncError::Io)? {
            let entry = entry.map_err(GistSyncError::Io)?;
            let path = entry.path();
            if path.is_dir() {
                self.collect_tracked(&path, tracked)?;
                continue;
            }
            let Some(name) = path.to_str() else { continue };
            if !name.ends_with(".id") {
                continue;
            }
            let rel = path
                .strip_prefix(&self.id_dir)
                .map_err(|_| GistSyncError::Store(format!("unexpected sidecar path: {}", name)))?;
            let rel = rel.to_string_lossy();
            let filename = rel[..rel.len() - ".id".len()].to_string();
            let remote_id = self.read(&filename)?;
            tracked.push(TrackedGist {
                filename,
                remote_id,
            });
        }
        Ok(())
    }
}

impl IdStore for FileStore {
    fn exists(&self, filename: &str) -> bool {
        // Only a confirmed NotFound counts as absent; a permission error on
        // the probe must not trigger a duplicate create.
        match fs::metadata(self.sidecar_path(filename)) {
            Ok(_) => true,
            Err(e) => e.kind() != ErrorKind::NotFound,
        }
    }

    fn read(&self, filename: &str) -> Result<String> {
        let content =
            fs::read_to_string(self.sidecar_path(filename)).map_err(GistSyncError::Io)?;
        Ok(content.lines().next().unwrap_or("").to_string())
    }

    fn write(&mut self, filename: &str, remote_id: &str) -> Result<()> {
        let path = self.sidecar_path(filename);
        self.ensure_parent(&path)?;
        fs::write(path, remote_id).map_err(GistSyncError::Io)?;
        Ok(())
    }

    fn sidecar_path(&self, filename: &str) -> PathBuf {
        // An absolute filename must not make `join` discard the dotfolder;
        // its path is replayed underneath it instead.
        let rel = filename.trim_start_matches('/');
        self.id_dir.join(format!("{}.id", rel))
    }

    fn list(&self) -> Result<Vec<TrackedGist>> {
        if !self.id_dir.exists() {
            return Ok(Vec::new());
        }
        let mut tracked = Vec::new();
        self.collect_tracked(&self.id_dir.clone(), &mut tracked)?;
        tracked.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(tracked)
    }
}
