//! # API facade
//!
//! Thin dispatch over the command layer and the single entry point for all
//! gistsync operations. Generic over [`IdStore`] and [`CommandRunner`] so the
//! same facade serves production (`FileStore` + `SystemRunner`) and tests
//! (`InMemoryStore` + `FakeRunner`). No business logic, no terminal I/O.

use crate::commands;
use crate::commands::ConfigAction;
use crate::config::GistSyncConfig;
use crate::error::Result;
use crate::runner::CommandRunner;
use crate::store::IdStore;
use std::path::PathBuf;

pub struct GistSyncApi<S: IdStore, R: CommandRunner> {
    store: S,
    runner: R,
    config: GistSyncConfig,
    config_dir: PathBuf,
}

impl<S: IdStore, R: CommandRunner> GistSyncApi<S, R> {
    pub fn new(store: S, runner: R, config: GistSyncConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            runner,
            config,
            config_dir,
        }
    }

    pub fn sync_files(&mut self, filenames: &[String]) -> Result<commands::CmdResult> {
        commands::sync::run(
            &mut self.store,
            &self.runner,
            &self.config.gist_bin,
            filenames,
        )
    }

    pub fn status(&self) -> Result<commands::CmdResult> {
        commands::status::run(&self.store)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SyncOutcome;
    use crate::runner::fake::FakeRunner;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api(
        store: InMemoryStore,
        runner: FakeRunner,
        temp: &TempDir,
    ) -> GistSyncApi<InMemoryStore, FakeRunner> {
        GistSyncApi::new(
            store,
            runner,
            GistSyncConfig::default(),
            temp.path().to_path_buf(),
        )
    }

    #[test]
    fn sync_dispatches_with_configured_tool() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::new().respond(&["https://gist.github.com/u/abc"]);
        let mut api = api(InMemoryStore::new(), runner, &temp);

        let result = api.sync_files(&["notes.txt".to_string()]).unwrap();

        assert_eq!(
            result.reports[0].outcome,
            SyncOutcome::Created {
                remote_id: "abc".into()
            }
        );
    }

    #[test]
    fn status_dispatches_to_store() {
        let temp = TempDir::new().unwrap();
        let store = InMemoryStore::new().with_tracked("a.txt", "id-a");
        let api = api(store, FakeRunner::new(), &temp);

        let result = api.status().unwrap();
        assert_eq!(result.tracked.len(), 1);
    }

    #[test]
    fn config_set_updates_the_live_config() {
        let temp = TempDir::new().unwrap();
        let mut api = api(InMemoryStore::new(), FakeRunner::new(), &temp);

        api.config(ConfigAction::SetTool("fake-gist".into())).unwrap();
        let result = api.config(ConfigAction::ShowAll).unwrap();

        assert_eq!(result.config.unwrap().gist_bin, "fake-gist");
    }
}
