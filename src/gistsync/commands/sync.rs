use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{remote_id_from_url, SyncOutcome, SyncReport};
use crate::runner::{run_first_line, CommandRunner};
use crate::store::IdStore;

/// Sync each filename against its remote gist, in argument order.
///
/// A failure is terminal for that filename only; the loop always continues.
pub fn run<S: IdStore, R: CommandRunner>(
    store: &mut S,
    runner: &R,
    gist_bin: &str,
    filenames: &[String],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for filename in filenames {
        let outcome = process_file(store, runner, gist_bin, filename);
        result.add_message(outcome_message(filename, &outcome));
        result.reports.push(SyncReport::new(filename.clone(), outcome));
    }

    Ok(result)
}

fn process_file<S: IdStore, R: CommandRunner>(
    store: &mut S,
    runner: &R,
    gist_bin: &str,
    filename: &str,
) -> SyncOutcome {
    if store.exists(filename) {
        update_existing(store, runner, gist_bin, filename)
    } else {
        create_new(store, runner, gist_bin, filename)
    }
}

fn update_existing<S: IdStore, R: CommandRunner>(
    store: &S,
    runner: &R,
    gist_bin: &str,
    filename: &str,
) -> SyncOutcome {
    let remote_id = match store.read(filename) {
        Ok(id) => id,
        Err(e) => {
            return SyncOutcome::Failed {
                reason: format!(
                    "can't read {}: {}",
                    store.sidecar_path(filename).display(),
                    e
                ),
            }
        }
    };

    // The update output is ignored; only the exit status matters. The
    // sidecar is left untouched either way, the remote id never changes.
    match runner.run(gist_bin, &["-u", remote_id.as_str(), filename]) {
        Ok(_) => SyncOutcome::Updated { remote_id },
        Err(e) => SyncOutcome::Failed {
            reason: e.to_string(),
        },
    }
}

fn create_new<S: IdStore, R: CommandRunner>(
    store: &mut S,
    runner: &R,
    gist_bin: &str,
    filename: &str,
) -> SyncOutcome {
    let gist_url = match run_first_line(runner, gist_bin, &[filename]) {
        Ok(url) => url,
        Err(e) => {
            return SyncOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    let remote_id = match remote_id_from_url(&gist_url) {
        Ok(id) => id,
        Err(e) => {
            return SyncOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    if let Err(e) = store.write(filename, &remote_id) {
        return SyncOutcome::Failed {
            reason: format!(
                "can't write {}: {}",
                store.sidecar_path(filename).display(),
                e
            ),
        };
    }

    SyncOutcome::Created { remote_id }
}

fn outcome_message(filename: &str, outcome: &SyncOutcome) -> CmdMessage {
    match outcome {
        SyncOutcome::Created { remote_id } => {
            CmdMessage::success(format!("Created gist {} for {}", remote_id, filename))
        }
        SyncOutcome::Updated { remote_id } => {
            CmdMessage::success(format!("Updated gist {} for {}", remote_id, filename))
        }
        SyncOutcome::Failed { reason } => CmdMessage::error(format!("{}: {}", filename, reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::runner::fake::FakeRunner;
    use crate::store::memory::InMemoryStore;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn create_persists_extracted_id() {
        let mut store = InMemoryStore::new();
        let runner = FakeRunner::new().respond(&["https://gist.github.com/user/abcdef123"]);

        let result = run(&mut store, &runner, "gist", &files(&["notes.txt"])).unwrap();

        assert_eq!(
            result.reports[0].outcome,
            SyncOutcome::Created {
                remote_id: "abcdef123".into()
            }
        );
        assert_eq!(store.read("notes.txt").unwrap(), "abcdef123");
        assert_eq!(runner.calls()[0].1, vec!["notes.txt"]);
    }

    #[test]
    fn tracked_file_goes_through_update_mode() {
        let mut store = InMemoryStore::new().with_tracked("notes.txt", "abc123");
        let runner = FakeRunner::new().respond(&["anything"]);

        let result = run(&mut store, &runner, "gist", &files(&["notes.txt"])).unwrap();

        assert_eq!(
            result.reports[0].outcome,
            SyncOutcome::Updated {
                remote_id: "abc123".into()
            }
        );
        assert_eq!(runner.calls()[0].1, vec!["-u", "abc123", "notes.txt"]);
        // Sidecar untouched.
        assert_eq!(store.read("notes.txt").unwrap(), "abc123");
    }

    #[test]
    fn empty_create_output_fails_without_writing() {
        let mut store = InMemoryStore::new();
        let runner = FakeRunner::new().respond(&[]);

        let result = run(&mut store, &runner, "gist", &files(&["notes.txt"])).unwrap();

        assert!(result.reports[0].is_failure());
        assert!(!store.exists("notes.txt"));
        assert!(matches!(
            result.messages[0].level,
            MessageLevel::Error
        ));
    }

    #[test]
    fn create_failure_leaves_store_untouched() {
        let mut store = InMemoryStore::new();
        let runner = FakeRunner::new().respond_err("exit status 1");

        let result = run(&mut store, &runner, "gist", &files(&["notes.txt"])).unwrap();

        assert!(result.reports[0].is_failure());
        assert!(!store.exists("notes.txt"));
    }

    #[test]
    fn update_failure_leaves_sidecar_untouched() {
        let mut store = InMemoryStore::new().with_tracked("notes.txt", "abc123");
        let runner = FakeRunner::new().respond_err("exit status 1");

        let result = run(&mut store, &runner, "gist", &files(&["notes.txt"])).unwrap();

        assert!(result.reports[0].is_failure());
        assert_eq!(store.read("notes.txt").unwrap(), "abc123");
    }

    #[test]
    fn one_failure_does_not_stop_later_files() {
        let mut store = InMemoryStore::new();
        let runner = FakeRunner::new()
            .respond_err("exit status 1")
            .respond(&["https://gist.github.com/user/ok456"]);

        let result = run(&mut store, &runner, "gist", &files(&["bad.txt", "good.txt"])).unwrap();

        assert!(result.reports[0].is_failure());
        assert_eq!(
            result.reports[1].outcome,
            SyncOutcome::Created {
                remote_id: "ok456".into()
            }
        );
        assert_eq!(store.read("good.txt").unwrap(), "ok456");
    }

    #[test]
    fn files_are_processed_in_argument_order() {
        let mut store = InMemoryStore::new().with_tracked("b.txt", "id-b");
        let runner = FakeRunner::new()
            .respond(&["https://gist.github.com/u/id-a"])
            .respond(&["ok"]);

        run(&mut store, &runner, "gist", &files(&["a.txt", "b.txt"])).unwrap();

        let calls = runner.calls();
        assert_eq!(calls[0].1, vec!["a.txt"]);
        assert_eq!(calls[1].1, vec!["-u", "id-b", "b.txt"]);
    }

    #[test]
    fn url_without_slash_is_recorded_as_is() {
        let mut store = InMemoryStore::new();
        let runner = FakeRunner::new().respond(&["bare-id-no-slashes"]);

        run(&mut store, &runner, "gist", &files(&["notes.txt"])).unwrap();

        assert_eq!(store.read("notes.txt").unwrap(), "bare-id-no-slashes");
    }

    #[test]
    fn configured_tool_name_is_used() {
        let mut store = InMemoryStore::new();
        let runner = FakeRunner::new().respond(&["https://gist.github.com/u/x"]);

        run(&mut store, &runner, "my-gist", &files(&["notes.txt"])).unwrap();

        assert_eq!(runner.calls()[0].0, "my-gist");
    }
}
