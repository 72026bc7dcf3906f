use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::IdStore;

/// List every tracked file with its remote id. Read-only.
pub fn run<S: IdStore>(store: &S) -> Result<CmdResult> {
    let tracked = store.list()?;
    let mut result = CmdResult::default().with_tracked(tracked);

    if result.tracked.is_empty() {
        result.add_message(CmdMessage::info("No tracked files."));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_tracked_files() {
        let store = InMemoryStore::new()
            .with_tracked("a.txt", "id-a")
            .with_tracked("b.txt", "id-b");

        let result = run(&store).unwrap();

        assert_eq!(result.tracked.len(), 2);
        assert_eq!(result.tracked[0].filename, "a.txt");
        assert_eq!(result.tracked[0].remote_id, "id-a");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_reports_nothing_tracked() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.tracked.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
