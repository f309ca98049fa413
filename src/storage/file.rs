use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tempfile::NamedTempFile;
use tracing::{debug, error};

use crate::task::{Board, Task};

/// Load the board from its JSON file.
///
/// A missing file yields the initial board. An unreadable or unparsable
/// file is logged and also yields the initial board; the caller never sees
/// an error from loading. A parsable file is overlaid on the initial board
/// so that a blob missing some category still produces a complete state.
pub fn load_board(path: &Path) -> Board {
    if !path.exists() {
        debug!(file = %path.display(), "no board file, starting empty");
        return Board::initial();
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            error!(file = %path.display(), %err, "failed to read board, starting empty");
            return Board::initial();
        }
    };

    match serde_json::from_str::<BTreeMap<String, Vec<Task>>>(&raw) {
        Ok(parsed) => Board::initial().overlaid(parsed),
        Err(err) => {
            error!(file = %path.display(), %err, "failed to parse board, starting empty");
            Board::initial()
        }
    }
}

/// Serialize the full board and atomically replace the file, so a crash
/// mid-write never leaves a truncated blob behind.
pub fn save_board(path: &Path, board: &Board) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut temp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer(&mut temp, board)?;
    temp.flush()?;

    temp.persist(path)
        .map_err(|err| anyhow!("failed to persist {}: {}", path.display(), err))?;

    debug!(file = %path.display(), "saved board");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CATEGORIES;
    use crate::task::{Subtask, Task};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_yields_empty_categories() {
        let temp = tempdir().unwrap();
        let board = load_board(&temp.path().join("board.json"));

        for cat in &CATEGORIES {
            assert!(board.tasks(cat.id).is_empty());
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("board.json");

        let mut board = Board::initial();
        let mut task = Task::new("Pray", "Start the day", vec![Subtask::new("Morning")]);
        task.completed = true;
        board.prepend("belief", task);
        board.prepend("core", Task::new("Practice scales", "", vec![]));

        save_board(&path, &board).unwrap();
        assert_eq!(load_board(&path), board);
    }

    #[test]
    fn test_load_corrupt_file_falls_back_to_initial() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("board.json");
        fs::write(&path, "{not json").unwrap();

        assert_eq!(load_board(&path), Board::initial());
    }

    #[test]
    fn test_load_partial_blob_keeps_missing_category_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("board.json");
        fs::write(
            &path,
            r#"{"belief":[{"id":"t1","title":"Pray","description":"","subtasks":[],"completed":false}]}"#,
        )
        .unwrap();

        let board = load_board(&path);
        assert_eq!(board.tasks("belief").len(), 1);
        assert!(board.tasks("core").is_empty());
        assert!(board.tasks("permissible").is_empty());
    }

    #[test]
    fn test_unknown_keys_survive_a_round_trip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("board.json");
        fs::write(
            &path,
            r#"{"someday":[{"id":"t9","title":"Later","description":"","subtasks":[],"completed":false}]}"#,
        )
        .unwrap();

        let board = load_board(&path);
        save_board(&path, &board).unwrap();

        let reloaded = load_board(&path);
        assert_eq!(reloaded.tasks("someday").len(), 1);
        assert_eq!(reloaded.tasks("someday")[0].title, "Later");
    }

    #[test]
    fn test_save_replaces_prior_contents_entirely() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("board.json");

        let mut board = Board::initial();
        board.prepend("core", Task::new("old", "", vec![]));
        save_board(&path, &board).unwrap();

        let removed_id = board.tasks("core")[0].id.clone();
        board.remove("core", &removed_id);
        save_board(&path, &board).unwrap();

        assert!(load_board(&path).tasks("core").is_empty());
    }
}
