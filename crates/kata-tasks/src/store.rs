use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Task store errors.
///
/// The display strings double as the user-facing messages, so the REPL can
/// print them as-is.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Invalid task.")]
    InvalidTask,

    #[error("Invalid task number.")]
    InvalidTaskNumber,

    #[error("Task file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Line-oriented task storage: one task per line, identified by 1-based
/// position.
///
/// Mutations rewrite the whole file (read all, compute, overwrite). There is
/// no atomicity guarantee: a crash mid-write can truncate the file. Only one
/// process is expected to touch the file at a time; no locking is done.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Return all tasks in order. A missing or empty file is an empty list.
    pub fn list(&self) -> Result<Vec<String>, TaskError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        Ok(contents.lines().map(str::to_string).collect())
    }

    /// Append a task. Blank or whitespace-only text is rejected without
    /// touching the file.
    pub fn add(&self, text: &str) -> Result<(), TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::InvalidTask);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", text)?;

        tracing::debug!(path = %self.path.display(), "task added");
        Ok(())
    }

    /// Remove the task at 1-based `index`, keeping the relative order of the
    /// rest.
    pub fn remove_at(&self, index: usize) -> Result<(), TaskError> {
        let tasks = self.list()?;
        if !is_valid_task_number(index, tasks.len()) {
            return Err(TaskError::InvalidTaskNumber);
        }

        let remaining: Vec<&str> = tasks
            .iter()
            .enumerate()
            .filter(|(i, _)| i + 1 != index)
            .map(|(_, task)| task.as_str())
            .collect();

        self.overwrite(&remaining)?;

        tracing::debug!(index, "task removed");
        Ok(())
    }

    /// Replace the task at 1-based `index` with `text`, under the same
    /// validation as `add` and `remove_at`.
    pub fn edit_at(&self, index: usize, text: &str) -> Result<(), TaskError> {
        let tasks = self.list()?;
        if !is_valid_task_number(index, tasks.len()) {
            return Err(TaskError::InvalidTaskNumber);
        }

        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::InvalidTask);
        }

        let updated: Vec<&str> = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| if i + 1 == index { text } else { task.as_str() })
            .collect();

        self.overwrite(&updated)?;

        tracing::debug!(index, "task edited");
        Ok(())
    }

    // Whole-file rewrite. Not atomic; see the type-level docs.
    fn overwrite(&self, tasks: &[&str]) -> Result<(), TaskError> {
        let mut contents = tasks.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

fn is_valid_task_number(index: usize, len: usize) -> bool {
    (1..=len).contains(&index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::new(dir.path().join("to-do-list.txt"))
    }

    #[test]
    fn test_list_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_then_list_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add("buy milk").unwrap();
        store.add("call mom").unwrap();

        assert_eq!(store.list().unwrap(), vec!["buy milk", "call mom"]);
    }

    #[test]
    fn test_add_rejects_blank_without_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add("buy milk").unwrap();

        assert!(matches!(store.add(""), Err(TaskError::InvalidTask)));
        assert!(matches!(store.add("   \t"), Err(TaskError::InvalidTask)));
        assert_eq!(store.list().unwrap(), vec!["buy milk"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        for task in ["a", "b", "c", "d"] {
            store.add(task).unwrap();
        }

        store.remove_at(2).unwrap();

        assert_eq!(store.list().unwrap(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_first_of_two() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add("buy milk").unwrap();
        store.add("call mom").unwrap();

        store.remove_at(1).unwrap();

        assert_eq!(store.list().unwrap(), vec!["call mom"]);
    }

    #[test]
    fn test_remove_invalid_index() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add("only task").unwrap();

        assert!(matches!(
            store.remove_at(0),
            Err(TaskError::InvalidTaskNumber)
        ));
        assert!(matches!(
            store.remove_at(2),
            Err(TaskError::InvalidTaskNumber)
        ));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_edit_replaces_only_target_position() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        for task in ["a", "b", "c"] {
            store.add(task).unwrap();
        }

        store.edit_at(2, "b2").unwrap();

        assert_eq!(store.list().unwrap(), vec!["a", "b2", "c"]);
    }

    #[test]
    fn test_edit_rejects_blank_text() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add("a").unwrap();

        assert!(matches!(store.edit_at(1, "  "), Err(TaskError::InvalidTask)));
        assert_eq!(store.list().unwrap(), vec!["a"]);
    }

    #[test]
    fn test_edit_invalid_index_before_text_check() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            store.edit_at(1, "anything"),
            Err(TaskError::InvalidTaskNumber)
        ));
    }
}
