//! Prompt loop for the task list.

use crate::command::Command;
use crate::store::{TaskError, TaskStore};
use std::io::{BufRead, Write};

const COMMAND_PROMPT: &str = "Enter a command: ";
const TASK_PROMPT: &str = "Enter a new task: ";
const TASK_NUMBER_PROMPT: &str = "Enter a task number: ";

const EMPTY_TASKS_MESSAGE: &str = "No tasks.";
const UNKNOWN_COMMAND_MESSAGE: &str = "Command does not exist.";
const INVALID_TASK_NUMBER_MESSAGE: &str = "Invalid task number.";

const HELP_MESSAGE: &str = "Commands
add: Add a task.
remove (rm): Remove a task.
edit (replace, r): Edit a task.
list (ls): List all tasks.
quit (q): Quit program.
help (h): Help.
";

/// Run the command loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    store: &TaskStore,
    mut reader: R,
    mut writer: W,
) -> Result<(), TaskError> {
    loop {
        let Some(input) = prompt(&mut reader, &mut writer, COMMAND_PROMPT)? else {
            return Ok(());
        };

        match Command::parse(&input) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Help) => writeln!(writer, "{}", HELP_MESSAGE)?,
            Some(Command::List) => list_tasks(store, &mut writer)?,
            Some(Command::Add) => add_task(store, &mut reader, &mut writer)?,
            Some(Command::Remove) => remove_task(store, &mut reader, &mut writer)?,
            Some(Command::Edit) => edit_task(store, &mut reader, &mut writer)?,
            None => writeln!(writer, "{}", UNKNOWN_COMMAND_MESSAGE)?,
        }
    }
}

fn list_tasks<W: Write>(store: &TaskStore, writer: &mut W) -> Result<(), TaskError> {
    let tasks = store.list()?;

    if tasks.is_empty() {
        writeln!(writer, "{}", EMPTY_TASKS_MESSAGE)?;
        return Ok(());
    }

    for (i, task) in tasks.iter().enumerate() {
        writeln!(writer, "{}. {}", i + 1, task)?;
    }
    Ok(())
}

fn add_task<R: BufRead, W: Write>(
    store: &TaskStore,
    reader: &mut R,
    writer: &mut W,
) -> Result<(), TaskError> {
    let Some(text) = prompt(reader, writer, TASK_PROMPT)? else {
        return Ok(());
    };

    report(store.add(&text), writer)
}

fn remove_task<R: BufRead, W: Write>(
    store: &TaskStore,
    reader: &mut R,
    writer: &mut W,
) -> Result<(), TaskError> {
    let Some(number) = prompt_task_number(reader, writer)? else {
        return Ok(());
    };

    report(store.remove_at(number), writer)
}

fn edit_task<R: BufRead, W: Write>(
    store: &TaskStore,
    reader: &mut R,
    writer: &mut W,
) -> Result<(), TaskError> {
    let Some(number) = prompt_task_number(reader, writer)? else {
        return Ok(());
    };

    // Validate the number before asking for replacement text, so a bad
    // number never triggers the second prompt.
    if !(1..=store.list()?.len()).contains(&number) {
        writeln!(writer, "{}", INVALID_TASK_NUMBER_MESSAGE)?;
        return Ok(());
    }

    let Some(text) = prompt(reader, writer, TASK_PROMPT)? else {
        return Ok(());
    };

    report(store.edit_at(number, &text), writer)
}

/// Print validation failures and keep the loop alive; propagate I/O errors.
fn report<W: Write>(result: Result<(), TaskError>, writer: &mut W) -> Result<(), TaskError> {
    match result {
        Ok(()) => Ok(()),
        Err(e @ (TaskError::InvalidTask | TaskError::InvalidTaskNumber)) => {
            writeln!(writer, "{}", e)?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Prompt for a 1-based task number; `Ok(None)` on end of input.
/// Unparseable input is reported like an out-of-range number.
fn prompt_task_number<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<Option<usize>, TaskError> {
    let Some(input) = prompt(reader, writer, TASK_NUMBER_PROMPT)? else {
        return Ok(None);
    };

    match input.trim().parse::<usize>() {
        Ok(number) => Ok(Some(number)),
        Err(_) => {
            writeln!(writer, "{}", INVALID_TASK_NUMBER_MESSAGE)?;
            Ok(None)
        }
    }
}

/// Write a prompt and read one line; `Ok(None)` on end of input.
fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    text: &str,
) -> Result<Option<String>, TaskError> {
    write!(writer, "{}", text)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_repl(store: &TaskStore, input: &str) -> String {
        let mut output = Vec::new();
        run(store, Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn store_in(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::new(dir.path().join("to-do-list.txt"))
    }

    #[test]
    fn test_add_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let output = run_repl(&store, "add\nbuy milk\nadd\ncall mom\nlist\nquit\n");

        assert!(output.contains("1. buy milk"));
        assert!(output.contains("2. call mom"));
    }

    #[test]
    fn test_list_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let output = run_repl(&store, "ls\nq\n");

        assert!(output.contains("No tasks."));
    }

    #[test]
    fn test_remove_by_number() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add("buy milk").unwrap();
        store.add("call mom").unwrap();

        let output = run_repl(&store, "rm\n1\nlist\nquit\n");

        assert!(output.contains("1. call mom"));
        assert!(!output.contains("buy milk"));
        assert_eq!(store.list().unwrap(), vec!["call mom"]);
    }

    #[test]
    fn test_remove_non_numeric_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add("keep me").unwrap();

        let output = run_repl(&store, "remove\nabc\nquit\n");

        assert!(output.contains("Invalid task number."));
        assert_eq!(store.list().unwrap(), vec!["keep me"]);
    }

    #[test]
    fn test_edit_bad_number_skips_text_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add("only").unwrap();

        let output = run_repl(&store, "edit\n5\nquit\n");

        assert!(output.contains("Invalid task number."));
        assert!(!output.contains("Enter a new task:"));
    }

    #[test]
    fn test_edit_replaces_task() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add("old text").unwrap();

        run_repl(&store, "replace\n1\nnew text\nq\n");

        assert_eq!(store.list().unwrap(), vec!["new text"]);
    }

    #[test]
    fn test_unknown_command() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let output = run_repl(&store, "delete\nquit\n");

        assert!(output.contains("Command does not exist."));
    }

    #[test]
    fn test_help_lists_commands() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let output = run_repl(&store, "h\nq\n");

        assert!(output.contains("add: Add a task."));
        assert!(output.contains("quit (q): Quit program."));
    }

    #[test]
    fn test_eof_ends_loop() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let output = run_repl(&store, "add\n");

        assert!(output.contains("Enter a new task: "));
    }

    #[test]
    fn test_blank_task_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let output = run_repl(&store, "add\n   \nlist\nquit\n");

        assert!(output.contains("Invalid task."));
        assert!(output.contains("No tasks."));
    }
}
