//! Flat-file to-do list for the kata suite.
//!
//! Tasks are lines of free text in a plain text file; a task's 1-based
//! position in the file is its only identifier.

pub mod command;
pub mod repl;
pub mod store;

pub use command::Command;
pub use repl::run;
pub use store::{TaskError, TaskStore};
