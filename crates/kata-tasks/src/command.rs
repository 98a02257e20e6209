/// A task-list command token. Input is trimmed and case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    List,
    Edit,
    Help,
    Quit,
}

impl Command {
    /// Parse a command line; `None` means the command does not exist.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "add" => Some(Self::Add),
            "remove" | "rm" => Some(Self::Remove),
            "list" | "ls" => Some(Self::List),
            "edit" | "replace" | "r" => Some(Self::Edit),
            "help" | "h" => Some(Self::Help),
            "quit" | "q" => Some(Self::Quit),
            _ => None,
        }
    }
}
