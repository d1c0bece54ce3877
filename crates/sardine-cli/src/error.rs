//! Errors raised by the interactive shell.

use thiserror::Error;

/// Result type for shell commands.
pub type ShellResult<T> = Result<T, ShellError>;

/// Problems with what the user typed.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The command was recognised but its argument was not.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// The command was not recognised.
    #[error("unknown command: {0} (type 'help')")]
    UnknownCommand(String),
}
