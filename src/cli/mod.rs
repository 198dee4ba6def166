use thiserror::Error;

pub mod commands;
pub mod forms;
pub mod output;
mod shell;
pub mod shell_context;
pub mod theme;
pub mod ui;

pub use shell::run_cli;

use crate::core::errors::ExpenseError;

/// Top-level failures that abort the shell loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Expense(#[from] ExpenseError),
}
