//! # App Error Type
//!
//! Unified error type for the console shell.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input line ──► Command::parse ──► UnknownCommand / MissingArgument    │
//! │                       │             InvalidId                          │
//! │                       ▼                                                 │
//! │                 Shell::execute ──► Io (writing output)                 │
//! │                                    Json (snapshot dump)                │
//! │                                                                         │
//! │  startup ─────► load_store ──────► Io (seed file), Core (seed data)    │
//! │                                                                         │
//! │  Parse errors are printed and the shell keeps going.                   │
//! │  Startup and I/O errors end the process.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use roster_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Not a valid employee id: {0}")]
    InvalidId(String),
}

impl AppError {
    /// Errors the shell reports and recovers from.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::UnknownCommand(_)
                | AppError::MissingArgument { .. }
                | AppError::InvalidId(_)
                | AppError::Core(CoreError::UnknownField(_))
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
