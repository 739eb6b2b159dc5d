//! # Error Types
//!
//! Domain-specific error types for roster-core.
//!
//! ## Where Errors Can Occur
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Surface                                   │
//! │                                                                         │
//! │  Roster operations (select, begin_edit, update_field, submit, delete)  │
//! │  └── TOTAL: never fail, non-matches are reported as no-ops             │
//! │                                                                         │
//! │  Edges (this file)                                                     │
//! │  ├── FormField::from_str   - unknown field name                        │
//! │  ├── RosterStore::with_records - duplicate or zero ids in seed data    │
//! │  └── RosterStore::from_json    - malformed seed JSON                   │
//! │                                                                         │
//! │  Console app errors (separate crate)                                   │
//! │  └── AppError              - wraps CoreError, io, json                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Core roster errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A field name that the form buffer does not have.
    ///
    /// ## When This Occurs
    /// - The presentation layer sends a control name with a typo
    /// - A scripted command names a field that doesn't exist
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// Two seed records share the same id.
    #[error("Duplicate employee id: {0}")]
    DuplicateId(u32),

    /// Ids are positive; zero is never assigned.
    #[error("Employee id must be positive, got {0}")]
    InvalidId(u32),

    /// Seed data is not a JSON array of employee records.
    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
