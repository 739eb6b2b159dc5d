//! # roster-core: Employee Compensation Roster
//!
//! An in-memory roster of employee compensation records, the form buffer
//! that edits them, and the Rupiah codec used between the two.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Roster Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (selector, table, form)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ operations ▼   ▲ snapshot             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ roster-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────┐      ┌─────────────┐      ┌─────────────┐    │   │
//! │  │   │    store    │─────►│  currency   │      │    types    │    │   │
//! │  │   │ RosterStore │      │ encode      │      │ Employee    │    │   │
//! │  │   │ Confirmation│      │ decode      │      │ FormBuffer  │    │   │
//! │  │   └─────────────┘      └─────────────┘      └─────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • SINGLE OWNER                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`currency`] - Rupiah codec, raw and display amount types
//! - [`types`] - Employee, FormBuffer, FormField, Role, read models
//! - [`store`] - RosterStore and its confirmations
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use roster_core::{FormField, RosterStore};
//!
//! let mut store = RosterStore::new();
//! store.update_field(FormField::Name, "Budi");
//! store.update_field(FormField::BaseSalary, "3000000");
//! store.update_field(FormField::Allowance, "500000");
//! store.submit();
//!
//! store.select_by_name("Budi");
//! assert_eq!(store.form().base_salary.as_str(), "Rp.3.000.000");
//! assert_eq!(store.selected_total(), "Rp.3.500.000");
//! ```

pub mod currency;
pub mod error;
pub mod store;
pub mod types;

pub use currency::{DisplayAmount, Rupiah};
pub use error::{CoreError, CoreResult};
pub use store::{Confirmation, RosterStore};
pub use types::*;
