//! # Domain Types
//!
//! Records, the form buffer, and the read models handed to the presentation
//! layer.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────────┐                     │
//! │  │     Employee        │   │     FormBuffer      │                     │
//! │  │  ─────────────────  │   │  ─────────────────  │                     │
//! │  │  id (store-owned)   │   │  id: Option         │                     │
//! │  │  name               │   │  name               │                     │
//! │  │  base_salary Rupiah │◄─►│  base_salary Display│                     │
//! │  │  allowance   Rupiah │   │  allowance   Display│                     │
//! │  │  role               │   │  role               │                     │
//! │  │  birth_date         │   │  birth_date         │                     │
//! │  └─────────────────────┘   └─────────────────────┘                     │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────────┐                     │
//! │  │     RosterRow       │   │   RosterSnapshot    │                     │
//! │  │  table line, amounts│   │  records + form +   │                     │
//! │  │  already encoded    │   │  selection + total  │                     │
//! │  └─────────────────────┘   └─────────────────────┘                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::currency::{DisplayAmount, Rupiah};
use crate::error::CoreError;

/// Store-assigned employee identifier. Positive, never reused.
pub type EmployeeId = u32;

// =============================================================================
// Role
// =============================================================================

/// The job titles offered by the role dropdown.
///
/// The store does not enforce this set: `Employee::role` holds whatever
/// string the form submitted. Use [`Role::parse`] to interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Role {
    Admin,
    Programmer,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Programmer];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Programmer => "Programmer",
        }
    }

    /// Dropdown values, including the leading "unset" option.
    ///
    /// ## Example
    /// ```rust
    /// use roster_core::Role;
    ///
    /// assert_eq!(Role::options(), ["", "Admin", "Programmer"]);
    /// ```
    pub const fn options() -> [&'static str; 3] {
        ["", Role::Admin.as_str(), Role::Programmer.as_str()]
    }

    /// Exact match against the dropdown values. Empty and unknown are `None`.
    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Employee
// =============================================================================

/// A roster record.
///
/// Monetary fields are always raw [`Rupiah`]; formatting only happens when
/// a record is rendered or copied into the form buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Employee {
    /// Assigned by the store.
    pub id: EmployeeId,

    /// Display name, also the selector key.
    pub name: String,

    pub base_salary: Rupiah,

    pub allowance: Rupiah,

    /// Role label, stored verbatim (may be empty).
    #[serde(default)]
    pub role: String,

    /// ISO calendar date (`YYYY-MM-DD`) or empty.
    #[serde(default)]
    pub birth_date: String,
}

impl Employee {
    /// Base salary plus allowance.
    #[inline]
    pub fn total_compensation(&self) -> Rupiah {
        self.base_salary + self.allowance
    }

    /// The role, if it is one of the dropdown values.
    pub fn role_kind(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Parses `birth_date`. Empty or malformed dates are `None`.
    ///
    /// ## Example
    /// ```rust
    /// use roster_core::{Employee, Rupiah};
    ///
    /// let ann = Employee {
    ///     id: 1,
    ///     name: "Ann".to_string(),
    ///     base_salary: Rupiah::from_raw(5_000_000),
    ///     allowance: Rupiah::zero(),
    ///     role: "Admin".to_string(),
    ///     birth_date: "1990-04-12".to_string(),
    /// };
    /// let date = ann.birth_date_parsed().unwrap();
    /// assert_eq!(date.to_string(), "1990-04-12");
    /// ```
    pub fn birth_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.birth_date, "%Y-%m-%d").ok()
    }
}

// =============================================================================
// Form Field
// =============================================================================

/// The editable fields of the form buffer.
///
/// `id` is deliberately absent: it is bound by select/begin-edit, never typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum FormField {
    Name,
    BaseSalary,
    Allowance,
    Role,
    BirthDate,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::BaseSalary,
        FormField::Allowance,
        FormField::Role,
        FormField::BirthDate,
    ];

    /// Control name as the presentation layer sends it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::BaseSalary => "baseSalary",
            FormField::Allowance => "allowance",
            FormField::Role => "role",
            FormField::BirthDate => "birthDate",
        }
    }

    /// Monetary fields are re-encoded on every update.
    pub const fn is_monetary(&self) -> bool {
        matches!(self, FormField::BaseSalary | FormField::Allowance)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = CoreError;

    /// Accepts the camelCase control names and their snake_case spellings.
    ///
    /// ## Example
    /// ```rust
    /// use roster_core::FormField;
    ///
    /// assert_eq!("baseSalary".parse::<FormField>().unwrap(), FormField::BaseSalary);
    /// assert_eq!("birth_date".parse::<FormField>().unwrap(), FormField::BirthDate);
    /// assert!("salary".parse::<FormField>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "baseSalary" | "base_salary" => Ok(FormField::BaseSalary),
            "allowance" => Ok(FormField::Allowance),
            "role" => Ok(FormField::Role),
            "birthDate" | "birth_date" => Ok(FormField::BirthDate),
            other => Err(CoreError::UnknownField(other.to_string())),
        }
    }
}

// =============================================================================
// Form Buffer
// =============================================================================

/// The staging record bound to the active create/edit interaction.
///
/// ## Two Modes
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │   id: None          ──── select / begin_edit ────►   id: Some(n)        │
/// │   (new, unsaved)    ◄─── submit / invalidated ────   (bound to n)       │
/// │                                                                         │
/// │   submit() creates                                   submit() updates n │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FormBuffer {
    pub id: Option<EmployeeId>,
    pub name: String,
    pub base_salary: DisplayAmount,
    pub allowance: DisplayAmount,
    pub role: String,
    pub birth_date: String,
}

impl FormBuffer {
    /// A fresh form: unbound, every field empty.
    pub fn empty() -> Self {
        FormBuffer::default()
    }

    /// Copies a record into the form, encoding its amounts.
    pub fn from_employee(employee: &Employee) -> Self {
        FormBuffer {
            id: Some(employee.id),
            name: employee.name.clone(),
            base_salary: DisplayAmount::from_raw(employee.base_salary),
            allowance: DisplayAmount::from_raw(employee.allowance),
            role: employee.role.clone(),
            birth_date: employee.birth_date.clone(),
        }
    }

    /// Whether the form edits an existing record.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == FormBuffer::empty()
    }

    /// Label of the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.is_bound() {
            "Update"
        } else {
            "Add"
        }
    }

    /// Current value of a field as the control displays it.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::BaseSalary => self.base_salary.as_str(),
            FormField::Allowance => self.allowance.as_str(),
            FormField::Role => &self.role,
            FormField::BirthDate => &self.birth_date,
        }
    }

    /// Writes one field. Monetary input is canonicalized, the rest is verbatim.
    ///
    /// ## Example
    /// ```rust
    /// use roster_core::{FormBuffer, FormField};
    ///
    /// let mut form = FormBuffer::empty();
    /// form.set_field(FormField::BaseSalary, "5000000");
    /// form.set_field(FormField::Role, "Programmer");
    /// assert_eq!(form.base_salary.as_str(), "Rp.5.000.000");
    /// assert_eq!(form.role, "Programmer");
    /// ```
    pub fn set_field(&mut self, field: FormField, raw: &str) {
        match field {
            FormField::Name => self.name = raw.to_string(),
            FormField::BaseSalary => self.base_salary = DisplayAmount::from_input(raw),
            FormField::Allowance => self.allowance = DisplayAmount::from_input(raw),
            FormField::Role => self.role = raw.to_string(),
            FormField::BirthDate => self.birth_date = raw.to_string(),
        }
    }

    /// Decodes the form into a record carrying `id`.
    pub fn to_employee(&self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name.clone(),
            base_salary: self.base_salary.decode(),
            allowance: self.allowance.decode(),
            role: self.role.clone(),
            birth_date: self.birth_date.clone(),
        }
    }
}

// =============================================================================
// Read Models
// =============================================================================

/// One line of the roster table, with amounts encoded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RosterRow {
    pub id: EmployeeId,
    pub name: String,
    pub base_salary: String,
    pub allowance: String,
    pub role: String,
    pub birth_date: String,
}

impl From<&Employee> for RosterRow {
    fn from(employee: &Employee) -> Self {
        RosterRow {
            id: employee.id,
            name: employee.name.clone(),
            base_salary: employee.base_salary.encode(),
            allowance: employee.allowance.encode(),
            role: employee.role.clone(),
            birth_date: employee.birth_date.clone(),
        }
    }
}

/// Everything the presentation layer needs to re-render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RosterSnapshot {
    pub records: Vec<Employee>,
    pub form: FormBuffer,
    /// Empty when nothing is selected.
    pub selected_name: String,
    pub current_id: Option<EmployeeId>,
    /// Encoded total compensation of the selected employee.
    pub selected_total: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
