//! # Roster Store
//!
//! Owns the employee roster, the form buffer, and the selection, and keeps
//! the buffer in step with both.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Roster Store Operations                              │
//! │                                                                         │
//! │  User Action            Store Operation          State Change           │
//! │  ───────────            ───────────────          ────────────           │
//! │                                                                         │
//! │  Pick in selector ─────► select_by_name() ──────► selection, form      │
//! │                                                                         │
//! │  Click "Edit" ─────────► begin_edit() ──────────► form, current_id     │
//! │                                                                         │
//! │  Type in a field ──────► update_field() ────────► form (one field)     │
//! │                                                                         │
//! │  Click Add/Update ─────► submit() ──────────────► records, reset       │
//! │                                                                         │
//! │  Click "Delete" ───────► delete_by_id() ────────► records, refresh     │
//! │                                                                         │
//! │  NOTE: Every roster mutation re-derives the form from the selection     │
//! │        before returning, so the form never shows a stale record.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Id Assignment
//! Ids come from a monotonic counter that is never rewound, so an id freed
//! by a delete is never handed out again.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};
use ts_rs::TS;

use crate::currency::Rupiah;
use crate::error::{CoreError, CoreResult};
use crate::types::{Employee, EmployeeId, FormBuffer, FormField, RosterRow, RosterSnapshot};

// =============================================================================
// Confirmation
// =============================================================================

/// User-visible outcome of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum Confirmation {
    /// `submit()` created a record.
    Added { id: EmployeeId },
    /// `submit()` replaced a record.
    Updated { id: EmployeeId },
    /// `delete_by_id()` removed a record.
    Deleted { id: EmployeeId },
    /// `submit()` was bound to an id that no longer exists; nothing written.
    Stale { id: EmployeeId },
}

impl Confirmation {
    pub fn id(&self) -> EmployeeId {
        match *self {
            Confirmation::Added { id }
            | Confirmation::Updated { id }
            | Confirmation::Deleted { id }
            | Confirmation::Stale { id } => id,
        }
    }

    /// The alert text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Confirmation::Added { .. } => "Data berhasil ditambahkan!",
            Confirmation::Updated { .. } => "Data berhasil diperbarui!",
            Confirmation::Deleted { .. } => "Data berhasil dihapus!",
            Confirmation::Stale { .. } => "Data tidak ditemukan!",
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// =============================================================================
// Roster Store
// =============================================================================

/// An in-memory roster with its bound form.
///
/// ## Invariants
/// - Record ids are unique and positive
/// - Records only ever hold raw [`Rupiah`] amounts
/// - After a selection or a roster mutation, `form` is the selected record
///   (encoded), or empty when nothing is selected
/// - Ids are never reused, whatever the create/delete interleaving
///
/// ## Example
/// ```rust
/// use roster_core::{Confirmation, FormField, RosterStore};
///
/// let mut store = RosterStore::new();
/// store.update_field(FormField::Name, "Ann");
/// store.update_field(FormField::BaseSalary, "5000000");
/// assert_eq!(store.submit(), Confirmation::Added { id: 1 });
///
/// assert_eq!(store.records()[0].base_salary.raw(), 5_000_000);
/// assert!(store.form().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RosterStore {
    records: Vec<Employee>,
    form: FormBuffer,
    selected_name: String,
    current_id: Option<EmployeeId>,
    next_id: EmployeeId,
}

impl RosterStore {
    /// Creates an empty roster.
    pub fn new() -> Self {
        RosterStore {
            records: Vec::new(),
            form: FormBuffer::empty(),
            selected_name: String::new(),
            current_id: None,
            next_id: 1,
        }
    }

    /// Creates a roster pre-populated with existing records.
    ///
    /// Ids must be positive and unique. New records continue after the
    /// highest seeded id.
    pub fn with_records(records: Vec<Employee>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id == 0 {
                return Err(CoreError::InvalidId(record.id));
            }
            if !seen.insert(record.id) {
                return Err(CoreError::DuplicateId(record.id));
            }
        }

        let next_id = records
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));

        debug!(count = records.len(), next_id = %next_id, "Seeding roster");

        Ok(RosterStore {
            records,
            next_id,
            ..RosterStore::new()
        })
    }

    /// Parses a JSON array of records and seeds a roster with it.
    ///
    /// ## Example
    /// ```rust
    /// use roster_core::RosterStore;
    ///
    /// let json = r#"[{"id":4,"name":"Sari","baseSalary":2000000,"allowance":250000}]"#;
    /// let store = RosterStore::from_json(json).unwrap();
    /// assert_eq!(store.total_compensation("Sari"), "Rp.2.250.000");
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let records: Vec<Employee> =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidSeed(e.to_string()))?;
        RosterStore::with_records(records)
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// Records in roster order.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn form(&self) -> &FormBuffer {
        &self.form
    }

    /// The selector value; empty when nothing is selected.
    pub fn selected_name(&self) -> &str {
        &self.selected_name
    }

    /// Id remembered by the last `begin_edit`, cleared by `submit`.
    pub fn current_id(&self) -> Option<EmployeeId> {
        self.current_id
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|r| r.id == id)
    }

    /// First record with this name.
    pub fn find_by_name(&self, name: &str) -> Option<&Employee> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names offered by the selector, in roster order.
    pub fn selector_options(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Table lines with encoded amounts.
    pub fn rows(&self) -> Vec<RosterRow> {
        self.records.iter().map(RosterRow::from).collect()
    }

    /// Encoded base salary plus allowance of the named employee.
    ///
    /// Unknown names give the zero amount, `"Rp.0"`.
    pub fn total_compensation(&self, name: &str) -> String {
        self.find_by_name(name)
            .map_or(Rupiah::zero(), Employee::total_compensation)
            .encode()
    }

    /// Total compensation of the selected employee.
    pub fn selected_total(&self) -> String {
        self.total_compensation(&self.selected_name)
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            records: self.records.clone(),
            form: self.form.clone(),
            selected_name: self.selected_name.clone(),
            current_id: self.current_id,
            selected_total: self.selected_total(),
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Selects a record by name and mirrors it into the form.
    ///
    /// An empty or unknown name resets the form to empty.
    pub fn select_by_name(&mut self, name: &str) {
        debug!(name = %name, "Selecting employee");
        self.selected_name = name.to_string();
        self.refresh_form();
    }

    /// Drops the selection. Same as selecting `""`.
    pub fn clear_selection(&mut self) {
        self.select_by_name("");
    }

    /// Loads a record into the form for editing, regardless of selection.
    ///
    /// Returns `false`, leaving everything untouched, if `id` is unknown.
    pub fn begin_edit(&mut self, id: EmployeeId) -> bool {
        let Some(employee) = self.get(id) else {
            warn!(id = %id, "begin_edit on unknown employee ignored");
            return false;
        };

        debug!(id = %id, "Editing employee");
        self.form = FormBuffer::from_employee(employee);
        self.current_id = Some(id);
        true
    }

    /// Writes one form field. Amounts are canonicalized as they are typed.
    pub fn update_field(&mut self, field: FormField, raw: &str) {
        self.form.set_field(field, raw);
        debug!(field = %field, value = %self.form.field(field), "Form field updated");
    }

    /// [`update_field`](Self::update_field) keyed by control name.
    ///
    /// Unknown names are ignored and reported as `false`.
    pub fn update_field_by_name(&mut self, field: &str, raw: &str) -> bool {
        match field.parse::<FormField>() {
            Ok(field) => {
                self.update_field(field, raw);
                true
            }
            Err(err) => {
                warn!(error = %err, "Form update ignored");
                false
            }
        }
    }

    /// Writes the form back into the roster.
    ///
    /// ## Behavior
    /// - Bound form (`id: Some`): replaces that record in place
    /// - Unbound form (`id: None`): appends a record with a fresh id
    /// - Bound to an id missing from the roster: nothing written, `Stale`
    ///
    /// Afterwards the form is empty and the selection cleared.
    pub fn submit(&mut self) -> Confirmation {
        let form = std::mem::take(&mut self.form);

        let confirmation = match form.id {
            Some(id) => match self.records.iter_mut().find(|r| r.id == id) {
                Some(record) => {
                    *record = form.to_employee(id);
                    debug!(id = %id, "Employee updated");
                    Confirmation::Updated { id }
                }
                None => {
                    warn!(id = %id, "Submit bound to a missing employee, discarded");
                    Confirmation::Stale { id }
                }
            },
            None => {
                let id = self.allocate_id();
                self.records.push(form.to_employee(id));
                debug!(id = %id, "Employee added");
                Confirmation::Added { id }
            }
        };

        self.current_id = None;
        self.selected_name.clear();
        self.refresh_form();

        confirmation
    }

    /// Removes a record by id.
    ///
    /// Returns `None` if no record had that id. On success the form is
    /// re-derived from the selection: with no selection, or with the deleted
    /// record selected, it ends up empty.
    pub fn delete_by_id(&mut self, id: EmployeeId) -> Option<Confirmation> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);

        if self.records.len() == before {
            warn!(id = %id, "delete on unknown employee ignored");
            return None;
        }

        debug!(id = %id, remaining = self.records.len(), "Employee deleted");
        self.refresh_form();
        Some(Confirmation::Deleted { id })
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn allocate_id(&mut self) -> EmployeeId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Form := selected record (encoded), or empty if there is none.
    fn refresh_form(&mut self) {
        self.form = if self.selected_name.is_empty() {
            FormBuffer::empty()
        } else {
            self.find_by_name(&self.selected_name)
                .map(FormBuffer::from_employee)
                .unwrap_or_default()
        };
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: EmployeeId, name: &str, base: u64, allowance: u64) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            base_salary: Rupiah::from_raw(base),
            allowance: Rupiah::from_raw(allowance),
            role: "Admin".to_string(),
            birth_date: "1990-01-01".to_string(),
        }
    }

    fn seeded() -> RosterStore {
        RosterStore::with_records(vec![
            employee(1, "Ann", 5_000_000, 1_000_000),
            employee(2, "Budi", 3_000_000, 500_000),
            employee(3, "Citra", 4_000_000, 0),
        ])
        .unwrap()
    }

    fn add(store: &mut RosterStore, name: &str, base: &str) -> Confirmation {
        store.update_field(FormField::Name, name);
        store.update_field(FormField::BaseSalary, base);
        store.submit()
    }

    #[test]
    fn test_select_populates_encoded_form() {
        let mut store = seeded();
        store.select_by_name("Budi");

        let form = store.form();
        assert_eq!(form.id, Some(2));
        assert_eq!(form.name, "Budi");
        assert_eq!(form.base_salary.as_str(), "Rp.3.000.000");
        assert_eq!(form.allowance.as_str(), "Rp.500.000");
        assert_eq!(store.selected_name(), "Budi");
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut store = seeded();
        store.select_by_name("Ann");
        let first = store.form().clone();
        store.select_by_name("Ann");
        assert_eq!(store.form(), &first);
    }

    #[test]
    fn test_select_empty_always_clears() {
        let mut store = seeded();
        store.select_by_name("Ann");
        store.update_field(FormField::Role, "Programmer");
        store.select_by_name("");
        assert!(store.form().is_empty());

        store.begin_edit(2);
        store.clear_selection();
        assert!(store.form().is_empty());
    }

    #[test]
    fn test_select_unknown_clears() {
        let mut store = seeded();
        store.select_by_name("Ann");
        store.select_by_name("Nobody");
        assert!(store.form().is_empty());
        assert_eq!(store.selected_name(), "Nobody");
    }

    #[test]
    fn test_select_picks_first_duplicate_name() {
        let mut store = seeded();
        add(&mut store, "Ann", "1");
        store.select_by_name("Ann");
        assert_eq!(store.form().id, Some(1));
    }

    #[test]
    fn test_begin_edit_independent_of_selection() {
        let mut store = seeded();
        store.select_by_name("Ann");

        assert!(store.begin_edit(3));
        assert_eq!(store.form().id, Some(3));
        assert_eq!(store.form().base_salary.as_str(), "Rp.4.000.000");
        assert_eq!(store.current_id(), Some(3));
        assert_eq!(store.selected_name(), "Ann");
    }

    #[test]
    fn test_begin_edit_unknown_is_noop() {
        let mut store = seeded();
        store.select_by_name("Budi");
        let before = store.snapshot();

        assert!(!store.begin_edit(42));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_update_field_reformats_amounts() {
        let mut store = RosterStore::new();
        store.update_field(FormField::BaseSalary, "Rp.5.0000");
        assert_eq!(store.form().base_salary.as_str(), "Rp.50.000");

        store.update_field(FormField::BirthDate, "2001-12-31");
        assert_eq!(store.form().birth_date, "2001-12-31");
    }

    #[test]
    fn test_update_field_by_name() {
        let mut store = RosterStore::new();
        assert!(store.update_field_by_name("allowance", "750000"));
        assert_eq!(store.form().allowance.as_str(), "Rp.750.000");

        let before = store.form().clone();
        assert!(!store.update_field_by_name("bonus", "1"));
        assert_eq!(store.form(), &before);
    }

    #[test]
    fn test_create() {
        let mut store = RosterStore::new();
        store.select_by_name("Ghost");
        store.update_field(FormField::Name, "Ann");
        store.update_field(FormField::BaseSalary, "Rp.5.000.000");

        let confirmation = store.submit();

        assert_eq!(confirmation, Confirmation::Added { id: 1 });
        assert_eq!(confirmation.message(), "Data berhasil ditambahkan!");
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].name, "Ann");
        assert_eq!(store.records()[0].base_salary.raw(), 5_000_000);
        assert!(store.records()[0].allowance.is_zero());
        assert!(store.form().is_empty());
        assert_eq!(store.selected_name(), "");
    }

    #[test]
    fn test_update_preserves_others() {
        let mut store = RosterStore::with_records(vec![
            employee(1, "Ann", 5_000_000, 1_000_000),
            employee(2, "Budi", 3_000_000, 500_000),
        ])
        .unwrap();
        let untouched = store.records()[0].clone();

        store.begin_edit(2);
        store.update_field(FormField::Allowance, "Rp.750.000");
        store.update_field(FormField::Name, "Budi S.");
        let confirmation = store.submit();

        assert_eq!(confirmation, Confirmation::Updated { id: 2 });
        assert_eq!(confirmation.message(), "Data berhasil diperbarui!");
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0], untouched);
        assert_eq!(store.records()[1].id, 2);
        assert_eq!(store.records()[1].name, "Budi S.");
        assert_eq!(store.records()[1].allowance.raw(), 750_000);
        assert_eq!(store.records()[1].base_salary.raw(), 3_000_000);
        assert_eq!(store.current_id(), None);
        assert!(store.form().is_empty());
    }

    #[test]
    fn test_update_via_selection() {
        let mut store = seeded();
        store.select_by_name("Citra");
        store.update_field(FormField::BaseSalary, "4100000");
        assert_eq!(store.submit(), Confirmation::Updated { id: 3 });

        assert_eq!(store.get(3).unwrap().base_salary.raw(), 4_100_000);
        assert_eq!(store.selected_name(), "");
        assert!(store.form().is_empty());
    }

    #[test]
    fn test_submit_empty_form_creates_blank_record() {
        let mut store = RosterStore::new();
        assert_eq!(store.submit(), Confirmation::Added { id: 1 });
        assert!(store.records()[0].base_salary.is_zero());
        assert!(store.form().is_empty());
    }

    #[test]
    fn test_submit_stale_binding_writes_nothing() {
        let mut store = seeded();
        store.begin_edit(2);
        store.form.id = Some(99);
        store.update_field(FormField::Name, "Zombie");

        assert_eq!(store.submit(), Confirmation::Stale { id: 99 });
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(2).unwrap().name, "Budi");
        assert!(store.find_by_name("Zombie").is_none());
        assert!(store.form().is_empty());
    }

    #[test]
    fn test_delete_then_reselect() {
        let mut store = seeded();
        store.select_by_name("Budi");
        assert!(!store.form().is_empty());

        let confirmation = store.delete_by_id(2);

        assert_eq!(confirmation, Some(Confirmation::Deleted { id: 2 }));
        assert_eq!(confirmation.unwrap().message(), "Data berhasil dihapus!");
        assert!(store.form().is_empty());
        assert!(store.records().iter().all(|r| r.id != 2));
        assert_eq!(store.selected_name(), "Budi");
    }

    #[test]
    fn test_delete_other_refreshes_selected() {
        let mut store = seeded();
        store.select_by_name("Ann");
        store.update_field(FormField::Name, "typed but unsaved");

        store.delete_by_id(3);

        assert_eq!(store.form().name, "Ann");
        assert_eq!(store.form().id, Some(1));
    }

    #[test]
    fn test_delete_without_selection_clears_form() {
        let mut store = seeded();
        store.begin_edit(1);
        store.update_field(FormField::Allowance, "123");

        store.delete_by_id(3);

        assert!(store.form().is_empty());
        assert_eq!(store.current_id(), Some(1));
        assert_eq!(store.get(1).unwrap().allowance.raw(), 1_000_000);
    }

    #[test]
    fn test_delete_of_edited_record_unbinds_form() {
        let mut store = seeded();
        store.begin_edit(2);
        store.delete_by_id(2);
        store.update_field(FormField::Name, "Dewi");

        assert_eq!(store.submit(), Confirmation::Added { id: 4 });
        assert!(store.get(2).is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut store = seeded();
        store.select_by_name("Ann");
        let before = store.snapshot();

        assert_eq!(store.delete_by_id(99), None);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_ids_never_collide() {
        let mut store = seeded();
        store.delete_by_id(2);
        let Confirmation::Added { id } = add(&mut store, "Dewi", "1") else {
            panic!("expected an add");
        };
        assert_eq!(id, 4);

        let mut issued = HashSet::new();
        for round in 0..20u32 {
            let confirmation = add(&mut store, &format!("E{}", round), "1000");
            assert!(issued.insert(confirmation.id()), "id reused: {}", confirmation.id());
            if round % 3 == 0 {
                let victim = store.records()[0].id;
                store.delete_by_id(victim);
            }
            let ids: HashSet<_> = store.records().iter().map(|r| r.id).collect();
            assert_eq!(ids.len(), store.len(), "duplicate id in roster");
        }
        assert!(issued.iter().all(|id| *id > 4));
    }

    #[test]
    fn test_total_compensation() {
        let store = seeded();
        assert_eq!(store.total_compensation("Budi"), "Rp.3.500.000");
        assert_eq!(store.total_compensation("Nobody"), "Rp.0");
        assert_eq!(store.total_compensation(""), "Rp.0");
    }

    #[test]
    fn test_selected_total_and_snapshot() {
        let mut store = seeded();
        assert_eq!(store.selected_total(), "Rp.0");

        store.select_by_name("Ann");
        let snapshot = store.snapshot();
        assert_eq!(snapshot.selected_total, "Rp.6.000.000");
        assert_eq!(snapshot.selected_name, "Ann");
        assert_eq!(snapshot.records.len(), 3);
        assert_eq!(snapshot.form.id, Some(1));
    }

    #[test]
    fn test_rows_and_selector_options() {
        let store = seeded();
        assert_eq!(store.selector_options(), ["Ann", "Budi", "Citra"]);

        let rows = store.rows();
        assert_eq!(rows[2].base_salary, "Rp.4.000.000");
        assert_eq!(rows[2].allowance, "Rp.0");
        assert_eq!(store.records()[2].base_salary.raw(), 4_000_000);
    }

    #[test]
    fn test_with_records_rejects_bad_ids() {
        assert_eq!(
            RosterStore::with_records(vec![employee(0, "Zero", 1, 1)]).unwrap_err(),
            CoreError::InvalidId(0)
        );
        assert_eq!(
            RosterStore::with_records(vec![employee(5, "A", 1, 1), employee(5, "B", 1, 1)])
                .unwrap_err(),
            CoreError::DuplicateId(5)
        );
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            RosterStore::from_json("{not json"),
            Err(CoreError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_independent_stores() {
        let mut a = RosterStore::new();
        let b = RosterStore::new();
        add(&mut a, "Ann", "1");
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn test_confirmation_serializes_tagged() {
        let json = serde_json::to_value(Confirmation::Deleted { id: 9 }).unwrap();
        assert_eq!(json["kind"], "deleted");
        assert_eq!(json["id"], 9);
    }
}
