//! # Views
//!
//! Text rendering of the roster snapshot: the table, the form, and the
//! selected employee's total. Amounts arrive already encoded from the store.

use std::io::{self, Write};

use roster_core::{FormField, Role, RosterStore};

/// Renders the roster table.
pub fn render_table<W: Write>(store: &RosterStore, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:<4} {:<20} {:>16} {:>16} {:<12} {}",
        "ID", "Name", "Base Salary", "Allowance", "Role", "Birth Date"
    )?;
    for row in store.rows() {
        writeln!(
            out,
            "{:<4} {:<20} {:>16} {:>16} {:<12} {}",
            row.id, row.name, row.base_salary, row.allowance, row.role, row.birth_date
        )?;
    }
    if store.is_empty() {
        writeln!(out, "(no employees)")?;
    }
    Ok(())
}

/// Renders the form buffer with its submit label.
pub fn render_form<W: Write>(store: &RosterStore, out: &mut W) -> io::Result<()> {
    let form = store.form();
    match form.id {
        Some(id) => writeln!(out, "Form [{}] editing #{}", form.submit_label(), id)?,
        None => writeln!(out, "Form [{}]", form.submit_label())?,
    }
    for field in FormField::ALL {
        writeln!(out, "  {:<11} {}", field.as_str(), form.field(field))?;
    }
    Ok(())
}

/// Renders the total compensation line for a name.
pub fn render_total<W: Write>(store: &RosterStore, name: &str, out: &mut W) -> io::Result<()> {
    let label = if name.is_empty() { "karyawan" } else { name };
    writeln!(out, "Total for {}: {}", label, store.total_compensation(name))
}

/// Lists the role dropdown values.
pub fn render_roles<W: Write>(out: &mut W) -> io::Result<()> {
    for option in Role::options() {
        if option.is_empty() {
            writeln!(out, "  (unset)")?;
        } else {
            writeln!(out, "  {}", option)?;
        }
    }
    Ok(())
}
