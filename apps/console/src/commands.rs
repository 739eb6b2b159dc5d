//! # Shell Commands
//!
//! Parses input lines into roster operations.
//!
//! ## Command Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input                     Store Operation                              │
//! │  ─────                     ───────────────                              │
//! │  select <name>        ───► select_by_name(name)                         │
//! │  clear                ───► clear_selection()                            │
//! │  edit <id>            ───► begin_edit(id)                               │
//! │  set <field> [value]  ───► update_field_by_name(field, value)           │
//! │  submit               ───► submit()                                     │
//! │  delete <id>          ───► delete_by_id(id)                             │
//! │                                                                         │
//! │  list, form, total [name], roles, json, help  ───► read only            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use roster_core::{EmployeeId, FormField};

use crate::error::AppError;

pub const HELP: &str = "\
Commands:
  list                   show the roster table
  select <name>          load the named employee into the form
  clear                  drop the selection and empty the form
  edit <id>              load an employee into the form by id
  set <field> [value]    set a form field (name, baseSalary, allowance, role, birthDate)
  submit                 add or update from the form
  delete <id>            remove an employee
  total [name]           total compensation (selected employee by default)
  form                   show the form
  roles                  list role options
  json                   dump the full snapshot as JSON
  help                   show this text
  quit                   leave";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Select(String),
    Clear,
    Edit(EmployeeId),
    Set { field: FormField, value: String },
    Submit,
    Delete(EmployeeId),
    Total(Option<String>),
    Form,
    Roles,
    Json,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines are `Ok(None)`.
    ///
    /// Names and values run to the end of the line, so they may contain spaces.
    pub fn parse(line: &str) -> Result<Option<Command>, AppError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "select" => {
                if rest.is_empty() {
                    return Err(AppError::MissingArgument {
                        command: "select",
                        argument: "a name",
                    });
                }
                Command::Select(rest.to_string())
            }
            "clear" => Command::Clear,
            "edit" => Command::Edit(parse_id("edit", rest)?),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err(AppError::MissingArgument {
                        command: "set",
                        argument: "a field name",
                    });
                }
                Command::Set {
                    field: FormField::from_str(field)?,
                    value: value.to_string(),
                }
            }
            "submit" => Command::Submit,
            "delete" | "rm" => Command::Delete(parse_id("delete", rest)?),
            "total" => Command::Total((!rest.is_empty()).then(|| rest.to_string())),
            "form" => Command::Form,
            "roles" => Command::Roles,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(AppError::UnknownCommand(verb.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_id(command: &'static str, arg: &str) -> Result<EmployeeId, AppError> {
    if arg.is_empty() {
        return Err(AppError::MissingArgument {
            command,
            argument: "an id",
        });
    }
    arg.parse::<EmployeeId>()
        .map_err(|_| AppError::InvalidId(arg.to_string()))
}
