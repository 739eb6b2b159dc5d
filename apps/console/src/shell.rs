//! # Shell
//!
//! The read-eval-render loop. Each input line runs to completion against
//! the store before the next one is read.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   prompt ──► read line ──► Command::parse ──► execute ──► render        │
//! │     ▲                           │                            │          │
//! │     │                     parse error: print, continue        │          │
//! │     └───────────────────────────┴────────────────────────────┘          │
//! │                                                                         │
//! │   `quit` or end of input ──► return                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use roster_core::{Confirmation, RosterStore};
use tracing::{debug, info};

use crate::commands::{Command, HELP};
use crate::error::{AppError, AppResult};
use crate::view;

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A shell session owning one roster.
#[derive(Debug)]
pub struct Shell {
    store: RosterStore,
    prompt: String,
}

impl Shell {
    pub fn new(store: RosterStore, prompt: impl Into<String>) -> Self {
        Shell {
            store,
            prompt: prompt.into(),
        }
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> AppResult<()> {
        info!(records = self.store.len(), "Shell started");
        self.write_prompt(&mut out)?;

        for line in input.lines() {
            let line = line?;
            let flow = match Command::parse(&line) {
                Ok(Some(command)) => self.execute(command, &mut out)?,
                Ok(None) => Flow::Continue,
                Err(err) if err.is_recoverable() => {
                    writeln!(out, "error: {}", err)?;
                    Flow::Continue
                }
                Err(err) => return Err(err),
            };

            if flow == Flow::Quit {
                break;
            }
            self.write_prompt(&mut out)?;
        }

        info!("Shell finished");
        Ok(())
    }

    /// Applies one command and renders its result.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> AppResult<Flow> {
        debug!(?command, "Executing command");

        match command {
            Command::List => view::render_table(&self.store, out)?,
            Command::Select(name) => {
                self.store.select_by_name(&name);
                if self.store.form().is_bound() {
                    view::render_form(&self.store, out)?;
                    view::render_total(&self.store, &name, out)?;
                } else {
                    writeln!(out, "No employee named {:?}", name)?;
                }
            }
            Command::Clear => {
                self.store.clear_selection();
                view::render_form(&self.store, out)?;
            }
            Command::Edit(id) => {
                if self.store.begin_edit(id) {
                    view::render_form(&self.store, out)?;
                } else {
                    writeln!(out, "No employee with id {}", id)?;
                }
            }
            Command::Set { field, value } => {
                self.store.update_field(field, &value);
                writeln!(out, "{} = {}", field, self.store.form().field(field))?;
            }
            Command::Submit => {
                let confirmation = self.store.submit();
                self.confirm(confirmation, out)?;
                view::render_table(&self.store, out)?;
            }
            Command::Delete(id) => match self.store.delete_by_id(id) {
                Some(confirmation) => {
                    self.confirm(confirmation, out)?;
                    view::render_table(&self.store, out)?;
                }
                None => writeln!(out, "No employee with id {}", id)?,
            },
            Command::Total(name) => {
                let name = name.unwrap_or_else(|| self.store.selected_name().to_string());
                view::render_total(&self.store, &name, out)?;
            }
            Command::Form => view::render_form(&self.store, out)?,
            Command::Roles => view::render_roles(out)?,
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.store.snapshot())?;
                writeln!(out, "{}", json)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn confirm<W: Write>(&self, confirmation: Confirmation, out: &mut W) -> AppResult<()> {
        info!(id = confirmation.id(), outcome = %confirmation, "Roster changed");
        writeln!(out, "{}", confirmation).map_err(AppError::from)
    }

    fn write_prompt<W: Write>(&self, out: &mut W) -> AppResult<()> {
        write!(out, "{}", self.prompt)?;
        out.flush()?;
        Ok(())
    }
}
