//! # Session Commands
//!
//! One handler per menu entry.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Command enum, listing helper)
//! ├── catalog.rs   ◄─── add, update, search, list, borrow, return
//! └── registry.rs  ◄─── register, list
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  "7" ──► Command::try_from(7) ──► Command::Borrow                      │
//! │                                        │                                │
//! │                                        ▼                                │
//! │  catalog::borrow(&mut Catalog, &mut impl Prompt)                        │
//! │      ask_int("Provide the item ID ...")                                 │
//! │      Catalog::borrow(id) ──► Ok(Borrowed) / Err(CoreError)              │
//! │      say(outcome.to_string())                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers only return `Err` for session-ending failures; rejected ledger
//! operations are reported through the prompt and yield `Ok(())`.

pub mod catalog;
pub mod registry;

use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;

use crate::config::OutputFormat;
use crate::error::CliResult;
use crate::prompt::Prompt;

/// Menu entries, by the number the operator types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    AddItem,
    UpdateQuantity,
    SearchItems,
    ListItems,
    RegisterBorrower,
    ListBorrowers,
    Borrow,
    Return,
}

impl Command {
    /// Highest valid command number.
    pub const MAX: i64 = 8;
}

/// A number outside `0..=Command::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ENTER BETWEEN 0 TO {max}.", max = Command::MAX)]
pub struct UnknownCommand(pub i64);

impl TryFrom<i64> for Command {
    type Error = UnknownCommand;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Command::Exit,
            1 => Command::AddItem,
            2 => Command::UpdateQuantity,
            3 => Command::SearchItems,
            4 => Command::ListItems,
            5 => Command::RegisterBorrower,
            6 => Command::ListBorrowers,
            7 => Command::Borrow,
            8 => Command::Return,
            other => return Err(UnknownCommand(other)),
        })
    }
}

/// Writes a header followed by the records, or a single JSON array.
pub(crate) fn render_list<P, T>(
    prompt: &mut P,
    output: OutputFormat,
    header: &str,
    records: &[T],
) -> CliResult<()>
where
    P: Prompt,
    T: Serialize + Display,
{
    match output {
        OutputFormat::Text => {
            prompt.say(header)?;
            for record in records {
                prompt.say(&record.to_string())?;
            }
        }
        OutputFormat::Json => {
            prompt.say(&serde_json::to_string(records)?)?;
        }
    }
    Ok(())
}
