//! # Session Loop
//!
//! Shows the menu, reads a command number, dispatches, repeats until the
//! operator enters 0 or the input stream closes.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   banner (optional)                                                     │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   ┌─► menu ──► ask_int ──┬── 0 ─────────► goodbye, Ok(())              │
//! │   │                      ├── 1..=8 ─────► handler ──┐                  │
//! │   │                      ├── other ─────► "ENTER BETWEEN 0 TO 8." ──┐  │
//! │   │                      ├── EOF ───────► Ok(())                    │  │
//! │   │                      └── not a number ► Err(MalformedInteger)   │  │
//! │   └─────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session owns its Catalog and Registry outright; nothing is shared
//! across threads.

use tracing::{debug, info};

use lending_core::{Catalog, Registry};

use crate::commands::{self, Command};
use crate::config::SessionConfig;
use crate::error::{CliError, CliResult};
use crate::prompt::Prompt;

const RULE: &str = "**********************************************************************";

const BANNER: &str = "********************Welcome to the Lending Library!********************";

const MENU: [&str; 9] = [
    "1. Add Item",
    "2. Update Item Quantity",
    "3. Search Item",
    "4. Show All Items",
    "5. Register Borrower",
    "6. Show All Borrowers",
    "7. Borrow an Item",
    "8. Return an Item",
    "0. Exit",
];

/// Goodbye line printed on command 0.
pub const GOODBYE: &str = "Thank you for using the lending library. Goodbye!";

/// One interactive session.
#[derive(Debug, Default)]
pub struct Session {
    catalog: Catalog,
    registry: Registry,
    config: SessionConfig,
}

impl Session {
    /// Creates a session with an empty catalog and registry.
    pub fn new(config: SessionConfig) -> Self {
        Session {
            catalog: Catalog::new(),
            registry: Registry::new(),
            config,
        }
    }

    /// The session's catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session's registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs the menu loop to completion.
    ///
    /// ## Returns
    /// - `Ok(())` after command 0 or when input runs out
    /// - `Err` on malformed numeric input or an I/O failure
    pub fn run<P: Prompt>(&mut self, prompt: &mut P) -> CliResult<()> {
        if self.config.banner {
            prompt.say(BANNER)?;
            prompt.say("                  Select From The Following Options:               ")?;
            prompt.say(RULE)?;
        }

        let mut commands_run: u64 = 0;
        loop {
            match self.step(prompt) {
                Ok(Step::Continue) => commands_run += 1,
                Ok(Step::Exit) => {
                    prompt.say(GOODBYE)?;
                    break;
                }
                Err(CliError::EndOfInput) => {
                    debug!("input closed");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            commands_run,
            items = self.catalog.len(),
            borrowers = self.registry.len(),
            on_loan = self.catalog.total_on_loan(),
            "session finished"
        );
        Ok(())
    }

    fn step<P: Prompt>(&mut self, prompt: &mut P) -> CliResult<Step> {
        prompt.say(RULE)?;
        for line in MENU {
            prompt.say(line)?;
        }
        let choice = prompt.ask_int("Enter your choice: ")?;

        let command = match Command::try_from(choice) {
            Ok(command) => command,
            Err(unknown) => {
                debug!(choice, "command out of range");
                prompt.say(&unknown.to_string())?;
                return Ok(Step::Continue);
            }
        };
        debug!(?command, "dispatching");

        let output = self.config.output;
        match command {
            Command::Exit => return Ok(Step::Exit),
            Command::AddItem => commands::catalog::add_item(&mut self.catalog, prompt)?,
            Command::UpdateQuantity => {
                commands::catalog::update_quantity(&mut self.catalog, prompt)?
            }
            Command::SearchItems => commands::catalog::search(&self.catalog, prompt, output)?,
            Command::ListItems => commands::catalog::list_items(&self.catalog, prompt, output)?,
            Command::RegisterBorrower => {
                commands::registry::register(&mut self.registry, prompt)?
            }
            Command::ListBorrowers => {
                commands::registry::list_borrowers(&self.registry, prompt, output)?
            }
            Command::Borrow => commands::catalog::borrow(&mut self.catalog, prompt, output)?,
            Command::Return => commands::catalog::return_item(&mut self.catalog, prompt)?,
        }
        Ok(Step::Continue)
    }
}

enum Step {
    Continue,
    Exit,
}
