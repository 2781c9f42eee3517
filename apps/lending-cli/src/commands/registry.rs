//! # Registry Commands
//!
//! Menu handlers for borrowers: register and list.

use tracing::info;

use lending_core::Registry;

use super::render_list;
use crate::config::OutputFormat;
use crate::error::CliResult;
use crate::prompt::Prompt;

/// Command 5: registers a borrower.
pub fn register<P: Prompt>(registry: &mut Registry, prompt: &mut P) -> CliResult<()> {
    let name = prompt.ask_line("What's the borrower's name?")?;
    let borrower = registry.register(name);
    info!(borrower_id = %borrower.id(), "borrower registered");
    prompt.say("Borrower registered successfully.")
}

/// Command 6: every borrower in registration order.
pub fn list_borrowers<P: Prompt>(
    registry: &Registry,
    prompt: &mut P,
    output: OutputFormat,
) -> CliResult<()> {
    match registry.list_all() {
        None => prompt.say("No borrowers registered yet."),
        Some(borrowers) => render_list(prompt, output, "Registered borrowers:", borrowers),
    }
}
