//! # Catalog Commands
//!
//! Menu handlers for items and loans: add, update, search, list, borrow,
//! return.

use tracing::{info, warn};

use lending_core::{Catalog, Item};

use super::render_list;
use crate::config::OutputFormat;
use crate::error::CliResult;
use crate::prompt::Prompt;

/// Command 1: asks for title, author, and copy count, then appends the item.
pub fn add_item<P: Prompt>(catalog: &mut Catalog, prompt: &mut P) -> CliResult<()> {
    let title = prompt.ask_line("What's the item title?")?;
    let author = prompt.ask_line("What's the author name?")?;
    let quantity = prompt.ask_int("How many copies are you adding?")?;

    let item = catalog.add_item(title, author, quantity);
    info!(item_id = %item.id(), "item added to catalog");
    prompt.say(&format!("Added {}", item))
}

/// Command 2: overwrites the copy count of the item at a position.
///
/// The new count is only asked for once the position checks out.
pub fn update_quantity<P: Prompt>(catalog: &mut Catalog, prompt: &mut P) -> CliResult<()> {
    let position = prompt.ask_int("Which item position do you want to update?")?;
    if let Err(err) = catalog.checked_position(position) {
        warn!(%err, "update rejected");
        return prompt.say(&err.to_string());
    }

    let new_quantity = prompt.ask_int("What's the new quantity of the item?")?;
    match catalog.update_quantity(position, new_quantity) {
        Ok(item) => {
            let line = format!(
                "{} is the new quantity of item {}",
                item.quantity,
                item.id()
            );
            prompt.say(&line)
        }
        Err(err) => {
            warn!(%err, "update rejected");
            prompt.say(&err.to_string())
        }
    }
}

/// Command 3: case-insensitive title search.
pub fn search<P: Prompt>(
    catalog: &Catalog,
    prompt: &mut P,
    output: OutputFormat,
) -> CliResult<()> {
    let query = prompt.ask_line("Enter the title you want to search:")?;
    let found: Vec<&Item> = catalog.search(&query).collect();

    if found.is_empty() {
        prompt.say(&format!("No items found with the title: {}", query))
    } else {
        render_list(prompt, output, "Items found:", &found)
    }
}

/// Command 4: every item in catalog order.
pub fn list_items<P: Prompt>(
    catalog: &Catalog,
    prompt: &mut P,
    output: OutputFormat,
) -> CliResult<()> {
    match catalog.list_all() {
        None => prompt.say("No items available in the catalog"),
        Some(items) => render_list(prompt, output, "Items in the catalog:", items),
    }
}

/// Command 7: shows the eligible items, then lends one copy.
pub fn borrow<P: Prompt>(
    catalog: &mut Catalog,
    prompt: &mut P,
    output: OutputFormat,
) -> CliResult<()> {
    let eligible: Vec<&Item> = catalog.available_for_loan().collect();
    render_list(prompt, output, "Available items to borrow:", &eligible)?;

    let identifier = prompt.ask_int("Provide the item ID you want to borrow:")?;
    match catalog.borrow(identifier) {
        Ok(borrowed) => {
            info!(
                item_id = %borrowed.item_id,
                on_loan = borrowed.on_loan,
                "item lent"
            );
            prompt.say(&borrowed.to_string())
        }
        Err(err) => {
            warn!(%err, identifier, "borrow rejected");
            prompt.say(&err.to_string())
        }
    }
}

/// Command 8: takes back one copy.
pub fn return_item<P: Prompt>(catalog: &mut Catalog, prompt: &mut P) -> CliResult<()> {
    let identifier = prompt.ask_int("Which item ID are you returning?")?;
    match catalog.return_item(identifier) {
        Ok(returned) => {
            info!(
                ledger_key = %returned.ledger_key,
                item_id = %returned.item_id,
                "item returned"
            );
            prompt.say(&returned.to_string())
        }
        Err(err) => {
            warn!(%err, identifier, "return rejected");
            prompt.say(&err.to_string())
        }
    }
}
