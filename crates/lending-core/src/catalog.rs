//! # Catalog
//!
//! Owns the items and the loan ledger, and applies every operation that moves
//! copies between "on the shelf" and "on loan".
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Operations                                   │
//! │                                                                         │
//! │  Operation              Check                     State Change          │
//! │  ─────────              ─────                     ────────────          │
//! │                                                                         │
//! │  add_item() ──────────► none ───────────────────► items.push(item)     │
//! │                                                                         │
//! │  borrow(n) ───────────► n ∈ eligible ids ───────► ledger[items[n]] += 1 │
//! │                         n < len                   items[n].qty -= 1     │
//! │                                                                         │
//! │  return_item(n) ──────► ledger ∋ ItemId(n) ─────► ledger[n] -= 1       │
//! │                         n < len                   items[n].qty += 1     │
//! │                                                                         │
//! │  update_quantity(p) ──► 0 <= p < len ───────────► items[p].qty = q     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifier vs. Position
//! `borrow` and `return_item` validate their argument as an item *id* and
//! then use the same number as a *position* in the backing sequence. Ids
//! start at 1 and positions at 0, so the two only agree by accident. This is
//! long-standing observable behavior and is kept as-is; the tests below pin
//! down exactly where copies end up.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{IdSequence, Item, ItemId};

// =============================================================================
// Outcomes
// =============================================================================

/// A successful borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Borrowed {
    /// Item whose copy left the shelf.
    pub item_id: ItemId,
    /// Title of that item.
    pub title: String,
    /// Copies of that item now on loan.
    pub on_loan: u32,
    /// Copies of that item still on the shelf.
    pub remaining: i64,
}

impl fmt::Display for Borrowed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has been added to your cart.\nGood Choice. Happy Reading.",
            self.title
        )
    }
}

/// A successful return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Returned {
    /// Ledger key the return was booked against.
    pub ledger_key: ItemId,
    /// Item whose shelf count went up.
    pub item_id: ItemId,
    /// Title of that item.
    pub title: String,
    /// Copies still on loan under `ledger_key`, `None` once the entry is gone.
    pub still_on_loan: Option<u32>,
}

impl fmt::Display for Returned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} successfully returned", self.title)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Items in insertion order plus the loan ledger.
///
/// ## Invariants
/// - Items are never removed; positions are stable.
/// - A ledger entry is always `>= 1`; zero means "no entry".
///
/// ## Example
/// ```rust
/// use lending_core::{Catalog, ItemId};
///
/// let mut catalog = Catalog::new();
/// catalog.add_item("Dune", "Herbert", 3);
/// catalog.add_item("Emma", "Austen", 3);
///
/// // id 1 is eligible, position 1 is "Emma"
/// let borrowed = catalog.borrow(1).unwrap();
/// assert_eq!(borrowed.item_id, ItemId::new(2));
/// assert_eq!(catalog.outstanding(ItemId::new(2)), Some(1));
/// ```
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
    ledger: BTreeMap<ItemId, u32>,
    ids: IdSequence,
}

impl Catalog {
    /// Creates an empty catalog with a fresh id sequence.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Appends a new item and returns it.
    ///
    /// No duplicate check is made: two items with the same title and author
    /// are distinct entries with distinct ids.
    pub fn add_item(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i64,
    ) -> &Item {
        let item = Item::new(&mut self.ids, title, author, quantity);
        debug!(item_id = %item.id(), quantity, "item added");
        let position = self.items.len();
        self.items.push(item);
        &self.items[position]
    }

    /// Items that can be lent right now, in catalog order.
    ///
    /// Calling again restarts the walk from the first item.
    pub fn available_for_loan(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(|item| item.is_loanable())
    }

    /// Lends one copy.
    ///
    /// `identifier` must be the id of an eligible item; the copy is then
    /// taken from the item at *position* `identifier`.
    ///
    /// ## Errors
    /// - [`CoreError::NotAvailable`] if no eligible item has that id
    /// - [`CoreError::PositionOutOfRange`] if the position is past the end
    ///
    /// Neither error changes any state.
    pub fn borrow(&mut self, identifier: i64) -> CoreResult<Borrowed> {
        let eligible = ItemId::try_from(identifier)
            .map(|id| self.available_for_loan().any(|item| *item == id))
            .unwrap_or(false);
        if !eligible {
            debug!(identifier, "borrow rejected: not in eligible set");
            return Err(CoreError::NotAvailable { identifier });
        }

        let position = self.resolve_position(identifier)?;
        let item = &mut self.items[position];
        let on_loan = self.ledger.entry(item.id()).or_insert(0);
        *on_loan = on_loan.wrapping_add(1);
        item.quantity = item.quantity.wrapping_sub(1);

        debug!(
            identifier,
            item_id = %item.id(),
            on_loan = *on_loan,
            remaining = item.quantity,
            "borrow recorded"
        );

        Ok(Borrowed {
            item_id: item.id(),
            title: item.title.clone(),
            on_loan: *on_loan,
            remaining: item.quantity,
        })
    }

    /// Takes back one copy.
    ///
    /// `identifier` is looked up in the ledger as an item id; the shelf count
    /// of the item at *position* `identifier` is then incremented.
    ///
    /// ## Errors
    /// - [`CoreError::NotBorrowed`] if the ledger has no entry for that id;
    ///   nothing changes.
    /// - [`CoreError::PositionOutOfRange`] if the position is past the end.
    ///   The ledger has already been debited at that point and stays debited.
    pub fn return_item(&mut self, identifier: i64) -> CoreResult<Returned> {
        let key = ItemId::try_from(identifier)
            .ok()
            .filter(|id| self.ledger.contains_key(id))
            .ok_or(CoreError::NotBorrowed { identifier })?;

        let count = self.ledger.get(&key).copied().unwrap_or(0);
        let still_on_loan = if count > 1 {
            self.ledger.insert(key, count - 1);
            Some(count - 1)
        } else {
            self.ledger.remove(&key);
            None
        };
        debug!(identifier, ledger_key = %key, ?still_on_loan, "ledger debited");

        let position = self.resolve_position(identifier)?;
        let item = &mut self.items[position];
        item.quantity = item.quantity.wrapping_add(1);

        debug!(
            identifier,
            item_id = %item.id(),
            quantity = item.quantity,
            "return recorded"
        );

        Ok(Returned {
            ledger_key: key,
            item_id: item.id(),
            title: item.title.clone(),
            still_on_loan,
        })
    }

    /// Items whose title equals `title_query`, ignoring case, in catalog order.
    pub fn search<'a>(&'a self, title_query: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .filter(move |item| item.title_matches(title_query))
    }

    /// Every item in catalog order, or `None` when the catalog is empty.
    pub fn list_all(&self) -> Option<&[Item]> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.as_slice())
        }
    }

    /// Overwrites the shelf count of the item at `position`.
    ///
    /// Any value is accepted, including negative ones.
    ///
    /// ## Errors
    /// [`CoreError::InvalidPosition`] unless `0 <= position < len`; nothing
    /// changes in that case.
    pub fn update_quantity(&mut self, position: i64, new_quantity: i64) -> CoreResult<&Item> {
        let index = self.checked_position(position)?;
        let item = &mut self.items[index];
        item.quantity = new_quantity;
        debug!(position, item_id = %item.id(), quantity = new_quantity, "quantity updated");
        Ok(item)
    }

    // -------------------------------------------------------------------------
    // Read-only accessors
    // -------------------------------------------------------------------------

    /// Number of items (not copies).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the catalog has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `position`.
    pub fn get(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    /// Validates a position the way `update_quantity` does.
    ///
    /// Lets a caller reject a bad position before collecting the new value.
    pub fn checked_position(&self, position: i64) -> CoreResult<usize> {
        let len = self.items.len();
        usize::try_from(position)
            .ok()
            .filter(|index| *index < len)
            .ok_or(CoreError::InvalidPosition { position, len })
    }

    /// Copies of `item_id` currently on loan; `None` when there are none.
    pub fn outstanding(&self, item_id: ItemId) -> Option<u32> {
        self.ledger.get(&item_id).copied()
    }

    /// Ledger entries ordered by item id.
    pub fn loans(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.ledger.iter().map(|(id, count)| (*id, *count))
    }

    /// Sum of all ledger entries.
    pub fn total_on_loan(&self) -> u64 {
        self.ledger.values().map(|count| u64::from(*count)).sum()
    }

    fn resolve_position(&self, identifier: i64) -> CoreResult<usize> {
        let len = self.items.len();
        usize::try_from(identifier)
            .ok()
            .filter(|position| *position < len)
            .ok_or(CoreError::PositionOutOfRange {
                position: identifier,
                len,
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(quantities: &[i64]) -> Catalog {
        let mut catalog = Catalog::new();
        for (i, qty) in quantities.iter().enumerate() {
            catalog.add_item(format!("Title {}", i), format!("Author {}", i), *qty);
        }
        catalog
    }

    fn quantities(catalog: &Catalog) -> Vec<i64> {
        catalog
            .list_all()
            .map(|items| items.iter().map(|i| i.quantity).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_add_item_assigns_sequential_ids() {
        let mut catalog = Catalog::new();
        assert!(catalog.list_all().is_none());

        let first = catalog.add_item("A", "X", 5).id();
        let second = catalog.add_item("A", "X", 5).id();

        assert_eq!(first, ItemId::new(1));
        assert_eq!(second, ItemId::new(2));
        // Duplicates are allowed
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.list_all().unwrap()[0].quantity, 5);
    }

    #[test]
    fn test_add_item_accepts_any_quantity() {
        let mut catalog = Catalog::new();
        catalog.add_item("", "", 0);
        catalog.add_item("Neg", "X", -5);
        assert_eq!(quantities(&catalog), vec![0, -5]);
    }

    #[test]
    fn test_available_for_loan_excludes_last_copy() {
        let catalog = catalog_with(&[5, 1, 0, 2, -3]);
        let ids: Vec<u32> = catalog.available_for_loan().map(|i| i.id().get()).collect();
        assert_eq!(ids, vec![1, 4]);

        // Restartable
        assert_eq!(catalog.available_for_loan().count(), 2);
        assert!(catalog.available_for_loan().all(|i| i.quantity > 1));
    }

    #[test]
    fn test_borrow_unknown_id_is_rejected() {
        let mut catalog = catalog_with(&[5]);

        for identifier in [999, 0, -1] {
            assert_eq!(
                catalog.borrow(identifier),
                Err(CoreError::NotAvailable { identifier })
            );
        }
        assert_eq!(quantities(&catalog), vec![5]);
        assert_eq!(catalog.total_on_loan(), 0);
    }

    #[test]
    fn test_borrow_single_item_runs_off_the_end() {
        // id 1 is eligible but position 1 does not exist
        let mut catalog = catalog_with(&[5]);
        assert_eq!(
            catalog.borrow(1),
            Err(CoreError::PositionOutOfRange { position: 1, len: 1 })
        );
        assert_eq!(quantities(&catalog), vec![5]);
        assert_eq!(catalog.loans().count(), 0);
    }

    #[test]
    fn test_borrow_debits_item_at_position() {
        let mut catalog = catalog_with(&[5, 5]);

        let borrowed = catalog.borrow(1).unwrap();

        assert_eq!(borrowed.item_id, ItemId::new(2));
        assert_eq!(borrowed.title, "Title 1");
        assert_eq!(borrowed.on_loan, 1);
        assert_eq!(borrowed.remaining, 4);
        assert_eq!(quantities(&catalog), vec![5, 4]);
        assert_eq!(catalog.outstanding(ItemId::new(1)), None);
        assert_eq!(catalog.outstanding(ItemId::new(2)), Some(1));
    }

    #[test]
    fn test_borrow_rejected_once_item_leaves_eligible_set() {
        let mut catalog = catalog_with(&[2, 2]);

        catalog.borrow(1).unwrap();
        assert_eq!(quantities(&catalog), vec![2, 1]);

        // Item 2 is down to its last copy
        assert_eq!(
            catalog.borrow(2),
            Err(CoreError::NotAvailable { identifier: 2 })
        );
        assert_eq!(quantities(&catalog), vec![2, 1]);
    }

    #[test]
    fn test_borrow_can_drive_quantity_negative() {
        // Eligibility is checked on item 1, the copy comes from item 2
        let mut catalog = catalog_with(&[3, 1]);

        catalog.borrow(1).unwrap();
        catalog.borrow(1).unwrap();

        assert_eq!(quantities(&catalog), vec![3, -1]);
        assert_eq!(catalog.outstanding(ItemId::new(2)), Some(2));
    }

    #[test]
    fn test_return_never_borrowed() {
        let mut catalog = catalog_with(&[5, 5]);
        for identifier in [1, 2, 0, -7] {
            assert_eq!(
                catalog.return_item(identifier),
                Err(CoreError::NotBorrowed { identifier })
            );
        }
        assert_eq!(quantities(&catalog), vec![5, 5]);
    }

    #[test]
    fn test_return_credits_item_at_position() {
        let mut catalog = catalog_with(&[5, 5, 5]);
        catalog.borrow(1).unwrap();
        catalog.borrow(1).unwrap();

        // Ledger key is id 2; the copy lands on position 2
        let returned = catalog.return_item(2).unwrap();
        assert_eq!(returned.ledger_key, ItemId::new(2));
        assert_eq!(returned.item_id, ItemId::new(3));
        assert_eq!(returned.still_on_loan, Some(1));
        assert_eq!(quantities(&catalog), vec![5, 3, 6]);

        let returned = catalog.return_item(2).unwrap();
        assert_eq!(returned.still_on_loan, None);
        assert_eq!(catalog.loans().count(), 0);
        assert_eq!(quantities(&catalog), vec![5, 3, 7]);

        assert_eq!(
            catalog.return_item(2),
            Err(CoreError::NotBorrowed { identifier: 2 })
        );
    }

    #[test]
    fn test_return_out_of_range_keeps_ledger_debit() {
        let mut catalog = catalog_with(&[5, 5]);
        catalog.borrow(1).unwrap();

        assert_eq!(
            catalog.return_item(2),
            Err(CoreError::PositionOutOfRange { position: 2, len: 2 })
        );
        assert_eq!(catalog.outstanding(ItemId::new(2)), None);
        assert_eq!(quantities(&catalog), vec![5, 4]);
    }

    #[test]
    fn test_borrow_return_totals() {
        // n borrows then m returns: ledger holds n - m, shelf total moves by -n + m
        let mut catalog = catalog_with(&[10, 10, 10, 10]);
        let before: i64 = quantities(&catalog).iter().sum();
        let (n, m) = (5, 3);

        for _ in 0..n {
            catalog.borrow(2).unwrap();
        }
        for _ in 0..m {
            catalog.return_item(3).unwrap();
        }

        let after: i64 = quantities(&catalog).iter().sum();
        assert_eq!(after, before - n + m);
        assert_eq!(catalog.outstanding(ItemId::new(3)), Some((n - m) as u32));
        assert_eq!(catalog.total_on_loan(), (n - m) as u64);
        assert_eq!(quantities(&catalog), vec![10, 10, 5, 13]);

        for _ in m..n {
            catalog.return_item(3).unwrap();
        }
        assert_eq!(catalog.outstanding(ItemId::new(3)), None);
    }

    #[test]
    fn test_search_case_insensitive_in_order() {
        let mut catalog = Catalog::new();
        catalog.add_item("Dune", "Herbert", 1);
        catalog.add_item("Emma", "Austen", 1);
        catalog.add_item("DUNE", "Someone Else", 4);

        let found: Vec<u32> = catalog.search("dune").map(|i| i.id().get()).collect();
        assert_eq!(found, vec![1, 3]);

        assert_eq!(catalog.search("Dun").count(), 0);
        assert_eq!(catalog.search("").count(), 0);
    }

    #[test]
    fn test_update_quantity_bounds() {
        let mut catalog = catalog_with(&[5, 5]);

        for position in [-1, 2, 100] {
            assert_eq!(
                catalog.update_quantity(position, 9).map(|i| i.id()),
                Err(CoreError::InvalidPosition { position, len: 2 })
            );
        }
        assert_eq!(quantities(&catalog), vec![5, 5]);

        let updated = catalog.update_quantity(1, -4).unwrap();
        assert_eq!(updated.id(), ItemId::new(2));
        assert_eq!(quantities(&catalog), vec![5, -4]);

        catalog.update_quantity(0, 0).unwrap();
        assert_eq!(quantities(&catalog), vec![0, -4]);
    }

    #[test]
    fn test_checked_position() {
        let catalog = catalog_with(&[1, 1, 1]);
        assert_eq!(catalog.checked_position(2), Ok(2));
        assert_eq!(
            catalog.checked_position(3),
            Err(CoreError::InvalidPosition { position: 3, len: 3 })
        );
    }

    #[test]
    fn test_update_quantity_on_empty_catalog() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.update_quantity(0, 1),
            Err(CoreError::InvalidPosition { position: 0, len: 0 })
        ));
    }

    #[test]
    fn test_outcome_messages() {
        let mut catalog = catalog_with(&[5, 5]);
        let borrowed = catalog.borrow(1).unwrap();
        assert_eq!(
            borrowed.to_string(),
            "Title 1 has been added to your cart.\nGood Choice. Happy Reading."
        );
    }
}
