//! # Domain Types
//!
//! Core domain types used throughout the lending ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    Borrower     │   │   IdSequence    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ItemId)    │   │  id (BorrowerId)│   │  last (u32)     │       │
//! │  │  title          │   │  name           │   │  0 → 1, 2, 3…   │       │
//! │  │  author         │   └─────────────────┘   └─────────────────┘       │
//! │  │  quantity (i64) │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Items and borrowers are equal when their ids are equal, whatever their
//! other fields say. The id newtypes double as lookup keys: an `Item` compares
//! equal to the `ItemId` it carries, so no placeholder record is ever needed
//! to query the loan ledger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::TryFromIntError;

// =============================================================================
// Id Sequence
// =============================================================================

/// Monotonically increasing id source.
///
/// Starts at 0; the first id handed out is 1. Each Catalog and Registry owns
/// its own sequence, so item ids and borrower ids advance independently.
/// Arithmetic wraps on overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: u32,
}

impl IdSequence {
    /// Creates a sequence whose next id is 1.
    pub const fn new() -> Self {
        IdSequence { last: 0 }
    }

    /// Advances the sequence and returns the new value.
    pub fn next_raw(&mut self) -> u32 {
        self.last = self.last.wrapping_add(1);
        self.last
    }

    /// The most recently issued value (0 before the first call).
    #[inline]
    pub const fn last(&self) -> u32 {
        self.last
    }

    /// Rewinds the sequence to its initial state.
    ///
    /// Test hook only; production code never rewinds ids.
    pub fn reset(&mut self) {
        self.last = 0;
    }
}

// =============================================================================
// Identifiers
// =============================================================================

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw identifier.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            /// Returns the raw identifier.
            #[inline]
            pub const fn get(&self) -> u32 {
                self.0
            }

            /// Draws the next id from a sequence.
            pub fn next(sequence: &mut IdSequence) -> Self {
                $name(sequence.next_raw())
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TryFromIntError;

            fn try_from(raw: i64) -> Result<Self, Self::Error> {
                u32::try_from(raw).map($name)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                i64::from(id.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(
    /// Identity of an [`Item`]; also the key of the loan ledger.
    ItemId
);

id_newtype!(
    /// Identity of a [`Borrower`].
    BorrowerId
);

// =============================================================================
// Item
// =============================================================================

/// A lendable title.
///
/// `quantity` counts copies currently on the shelf. Nothing stops it from
/// going negative: `update_quantity` accepts any value and the positional
/// return path can credit the wrong item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,

    /// Title, matched case-insensitively by search.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Copies currently available.
    pub quantity: i64,
}

impl Item {
    /// Creates an item, drawing its id from `sequence`.
    pub fn new(
        sequence: &mut IdSequence,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Item {
            id: ItemId::next(sequence),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    /// Returns the item's id.
    #[inline]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Checks whether the item may be lent out right now.
    ///
    /// The last copy on the shelf is never lent, so this needs at least two.
    #[inline]
    pub const fn is_loanable(&self) -> bool {
        self.quantity > 1
    }

    /// Case-insensitive whole-title comparison.
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase() == query.to_lowercase()
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq<ItemId> for Item {
    fn eq(&self, other: &ItemId) -> bool {
        self.id == *other
    }
}

impl PartialEq<Item> for ItemId {
    fn eq(&self, other: &Item) -> bool {
        *self == other.id
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item [id={}, title={}, author={}, quantity={}]",
            self.id, self.title, self.author, self.quantity
        )
    }
}

// =============================================================================
// Borrower
// =============================================================================

/// A registered person. Loans are not linked to borrowers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Borrower {
    id: BorrowerId,

    /// Display name.
    pub name: String,
}

impl Borrower {
    /// Creates a borrower, drawing its id from `sequence`.
    pub fn new(sequence: &mut IdSequence, name: impl Into<String>) -> Self {
        Borrower {
            id: BorrowerId::next(sequence),
            name: name.into(),
        }
    }

    /// Returns the borrower's id.
    #[inline]
    pub const fn id(&self) -> BorrowerId {
        self.id
    }
}

impl PartialEq for Borrower {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Borrower {}

impl Hash for Borrower {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq<BorrowerId> for Borrower {
    fn eq(&self, other: &BorrowerId) -> bool {
        self.id == *other
    }
}

impl PartialEq<Borrower> for BorrowerId {
    fn eq(&self, other: &Borrower) -> bool {
        *self == other.id
    }
}

impl fmt::Display for Borrower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Borrower [id={}, name={}]", self.id, self.name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
