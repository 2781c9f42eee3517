//! # Error Types
//!
//! Domain-specific error types for lending-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lending-core errors (this file)                                       │
//! │  └── CoreError        - Rejected catalog/registry operations           │
//! │                                                                         │
//! │  lending-cli errors (separate crate)                                   │
//! │  └── CliError         - I/O, malformed input, configuration            │
//! │                                                                         │
//! │  Flow: CoreError → status line (session continues)                     │
//! │        CliError  → session ends                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending identifier or position in every variant
//! 3. Every variant is recoverable: the Catalog/Registry stays usable
//! 4. The `Display` text is the status line shown to the operator

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Rejected ledger operations.
///
/// None of these leave the Catalog or Registry in a partially updated state,
/// except [`CoreError::PositionOutOfRange`] raised by a return (see
/// [`crate::Catalog::return_item`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Borrow target is not in the eligible set.
    ///
    /// ## When This Occurs
    /// - No item carries this id
    /// - The item has one or zero available copies left
    /// - The identifier is negative or zero
    #[error("Sorry! Input invalid / item {identifier} is not available for loan")]
    NotAvailable { identifier: i64 },

    /// Return target has no outstanding loan in the ledger.
    #[error("Invalid input or item {identifier} was never borrowed")]
    NotBorrowed { identifier: i64 },

    /// `update_quantity` was given a position outside `0..len`.
    #[error("Not a valid position: {position} (catalog holds {len} items)")]
    InvalidPosition { position: i64, len: usize },

    /// An identifier accepted as an item id could not be resolved as a
    /// position in the backing sequence.
    ///
    /// ## User Workflow
    /// ```text
    /// Catalog: [id=1 @ position 0]
    ///      │
    ///      ▼
    /// borrow(1): id 1 is eligible
    ///      │
    ///      ▼
    /// resolve position 1 ──► past the end
    ///      │
    ///      ▼
    /// PositionOutOfRange { position: 1, len: 1 }
    /// ```
    #[error("Position {position} is out of range for a catalog of {len} items")]
    PositionOutOfRange { position: i64, len: usize },

    /// No borrower carries this id.
    #[error("No borrower found with ID: {identifier}")]
    BorrowerNotFound { identifier: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
