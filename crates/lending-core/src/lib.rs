//! # lending-core: Inventory/Loan Accounting for the Lending Ledger
//!
//! This crate holds the rules that keep "copies on the shelf" and "copies on
//! loan" in step as items are added, borrowed, returned, and updated. It has
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Lending Ledger Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 lending-cli (Session Loop)                      │   │
//! │  │    menu ──► ask_int / ask_line ──► dispatch ──► status line     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lending-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │ registry  │  │   error   │  │   │
//! │  │   │   Item    │  │  Catalog  │  │ Registry  │  │ CoreError │  │   │
//! │  │   │ Borrower  │  │  ledger   │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO THREADS • TYPED OUTCOMES                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item, Borrower, their id newtypes, and the id sequence
//! - [`catalog`] - Catalog and loan ledger
//! - [`registry`] - Borrower registry
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use lending_core::{Catalog, CoreError};
//!
//! let mut catalog = Catalog::new();
//! assert!(catalog.list_all().is_none());
//!
//! catalog.add_item("Dune", "Herbert", 2);
//! assert_eq!(catalog.available_for_loan().count(), 1);
//!
//! // Status lines come from Display
//! let err = catalog.return_item(1).unwrap_err();
//! assert_eq!(err, CoreError::NotBorrowed { identifier: 1 });
//! println!("{}", err);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod registry;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Borrowed, Catalog, Returned};
pub use error::{CoreError, CoreResult};
pub use registry::Registry;
pub use types::*;
