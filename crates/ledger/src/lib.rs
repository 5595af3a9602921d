//! Ledger consistency engine for a personal-finance record keeper.
//!
//! Users hold wallets and record ledger entries (credits, debits, transfers)
//! against them. This crate owns the only write path to wallet balances: every
//! entry mutation runs inside one database transaction that persists the entry
//! row and applies its balance effect together, so balances never drift from
//! the entries that justify them.

pub use categories::CategoryKind;
pub use commands::{CreateEntryCmd, UpdateEntryCmd};
pub use entries::{EntryKind, LedgerEntry};
pub use error::LedgerError;
pub use ops::{EntryFilter, Ledger, LedgerBuilder};
pub use views::{CategoryRef, EntryRecord, WalletRef};

pub mod categories;
mod commands;
mod effect;
pub mod entries;
mod error;
mod ops;
mod views;
pub mod wallets;

type ResultLedger<T> = Result<T, LedgerError>;
