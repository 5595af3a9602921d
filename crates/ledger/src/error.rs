//! The module contains the errors the ledger can surface.
//!
//! The taxonomy is deliberately small:
//!
//! - [`NotFound`] for any record that is missing or owned by another actor.
//! - [`InvalidState`] for a mutation that would violate a ledger invariant.
//! - [`Storage`] for a transactional scope that could not commit.
//!
//!  [`NotFound`]: LedgerError::NotFound
//!  [`InvalidState`]: LedgerError::InvalidState
//!  [`Storage`]: LedgerError::Storage
use sea_orm::DbErr;
use thiserror::Error;

/// Ledger engine errors.
///
/// `NotFound` carries the same message whether the missing record is an
/// entry, a wallet, or a category, so callers cannot probe which records
/// exist under another owner.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("{0}")]
    NotFound(String),
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error(transparent)]
    Storage(#[from] DbErr),
}

impl LedgerError {
    pub(crate) fn not_found() -> Self {
        Self::NotFound("requested record not found".to_string())
    }

    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState(reason.into())
    }
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::InvalidState(a), Self::InvalidState(b)) => a == b,
            (Self::Storage(a), Self::Storage(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
