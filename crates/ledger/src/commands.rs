//! Command structs for ledger operations.
//!
//! These types group parameters for the write operations (create/update),
//! keeping call sites readable and avoiding long argument lists.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::EntryKind;

/// Create a ledger entry.
#[derive(Clone, Debug)]
pub struct CreateEntryCmd {
    pub owner_id: String,
    pub kind: EntryKind,
    pub amount_minor: i64,
    pub primary_wallet_id: Uuid,
    pub secondary_wallet_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub occurred_at: DateTime<Utc>,
    pub note: Option<String>,
}

impl CreateEntryCmd {
    #[must_use]
    pub fn new(
        owner_id: impl Into<String>,
        kind: EntryKind,
        amount_minor: i64,
        primary_wallet_id: Uuid,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            kind,
            amount_minor,
            primary_wallet_id,
            secondary_wallet_id: None,
            category_id: None,
            occurred_at,
            note: None,
        }
    }

    #[must_use]
    pub fn secondary_wallet(mut self, wallet_id: Uuid) -> Self {
        self.secondary_wallet_id = Some(wallet_id);
        self
    }

    #[must_use]
    pub fn category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Update an existing ledger entry.
///
/// Every field is a patch: `None` keeps the existing value. The category can
/// be cleared explicitly with [`UpdateEntryCmd::clear_category`]; a note set
/// to whitespace clears the note. When the merged kind is not a transfer, the
/// counterpart wallet is dropped even if the existing entry had one.
#[derive(Clone, Debug)]
pub struct UpdateEntryCmd {
    pub owner_id: String,
    pub entry_id: Uuid,

    pub kind: Option<EntryKind>,
    pub amount_minor: Option<i64>,
    pub primary_wallet_id: Option<Uuid>,
    pub secondary_wallet_id: Option<Uuid>,
    pub category_id: Option<Option<Uuid>>,
    pub occurred_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

impl UpdateEntryCmd {
    #[must_use]
    pub fn new(owner_id: impl Into<String>, entry_id: Uuid) -> Self {
        Self {
            owner_id: owner_id.into(),
            entry_id,
            kind: None,
            amount_minor: None,
            primary_wallet_id: None,
            secondary_wallet_id: None,
            category_id: None,
            occurred_at: None,
            note: None,
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: EntryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn amount_minor(mut self, amount_minor: i64) -> Self {
        self.amount_minor = Some(amount_minor);
        self
    }

    #[must_use]
    pub fn primary_wallet(mut self, wallet_id: Uuid) -> Self {
        self.primary_wallet_id = Some(wallet_id);
        self
    }

    #[must_use]
    pub fn secondary_wallet(mut self, wallet_id: Uuid) -> Self {
        self.secondary_wallet_id = Some(wallet_id);
        self
    }

    #[must_use]
    pub fn category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(Some(category_id));
        self
    }

    #[must_use]
    pub fn clear_category(mut self) -> Self {
        self.category_id = Some(None);
        self
    }

    #[must_use]
    pub fn occurred_at(mut self, occurred_at: DateTime<Utc>) -> Self {
        self.occurred_at = Some(occurred_at);
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
