//! Ledger entry primitives.
//!
//! A `LedgerEntry` is a single recorded movement of money that justifies part
//! of one or two wallets' balances. Amounts are stored as signed integer
//! **minor units** (e.g. cents); the entry amount itself is always positive
//! and the direction comes from the kind.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::effect::{self, WalletDelta};
use crate::{LedgerError, ResultLedger};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Money entering the primary wallet from outside.
    Credit,
    /// Money leaving the primary wallet to outside.
    Debit,
    /// Money moving from the primary wallet to the secondary wallet.
    Transfer,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::Transfer => "transfer",
        }
    }
}

impl TryFrom<&str> for EntryKind {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            "transfer" => Ok(Self::Transfer),
            other => Err(LedgerError::invalid_state(format!(
                "invalid entry kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub owner_id: String,
    pub kind: EntryKind,
    pub amount_minor: i64,
    pub primary_wallet_id: Uuid,
    pub secondary_wallet_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub occurred_at: DateTime<Utc>,
    pub note: Option<String>,
}

impl LedgerEntry {
    pub(crate) fn from_draft(owner_id: String, draft: EntryDraft) -> ResultLedger<Self> {
        if draft.amount_minor <= 0 {
            return Err(LedgerError::invalid_state(
                "entry amount must be positive",
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            owner_id,
            kind: draft.kind,
            amount_minor: draft.amount_minor,
            primary_wallet_id: draft.primary_wallet_id,
            secondary_wallet_id: draft.secondary_wallet_id,
            category_id: draft.category_id,
            occurred_at: draft.occurred_at,
            note: draft.note,
        })
    }

    /// Returns this entry rewritten with the merged candidate state, keeping
    /// its identity.
    pub(crate) fn apply_draft(&self, draft: EntryDraft) -> Self {
        Self {
            id: self.id,
            owner_id: self.owner_id.clone(),
            kind: draft.kind,
            amount_minor: draft.amount_minor,
            primary_wallet_id: draft.primary_wallet_id,
            secondary_wallet_id: draft.secondary_wallet_id,
            category_id: draft.category_id,
            occurred_at: draft.occurred_at,
            note: draft.note,
        }
    }

    /// The signed balance deltas this entry produces on the wallets it
    /// references.
    pub(crate) fn effect(&self) -> Vec<WalletDelta> {
        effect::entry_effect(
            self.kind,
            self.amount_minor,
            self.primary_wallet_id,
            self.secondary_wallet_id,
        )
    }

    /// The deltas that undo [`LedgerEntry::effect`].
    pub(crate) fn reverse_effect(&self) -> Vec<WalletDelta> {
        effect::reversed(&self.effect())
    }
}

/// One complete, self-consistent candidate state for an entry.
///
/// Built either from a create command or by merging a patch onto an existing
/// entry. Validation and effect computation always run against a draft, never
/// against loose patch fields.
#[derive(Clone, Debug)]
pub(crate) struct EntryDraft {
    pub kind: EntryKind,
    pub amount_minor: i64,
    pub primary_wallet_id: Uuid,
    pub secondary_wallet_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub occurred_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub owner_id: String,
    pub kind: String,
    pub amount_minor: i64,
    pub primary_wallet_id: String,
    pub secondary_wallet_id: Option<String>,
    pub category_id: Option<String>,
    pub occurred_at: DateTimeUtc,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wallets::Entity",
        from = "Column::PrimaryWalletId",
        to = "super::wallets::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    PrimaryWallet,
    #[sea_orm(
        belongs_to = "super::wallets::Entity",
        from = "Column::SecondaryWalletId",
        to = "super::wallets::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    SecondaryWallet,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Category,
}

impl Related<super::wallets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrimaryWallet.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&LedgerEntry> for ActiveModel {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            id: ActiveValue::Set(entry.id.to_string()),
            owner_id: ActiveValue::Set(entry.owner_id.clone()),
            kind: ActiveValue::Set(entry.kind.as_str().to_string()),
            amount_minor: ActiveValue::Set(entry.amount_minor),
            primary_wallet_id: ActiveValue::Set(entry.primary_wallet_id.to_string()),
            secondary_wallet_id: ActiveValue::Set(
                entry.secondary_wallet_id.map(|id| id.to_string()),
            ),
            category_id: ActiveValue::Set(entry.category_id.map(|id| id.to_string())),
            occurred_at: ActiveValue::Set(entry.occurred_at),
            note: ActiveValue::Set(entry.note.clone()),
        }
    }
}

impl TryFrom<Model> for LedgerEntry {
    type Error = LedgerError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_entity_id(&model.id)?,
            owner_id: model.owner_id,
            kind: EntryKind::try_from(model.kind.as_str())?,
            amount_minor: model.amount_minor,
            primary_wallet_id: parse_entity_id(&model.primary_wallet_id)?,
            secondary_wallet_id: model
                .secondary_wallet_id
                .as_deref()
                .map(parse_entity_id)
                .transpose()?,
            category_id: model
                .category_id
                .as_deref()
                .map(parse_entity_id)
                .transpose()?,
            occurred_at: model.occurred_at,
            note: model.note,
        })
    }
}

pub(crate) fn parse_entity_id(raw: &str) -> ResultLedger<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| LedgerError::invalid_state(format!("malformed record id: {raw}")))
}
