//! Display-oriented views returned by the engine.
//!
//! Mutations and reads return entries with the referenced wallet and category
//! data already joined, so consumers never need a second lookup to render
//! "which wallet was this, what color is that category".

use serde::Serialize;
use uuid::Uuid;

use crate::entries::parse_entity_id;
use crate::{categories, wallets, CategoryKind, LedgerEntry, LedgerError};

/// Wallet data embedded in an [`EntryRecord`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WalletRef {
    pub id: Uuid,
    pub name: String,
    pub kind: String,
    pub currency: String,
}

impl TryFrom<wallets::Model> for WalletRef {
    type Error = LedgerError;

    fn try_from(model: wallets::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_entity_id(&model.id)?,
            name: model.name,
            kind: model.kind,
            currency: model.currency,
        })
    }
}

/// Category data embedded in an [`EntryRecord`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryRef {
    pub id: Uuid,
    pub name: String,
    pub kind: CategoryKind,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl TryFrom<categories::Model> for CategoryRef {
    type Error = LedgerError;

    fn try_from(model: categories::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_entity_id(&model.id)?,
            name: model.name,
            kind: CategoryKind::try_from(model.kind.as_str())?,
            color: model.color,
            icon: model.icon,
        })
    }
}

/// A ledger entry joined with the wallet/category data it references.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntryRecord {
    pub entry: LedgerEntry,
    pub primary_wallet: WalletRef,
    pub secondary_wallet: Option<WalletRef>,
    pub category: Option<CategoryRef>,
}
