use sea_orm::{ConnectionTrait, QueryFilter, prelude::*};
use uuid::Uuid;

use crate::{LedgerError, ResultLedger, categories, entries, wallets};

use super::Ledger;

impl Ledger {
    /// Loads a wallet by id, scoped to the acting owner.
    ///
    /// Missing and foreign-owned wallets are indistinguishable to the caller.
    pub(in crate::ops) async fn require_wallet<C: ConnectionTrait>(
        &self,
        db: &C,
        owner_id: &str,
        wallet_id: Uuid,
    ) -> ResultLedger<wallets::Model> {
        wallets::Entity::find_by_id(wallet_id.to_string())
            .filter(wallets::Column::OwnerId.eq(owner_id))
            .one(db)
            .await?
            .ok_or_else(LedgerError::not_found)
    }

    pub(in crate::ops) async fn require_active_wallet<C: ConnectionTrait>(
        &self,
        db: &C,
        owner_id: &str,
        wallet_id: Uuid,
    ) -> ResultLedger<wallets::Model> {
        let wallet = self.require_wallet(db, owner_id, wallet_id).await?;
        if !wallet.is_active {
            return Err(LedgerError::invalid_state(format!(
                "wallet \"{}\" is inactive",
                wallet.name
            )));
        }
        Ok(wallet)
    }

    pub(in crate::ops) async fn require_category<C: ConnectionTrait>(
        &self,
        db: &C,
        owner_id: &str,
        category_id: Uuid,
    ) -> ResultLedger<categories::Model> {
        categories::Entity::find_by_id(category_id.to_string())
            .filter(categories::Column::OwnerId.eq(owner_id))
            .one(db)
            .await?
            .ok_or_else(LedgerError::not_found)
    }

    pub(in crate::ops) async fn require_entry<C: ConnectionTrait>(
        &self,
        db: &C,
        owner_id: &str,
        entry_id: Uuid,
    ) -> ResultLedger<entries::Model> {
        entries::Entity::find_by_id(entry_id.to_string())
            .filter(entries::Column::OwnerId.eq(owner_id))
            .one(db)
            .await?
            .ok_or_else(LedgerError::not_found)
    }
}
