use std::collections::HashMap;

use uuid::Uuid;

use sea_orm::{ConnectionTrait, QueryFilter, prelude::*};

use crate::{
    CategoryRef, EntryRecord, LedgerEntry, LedgerError, ResultLedger, WalletRef, categories,
    entries, wallets,
};

use super::super::Ledger;

impl Ledger {
    /// Builds the joined display record for a single entry row.
    pub(in crate::ops) async fn entry_record<C: ConnectionTrait>(
        &self,
        db: &C,
        owner_id: &str,
        model: entries::Model,
    ) -> ResultLedger<EntryRecord> {
        let mut records = self.entry_records(db, owner_id, vec![model]).await?;
        records.pop().ok_or_else(LedgerError::not_found)
    }

    /// Builds joined display records for a batch of entry rows.
    ///
    /// Wallet and category refs are loaded with two `IN` queries instead of
    /// one round trip per entry. A category deleted after the entry was
    /// written renders as uncategorized; a missing wallet is an error, since
    /// wallets are only ever deactivated, never removed.
    pub(in crate::ops) async fn entry_records<C: ConnectionTrait>(
        &self,
        db: &C,
        owner_id: &str,
        models: Vec<entries::Model>,
    ) -> ResultLedger<Vec<EntryRecord>> {
        let mut wallet_ids: Vec<String> = Vec::new();
        let mut category_ids: Vec<String> = Vec::new();
        for model in &models {
            wallet_ids.push(model.primary_wallet_id.clone());
            if let Some(id) = &model.secondary_wallet_id {
                wallet_ids.push(id.clone());
            }
            if let Some(id) = &model.category_id {
                category_ids.push(id.clone());
            }
        }
        wallet_ids.sort();
        wallet_ids.dedup();
        category_ids.sort();
        category_ids.dedup();

        let mut wallet_refs: HashMap<Uuid, WalletRef> = HashMap::new();
        if !wallet_ids.is_empty() {
            let wallet_models = wallets::Entity::find()
                .filter(wallets::Column::OwnerId.eq(owner_id))
                .filter(wallets::Column::Id.is_in(wallet_ids))
                .all(db)
                .await?;
            for model in wallet_models {
                let wallet_ref = WalletRef::try_from(model)?;
                wallet_refs.insert(wallet_ref.id, wallet_ref);
            }
        }

        let mut category_refs: HashMap<Uuid, CategoryRef> = HashMap::new();
        if !category_ids.is_empty() {
            let category_models = categories::Entity::find()
                .filter(categories::Column::OwnerId.eq(owner_id))
                .filter(categories::Column::Id.is_in(category_ids))
                .all(db)
                .await?;
            for model in category_models {
                let category_ref = CategoryRef::try_from(model)?;
                category_refs.insert(category_ref.id, category_ref);
            }
        }

        let mut records = Vec::with_capacity(models.len());
        for model in models {
            let entry = LedgerEntry::try_from(model)?;
            let primary_wallet = wallet_refs
                .get(&entry.primary_wallet_id)
                .cloned()
                .ok_or_else(LedgerError::not_found)?;
            let secondary_wallet = entry
                .secondary_wallet_id
                .map(|id| wallet_refs.get(&id).cloned().ok_or_else(LedgerError::not_found))
                .transpose()?;
            let category = entry
                .category_id
                .and_then(|id| category_refs.get(&id).cloned());
            records.push(EntryRecord {
                entry,
                primary_wallet,
                secondary_wallet,
                category,
            });
        }

        Ok(records)
    }
}
