use uuid::Uuid;

use sea_orm::{TransactionTrait, prelude::*};

use crate::{LedgerEntry, ResultLedger, entries};

use super::super::super::{Ledger, with_tx};

impl Ledger {
    /// Deletes an entry after reversing its balance effect.
    ///
    /// Both happen in one transactional scope, so the wallet balances and the
    /// entry set move together or not at all.
    pub async fn delete_entry(&self, owner_id: &str, entry_id: Uuid) -> ResultLedger<()> {
        with_tx!(self, |db_tx| {
            let model = self.require_entry(&db_tx, owner_id, entry_id).await?;
            let entry = LedgerEntry::try_from(model)?;

            self.apply_wallet_deltas(&db_tx, owner_id, &entry.reverse_effect())
                .await?;
            entries::Entity::delete_by_id(entry.id.to_string())
                .exec(&db_tx)
                .await?;

            tracing::debug!(entry_id = %entry.id, "ledger entry deleted");
            Ok(())
        })
    }
}
