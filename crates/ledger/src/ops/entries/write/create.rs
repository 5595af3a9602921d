use sea_orm::{TransactionTrait, prelude::*};

use crate::entries::EntryDraft;
use crate::{CreateEntryCmd, EntryRecord, LedgerEntry, ResultLedger, entries};

use super::super::super::{Ledger, normalize_optional_text, with_tx};

impl Ledger {
    /// Creates a ledger entry and applies its balance effect.
    ///
    /// Validation, the entry insert, and every wallet delta share one
    /// transactional scope: a failure anywhere leaves no trace.
    pub async fn create_entry(&self, cmd: CreateEntryCmd) -> ResultLedger<EntryRecord> {
        with_tx!(self, |db_tx| {
            let draft = EntryDraft {
                kind: cmd.kind,
                amount_minor: cmd.amount_minor,
                primary_wallet_id: cmd.primary_wallet_id,
                secondary_wallet_id: cmd.secondary_wallet_id,
                category_id: cmd.category_id,
                occurred_at: cmd.occurred_at,
                note: normalize_optional_text(cmd.note.as_deref()),
            };
            self.validate_entry_draft(&db_tx, &cmd.owner_id, &draft)
                .await?;

            let entry = LedgerEntry::from_draft(cmd.owner_id, draft)?;
            let model = entries::ActiveModel::from(&entry).insert(&db_tx).await?;
            self.apply_wallet_deltas(&db_tx, &entry.owner_id, &entry.effect())
                .await?;

            tracing::debug!(
                entry_id = %entry.id,
                kind = entry.kind.as_str(),
                amount_minor = entry.amount_minor,
                "ledger entry created"
            );
            self.entry_record(&db_tx, &entry.owner_id, model).await
        })
    }
}
