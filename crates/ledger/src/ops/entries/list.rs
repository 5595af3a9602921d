use chrono::{DateTime, Utc};
use uuid::Uuid;

use sea_orm::{Condition, QueryFilter, QueryOrder, prelude::*};

use crate::{EntryKind, EntryRecord, LedgerError, ResultLedger, entries};

use super::super::Ledger;

/// Filters for listing ledger entries.
///
/// Filters are independently optional and conjunctive. The date range
/// `[from, to]` is inclusive on both bounds, in UTC.
#[derive(Clone, Debug, Default)]
pub struct EntryFilter {
    /// Matches entries where the wallet appears as primary OR secondary.
    pub wallet_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub kind: Option<EntryKind>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

fn validate_entry_filter(filter: &EntryFilter) -> ResultLedger<()> {
    if let (Some(from), Some(to)) = (filter.from, filter.to)
        && from > to
    {
        return Err(LedgerError::invalid_state(
            "invalid range: from must be <= to",
        ));
    }
    Ok(())
}

impl Ledger {
    /// Lists an owner's entries, newest first, with display data joined.
    ///
    /// Pure read: runs under the storage engine's default isolation, outside
    /// any mutation scope.
    pub async fn list_entries(
        &self,
        owner_id: &str,
        filter: &EntryFilter,
    ) -> ResultLedger<Vec<EntryRecord>> {
        validate_entry_filter(filter)?;

        let mut query = entries::Entity::find()
            .filter(entries::Column::OwnerId.eq(owner_id))
            .order_by_desc(entries::Column::OccurredAt)
            .order_by_desc(entries::Column::Id);

        if let Some(wallet_id) = filter.wallet_id {
            let wallet_id = wallet_id.to_string();
            query = query.filter(
                Condition::any()
                    .add(entries::Column::PrimaryWalletId.eq(wallet_id.clone()))
                    .add(entries::Column::SecondaryWalletId.eq(wallet_id)),
            );
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(entries::Column::CategoryId.eq(category_id.to_string()));
        }
        if let Some(kind) = filter.kind {
            query = query.filter(entries::Column::Kind.eq(kind.as_str()));
        }
        if let Some(from) = filter.from {
            query = query.filter(entries::Column::OccurredAt.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entries::Column::OccurredAt.lte(to));
        }

        let models = query.all(&self.database).await?;
        self.entry_records(&self.database, owner_id, models).await
    }

    /// Returns a single entry with display data joined.
    pub async fn find_entry(&self, owner_id: &str, entry_id: Uuid) -> ResultLedger<EntryRecord> {
        let model = self.require_entry(&self.database, owner_id, entry_id).await?;
        self.entry_record(&self.database, owner_id, model).await
    }
}
