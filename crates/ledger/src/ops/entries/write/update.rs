use sea_orm::{TransactionTrait, prelude::*};

use crate::entries::EntryDraft;
use crate::{EntryKind, EntryRecord, LedgerEntry, ResultLedger, UpdateEntryCmd, entries};

use super::super::super::{Ledger, normalize_optional_text, with_tx};

/// Merges a patch onto an existing entry into one complete candidate state.
///
/// Omitted fields inherit from the existing entry. One special rule: when the
/// merged kind is not a transfer the counterpart wallet is forced absent,
/// even if the existing entry had one.
fn merge_patch(existing: &LedgerEntry, cmd: &UpdateEntryCmd) -> EntryDraft {
    let kind = cmd.kind.unwrap_or(existing.kind);
    let secondary_wallet_id = if kind == EntryKind::Transfer {
        cmd.secondary_wallet_id.or(existing.secondary_wallet_id)
    } else {
        None
    };
    let category_id = match cmd.category_id {
        None => existing.category_id,
        Some(patched) => patched,
    };
    let note = match cmd.note.as_deref() {
        None => existing.note.clone(),
        Some(patched) => normalize_optional_text(Some(patched)),
    };

    EntryDraft {
        kind,
        amount_minor: cmd.amount_minor.unwrap_or(existing.amount_minor),
        primary_wallet_id: cmd.primary_wallet_id.unwrap_or(existing.primary_wallet_id),
        secondary_wallet_id,
        category_id,
        occurred_at: cmd.occurred_at.unwrap_or(existing.occurred_at),
        note,
    }
}

impl Ledger {
    /// Updates an existing entry by reversing its old balance effect and
    /// applying the effect of the merged state.
    ///
    /// Wallet balance is linear in applied effects, so undo-old + apply-new
    /// is correct for any combination of changed fields (amount, kind, either
    /// wallet, category) without per-case delta arithmetic.
    pub async fn update_entry(&self, cmd: UpdateEntryCmd) -> ResultLedger<EntryRecord> {
        with_tx!(self, |db_tx| {
            let existing_model = self
                .require_entry(&db_tx, &cmd.owner_id, cmd.entry_id)
                .await?;
            let existing = LedgerEntry::try_from(existing_model)?;

            let merged = merge_patch(&existing, &cmd);
            self.validate_entry_draft(&db_tx, &cmd.owner_id, &merged)
                .await?;

            self.apply_wallet_deltas(&db_tx, &cmd.owner_id, &existing.reverse_effect())
                .await?;
            let updated = existing.apply_draft(merged);
            self.apply_wallet_deltas(&db_tx, &cmd.owner_id, &updated.effect())
                .await?;

            let model = entries::ActiveModel::from(&updated).update(&db_tx).await?;

            tracing::debug!(
                entry_id = %updated.id,
                kind = updated.kind.as_str(),
                amount_minor = updated.amount_minor,
                "ledger entry updated"
            );
            self.entry_record(&db_tx, &cmd.owner_id, model).await
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn existing_credit() -> LedgerEntry {
        LedgerEntry {
            id: Uuid::new_v4(),
            owner_id: "alice".to_string(),
            kind: EntryKind::Credit,
            amount_minor: 1000,
            primary_wallet_id: Uuid::new_v4(),
            secondary_wallet_id: None,
            category_id: Some(Uuid::new_v4()),
            occurred_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
            note: Some("salary".to_string()),
        }
    }

    #[test]
    fn empty_patch_keeps_every_field() {
        let existing = existing_credit();
        let cmd = UpdateEntryCmd::new("alice", existing.id);
        let merged = merge_patch(&existing, &cmd);

        assert_eq!(merged.kind, existing.kind);
        assert_eq!(merged.amount_minor, existing.amount_minor);
        assert_eq!(merged.primary_wallet_id, existing.primary_wallet_id);
        assert_eq!(merged.category_id, existing.category_id);
        assert_eq!(merged.occurred_at, existing.occurred_at);
        assert_eq!(merged.note, existing.note);
    }

    #[test]
    fn kind_change_away_from_transfer_drops_counterpart() {
        let mut existing = existing_credit();
        existing.kind = EntryKind::Transfer;
        existing.category_id = None;
        existing.secondary_wallet_id = Some(Uuid::new_v4());

        let cmd = UpdateEntryCmd::new("alice", existing.id).kind(EntryKind::Debit);
        let merged = merge_patch(&existing, &cmd);

        assert_eq!(merged.kind, EntryKind::Debit);
        assert_eq!(merged.secondary_wallet_id, None);
    }

    #[test]
    fn kind_change_to_transfer_picks_up_patched_counterpart() {
        let existing = existing_credit();
        let counterpart = Uuid::new_v4();

        let cmd = UpdateEntryCmd::new("alice", existing.id)
            .kind(EntryKind::Transfer)
            .secondary_wallet(counterpart);
        let merged = merge_patch(&existing, &cmd);

        assert_eq!(merged.secondary_wallet_id, Some(counterpart));
    }

    #[test]
    fn category_clear_and_blank_note_clear() {
        let existing = existing_credit();
        let cmd = UpdateEntryCmd::new("alice", existing.id)
            .clear_category()
            .note("   ");
        let merged = merge_patch(&existing, &cmd);

        assert_eq!(merged.category_id, None);
        assert_eq!(merged.note, None);
    }
}
