use sea_orm::ConnectionTrait;

use crate::entries::EntryDraft;
use crate::{CategoryKind, EntryKind, LedgerError, ResultLedger};

use super::Ledger;

impl Ledger {
    /// Checks a complete candidate entry state against the current wallet and
    /// category records, inside the caller's transactional scope.
    ///
    /// Runs before any write, so a violation always leaves storage untouched.
    /// Checks are ordered cheapest-first: pure shape invariants, then the
    /// reads against referenced records.
    pub(in crate::ops) async fn validate_entry_draft<C: ConnectionTrait>(
        &self,
        db: &C,
        owner_id: &str,
        draft: &EntryDraft,
    ) -> ResultLedger<()> {
        if draft.amount_minor <= 0 {
            return Err(LedgerError::invalid_state("entry amount must be positive"));
        }

        match draft.kind {
            EntryKind::Transfer => {
                let Some(secondary_wallet_id) = draft.secondary_wallet_id else {
                    return Err(LedgerError::invalid_state(
                        "a transfer requires a counterpart wallet",
                    ));
                };
                if secondary_wallet_id == draft.primary_wallet_id {
                    return Err(LedgerError::invalid_state(
                        "transfer source and destination wallets must differ",
                    ));
                }
                if draft.category_id.is_some() {
                    return Err(LedgerError::invalid_state(
                        "transfer entries cannot reference a category",
                    ));
                }
                self.require_active_wallet(db, owner_id, draft.primary_wallet_id)
                    .await?;
                self.require_active_wallet(db, owner_id, secondary_wallet_id)
                    .await?;
            }
            EntryKind::Credit | EntryKind::Debit => {
                if draft.secondary_wallet_id.is_some() {
                    return Err(LedgerError::invalid_state(
                        "a counterpart wallet is only valid for transfers",
                    ));
                }
                self.require_active_wallet(db, owner_id, draft.primary_wallet_id)
                    .await?;

                if let Some(category_id) = draft.category_id {
                    let category = self.require_category(db, owner_id, category_id).await?;
                    let category_kind = CategoryKind::try_from(category.kind.as_str())?;
                    let expected = match draft.kind {
                        EntryKind::Credit => CategoryKind::Income,
                        _ => CategoryKind::Expense,
                    };
                    if category_kind != expected {
                        return Err(LedgerError::invalid_state(format!(
                            "a {} entry must use a {} category, got {}",
                            draft.kind.as_str(),
                            expected.as_str(),
                            category_kind.as_str()
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
