use std::collections::HashMap;

use uuid::Uuid;

use sea_orm::{
    ActiveValue, ConnectionTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*,
    sea_query::Expr,
};

use crate::effect::WalletDelta;
use crate::entries::parse_entity_id;
use crate::{LedgerEntry, LedgerError, ResultLedger, entries, wallets};

use super::{Ledger, with_tx};

impl Ledger {
    /// Applies balance deltas as atomic in-place increments
    /// (`balance_minor = balance_minor + ?`), never read-modify-write, so
    /// concurrent mutations touching the same wallet serialize on the
    /// storage engine's row lock.
    pub(in crate::ops) async fn apply_wallet_deltas<C: ConnectionTrait>(
        &self,
        db: &C,
        owner_id: &str,
        deltas: &[WalletDelta],
    ) -> ResultLedger<()> {
        for delta in deltas {
            if delta.amount_minor == 0 {
                continue;
            }
            let result = wallets::Entity::update_many()
                .col_expr(
                    wallets::Column::BalanceMinor,
                    Expr::col(wallets::Column::BalanceMinor).add(delta.amount_minor),
                )
                .filter(wallets::Column::Id.eq(delta.wallet_id.to_string()))
                .filter(wallets::Column::OwnerId.eq(owner_id))
                .exec(db)
                .await?;
            if result.rows_affected != 1 {
                return Err(LedgerError::not_found());
            }
        }
        Ok(())
    }

    /// Rebuilds every wallet balance of an owner from the entries that
    /// reference it.
    ///
    /// Repair path for balances corrupted outside the engine; the normal
    /// mutation flow never needs it. Runs in one transactional scope so
    /// readers never observe a half-rebuilt state.
    pub async fn recompute_wallet_balances(&self, owner_id: &str) -> ResultLedger<()> {
        with_tx!(self, |db_tx| {
            let wallet_models = wallets::Entity::find()
                .filter(wallets::Column::OwnerId.eq(owner_id))
                .all(&db_tx)
                .await?;

            let mut balances: HashMap<Uuid, i64> = HashMap::new();
            for model in &wallet_models {
                balances.insert(parse_entity_id(&model.id)?, 0);
            }

            let entry_models = entries::Entity::find()
                .filter(entries::Column::OwnerId.eq(owner_id))
                .order_by_asc(entries::Column::OccurredAt)
                .order_by_asc(entries::Column::Id)
                .all(&db_tx)
                .await?;

            for model in entry_models {
                let entry = LedgerEntry::try_from(model)?;
                for delta in entry.effect() {
                    let balance = balances
                        .get_mut(&delta.wallet_id)
                        .ok_or_else(LedgerError::not_found)?;
                    *balance += delta.amount_minor;
                }
            }

            for (wallet_id, balance_minor) in balances {
                let wallet_model = wallets::ActiveModel {
                    id: ActiveValue::Set(wallet_id.to_string()),
                    balance_minor: ActiveValue::Set(balance_minor),
                    ..Default::default()
                };
                wallet_model.update(&db_tx).await?;
            }

            tracing::info!(owner_id = %owner_id, "wallet balances recomputed");
            Ok(())
        })
    }
}
