//! Balance effect calculation.
//!
//! The single place where kind/amount/wallet semantics are defined. These
//! functions are pure: they never touch storage, and the orchestrator turns
//! their output into atomic per-wallet balance adjustments.

use uuid::Uuid;

use crate::EntryKind;

/// A signed balance change on one wallet, in minor units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct WalletDelta {
    pub wallet_id: Uuid,
    pub amount_minor: i64,
}

/// Computes the balance effect of an entry state.
///
/// - Credit: `+amount` on the primary wallet.
/// - Debit: `-amount` on the primary wallet.
/// - Transfer: `-amount` on the primary wallet, `+amount` on the secondary.
///
/// A transfer whose counterpart is absent contributes only the primary delta;
/// the validator rejects such a state before any write, so this path is only
/// reachable when reversing rows that predate the counterpart.
pub(crate) fn entry_effect(
    kind: EntryKind,
    amount_minor: i64,
    primary_wallet_id: Uuid,
    secondary_wallet_id: Option<Uuid>,
) -> Vec<WalletDelta> {
    match kind {
        EntryKind::Credit => vec![WalletDelta {
            wallet_id: primary_wallet_id,
            amount_minor,
        }],
        EntryKind::Debit => vec![WalletDelta {
            wallet_id: primary_wallet_id,
            amount_minor: -amount_minor,
        }],
        EntryKind::Transfer => {
            let mut deltas = vec![WalletDelta {
                wallet_id: primary_wallet_id,
                amount_minor: -amount_minor,
            }];
            if let Some(secondary_wallet_id) = secondary_wallet_id {
                deltas.push(WalletDelta {
                    wallet_id: secondary_wallet_id,
                    amount_minor,
                });
            }
            deltas
        }
    }
}

/// Negates every delta, undoing the effect they were computed from.
pub(crate) fn reversed(deltas: &[WalletDelta]) -> Vec<WalletDelta> {
    deltas
        .iter()
        .map(|delta| WalletDelta {
            wallet_id: delta.wallet_id,
            amount_minor: -delta.amount_minor,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet() -> Uuid {
        Uuid::new_v4()
    }

    #[test]
    fn credit_increases_primary() {
        let primary = wallet();
        let deltas = entry_effect(EntryKind::Credit, 1040, primary, None);
        assert_eq!(
            deltas,
            vec![WalletDelta {
                wallet_id: primary,
                amount_minor: 1040
            }]
        );
    }

    #[test]
    fn debit_decreases_primary() {
        let primary = wallet();
        let deltas = entry_effect(EntryKind::Debit, 250, primary, None);
        assert_eq!(
            deltas,
            vec![WalletDelta {
                wallet_id: primary,
                amount_minor: -250
            }]
        );
    }

    #[test]
    fn transfer_moves_between_wallets() {
        let primary = wallet();
        let secondary = wallet();
        let deltas = entry_effect(EntryKind::Transfer, 4000, primary, Some(secondary));
        assert_eq!(
            deltas,
            vec![
                WalletDelta {
                    wallet_id: primary,
                    amount_minor: -4000
                },
                WalletDelta {
                    wallet_id: secondary,
                    amount_minor: 4000
                },
            ]
        );
    }

    #[test]
    fn transfer_without_counterpart_touches_only_primary() {
        let primary = wallet();
        let deltas = entry_effect(EntryKind::Transfer, 4000, primary, None);
        assert_eq!(
            deltas,
            vec![WalletDelta {
                wallet_id: primary,
                amount_minor: -4000
            }]
        );
    }

    #[test]
    fn reversed_negates_every_delta() {
        let primary = wallet();
        let secondary = wallet();
        let deltas = entry_effect(EntryKind::Transfer, 77, primary, Some(secondary));
        let undone = reversed(&deltas);
        assert_eq!(
            undone,
            vec![
                WalletDelta {
                    wallet_id: primary,
                    amount_minor: 77
                },
                WalletDelta {
                    wallet_id: secondary,
                    amount_minor: -77
                },
            ]
        );
    }

    #[test]
    fn reverse_of_reverse_is_identity() {
        let deltas = entry_effect(EntryKind::Debit, 123, wallet(), None);
        assert_eq!(reversed(&reversed(&deltas)), deltas);
    }
}
