//! Wallet records.
//!
//! A wallet is a balance-holding account (cash, bank account, credit card)
//! owned by exactly one actor. The ledger engine reads wallets and adjusts
//! `balance_minor`; every other column (name, kind, active flag) is managed by
//! the external wallet directory and never written here.
//!
//! `balance_minor` is a materialized aggregate in integer minor units: it is
//! maintained incrementally by entry mutations and must always equal the sum
//! of the effects of all entries currently referencing the wallet. Negative
//! balances are allowed (credit-card and overdraft wallets).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub kind: String,
    pub balance_minor: i64,
    pub currency: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
