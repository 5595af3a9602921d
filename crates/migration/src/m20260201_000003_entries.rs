use sea_orm_migration::prelude::*;

use crate::m20260201_000001_wallets::Wallets;
use crate::m20260201_000002_categories::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Entries {
    Table,
    Id,
    OwnerId,
    Kind,
    AmountMinor,
    PrimaryWalletId,
    SecondaryWalletId,
    CategoryId,
    OccurredAt,
    Note,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Entries::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Entries::OwnerId).string().not_null())
                    .col(ColumnDef::new(Entries::Kind).string().not_null())
                    .col(
                        ColumnDef::new(Entries::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Entries::PrimaryWalletId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Entries::SecondaryWalletId).string())
                    .col(ColumnDef::new(Entries::CategoryId).string())
                    .col(ColumnDef::new(Entries::OccurredAt).timestamp().not_null())
                    .col(ColumnDef::new(Entries::Note).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-entries-primary_wallet_id")
                            .from(Entries::Table, Entries::PrimaryWalletId)
                            .to(Wallets::Table, Wallets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-entries-secondary_wallet_id")
                            .from(Entries::Table, Entries::SecondaryWalletId)
                            .to(Wallets::Table, Wallets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-entries-category_id")
                            .from(Entries::Table, Entries::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-entries-owner_id-occurred_at")
                    .table(Entries::Table)
                    .col(Entries::OwnerId)
                    .col(Entries::OccurredAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-entries-primary_wallet_id")
                    .table(Entries::Table)
                    .col(Entries::PrimaryWalletId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-entries-secondary_wallet_id")
                    .table(Entries::Table)
                    .col(Entries::SecondaryWalletId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-entries-category_id")
                    .table(Entries::Table)
                    .col(Entries::CategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entries::Table).to_owned())
            .await?;
        Ok(())
    }
}
