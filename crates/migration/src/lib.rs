pub use sea_orm_migration::prelude::*;

mod m20260201_000001_wallets;
mod m20260201_000002_categories;
mod m20260201_000003_entries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260201_000001_wallets::Migration),
            Box::new(m20260201_000002_categories::Migration),
            Box::new(m20260201_000003_entries::Migration),
        ]
    }
}
