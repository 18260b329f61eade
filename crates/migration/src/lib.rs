//! Migrator registering entity-specific migrations in dependency order.
//! Junction tables depend on all four entity tables; indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_industry;
mod m20250101_000002_create_macro_indicator;
mod m20250101_000003_create_company;
mod m20250101_000004_create_news_event;
mod m20250101_000005_create_news_tags;
mod m20250101_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_industry::Migration),
            Box::new(m20250101_000002_create_macro_indicator::Migration),
            Box::new(m20250101_000003_create_company::Migration),
            Box::new(m20250101_000004_create_news_event::Migration),
            Box::new(m20250101_000005_create_news_tags::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000006_add_indexes::Migration),
        ]
    }
}
