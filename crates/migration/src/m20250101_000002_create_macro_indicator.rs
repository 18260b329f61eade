//! Create `macro_indicators` table.
//! Note the legacy column name `indicator_category` for the category field.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MacroIndicators::Table)
                    .if_not_exists()
                    .col(uuid(MacroIndicators::Id).primary_key())
                    .col(string_len_uniq(MacroIndicators::IndicatorName, 100).not_null())
                    .col(string_len_null(MacroIndicators::IndicatorCategory, 50))
                    .col(timestamp_with_time_zone(MacroIndicators::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MacroIndicators::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MacroIndicators {
    Table,
    Id,
    IndicatorName,
    IndicatorCategory,
    CreatedAt,
}
