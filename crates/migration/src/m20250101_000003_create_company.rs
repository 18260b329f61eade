//! Create `companies` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(uuid(Companies::Id).primary_key())
                    .col(string_len_uniq(Companies::Ticker, 20).not_null())
                    .col(string_len(Companies::CompanyName, 255).not_null())
                    .col(uuid_null(Companies::BaseIndustryId))
                    .col(timestamp_with_time_zone(Companies::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_companies_base_industry")
                            .from(Companies::Table, Companies::BaseIndustryId)
                            .to(Industries::Table, Industries::Id)
                            // Companies survive their industry; the link is dropped
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Companies::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
    Ticker,
    CompanyName,
    BaseIndustryId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Industries { Table, Id }
