//! Secondary indexes.
//! Sub-industries are resolved by an indexed lookup on `parent_id`, so that
//! lookup gets its own index instead of relying on a back-reference.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_industries_parent_id")
                    .table(Industries::Table)
                    .col(Industries::ParentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_companies_base_industry_id")
                    .table(Companies::Table)
                    .col(Companies::BaseIndustryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_news_events_event_date")
                    .table(NewsEvents::Table)
                    .col(NewsEvents::EventDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_news_events_event_date").table(NewsEvents::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_companies_base_industry_id").table(Companies::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_industries_parent_id").table(Industries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Industries { Table, ParentId }

#[derive(DeriveIden)]
enum Companies { Table, BaseIndustryId }

#[derive(DeriveIden)]
enum NewsEvents { Table, EventDate }
