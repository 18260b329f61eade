//! Create `news_events` table.
//! Event date defaults to the current date when the client omits it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsEvents::Table)
                    .if_not_exists()
                    .col(uuid(NewsEvents::Id).primary_key())
                    .col(date(NewsEvents::EventDate).not_null().default(Expr::current_date()))
                    .col(string(NewsEvents::Title).not_null())
                    .col(text_null(NewsEvents::Summary))
                    .col(string_null(NewsEvents::SourceUrl))
                    .col(integer_null(NewsEvents::SentimentScore))
                    .col(timestamp_with_time_zone(NewsEvents::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(NewsEvents::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum NewsEvents {
    Table,
    Id,
    EventDate,
    Title,
    Summary,
    SourceUrl,
    SentimentScore,
    CreatedAt,
}
