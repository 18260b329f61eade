//! Create `industries` table.
//! Industries form a hierarchy through a nullable self-referencing parent id.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Industries::Table)
                    .if_not_exists()
                    .col(uuid(Industries::Id).primary_key())
                    .col(string_len_uniq(Industries::Name, 100).not_null())
                    .col(uuid_null(Industries::ParentId))
                    .col(text_null(Industries::Description))
                    .col(timestamp_with_time_zone(Industries::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_industries_parent")
                            .from(Industries::Table, Industries::ParentId)
                            .to(Industries::Table, Industries::Id)
                            // Deleting a parent detaches its sub-industries
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Industries::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Industries {
    Table,
    Id,
    Name,
    ParentId,
    Description,
    CreatedAt,
}
