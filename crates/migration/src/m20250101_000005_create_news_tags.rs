//! Create the three junction tables tagging news events with industries,
//! companies and macro indicators. Composite primary keys keep each pair
//! unique; both foreign keys cascade so removing either endpoint removes the
//! junction row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsIndustries::Table)
                    .if_not_exists()
                    .col(uuid(NewsIndustries::NewsId))
                    .col(uuid(NewsIndustries::IndustryId))
                    .primary_key(
                        Index::create()
                            .name("pk_news_industries")
                            .col(NewsIndustries::NewsId)
                            .col(NewsIndustries::IndustryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_industries_news")
                            .from(NewsIndustries::Table, NewsIndustries::NewsId)
                            .to(NewsEvents::Table, NewsEvents::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_industries_industry")
                            .from(NewsIndustries::Table, NewsIndustries::IndustryId)
                            .to(Industries::Table, Industries::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NewsCompanies::Table)
                    .if_not_exists()
                    .col(uuid(NewsCompanies::NewsId))
                    .col(uuid(NewsCompanies::CompanyId))
                    .primary_key(
                        Index::create()
                            .name("pk_news_companies")
                            .col(NewsCompanies::NewsId)
                            .col(NewsCompanies::CompanyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_companies_news")
                            .from(NewsCompanies::Table, NewsCompanies::NewsId)
                            .to(NewsEvents::Table, NewsEvents::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_companies_company")
                            .from(NewsCompanies::Table, NewsCompanies::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NewsMacro::Table)
                    .if_not_exists()
                    .col(uuid(NewsMacro::NewsId))
                    .col(uuid(NewsMacro::MacroId))
                    .primary_key(
                        Index::create()
                            .name("pk_news_macro")
                            .col(NewsMacro::NewsId)
                            .col(NewsMacro::MacroId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_macro_news")
                            .from(NewsMacro::Table, NewsMacro::NewsId)
                            .to(NewsEvents::Table, NewsEvents::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_macro_macro")
                            .from(NewsMacro::Table, NewsMacro::MacroId)
                            .to(MacroIndicators::Table, MacroIndicators::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(NewsMacro::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(NewsCompanies::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(NewsIndustries::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum NewsIndustries {
    Table,
    NewsId,
    IndustryId,
}

#[derive(DeriveIden)]
enum NewsCompanies {
    Table,
    NewsId,
    CompanyId,
}

#[derive(DeriveIden)]
enum NewsMacro {
    Table,
    NewsId,
    MacroId,
}

#[derive(DeriveIden)]
enum NewsEvents { Table, Id }

#[derive(DeriveIden)]
enum Industries { Table, Id }

#[derive(DeriveIden)]
enum Companies { Table, Id }

#[derive(DeriveIden)]
enum MacroIndicators { Table, Id }
