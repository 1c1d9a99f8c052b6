//! Migration to create the artworks catalog table

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artworks::Table)
                    .if_not_exists()
                    .col(pk_auto(Artworks::Id))
                    .col(string(Artworks::Title).not_null())
                    .col(text_null(Artworks::Description))
                    .col(string(Artworks::Category).not_null())
                    .col(decimal_len(Artworks::Price, 12, 2).not_null())
                    .col(string_null(Artworks::ImageUrl))
                    .col(boolean(Artworks::Available).default(true))
                    .col(integer(Artworks::StockQuantity).default(0))
                    .col(double(Artworks::Rating).default(0.0))
                    .to_owned(),
            )
            .await?;

        // Index for category browsing
        manager
            .create_index(
                Index::create()
                    .name("idx_artworks_category")
                    .table(Artworks::Table)
                    .col(Artworks::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Artworks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Artworks {
    Table,
    Id,
    Title,
    Description,
    Category,
    Price,
    ImageUrl,
    Available,
    StockQuantity,
    Rating,
}
