//! Migration to create the testimonials table

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(pk_auto(Testimonials::Id))
                    .col(string(Testimonials::Name).not_null())
                    .col(string(Testimonials::Email).not_null())
                    .col(integer(Testimonials::Rating).not_null())
                    .col(text(Testimonials::Text).not_null())
                    .col(boolean(Testimonials::Approved).default(false))
                    .col(
                        timestamp_with_time_zone(Testimonials::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Name,
    Email,
    Rating,
    Text,
    Approved,
    CreatedAt,
}
