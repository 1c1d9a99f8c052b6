//! Migration to create the contact_requests table for commission enquiries

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(ContactRequests::Id))
                    .col(string(ContactRequests::Name).not_null())
                    .col(string(ContactRequests::Email).not_null())
                    .col(string(ContactRequests::ArtType).not_null())
                    .col(text(ContactRequests::Message).not_null())
                    .col(string(ContactRequests::Status).not_null())
                    .col(
                        timestamp_with_time_zone(ContactRequests::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactRequests {
    Table,
    Id,
    Name,
    Email,
    ArtType,
    Message,
    Status,
    CreatedAt,
}
