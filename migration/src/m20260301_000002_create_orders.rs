//! Migration to create the orders and order_items tables
//!
//! Order items are exclusively owned by their order: the foreign key
//! cascades on delete so items never outlive the order row.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(string(Orders::CustomerName).not_null())
                    .col(string(Orders::CustomerEmail).not_null())
                    .col(string(Orders::CustomerPhone).not_null())
                    .col(string(Orders::ShippingAddress).not_null())
                    .col(string_null(Orders::PaymentMethod))
                    .col(decimal_len(Orders::TotalAmount, 12, 2).not_null())
                    .col(string(Orders::Status).not_null())
                    .col(
                        timestamp_with_time_zone(Orders::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for the customer order-history lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_customer_email")
                    .table(Orders::Table)
                    .col(Orders::CustomerEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderItems::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItems::Id))
                    .col(integer(OrderItems::OrderId).not_null())
                    .col(string(OrderItems::ProductName).not_null())
                    .col(decimal_len(OrderItems::Price, 12, 2).not_null())
                    .col(integer(OrderItems::Quantity).not_null())
                    .col(decimal_len(OrderItems::Subtotal, 12, 2).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_order_id")
                            .from(OrderItems::Table, OrderItems::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_items_order_id")
                    .table(OrderItems::Table)
                    .col(OrderItems::OrderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    ShippingAddress,
    PaymentMethod,
    TotalAmount,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum OrderItems {
    Table,
    Id,
    OrderId,
    ProductName,
    Price,
    Quantity,
    Subtotal,
}
