//! Request/response shapes for the order endpoints.
//!
//! Wire format is camelCase to match the storefront client.

use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::entities::{order_items, orders, orders::OrderStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
    pub payment_method: Option<String>,
}

/// One requested line item. Price and quantity arrive as optionals so the
/// workflow can reject incomplete items explicitly instead of failing
/// during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_name: String,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub payment_method: Option<String>,
    pub items: Vec<OrderItemResponse>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub id: i32,
    pub product_name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub subtotal: Decimal,
}

/// Query payload for `PUT /api/orders/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    pub status: OrderStatus,
}

impl OrderResponse {
    pub fn from_parts(order: orders::Model, items: Vec<order_items::Model>) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            customer_phone: order.customer_phone,
            shipping_address: order.shipping_address,
            payment_method: order.payment_method,
            items: items.into_iter().map(OrderItemResponse::from).collect(),
            total_amount: order.total_amount,
            status: order.status,
            created_at: order.created_at,
        }
    }
}

impl From<order_items::Model> for OrderItemResponse {
    fn from(item: order_items::Model) -> Self {
        Self {
            id: item.id,
            product_name: item.product_name,
            price: item.price,
            quantity: item.quantity,
            subtotal: item.subtotal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_order_request_wire_format() {
        let json = r#"{
            "customerName": "Asha",
            "customerEmail": "asha@example.com",
            "customerPhone": "+91-9000000000",
            "shippingAddress": "12 Gallery Lane, Pune",
            "items": [{"productName": "Sunset Oil", "price": "100.00", "quantity": 2}],
            "paymentMethod": "razorpay"
        }"#;

        let request: CreateOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.customer_name, "Asha");
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].price, Some(dec!(100.00)));
        assert_eq!(request.items[0].quantity, Some(2));
    }

    #[test]
    fn test_status_parses_screaming_snake() {
        let status: OrderStatus = serde_json::from_str("\"SHIPPED\"").unwrap();
        assert_eq!(status, OrderStatus::Shipped);
    }
}
