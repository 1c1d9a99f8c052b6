//! Order workflow: validation, total computation, persistence and the
//! best-effort confirmation that follows a successful commit.

use std::sync::Arc;

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    Set, TransactionTrait,
};

use crate::entities::{order_items, orders, orders::OrderStatus, prelude::*};
use crate::error::ApiError;
use crate::models::order::{CreateOrderRequest, OrderItemRequest, OrderResponse};
use crate::services::notifier::Notifier;

/// A validated line item with its subtotal computed.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedItem {
    pub product_name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub subtotal: Decimal,
}

/// Validates the requested items and computes each subtotal plus the order
/// total, accumulated left-to-right from zero in exact decimal arithmetic.
///
/// Fails without side effects when the list is empty, a price is missing,
/// or a quantity is missing or not positive.
pub fn price_items(items: &[OrderItemRequest]) -> Result<(Vec<PricedItem>, Decimal), ApiError> {
    if items.is_empty() {
        return Err(ApiError::Validation(
            "Order must have at least one item".to_string(),
        ));
    }

    let mut priced = Vec::with_capacity(items.len());
    let mut total = Decimal::ZERO;

    for item in items {
        let price = item.price.ok_or_else(|| {
            ApiError::Validation("Item price and quantity must not be null".to_string())
        })?;
        let quantity = item.quantity.ok_or_else(|| {
            ApiError::Validation("Item price and quantity must not be null".to_string())
        })?;
        if quantity <= 0 {
            return Err(ApiError::Validation(
                "Item quantity must be positive".to_string(),
            ));
        }
        if price < Decimal::ZERO {
            return Err(ApiError::Validation(
                "Item price must not be negative".to_string(),
            ));
        }

        let subtotal = price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| {
                ApiError::Validation("Order total exceeds the representable range".to_string())
            })?;
        total = total.checked_add(subtotal).ok_or_else(|| {
            ApiError::Validation("Order total exceeds the representable range".to_string())
        })?;
        priced.push(PricedItem {
            product_name: item.product_name.clone(),
            price,
            quantity,
            subtotal,
        });
    }

    Ok((priced, total))
}

/// Creates an order: validates items, persists the order and all its items
/// in a single transaction, then dispatches a confirmation on a spawned
/// task so delivery failures never affect the result.
pub async fn create_order(
    db: &DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    request: CreateOrderRequest,
) -> Result<OrderResponse, ApiError> {
    let (priced, total) = price_items(&request.items)?;

    let txn = db.begin().await?;

    let order = orders::ActiveModel {
        customer_name: Set(request.customer_name),
        customer_email: Set(request.customer_email),
        customer_phone: Set(request.customer_phone),
        shipping_address: Set(request.shipping_address),
        payment_method: Set(request.payment_method),
        total_amount: Set(total),
        status: Set(OrderStatus::Created),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut items = Vec::with_capacity(priced.len());
    for item in priced {
        let saved = order_items::ActiveModel {
            order_id: Set(order.id),
            product_name: Set(item.product_name),
            price: Set(item.price),
            quantity: Set(item.quantity),
            subtotal: Set(item.subtotal),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        items.push(saved);
    }

    txn.commit().await?;

    tokio::spawn(dispatch_confirmation(notifier, order.clone()));

    Ok(OrderResponse::from_parts(order, items))
}

/// Best-effort confirmation: a failure is logged and swallowed.
pub async fn dispatch_confirmation(notifier: Arc<dyn Notifier>, order: orders::Model) {
    if let Err(err) = notifier.send_order_confirmation(&order).await {
        tracing::warn!(
            order_id = order.id,
            error = %err,
            "order confirmation delivery failed"
        );
    }
}

pub async fn get_order(db: &DatabaseConnection, id: i32) -> Result<OrderResponse, ApiError> {
    let mut rows = Orders::find_by_id(id)
        .find_with_related(OrderItems)
        .all(db)
        .await?;

    let (order, items) = rows
        .pop()
        .ok_or_else(|| ApiError::NotFound(format!("Order not found with ID: {id}")))?;

    Ok(OrderResponse::from_parts(order, items))
}

pub async fn list_orders(db: &DatabaseConnection) -> Result<Vec<OrderResponse>, ApiError> {
    let rows = Orders::find().find_with_related(OrderItems).all(db).await?;

    Ok(rows
        .into_iter()
        .map(|(order, items)| OrderResponse::from_parts(order, items))
        .collect())
}

pub async fn list_orders_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Vec<OrderResponse>, ApiError> {
    let rows = Orders::find()
        .filter(orders::Column::CustomerEmail.eq(email))
        .find_with_related(OrderItems)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(order, items)| OrderResponse::from_parts(order, items))
        .collect())
}

/// Updates the status of an existing order.
///
/// Transitions are caller-driven; the only rule enforced is that terminal
/// orders (DELIVERED, CANCELLED) stay where they are.
pub async fn update_status(
    db: &DatabaseConnection,
    id: i32,
    status: OrderStatus,
) -> Result<OrderResponse, ApiError> {
    let order = Orders::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order not found with ID: {id}")))?;

    if order.status.is_terminal() && status != order.status {
        return Err(ApiError::Validation(format!(
            "Order {id} is already {:?} and cannot change status",
            order.status
        )));
    }

    let mut active: orders::ActiveModel = order.into();
    active.status = Set(status);
    let updated = active.update(db).await?;

    let items = updated.find_related(OrderItems).all(db).await?;

    Ok(OrderResponse::from_parts(updated, items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifier::NotifyError;
    use async_trait::async_trait;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn item(price: Option<Decimal>, quantity: Option<i32>) -> OrderItemRequest {
        OrderItemRequest {
            product_name: "Sunset Oil".to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_total_for_known_scenario() {
        let items = vec![
            item(Some(dec!(100.00)), Some(2)),
            item(Some(dec!(49.50)), Some(1)),
        ];

        let (priced, total) = price_items(&items).unwrap();
        assert_eq!(total, dec!(249.50));
        assert_eq!(priced[0].subtotal, dec!(200.00));
        assert_eq!(priced[1].subtotal, dec!(49.50));
    }

    #[test]
    fn test_empty_items_rejected() {
        let err = price_items(&[]).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_missing_price_rejected() {
        let err = price_items(&[item(None, Some(1))]).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_missing_quantity_rejected() {
        let err = price_items(&[item(Some(dec!(10.00)), None)]).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let err = price_items(&[item(Some(dec!(10.00)), Some(0))]).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_overflowing_subtotal_rejected_without_panic() {
        let err = price_items(&[item(Some(Decimal::MAX), Some(2))]).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_overflowing_total_rejected_without_panic() {
        let items = vec![
            item(Some(Decimal::MAX), Some(1)),
            item(Some(Decimal::MAX), Some(1)),
        ];
        let err = price_items(&items).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Created.is_terminal());
        assert!(!OrderStatus::Processing.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    proptest! {
        /// total == sum of price_i * qty_i exactly, for random positive
        /// two-decimal prices and quantities.
        #[test]
        fn prop_total_is_exact_sum(
            entries in prop::collection::vec((1i64..10_000_000, 1i32..1_000), 1..20)
        ) {
            let items: Vec<OrderItemRequest> = entries
                .iter()
                .map(|(cents, qty)| item(Some(Decimal::new(*cents, 2)), Some(*qty)))
                .collect();

            let (priced, total) = price_items(&items).unwrap();

            let expected: Decimal = entries
                .iter()
                .map(|(cents, qty)| Decimal::new(*cents, 2) * Decimal::from(*qty))
                .sum();

            prop_assert_eq!(total, expected);
            for (line, (cents, qty)) in priced.iter().zip(&entries) {
                prop_assert_eq!(line.subtotal, Decimal::new(*cents, 2) * Decimal::from(*qty));
            }
        }
    }

    struct FailingNotifier {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn send_order_confirmation(
            &self,
            _order: &orders::Model,
        ) -> Result<(), NotifyError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(NotifyError("smtp relay down".to_string()))
        }

        async fn send_contact_confirmation(
            &self,
            _request: &crate::entities::contact_requests::Model,
        ) -> Result<(), NotifyError> {
            Err(NotifyError("smtp relay down".to_string()))
        }

        async fn send_commission_alert(
            &self,
            _request: &crate::entities::contact_requests::Model,
        ) -> Result<(), NotifyError> {
            Err(NotifyError("smtp relay down".to_string()))
        }
    }

    #[tokio::test]
    async fn test_confirmation_failure_is_swallowed() {
        let notifier = Arc::new(FailingNotifier {
            calls: AtomicUsize::new(0),
        });
        let order = orders::Model {
            id: 1,
            customer_name: "Asha".to_string(),
            customer_email: "asha@example.com".to_string(),
            customer_phone: "+91-9000000000".to_string(),
            shipping_address: "12 Gallery Lane, Pune".to_string(),
            payment_method: Some("razorpay".to_string()),
            total_amount: dec!(249.50),
            status: OrderStatus::Created,
            created_at: chrono::Utc::now().into(),
        };

        // Must complete without panicking or propagating the error
        dispatch_confirmation(notifier.clone(), order).await;
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
    }
}
