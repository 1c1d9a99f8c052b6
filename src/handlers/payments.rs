//! HTTP handlers for payment-intent creation.

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::models::payment::{PaymentIntentResponse, PaymentRequest};
use crate::services::payments::Gateway;
use crate::AppState;

pub async fn create_razorpay_order(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentIntentResponse>, ApiError> {
    let intent = state
        .payments
        .create_intent(request.amount, Gateway::Razorpay)
        .await?;
    Ok(Json(intent))
}

pub async fn create_stripe_payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentIntentResponse>, ApiError> {
    let intent = state
        .payments
        .create_intent(request.amount, Gateway::Stripe)
        .await?;
    Ok(Json(intent))
}
