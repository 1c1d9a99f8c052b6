//! Request/response shapes for the payment endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Amount in the storefront base currency unit (e.g. rupees)
    pub amount: Decimal,
}

/// Unified payment-intent envelope returned for every gateway.
///
/// Gateway-specific fields (`receipt` for Razorpay, `paymentIntentId` for
/// Stripe) are carried in the `extra` map rather than changing the shape
/// of the envelope per gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub intent_id: String,
    pub client_reference: String,
    /// Amount in the gateway's minor units (base currency x 100)
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub extra: HashMap<String, String>,
}
