//! Payment gateway adapter.
//!
//! Stateless pass-through: each call converts the amount to the gateway's
//! minor-unit representation, asks the processor for a payment intent and
//! returns a unified envelope. No retries, no idempotency keys, no
//! reconciliation with the order store.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::PaymentConfig;
use crate::error::ApiError;
use crate::models::payment::PaymentIntentResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gateway {
    Razorpay,
    Stripe,
}

#[derive(Debug, Error)]
pub enum PaymentError {
    /// Client fault: not a chargeable amount.
    #[error("amount must be a positive value with at most two decimal places")]
    InvalidAmount,
    /// Upstream processor fault: network, credentials or a non-2xx reply.
    #[error("{0}")]
    Gateway(String),
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::InvalidAmount => ApiError::Validation(err.to_string()),
            PaymentError::Gateway(msg) => ApiError::Gateway(msg),
        }
    }
}

/// Converts a base-currency amount (e.g. rupees) to the minor-unit integer
/// the gateways expect (e.g. paise). Rejects non-positive amounts and
/// amounts with sub-minor-unit precision.
pub fn to_minor_units(amount: Decimal) -> Result<i64, PaymentError> {
    if amount <= Decimal::ZERO {
        return Err(PaymentError::InvalidAmount);
    }
    let scaled = amount
        .checked_mul(Decimal::from(100))
        .ok_or(PaymentError::InvalidAmount)?;
    if scaled.fract() != Decimal::ZERO {
        return Err(PaymentError::InvalidAmount);
    }
    scaled.to_i64().ok_or(PaymentError::InvalidAmount)
}

#[derive(Debug, Deserialize)]
struct RazorpayOrder {
    id: String,
    amount: i64,
    currency: String,
}

#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    id: String,
    client_secret: String,
    amount: i64,
    currency: String,
}

/// Adapter over the two interchangeable payment processors.
#[derive(Clone)]
pub struct PaymentService {
    client: Client,
    config: PaymentConfig,
}

impl PaymentService {
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap(),
            config,
        }
    }

    /// Creates a payment intent for `amount` with the chosen gateway.
    ///
    /// The amount is validated before any outbound call, so an invalid
    /// amount never reaches the processor.
    pub async fn create_intent(
        &self,
        amount: Decimal,
        gateway: Gateway,
    ) -> Result<PaymentIntentResponse, PaymentError> {
        let minor_units = to_minor_units(amount)?;

        match gateway {
            Gateway::Razorpay => self.create_razorpay_order(minor_units).await,
            Gateway::Stripe => self.create_stripe_intent(minor_units).await,
        }
    }

    async fn create_razorpay_order(
        &self,
        minor_units: i64,
    ) -> Result<PaymentIntentResponse, PaymentError> {
        let receipt = format!("order_{}", chrono::Utc::now().timestamp_millis());
        let body = json!({
            "amount": minor_units,
            "currency": self.config.currency,
            "receipt": receipt,
        });

        let response = self
            .client
            .post(format!("{}/v1/orders", self.config.razorpay_base_url))
            .basic_auth(
                &self.config.razorpay_key_id,
                Some(&self.config.razorpay_key_secret),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| PaymentError::Gateway(format!("razorpay request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(PaymentError::Gateway(format!(
                "razorpay returned {}",
                response.status()
            )));
        }

        let order: RazorpayOrder = response
            .json()
            .await
            .map_err(|e| PaymentError::Gateway(format!("razorpay response malformed: {e}")))?;

        let mut extra = HashMap::new();
        extra.insert("receipt".to_string(), receipt);

        Ok(PaymentIntentResponse {
            client_reference: order.id.clone(),
            intent_id: order.id,
            amount: order.amount,
            currency: order.currency,
            extra,
        })
    }

    async fn create_stripe_intent(
        &self,
        minor_units: i64,
    ) -> Result<PaymentIntentResponse, PaymentError> {
        let form = [
            ("amount", minor_units.to_string()),
            ("currency", self.config.currency.to_lowercase()),
        ];

        let response = self
            .client
            .post(format!(
                "{}/v1/payment_intents",
                self.config.stripe_base_url
            ))
            .bearer_auth(&self.config.stripe_secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| PaymentError::Gateway(format!("stripe request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(PaymentError::Gateway(format!(
                "stripe returned {}",
                response.status()
            )));
        }

        let intent: StripePaymentIntent = response
            .json()
            .await
            .map_err(|e| PaymentError::Gateway(format!("stripe response malformed: {e}")))?;

        let mut extra = HashMap::new();
        extra.insert("paymentIntentId".to_string(), intent.id.clone());

        Ok(PaymentIntentResponse {
            intent_id: intent.id,
            client_reference: intent.client_secret,
            amount: intent.amount,
            currency: intent.currency,
            extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minor_unit_conversion() {
        assert_eq!(to_minor_units(dec!(249.50)).unwrap(), 24950);
        assert_eq!(to_minor_units(dec!(1)).unwrap(), 100);
        assert_eq!(to_minor_units(dec!(0.01)).unwrap(), 1);
    }

    #[test]
    fn test_minor_unit_rejects_non_positive() {
        assert!(matches!(
            to_minor_units(dec!(0)),
            Err(PaymentError::InvalidAmount)
        ));
        assert!(matches!(
            to_minor_units(dec!(-10.00)),
            Err(PaymentError::InvalidAmount)
        ));
    }

    #[test]
    fn test_minor_unit_rejects_overflowing_amount() {
        // Scaling MAX by 100 has no representable result; must error, not panic
        assert!(matches!(
            to_minor_units(Decimal::MAX),
            Err(PaymentError::InvalidAmount)
        ));
    }

    #[test]
    fn test_minor_unit_rejects_sub_paisa_precision() {
        assert!(matches!(
            to_minor_units(dec!(1.005)),
            Err(PaymentError::InvalidAmount)
        ));
    }

    #[test]
    fn test_invalid_amount_maps_to_validation_not_gateway() {
        let err: ApiError = PaymentError::InvalidAmount.into();
        assert!(matches!(err, ApiError::Validation(_)));

        let err: ApiError = PaymentError::Gateway("down".into()).into();
        assert!(matches!(err, ApiError::Gateway(_)));
    }

    #[tokio::test]
    async fn test_unreachable_gateway_surfaces_as_gateway_error() {
        // Port 9 (discard) refuses connections locally, no outbound traffic
        let service = PaymentService::new(PaymentConfig {
            razorpay_base_url: "http://127.0.0.1:9".to_string(),
            stripe_base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..PaymentConfig::default()
        });

        let err = service
            .create_intent(dec!(249.50), Gateway::Razorpay)
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::Gateway(_)));

        let err = service
            .create_intent(dec!(249.50), Gateway::Stripe)
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::Gateway(_)));
    }
}
