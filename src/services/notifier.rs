//! Best-effort notification sender.
//!
//! The rest of the system treats delivery as fire-and-forget: callers log
//! a failure and move on, so nothing here may ever abort an order or a
//! contact request.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::MailConfig;
use crate::entities::{contact_requests, orders};

#[derive(Debug, Error)]
#[error("{0}")]
pub struct NotifyError(pub String);

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_order_confirmation(&self, order: &orders::Model) -> Result<(), NotifyError>;
    async fn send_contact_confirmation(
        &self,
        request: &contact_requests::Model,
    ) -> Result<(), NotifyError>;
    async fn send_commission_alert(
        &self,
        request: &contact_requests::Model,
    ) -> Result<(), NotifyError>;
}

/// Sends mail through an HTTP mail API (e.g. a transactional mail provider
/// webhook). SMTP internals stay outside this service.
#[derive(Clone)]
pub struct MailApiNotifier {
    client: Client,
    config: MailConfig,
}

#[derive(Debug, Serialize)]
struct MailMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: String,
    text: String,
}

impl MailApiNotifier {
    pub fn new(config: MailConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap(),
            config,
        }
    }

    async fn send(&self, to: &str, subject: String, text: String) -> Result<(), NotifyError> {
        let api_url = self
            .config
            .api_url
            .as_deref()
            .ok_or_else(|| NotifyError("MAIL_API_URL is not configured".to_string()))?;

        let message = MailMessage {
            from: &self.config.from_address,
            to,
            subject,
            text,
        };

        let response = self
            .client
            .post(api_url)
            .json(&message)
            .send()
            .await
            .map_err(|e| NotifyError(format!("mail API request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(NotifyError(format!(
                "mail API returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for MailApiNotifier {
    async fn send_order_confirmation(&self, order: &orders::Model) -> Result<(), NotifyError> {
        let text = format!(
            "Dear {},\n\nThank you for your order!\nOrder ID: {}\nTotal Amount: \u{20b9}{}\n\n\
             We will notify you once your order is shipped.\n\nBest regards,\nYuviArt Team",
            order.customer_name, order.id, order.total_amount
        );
        self.send(
            &order.customer_email,
            "Order Confirmation - YuviArt".to_string(),
            text,
        )
        .await
    }

    async fn send_contact_confirmation(
        &self,
        request: &contact_requests::Model,
    ) -> Result<(), NotifyError> {
        let text = format!(
            "Dear {},\n\nWe have received your commission request for \"{}\".\n\
             Our team will review your request and get back to you within 24-48 hours.\n\n\
             Best regards,\nYuviArt Team",
            request.name, request.art_type
        );
        self.send(
            &request.email,
            "Commission Request Received - YuviArt".to_string(),
            text,
        )
        .await
    }

    async fn send_commission_alert(
        &self,
        request: &contact_requests::Model,
    ) -> Result<(), NotifyError> {
        let text = format!(
            "New commission request!\n\nName: {}\nEmail: {}\nArt Type: {}\n\nMessage:\n{}",
            request.name, request.email, request.art_type, request.message
        );
        self.send(
            &self.config.artist_email,
            format!("New Commission Request from {}", request.name),
            text,
        )
        .await
    }
}
