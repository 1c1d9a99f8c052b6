//! Commission/contact request intake.
//!
//! The request row is the source of truth; both follow-up emails (customer
//! confirmation and artist alert) are best-effort.

use std::sync::Arc;

use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::entities::contact_requests::{self, RequestStatus};
use crate::error::ApiError;
use crate::models::contact::{ContactRequestBody, ContactResponse};
use crate::services::notifier::Notifier;

pub async fn create_request(
    db: &DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    body: ContactRequestBody,
) -> Result<ContactResponse, ApiError> {
    let request = contact_requests::ActiveModel {
        name: Set(body.name),
        email: Set(body.email),
        art_type: Set(body.art_type),
        message: Set(body.message),
        status: Set(RequestStatus::New),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tokio::spawn(dispatch_notifications(notifier, request.clone()));

    Ok(request.into())
}

async fn dispatch_notifications(notifier: Arc<dyn Notifier>, request: contact_requests::Model) {
    if let Err(err) = notifier.send_contact_confirmation(&request).await {
        tracing::warn!(
            request_id = request.id,
            error = %err,
            "contact confirmation delivery failed"
        );
    }
    if let Err(err) = notifier.send_commission_alert(&request).await {
        tracing::warn!(
            request_id = request.id,
            error = %err,
            "commission alert delivery failed"
        );
    }
}
