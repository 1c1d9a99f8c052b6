//! HTTP handler for commission/contact requests.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::ApiError;
use crate::models::contact::{ContactRequestBody, ContactResponse};
use crate::services::contact;
use crate::AppState;

pub async fn create_contact_request(
    State(state): State<AppState>,
    Json(body): Json<ContactRequestBody>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    let request = contact::create_request(&state.db, state.notifier.clone(), body).await?;
    Ok((StatusCode::CREATED, Json(request)))
}
