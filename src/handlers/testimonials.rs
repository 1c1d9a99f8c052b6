//! HTTP handlers for testimonials.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::ApiError;
use crate::models::testimonial::{TestimonialRequest, TestimonialResponse};
use crate::services::testimonials;
use crate::AppState;

pub async fn get_approved_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<TestimonialResponse>>, ApiError> {
    Ok(Json(testimonials::list_approved(&state.db).await?))
}

pub async fn get_all_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<TestimonialResponse>>, ApiError> {
    Ok(Json(testimonials::list_all(&state.db).await?))
}

pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(request): Json<TestimonialRequest>,
) -> Result<(StatusCode, Json<TestimonialResponse>), ApiError> {
    let testimonial = testimonials::create_testimonial(&state.db, request).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

pub async fn approve_testimonial(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TestimonialResponse>, ApiError> {
    Ok(Json(testimonials::approve_testimonial(&state.db, id).await?))
}

pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    testimonials::delete_testimonial(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
