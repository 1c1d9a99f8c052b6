//! HTTP handlers for the artwork catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::ApiError;
use crate::models::artwork::{ArtworkRequest, ArtworkResponse};
use crate::services::artworks;
use crate::AppState;

pub async fn get_all_artworks(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArtworkResponse>>, ApiError> {
    Ok(Json(artworks::list_artworks(&state.db).await?))
}

pub async fn get_artwork_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ArtworkResponse>, ApiError> {
    Ok(Json(artworks::get_artwork(&state.db, id).await?))
}

pub async fn get_artworks_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<ArtworkResponse>>, ApiError> {
    Ok(Json(artworks::list_by_category(&state.db, &category).await?))
}

pub async fn create_artwork(
    State(state): State<AppState>,
    Json(request): Json<ArtworkRequest>,
) -> Result<(StatusCode, Json<ArtworkResponse>), ApiError> {
    let artwork = artworks::create_artwork(&state.db, request).await?;
    Ok((StatusCode::CREATED, Json(artwork)))
}

pub async fn update_artwork(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ArtworkRequest>,
) -> Result<Json<ArtworkResponse>, ApiError> {
    Ok(Json(artworks::update_artwork(&state.db, id, request).await?))
}

pub async fn delete_artwork(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    artworks::delete_artwork(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
