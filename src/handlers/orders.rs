//! HTTP handlers for the order endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::ApiError;
use crate::models::order::{CreateOrderRequest, OrderResponse, StatusQuery};
use crate::services::orders;
use crate::AppState;

pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let order = orders::create_order(&state.db, state.notifier.clone(), request).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn get_all_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    Ok(Json(orders::list_orders(&state.db).await?))
}

pub async fn get_order_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OrderResponse>, ApiError> {
    Ok(Json(orders::get_order(&state.db, id).await?))
}

pub async fn get_orders_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    Ok(Json(orders::list_orders_by_email(&state.db, &email).await?))
}

pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<OrderResponse>, ApiError> {
    Ok(Json(
        orders::update_status(&state.db, id, query.status).await?,
    ))
}
