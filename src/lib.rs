// src/lib.rs

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use sea_orm::DatabaseConnection;

use services::notifier::Notifier;
use services::payments::PaymentService;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub payments: PaymentService,
    pub notifier: Arc<dyn Notifier>,
}

pub mod config;
pub mod error;

pub mod entities {
    pub mod prelude;

    pub mod artworks;
    pub mod contact_requests;
    pub mod order_items;
    pub mod orders;
    pub mod testimonials;
}

pub mod services {
    pub mod artworks;
    pub mod contact;
    pub mod notifier;
    pub mod orders;
    pub mod payments;
    pub mod testimonials;
}

pub mod handlers;
pub mod models;

/// Explicit route table mapping method+path to handler. Startup code owns
/// the state, CORS and tracing layers.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/orders",
            post(handlers::orders::create_order).get(handlers::orders::get_all_orders),
        )
        .route("/api/orders/{id}", get(handlers::orders::get_order_by_id))
        .route(
            "/api/orders/customer/{email}",
            get(handlers::orders::get_orders_by_email),
        )
        .route(
            "/api/orders/{id}/status",
            put(handlers::orders::update_order_status),
        )
        .route(
            "/api/orders/payment/razorpay",
            post(handlers::payments::create_razorpay_order),
        )
        .route(
            "/api/orders/payment/stripe",
            post(handlers::payments::create_stripe_payment),
        )
        .route(
            "/api/artworks",
            get(handlers::artworks::get_all_artworks).post(handlers::artworks::create_artwork),
        )
        .route(
            "/api/artworks/{id}",
            get(handlers::artworks::get_artwork_by_id)
                .put(handlers::artworks::update_artwork)
                .delete(handlers::artworks::delete_artwork),
        )
        .route(
            "/api/artworks/category/{category}",
            get(handlers::artworks::get_artworks_by_category),
        )
        .route(
            "/api/testimonials",
            get(handlers::testimonials::get_approved_testimonials)
                .post(handlers::testimonials::create_testimonial),
        )
        .route(
            "/api/testimonials/all",
            get(handlers::testimonials::get_all_testimonials),
        )
        .route(
            "/api/testimonials/{id}/approve",
            put(handlers::testimonials::approve_testimonial),
        )
        .route(
            "/api/testimonials/{id}",
            delete(handlers::testimonials::delete_testimonial),
        )
        .route(
            "/api/contact",
            post(handlers::contact::create_contact_request),
        )
}
