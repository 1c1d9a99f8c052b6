use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use artgallery_backend::config::PaymentConfig;
use artgallery_backend::entities::{contact_requests, orders};
use artgallery_backend::services::notifier::{Notifier, NotifyError};
use artgallery_backend::services::payments::PaymentService;
use artgallery_backend::{AppState, api_router};

/// Notifier stub that always succeeds; notification delivery is
/// best-effort so the tests never depend on it.
pub struct StubNotifier;

#[async_trait]
impl Notifier for StubNotifier {
    async fn send_order_confirmation(&self, _order: &orders::Model) -> Result<(), NotifyError> {
        Ok(())
    }

    async fn send_contact_confirmation(
        &self,
        _request: &contact_requests::Model,
    ) -> Result<(), NotifyError> {
        Ok(())
    }

    async fn send_commission_alert(
        &self,
        _request: &contact_requests::Model,
    ) -> Result<(), NotifyError> {
        Ok(())
    }
}

static MIGRATED: tokio::sync::OnceCell<()> = tokio::sync::OnceCell::const_new();

/// Set up test database connection and bring the schema up to date.
/// Uses TEST_DATABASE_URL environment variable or falls back to default.
/// Migrations run once per test process.
#[allow(dead_code)]
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let database_url = env::var("TEST_DATABASE_URL")
        .unwrap_or_else(|_| "postgresql://localhost:5432/artgallery_test".to_string());

    let db = Database::connect(&database_url).await?;
    MIGRATED
        .get_or_try_init(|| async { migration::Migrator::up(&db, None).await.map(|_| ()) })
        .await?;
    Ok(db)
}

/// App wired against the given database, with gateways pointed at a local
/// port that refuses connections and a stub notifier.
#[allow(dead_code)]
pub fn build_app_with_db(db: DatabaseConnection) -> Router {
    let payments = PaymentService::new(PaymentConfig {
        razorpay_base_url: "http://127.0.0.1:9".to_string(),
        stripe_base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..PaymentConfig::default()
    });

    let state = AppState {
        db,
        payments,
        notifier: Arc::new(StubNotifier),
    };

    api_router().with_state(state)
}

/// App wired with a disconnected database and payment gateways pointed at
/// a local port that refuses connections. Good for every code path that
/// rejects input before touching the database or the network.
#[allow(dead_code)]
pub fn build_test_app() -> Router {
    build_app_with_db(DatabaseConnection::default())
}
