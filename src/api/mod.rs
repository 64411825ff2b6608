//! HTTP layer - thin axum surface over the core operations.
//!
//! All decisions live in [`crate::core`]; this layer only extracts the
//! caller's identity, enforces the endpoint's required role, deserializes the
//! request and maps [`crate::errors::Error`] to an HTTP status. Token
//! verification happens upstream: the authenticating gateway forwards the
//! resolved identity in `x-user-id` / `x-user-role` headers.

/// Error → HTTP status mapping
pub mod error;
/// Request handlers, one per route
pub mod handlers;
/// Caller identity extraction and role checks
pub mod identity;

use axum::{
    Router,
    routing::{delete, get, post},
};
use sea_orm::DatabaseConnection;

/// Shared state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all operations
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates the shared state from an established database connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Builds the application router with all routes wired to `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/transactions", post(handlers::create_deposit))
        .route(
            "/eco-points/{eco_point_id}/transactions",
            get(handlers::list_eco_point_transactions),
        )
        .route(
            "/eco-points/{eco_point_id}/stats",
            get(handlers::eco_point_stats),
        )
        .route(
            "/redemptions",
            post(handlers::create_redemption).get(handlers::list_partner_redemptions),
        )
        .route(
            "/config/counting-mode",
            get(handlers::get_counting_mode).put(handlers::switch_counting_mode),
        )
        .route("/offers", post(handlers::create_offer))
        .route("/offers/{offer_id}", delete(handlers::delete_offer))
        .route("/materials/{material_id}", delete(handlers::delete_material))
        .route(
            "/eco-points/{eco_point_id}",
            delete(handlers::delete_eco_point),
        )
        .with_state(state)
}
