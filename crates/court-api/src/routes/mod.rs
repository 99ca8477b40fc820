//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, bookings, feedback, health, locations, slots, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(slot_routes())
        .merge(user_routes())
        .merge(feedback_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Slot and location routes
fn slot_routes() -> Router<AppState> {
    Router::new()
        .route("/slots", get(slots::list_slots))
        .route("/slots/:slot_id", get(slots::get_slot))
        .route("/slots/:slot_id/bookings", post(bookings::book_slot))
        .route("/locations", get(locations::list_locations))
        .route("/locations/:name/slots", get(locations::location_slots))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:user_id",
            get(users::dashboard).patch(users::update_profile),
        )
        .route(
            "/users/:user_id/bookings/:slot_id",
            delete(bookings::cancel_booking),
        )
}

/// Feedback routes
fn feedback_routes() -> Router<AppState> {
    Router::new().route("/feedback", post(feedback::submit_feedback))
}
