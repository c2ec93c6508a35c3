pub mod bookings;
pub mod catalog;
pub mod health;
pub mod slots;

use std::sync::Arc;

use axum::routing::{delete, get};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/services", get(catalog::list_services))
        .route("/api/services/:id", get(catalog::get_service))
        .route("/api/resources", get(catalog::list_resources))
        .route("/api/timeslots", get(slots::get_slots))
        .route(
            "/api/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/api/bookings/:id", delete(bookings::cancel_booking))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
