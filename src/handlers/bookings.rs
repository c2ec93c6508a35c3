use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Booking, Resource, Service, ServiceType};
use crate::services::availability;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub service_id: String,
    pub resource_id: String,
    pub date: String,
    pub time_slot: String,
    pub customer_name: String,
}

// POST /api/bookings
//
// Service and resource ids are not checked against the catalog: a booking
// may reference ids the catalog no longer knows, and the join when listing
// simply comes back empty for them.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let date: NaiveDate = body
        .date
        .parse()
        .map_err(|_| AppError::Validation(format!("malformed date: {}", body.date)))?;

    availability::parse_slot_label(&body.time_slot)
        .ok_or_else(|| AppError::Validation(format!("malformed time slot: {}", body.time_slot)))?;

    let booking = {
        let mut ledger = state.ledger.lock().unwrap();
        ledger.create(
            &body.service_id,
            &body.resource_id,
            date,
            &body.time_slot,
            &body.customer_name,
        )?
    };

    tracing::info!(
        booking_id = %booking.id,
        resource_id = %booking.resource_id,
        date = %booking.date,
        slot = %booking.time_slot,
        "booking created"
    );

    Ok((StatusCode::CREATED, Json(booking)))
}

/// A booking enriched with its service and resource, where those still
/// resolve against the catalog.
#[derive(Serialize)]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: Booking,
    pub service: Option<Service>,
    pub resource: Option<Resource>,
}

// GET /api/bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookingView>>, AppError> {
    let bookings = {
        let ledger = state.ledger.lock().unwrap();
        ledger.bookings()
    };
    if bookings.is_empty() {
        return Ok(Json(vec![]));
    }

    let services = state.catalog.services().await?;
    let service_by_id: HashMap<&str, &Service> =
        services.iter().map(|s| (s.id.as_str(), s)).collect();

    // Only fetch resources for the types the bookings actually reference.
    let referenced_types: HashSet<ServiceType> = bookings
        .iter()
        .filter_map(|b| service_by_id.get(b.service_id.as_str()))
        .map(|s| s.service_type)
        .collect();

    let mut resource_by_id: HashMap<String, Resource> = HashMap::new();
    for service_type in referenced_types {
        for resource in state.catalog.resources(service_type).await? {
            resource_by_id.insert(resource.id.clone(), resource);
        }
    }

    let views = bookings
        .into_iter()
        .map(|booking| BookingView {
            service: service_by_id.get(booking.service_id.as_str()).map(|s| (*s).clone()),
            resource: resource_by_id.get(&booking.resource_id).cloned(),
            booking,
        })
        .collect();

    Ok(Json(views))
}

// DELETE /api/bookings/:id
//
// Idempotent: cancelling an already-cancelled or unknown booking succeeds
// and reports cancelled=false.
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    let cancelled = {
        let mut ledger = state.ledger.lock().unwrap();
        ledger.cancel(&id)
    };

    if cancelled {
        tracing::info!(booking_id = %id, "booking cancelled");
    }

    Json(serde_json::json!({"ok": true, "cancelled": cancelled}))
}
