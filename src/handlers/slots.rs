use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::TimeSlot;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsQuery {
    pub resource_id: String,
    pub date: String,
}

// GET /api/timeslots?resourceId=r1&date=2024-06-01
pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<Vec<TimeSlot>>, AppError> {
    let date: NaiveDate = query
        .date
        .parse()
        .map_err(|_| AppError::Validation(format!("malformed date: {}", query.date)))?;

    let ledger = state.ledger.lock().unwrap();
    Ok(Json(ledger.available_slots(date, &query.resource_id)))
}
