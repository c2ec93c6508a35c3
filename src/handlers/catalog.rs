use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{Resource, Service, ServiceType};
use crate::state::AppState;

// GET /api/services
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = state.catalog.services().await?;
    Ok(Json(services))
}

// GET /api/services/:id
pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Service>, AppError> {
    let services = state.catalog.services().await?;
    services
        .into_iter()
        .find(|s| s.id == id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("service {id}")))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesQuery {
    pub service_type: ServiceType,
}

// GET /api/resources?serviceType=GROOMING
//
// An empty list is a valid answer (no resources configured for the type),
// not an error.
pub async fn list_resources(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResourcesQuery>,
) -> Result<Json<Vec<Resource>>, AppError> {
    let resources = state.catalog.resources(query.service_type).await?;
    Ok(Json(resources))
}
