use serde::{Deserialize, Serialize};

use super::ServiceType;

/// The concrete entity fulfilling a service: a stylist, an esthetician,
/// a court. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub role: String,
    pub service_types: Vec<ServiceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Resource {
    pub fn supports(&self, service_type: ServiceType) -> bool {
        self.service_types.contains(&service_type)
    }
}
