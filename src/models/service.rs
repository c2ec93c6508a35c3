use serde::{Deserialize, Serialize};

/// Category of a bookable offering. Resources advertise which types they
/// can fulfil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    Grooming,
    Wellness,
    Sports,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Grooming => "GROOMING",
            ServiceType::Wellness => "WELLNESS",
            ServiceType::Sports => "SPORTS",
        }
    }
}

/// Immutable reference data describing a bookable offering. Seeded at
/// startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub price: f64,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub image_url: String,
}
