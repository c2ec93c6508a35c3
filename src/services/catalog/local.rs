use async_trait::async_trait;

use super::CatalogSource;
use crate::models::{Resource, Service, ServiceType};

/// Seeded in-process reference data. Infallible by construction, which makes
/// it a safe last tier: a lookup against it can miss, but never error.
pub struct LocalCatalog {
    services: Vec<Service>,
    resources: Vec<Resource>,
}

impl LocalCatalog {
    pub fn new() -> Self {
        Self {
            services: seed_services(),
            resources: seed_resources(),
        }
    }
}

impl Default for LocalCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for LocalCatalog {
    async fn services(&self) -> anyhow::Result<Vec<Service>> {
        Ok(self.services.clone())
    }

    async fn resources(&self, service_type: ServiceType) -> anyhow::Result<Vec<Resource>> {
        Ok(self
            .resources
            .iter()
            .filter(|r| r.supports(service_type))
            .cloned()
            .collect())
    }
}

fn seed_services() -> Vec<Service> {
    vec![
        Service {
            id: "s1".to_string(),
            name: "Luxury Pet Grooming".to_string(),
            description: "Full bath, brush, and trim for your furry friend. Includes nail clipping.".to_string(),
            duration_minutes: 60,
            price: 85.0,
            service_type: ServiceType::Grooming,
            image_url: "https://images.unsplash.com/photo-1516734212186-a967f81ad0d7?auto=format&fit=crop&q=80&w=800".to_string(),
        },
        Service {
            id: "s2".to_string(),
            name: "Rejuvenating Facial".to_string(),
            description: "60-minute deep tissue facial massage and skin treatment.".to_string(),
            duration_minutes: 60,
            price: 120.0,
            service_type: ServiceType::Wellness,
            image_url: "https://images.unsplash.com/photo-1570172619644-dfd03ed5d881?auto=format&fit=crop&q=80&w=800".to_string(),
        },
        Service {
            id: "s3".to_string(),
            name: "Tennis Court Rental".to_string(),
            description: "Reserve a professional-grade hard court for 1 hour.".to_string(),
            duration_minutes: 60,
            price: 40.0,
            service_type: ServiceType::Sports,
            image_url: "https://images.unsplash.com/photo-1622279457486-62dcc4a431d6?auto=format&fit=crop&q=80&w=800".to_string(),
        },
        Service {
            id: "s4".to_string(),
            name: "Express Paws".to_string(),
            description: "Quick wash and dry for small dogs.".to_string(),
            duration_minutes: 30,
            price: 45.0,
            service_type: ServiceType::Grooming,
            image_url: "https://images.unsplash.com/photo-1596272875729-ed2c21d50c46?auto=format&fit=crop&q=80&w=800".to_string(),
        },
    ]
}

fn seed_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "r1".to_string(),
            name: "Sarah Jenkins".to_string(),
            role: "Senior Stylist".to_string(),
            service_types: vec![ServiceType::Grooming],
            image_url: Some("https://randomuser.me/api/portraits/women/44.jpg".to_string()),
        },
        Resource {
            id: "r2".to_string(),
            name: "Mike Ross".to_string(),
            role: "Groomer".to_string(),
            service_types: vec![ServiceType::Grooming],
            image_url: Some("https://randomuser.me/api/portraits/men/32.jpg".to_string()),
        },
        Resource {
            id: "r3".to_string(),
            name: "Elena Fisher".to_string(),
            role: "Esthetician".to_string(),
            service_types: vec![ServiceType::Wellness],
            image_url: Some("https://randomuser.me/api/portraits/women/65.jpg".to_string()),
        },
        Resource {
            id: "r4".to_string(),
            name: "Court A".to_string(),
            role: "Hard Court".to_string(),
            service_types: vec![ServiceType::Sports],
            image_url: Some("https://images.unsplash.com/photo-1534438327276-14e5300c3a48?auto=format&fit=crop&q=80&w=200".to_string()),
        },
        Resource {
            id: "r5".to_string(),
            name: "Court B".to_string(),
            role: "Clay Court".to_string(),
            service_types: vec![ServiceType::Sports],
            image_url: Some("https://images.unsplash.com/photo-1588612455963-2d2993d052d3?auto=format&fit=crop&q=80&w=200".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_services_order_is_stable() {
        let catalog = LocalCatalog::new();
        let first = catalog.services().await.unwrap();
        let second = catalog.services().await.unwrap();
        let ids = |svcs: &[Service]| svcs.iter().map(|s| s.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
    }

    #[tokio::test]
    async fn test_resources_filtered_by_type() {
        let catalog = LocalCatalog::new();
        let groomers = catalog.resources(ServiceType::Grooming).await.unwrap();
        assert!(!groomers.is_empty());
        assert!(groomers.iter().all(|r| r.supports(ServiceType::Grooming)));

        let courts = catalog.resources(ServiceType::Sports).await.unwrap();
        assert!(courts.iter().all(|r| !r.supports(ServiceType::Wellness)));
    }
}
