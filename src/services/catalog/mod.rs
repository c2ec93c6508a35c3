pub mod local;
pub mod remote;

use async_trait::async_trait;

use crate::models::{Resource, Service, ServiceType};

pub use local::LocalCatalog;
pub use remote::RemoteCatalog;

/// Source of reference data (services and resources). Implementations may
/// fail; callers decide what a failure means.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn services(&self) -> anyhow::Result<Vec<Service>>;
    async fn resources(&self, service_type: ServiceType) -> anyhow::Result<Vec<Resource>>;
}

/// Two-tier source: consult the primary, and when it fails serve the local
/// fallback instead. Upstream unavailability is recovered here and never
/// reaches the caller.
pub struct TieredCatalog {
    primary: Box<dyn CatalogSource>,
    fallback: LocalCatalog,
}

impl TieredCatalog {
    pub fn new(primary: Box<dyn CatalogSource>, fallback: LocalCatalog) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl CatalogSource for TieredCatalog {
    async fn services(&self) -> anyhow::Result<Vec<Service>> {
        match self.primary.services().await {
            Ok(services) => Ok(services),
            Err(e) => {
                tracing::warn!("catalog upstream unavailable, serving local services: {e:#}");
                self.fallback.services().await
            }
        }
    }

    async fn resources(&self, service_type: ServiceType) -> anyhow::Result<Vec<Resource>> {
        match self.primary.resources(service_type).await {
            Ok(resources) => Ok(resources),
            Err(e) => {
                tracing::warn!("catalog upstream unavailable, serving local resources: {e:#}");
                self.fallback.resources(service_type).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn services(&self) -> anyhow::Result<Vec<Service>> {
            Err(anyhow::anyhow!("connection refused"))
        }

        async fn resources(&self, _service_type: ServiceType) -> anyhow::Result<Vec<Resource>> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    struct CannedSource;

    #[async_trait]
    impl CatalogSource for CannedSource {
        async fn services(&self) -> anyhow::Result<Vec<Service>> {
            Ok(vec![Service {
                id: "remote-1".to_string(),
                name: "Remote Service".to_string(),
                description: String::new(),
                duration_minutes: 30,
                price: 10.0,
                service_type: ServiceType::Wellness,
                image_url: String::new(),
            }])
        }

        async fn resources(&self, _service_type: ServiceType) -> anyhow::Result<Vec<Resource>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_primary_failure_falls_back_to_local() {
        let catalog = TieredCatalog::new(Box::new(FailingSource), LocalCatalog::new());
        let services = catalog.services().await.unwrap();
        assert!(!services.is_empty());
        assert!(services.iter().all(|s| s.id != "remote-1"));

        let resources = catalog.resources(ServiceType::Grooming).await.unwrap();
        assert!(!resources.is_empty());
    }

    #[tokio::test]
    async fn test_primary_success_shadows_fallback() {
        let catalog = TieredCatalog::new(Box::new(CannedSource), LocalCatalog::new());
        let services = catalog.services().await.unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].id, "remote-1");
    }
}
