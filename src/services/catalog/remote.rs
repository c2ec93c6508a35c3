use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use super::CatalogSource;
use crate::models::{Resource, Service, ServiceType};

/// Catalog backed by an upstream HTTP service. Requests carry a short
/// timeout so a dead upstream degrades into the fallback tier quickly
/// instead of stalling the caller.
pub struct RemoteCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteCatalog {
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build catalog HTTP client")?;
        Ok(Self { base_url, client })
    }
}

#[async_trait]
impl CatalogSource for RemoteCatalog {
    async fn services(&self) -> anyhow::Result<Vec<Service>> {
        let resp = self
            .client
            .get(format!("{}/services", self.base_url))
            .send()
            .await
            .context("failed to reach catalog upstream")?
            .error_for_status()
            .context("catalog upstream rejected the request")?;

        resp.json().await.context("failed to parse services response")
    }

    async fn resources(&self, service_type: ServiceType) -> anyhow::Result<Vec<Resource>> {
        let resp = self
            .client
            .get(format!("{}/resources", self.base_url))
            .query(&[("serviceType", service_type.as_str())])
            .send()
            .await
            .context("failed to reach catalog upstream")?
            .error_for_status()
            .context("catalog upstream rejected the request")?;

        resp.json().await.context("failed to parse resources response")
    }
}
