use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Base URL of an upstream catalog service. Unset means the local
    /// seed catalog serves everything.
    pub upstream_url: Option<String>,
    pub upstream_timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            upstream_url: env::var("UPSTREAM_URL").ok().filter(|v| !v.is_empty()),
            upstream_timeout_ms: env::var("UPSTREAM_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}
