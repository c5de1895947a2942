use std::sync::Arc;

use crate::cache::DashboardCache;
use crate::config::AppConfig;
use crate::provider::DashboardProvider;

/// Response presentation settings shared by the handlers.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Value sent in `Cache-Control` on successful dashboard responses
    pub cache_control: String,
    /// Allowed CORS origin ("*" for any)
    pub cors_origin: String,
    /// Serve synthetic data when the provider fails
    pub fallback_enabled: bool,
}

impl ApiSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            cache_control: format!(
                "max-age={}, stale-while-revalidate={}",
                config.cache.ttl_seconds, config.cache.stale_while_revalidate_seconds
            ),
            cors_origin: config.server.cors_origin.clone(),
            fallback_enabled: config.provider.fallback_enabled,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn DashboardProvider>,
    pub cache: Arc<DashboardCache>,
    pub settings: Arc<ApiSettings>,
}
