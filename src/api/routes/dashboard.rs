//! League dashboard endpoint.
//!
//! Orchestrates the cache, the provider, and the synthetic fallback.
//! Fresh cache entries are served as-is; a miss fetches from the provider
//! and refills the cache. When the provider fails, generated data is
//! served but never cached.

use axum::extract::{Path, Query, State};
use axum::http::header::{HeaderName, HeaderValue, CACHE_CONTROL};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::cache::CacheKey;
use crate::fallback::fallback_dashboard;
use crate::models::LeagueDashboard;

/// Whether the response was served from cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
        }
    }
}

/// Where the served dashboard came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataSource {
    Provider,
    Fallback,
}

impl DataSource {
    fn as_str(&self) -> &'static str {
        match self {
            DataSource::Provider => "provider",
            DataSource::Fallback => "fallback",
        }
    }
}

/// Query parameters accepted by the dashboard endpoint.
///
/// Parsing is lenient: malformed values fall back to defaults instead of
/// failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    week: Option<String>,
    force: Option<String>,
}

impl DashboardParams {
    /// Requested week; malformed or missing values mean week 1.
    fn week(&self) -> u16 {
        self.week
            .as_deref()
            .and_then(|w| w.trim().parse::<u16>().ok())
            .unwrap_or(1)
            .max(1)
    }

    /// Only the literal "true" forces a refetch.
    fn force(&self) -> bool {
        self.force.as_deref() == Some("true")
    }
}

/// `GET /api/league/:league_id/dashboard`
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(league_id): Path<String>,
    Query(params): Query<DashboardParams>,
) -> Result<Response, ApiError> {
    if league_id.trim().is_empty() {
        return Err(ApiError::MissingLeagueId);
    }

    let week = params.week();
    let force = params.force();
    let key = CacheKey::new(state.provider.name(), &league_id, week);

    if !force {
        if let Some(entry) = state.cache.get(&key).await {
            if state.cache.is_fresh(&entry) {
                debug!(
                    "Cache hit for {} (age {}s)",
                    key,
                    state.cache.age_seconds(&entry)
                );
                return Ok(dashboard_response(
                    &state,
                    entry.data,
                    CacheStatus::Hit,
                    DataSource::Provider,
                ));
            }
            debug!("Cache entry for {} is stale, refetching", key);
        }
    }

    match state.provider.fetch_dashboard(&league_id, week).await {
        Ok(dashboard) => {
            state.cache.put(key, dashboard.clone()).await;
            Ok(dashboard_response(
                &state,
                dashboard,
                CacheStatus::Miss,
                DataSource::Provider,
            ))
        }
        Err(err) => {
            warn!(
                "Provider {} failed for {}: {}",
                state.provider.name(),
                key,
                err
            );

            if !state.settings.fallback_enabled {
                return Err(ApiError::Upstream(err.to_string()));
            }

            // Synthetic data is served but never cached, so the next
            // request retries the provider
            info!("Serving fallback dashboard for {}", key);
            let dashboard = fallback_dashboard(&league_id, week);
            Ok(dashboard_response(
                &state,
                dashboard,
                CacheStatus::Miss,
                DataSource::Fallback,
            ))
        }
    }
}

/// `GET /api/league/dashboard` (no league segment in the path)
pub async fn missing_league_id() -> Result<Response, ApiError> {
    Err(ApiError::MissingLeagueId)
}

fn dashboard_response(
    state: &AppState,
    dashboard: LeagueDashboard,
    cache_status: CacheStatus,
    source: DataSource,
) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        CACHE_CONTROL,
        HeaderValue::from_str(&state.settings.cache_control)
            .unwrap_or_else(|_| HeaderValue::from_static("max-age=60")),
    );
    headers.insert(
        HeaderName::from_static("x-cache"),
        HeaderValue::from_static(cache_status.as_str()),
    );
    headers.insert(
        HeaderName::from_static("x-data-source"),
        HeaderValue::from_static(source.as_str()),
    );

    (headers, Json(dashboard)).into_response()
}
