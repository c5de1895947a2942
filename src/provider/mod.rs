//! Upstream fantasy platform providers.
//!
//! Platform specifics live behind the [`DashboardProvider`] trait so the
//! API layer and tests depend on the seam, not on any one platform's API.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::LeagueDashboard;

pub mod normalize;
pub mod sleeper;

pub use sleeper::SleeperClient;

/// Errors from upstream provider calls.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch {endpoint}: HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Failed to decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },
}

/// A fantasy platform that can produce a normalized league dashboard.
#[async_trait]
pub trait DashboardProvider: Send + Sync {
    /// Short platform name, used in cache keys and logs.
    fn name(&self) -> &str;

    /// Fetch and normalize the dashboard for one league and week.
    async fn fetch_dashboard(
        &self,
        league_id: &str,
        week: u16,
    ) -> Result<LeagueDashboard, ProviderError>;
}
