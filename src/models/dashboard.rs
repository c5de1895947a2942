use serde::{Deserialize, Serialize};

use crate::models::{League, Matchup, QuickStats};

/// The full dashboard payload served to clients.
///
/// This is the service's only output shape: the provider path, the cache,
/// and the synthetic fallback all produce one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDashboard {
    pub league: League,
    pub matchups: Vec<Matchup>,
    pub quick_stats: QuickStats,
}
