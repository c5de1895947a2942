use serde::{Deserialize, Serialize};

use crate::models::TeamSide;

/// A head-to-head matchup between two rosters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    /// Stable ID, unique within a league and week
    pub id: String,

    pub week: u16,

    /// Side with the lower roster ID
    pub home: TeamSide,

    /// Side with the higher roster ID
    pub away: TeamSide,
}
