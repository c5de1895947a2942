//! Derived league statistics models.

use serde::{Deserialize, Serialize};

/// Minimal team reference used inside stats entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    pub team_id: String,
    pub display_name: String,
}

/// The team with the most season points-for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsLeader {
    pub team_id: String,
    pub display_name: String,

    /// Season points-for, rounded to the nearest whole point
    pub points: i64,
}

/// The team on the longest active win streak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakLeader {
    pub team_id: String,
    pub display_name: String,

    /// Consecutive wins
    pub length: u32,
}

/// League-level derived stats shown beside the matchup list.
///
/// Entries that cannot be derived (e.g. for a league with no rosters yet)
/// are omitted from the payload rather than serialized as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_seed: Option<TeamRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_for_leader: Option<PointsLeader>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longest_streak: Option<StreakLeader>,

    /// Roster IDs in waiver priority order, first pick first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiver_order: Option<Vec<String>>,

    pub team_count: u32,
}
