use serde::{Deserialize, Serialize};

/// Win/loss record for a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSummary {
    #[serde(default)]
    pub wins: u32,

    #[serde(default)]
    pub losses: u32,

    #[serde(default)]
    pub ties: u32,

    /// Provider-assigned standings rank, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

/// One side of a head-to-head matchup.
///
/// `projected`, `points`, `record`, and `winProb` serialize as explicit
/// nulls when unknown; `handle` and `avatarUrl` are omitted entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSide {
    /// Stringified roster ID
    pub team_id: String,

    pub display_name: String,

    /// Owner's handle: lowercased display name with whitespace removed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Projected points for the week
    pub projected: Option<f64>,

    /// Points scored so far
    pub points: Option<f64>,

    pub record: Option<RecordSummary>,

    /// Win probability in [0, 1]; the two sides of a matchup sum to 1
    pub win_prob: Option<f64>,
}
