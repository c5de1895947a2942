use serde::{Deserialize, Serialize};

/// League header shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    /// Provider-side league ID, echoed back from the request
    pub id: String,

    /// League display name
    pub name: String,

    /// Season year (0 when the provider reports something unparseable)
    pub season: i32,

    /// Week the dashboard was built for, 1-based
    pub week: u16,
}
