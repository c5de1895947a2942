//! Sleeper fantasy platform client.
//!
//! Fetches league, user, roster, and matchup data from the Sleeper v1 API
//! and normalizes it into a dashboard. All Sleeper API specifics are
//! isolated in this module so endpoint changes are easy to fix.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::config::ProviderConfig;
use crate::models::LeagueDashboard;
use crate::provider::normalize::build_dashboard;
use crate::provider::{DashboardProvider, ProviderError};

// ── Custom deserializers for loose Sleeper fields ───────────────────────────

/// Deserialize a value that may be a number or a string containing a number.
///
/// Sleeper metadata values are stringly typed more often than not.
fn deserialize_string_or_number_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let val: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(val.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }))
}

// ── Sleeper API response types ──────────────────────────────────────────────

/// League metadata from `/league/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SleeperLeague {
    /// Sleeper internal league ID
    pub league_id: String,

    /// League display name
    pub name: String,

    /// Season year as a string, e.g. "2024"
    pub season: String,
}

/// A league member from `/league/{id}/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct SleeperUser {
    pub user_id: String,

    /// Chosen display name; may be absent or empty
    pub display_name: Option<String>,

    /// Avatar hash; the full URL is built against the avatar CDN
    pub avatar: Option<String>,
}

/// Record and season scoring totals nested in a roster.
///
/// Sleeper splits point totals into an integer part and a hundredths part
/// (`fpts` + `fpts_decimal`); [`Self::points_for`] folds them back together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SleeperRosterSettings {
    #[serde(default)]
    pub wins: u32,

    #[serde(default)]
    pub losses: u32,

    #[serde(default)]
    pub ties: u32,

    /// Integer part of season points-for
    #[serde(default)]
    pub fpts: f64,

    /// Hundredths part of season points-for
    #[serde(default)]
    pub fpts_decimal: f64,

    /// Integer part of season points-against
    #[serde(default)]
    pub fpts_against: f64,

    /// Hundredths part of season points-against
    #[serde(default)]
    pub fpts_against_decimal: f64,

    /// Standings rank assigned by Sleeper, when present
    pub rank: Option<u32>,
}

impl SleeperRosterSettings {
    /// Season points-for with the decimal part folded in.
    pub fn points_for(&self) -> f64 {
        self.fpts + self.fpts_decimal / 100.0
    }

    /// Season points-against with the decimal part folded in.
    pub fn points_against(&self) -> f64 {
        self.fpts_against + self.fpts_against_decimal / 100.0
    }
}

/// Free-form roster metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SleeperRosterMeta {
    /// Current streak, e.g. "4W" or "2L"
    pub streak: Option<String>,

    /// Season result string, e.g. "WWLWL"
    pub record: Option<String>,
}

/// A roster from `/league/{id}/rosters`.
#[derive(Debug, Clone, Deserialize)]
pub struct SleeperRoster {
    /// Small numeric ID, stable within the league
    pub roster_id: u32,

    /// Owning user ID; orphaned rosters have none
    pub owner_id: Option<String>,

    #[serde(default)]
    pub settings: SleeperRosterSettings,

    pub metadata: Option<SleeperRosterMeta>,
}

/// Weekly matchup metadata (projections live here when present).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SleeperMatchupMeta {
    /// Projected points; arrives as a number or a numeric string
    #[serde(default, deserialize_with = "deserialize_string_or_number_f64")]
    pub proj: Option<f64>,
}

/// One roster's row from `/league/{id}/matchups/{week}`.
///
/// Two rows share a `matchup_id`; rows without one are byes.
#[derive(Debug, Clone, Deserialize)]
pub struct SleeperMatchup {
    pub roster_id: u32,

    pub matchup_id: Option<u32>,

    /// Points scored so far this week
    pub points: Option<f64>,

    pub metadata: Option<SleeperMatchupMeta>,
}

impl SleeperMatchup {
    /// Projected points, when the row carries them.
    pub fn projected(&self) -> Option<f64> {
        self.metadata.as_ref().and_then(|m| m.proj)
    }
}

// ── Sleeper client implementation ───────────────────────────────────────────

/// Sleeper API client.
pub struct SleeperClient {
    client: Client,
    base_url: String,
    avatar_base_url: String,
}

impl SleeperClient {
    /// Create a new Sleeper client from provider configuration.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("commissioner/0.1.0")),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            avatar_base_url: config.avatar_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET a Sleeper endpoint and decode the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        url: String,
    ) -> Result<T, ProviderError> {
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let json_text = response.text().await?;
        serde_json::from_str(&json_text).map_err(|e| ProviderError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }

    /// Fetch league metadata.
    pub async fn fetch_league(&self, league_id: &str) -> Result<SleeperLeague, ProviderError> {
        let url = format!("{}/league/{}", self.base_url, league_id);
        self.get_json("league", url).await
    }

    /// Fetch league members.
    pub async fn fetch_users(&self, league_id: &str) -> Result<Vec<SleeperUser>, ProviderError> {
        let url = format!("{}/league/{}/users", self.base_url, league_id);
        self.get_json("users", url).await
    }

    /// Fetch rosters with records and scoring totals.
    pub async fn fetch_rosters(
        &self,
        league_id: &str,
    ) -> Result<Vec<SleeperRoster>, ProviderError> {
        let url = format!("{}/league/{}/rosters", self.base_url, league_id);
        self.get_json("rosters", url).await
    }

    /// Fetch per-roster matchup rows for one week.
    pub async fn fetch_matchups(
        &self,
        league_id: &str,
        week: u16,
    ) -> Result<Vec<SleeperMatchup>, ProviderError> {
        let url = format!("{}/league/{}/matchups/{}", self.base_url, league_id, week);
        self.get_json("matchups", url).await
    }
}

#[async_trait]
impl DashboardProvider for SleeperClient {
    fn name(&self) -> &str {
        "sleeper"
    }

    async fn fetch_dashboard(
        &self,
        league_id: &str,
        week: u16,
    ) -> Result<LeagueDashboard, ProviderError> {
        info!(
            "Sleeper: fetching dashboard for league {} week {}",
            league_id, week
        );

        // All four endpoints in parallel; the first failure wins
        let (league, users, rosters, matchups) = tokio::try_join!(
            self.fetch_league(league_id),
            self.fetch_users(league_id),
            self.fetch_rosters(league_id),
            self.fetch_matchups(league_id, week),
        )?;

        info!(
            "Sleeper: league {} returned {} users, {} rosters, {} matchup rows",
            league_id,
            users.len(),
            rosters.len(),
            matchups.len()
        );

        Ok(build_dashboard(
            self.name(),
            league_id,
            week,
            &league,
            &users,
            &rosters,
            &matchups,
            &self.avatar_base_url,
        ))
    }
}
