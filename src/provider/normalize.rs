//! Normalization from Sleeper wire data into dashboard models.
//!
//! Everything here is a pure function of its inputs. Output ordering is
//! fully deterministic, so repeated normalization of the same upstream
//! snapshot is byte-identical.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::models::{
    League, LeagueDashboard, Matchup, PointsLeader, QuickStats, RecordSummary, StreakLeader,
    TeamRef, TeamSide,
};
use crate::provider::sleeper::{SleeperLeague, SleeperMatchup, SleeperRoster, SleeperUser};

/// A roster joined with its owning user, ready for presentation.
#[derive(Debug, Clone)]
pub struct RosterProfile {
    pub roster_id: u32,
    pub display_name: String,
    pub handle: Option<String>,
    pub avatar_url: Option<String>,
    pub record: RecordSummary,
    pub points_for: f64,
    pub points_against: f64,
    /// Length of the current win streak; loss streaks and unknowns are None
    pub win_streak: Option<u32>,
}

/// Lowercase a display name and strip all whitespace.
fn derive_handle(display_name: &str) -> String {
    display_name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Parse a streak string like "4W" into a win count. "2L" and junk are None.
fn parse_win_streak(streak: &str) -> Option<u32> {
    streak.trim().strip_suffix('W')?.parse().ok()
}

/// Join rosters with their owners into presentation-ready profiles.
///
/// Rosters without a resolvable owner keep a `Team {roster_id}` display
/// name and no handle or avatar.
pub fn build_profiles(
    users: &[SleeperUser],
    rosters: &[SleeperRoster],
    avatar_base_url: &str,
) -> BTreeMap<u32, RosterProfile> {
    let users_by_id: HashMap<&str, &SleeperUser> =
        users.iter().map(|u| (u.user_id.as_str(), u)).collect();
    let avatar_base = avatar_base_url.trim_end_matches('/');

    rosters
        .iter()
        .map(|roster| {
            let user = roster
                .owner_id
                .as_deref()
                .and_then(|id| users_by_id.get(id).copied());

            let user_name = user
                .and_then(|u| u.display_name.as_deref())
                .filter(|name| !name.is_empty());

            let display_name = user_name
                .map(str::to_string)
                .unwrap_or_else(|| format!("Team {}", roster.roster_id));

            let handle = user_name
                .map(derive_handle)
                .filter(|h| !h.is_empty());

            let avatar_url = user
                .and_then(|u| u.avatar.as_deref())
                .filter(|hash| !hash.is_empty())
                .map(|hash| format!("{}/{}", avatar_base, hash));

            let win_streak = roster
                .metadata
                .as_ref()
                .and_then(|m| m.streak.as_deref())
                .and_then(parse_win_streak);

            let profile = RosterProfile {
                roster_id: roster.roster_id,
                display_name,
                handle,
                avatar_url,
                record: RecordSummary {
                    wins: roster.settings.wins,
                    losses: roster.settings.losses,
                    ties: roster.settings.ties,
                    rank: roster.settings.rank,
                },
                points_for: roster.settings.points_for(),
                points_against: roster.settings.points_against(),
                win_streak,
            };

            (roster.roster_id, profile)
        })
        .collect()
}

/// Split a win probability between two scoring bases.
///
/// The away share is the exact complement of the home share so the pair
/// always sums to 1, floating point included. A zero denominator (nothing
/// projected, nothing scored) splits the matchup evenly.
pub fn win_probability(basis_home: f64, basis_away: f64) -> (f64, f64) {
    let denom = basis_home + basis_away;
    let p_home = if denom > 0.0 { basis_home / denom } else { 0.5 };
    (p_home, 1.0 - p_home)
}

/// Scoring basis for win probability: projection first, then live points.
fn scoring_basis(row: &SleeperMatchup) -> f64 {
    row.projected().or(row.points).unwrap_or(0.0)
}

fn team_side(row: &SleeperMatchup, profile: &RosterProfile, win_prob: f64) -> TeamSide {
    TeamSide {
        team_id: row.roster_id.to_string(),
        display_name: profile.display_name.clone(),
        handle: profile.handle.clone(),
        avatar_url: profile.avatar_url.clone(),
        projected: row.projected(),
        points: row.points,
        record: Some(profile.record.clone()),
        win_prob: Some(win_prob),
    }
}

/// Pair per-roster matchup rows into head-to-head matchups.
///
/// Rows sharing a `matchup_id` form one matchup; the lower roster ID is
/// home. Bye rows (no `matchup_id`), groups that are not exactly two rows,
/// and groups referencing unknown rosters are dropped. Output is ordered
/// by `matchup_id` ascending.
pub fn pair_matchups(
    provider: &str,
    league_id: &str,
    week: u16,
    rows: &[SleeperMatchup],
    profiles: &BTreeMap<u32, RosterProfile>,
) -> Vec<Matchup> {
    let mut groups: BTreeMap<u32, Vec<&SleeperMatchup>> = BTreeMap::new();
    for row in rows {
        match row.matchup_id {
            Some(id) => groups.entry(id).or_default().push(row),
            None => debug!("Roster {} has no matchup this week (bye), skipping", row.roster_id),
        }
    }

    let mut matchups = Vec::new();
    for (matchup_id, mut group) in groups {
        if group.len() != 2 {
            warn!(
                "Matchup {} has {} rows, expected 2; dropping",
                matchup_id,
                group.len()
            );
            continue;
        }

        // Lower roster ID is home, higher is away
        group.sort_by_key(|row| row.roster_id);
        let (home_row, away_row) = (group[0], group[1]);

        let (home_profile, away_profile) = match (
            profiles.get(&home_row.roster_id),
            profiles.get(&away_row.roster_id),
        ) {
            (Some(h), Some(a)) => (h, a),
            _ => {
                warn!("Missing roster data for matchup {}; dropping", matchup_id);
                continue;
            }
        };

        let (p_home, p_away) = win_probability(scoring_basis(home_row), scoring_basis(away_row));

        matchups.push(Matchup {
            id: format!("{}:{}:{}:{}", provider, league_id, week, matchup_id),
            week,
            home: team_side(home_row, home_profile, p_home),
            away: team_side(away_row, away_profile, p_away),
        });
    }

    matchups
}

/// Derive the league-level quick stats from roster profiles.
///
/// Each ranking ends in the lower roster ID as its final tie-break, so
/// the output never depends on map ordering.
pub fn derive_quick_stats(profiles: &BTreeMap<u32, RosterProfile>) -> QuickStats {
    let mut by_wins: Vec<&RosterProfile> = profiles.values().collect();
    by_wins.sort_by(|a, b| {
        b.record
            .wins
            .cmp(&a.record.wins)
            .then(b.points_for.total_cmp(&a.points_for))
            .then(a.roster_id.cmp(&b.roster_id))
    });
    let top_seed = by_wins.first().map(|p| TeamRef {
        team_id: p.roster_id.to_string(),
        display_name: p.display_name.clone(),
    });

    let mut by_points: Vec<&RosterProfile> = profiles.values().collect();
    by_points.sort_by(|a, b| {
        b.points_for
            .total_cmp(&a.points_for)
            .then(a.roster_id.cmp(&b.roster_id))
    });
    let points_for_leader = by_points.first().map(|p| PointsLeader {
        team_id: p.roster_id.to_string(),
        display_name: p.display_name.clone(),
        points: p.points_for.round() as i64,
    });

    let mut by_streak: Vec<(&RosterProfile, u32)> = profiles
        .values()
        .filter_map(|p| p.win_streak.map(|len| (p, len)))
        .collect();
    by_streak.sort_by(|(a, a_len), (b, b_len)| {
        b_len
            .cmp(a_len)
            .then(b.points_for.total_cmp(&a.points_for))
            .then(a.roster_id.cmp(&b.roster_id))
    });
    let longest_streak = by_streak.first().map(|(p, len)| StreakLeader {
        team_id: p.roster_id.to_string(),
        display_name: p.display_name.clone(),
        length: *len,
    });

    // Worst points-against picks first on waivers
    let mut by_points_against: Vec<&RosterProfile> = profiles.values().collect();
    by_points_against.sort_by(|a, b| {
        b.points_against
            .total_cmp(&a.points_against)
            .then(a.roster_id.cmp(&b.roster_id))
    });
    let waiver_order = by_points_against
        .iter()
        .map(|p| p.roster_id.to_string())
        .collect();

    QuickStats {
        top_seed,
        points_for_leader,
        longest_streak,
        waiver_order: Some(waiver_order),
        team_count: profiles.len() as u32,
    }
}

/// Assemble the full dashboard from raw Sleeper responses.
#[allow(clippy::too_many_arguments)]
pub fn build_dashboard(
    provider: &str,
    league_id: &str,
    week: u16,
    league: &SleeperLeague,
    users: &[SleeperUser],
    rosters: &[SleeperRoster],
    matchup_rows: &[SleeperMatchup],
    avatar_base_url: &str,
) -> LeagueDashboard {
    let profiles = build_profiles(users, rosters, avatar_base_url);
    let matchups = pair_matchups(provider, league_id, week, matchup_rows, &profiles);
    let quick_stats = derive_quick_stats(&profiles);

    let season = league.season.parse().unwrap_or_else(|_| {
        warn!(
            "League {} reports unparseable season {:?}, using 0",
            league_id, league.season
        );
        0
    });

    LeagueDashboard {
        league: League {
            id: league_id.to_string(),
            name: league.name.clone(),
            season,
            week,
        },
        matchups,
        quick_stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::sleeper::{SleeperMatchupMeta, SleeperRosterMeta, SleeperRosterSettings};
    use pretty_assertions::assert_eq;

    fn user(id: &str, name: &str) -> SleeperUser {
        SleeperUser {
            user_id: id.to_string(),
            display_name: Some(name.to_string()),
            avatar: None,
        }
    }

    fn roster(
        id: u32,
        owner: Option<&str>,
        wins: u32,
        fpts: f64,
        fpts_against: f64,
    ) -> SleeperRoster {
        SleeperRoster {
            roster_id: id,
            owner_id: owner.map(str::to_string),
            settings: SleeperRosterSettings {
                wins,
                losses: 10 - wins.min(10),
                ties: 0,
                fpts,
                fpts_decimal: 0.0,
                fpts_against,
                fpts_against_decimal: 0.0,
                rank: None,
            },
            metadata: None,
        }
    }

    fn row(
        roster_id: u32,
        matchup_id: Option<u32>,
        points: Option<f64>,
        proj: Option<f64>,
    ) -> SleeperMatchup {
        SleeperMatchup {
            roster_id,
            matchup_id,
            points,
            metadata: proj.map(|p| SleeperMatchupMeta { proj: Some(p) }),
        }
    }

    fn profiles_for(rosters: &[SleeperRoster]) -> BTreeMap<u32, RosterProfile> {
        build_profiles(&[], rosters, "https://cdn.example/avatars")
    }

    // ── Win probability ─────────────────────────────────────────────────────

    #[test]
    fn test_win_probability_proportional_to_basis() {
        let (home, away) = win_probability(120.0, 80.0);
        assert_eq!(home, 0.6);
        assert_eq!(away, 0.4);
    }

    #[test]
    fn test_win_probability_zero_denominator_splits_even() {
        let (home, away) = win_probability(0.0, 0.0);
        assert_eq!(home, 0.5);
        assert_eq!(away, 0.5);
    }

    #[test]
    fn test_win_probability_always_sums_to_one() {
        // Deliberately awkward floats; complement arithmetic keeps the
        // invariant exact
        for (a, b) in [(99.7, 103.1), (0.1, 0.2), (117.31, 94.77)] {
            let (home, away) = win_probability(a, b);
            assert_eq!(home + away, 1.0);
        }
    }

    // ── Profile building ────────────────────────────────────────────────────

    #[test]
    fn test_build_profiles_joins_user_by_owner_id() {
        let users = vec![user("u1", "Gridiron Guru")];
        let rosters = vec![roster(1, Some("u1"), 5, 900.0, 850.0)];

        let profiles = build_profiles(&users, &rosters, "https://cdn.example/avatars");
        let profile = &profiles[&1];
        assert_eq!(profile.display_name, "Gridiron Guru");
        assert_eq!(profile.handle.as_deref(), Some("gridironguru"));
    }

    #[test]
    fn test_build_profiles_unknown_owner_gets_fallback_name() {
        let rosters = vec![roster(5, None, 3, 700.0, 800.0)];

        let profiles = profiles_for(&rosters);
        let profile = &profiles[&5];
        assert_eq!(profile.display_name, "Team 5");
        assert_eq!(profile.handle, None);
        assert_eq!(profile.avatar_url, None);
    }

    #[test]
    fn test_build_profiles_empty_display_name_gets_fallback_name() {
        let users = vec![SleeperUser {
            user_id: "u1".to_string(),
            display_name: Some(String::new()),
            avatar: None,
        }];
        let rosters = vec![roster(2, Some("u1"), 4, 800.0, 780.0)];

        let profiles = build_profiles(&users, &rosters, "https://cdn.example/avatars");
        assert_eq!(profiles[&2].display_name, "Team 2");
        assert_eq!(profiles[&2].handle, None);
    }

    #[test]
    fn test_build_profiles_avatar_url_from_hash() {
        let users = vec![SleeperUser {
            user_id: "u1".to_string(),
            display_name: Some("Guru".to_string()),
            avatar: Some("abc123".to_string()),
        }];
        let rosters = vec![roster(1, Some("u1"), 5, 900.0, 850.0)];

        let profiles = build_profiles(&users, &rosters, "https://cdn.example/avatars/");
        assert_eq!(
            profiles[&1].avatar_url.as_deref(),
            Some("https://cdn.example/avatars/abc123")
        );
    }

    #[test]
    fn test_build_profiles_win_streak_from_metadata() {
        let mut r = roster(1, None, 5, 900.0, 850.0);
        r.metadata = Some(SleeperRosterMeta {
            streak: Some("4W".to_string()),
            record: None,
        });
        let mut l = roster(2, None, 3, 700.0, 800.0);
        l.metadata = Some(SleeperRosterMeta {
            streak: Some("2L".to_string()),
            record: None,
        });

        let profiles = profiles_for(&[r, l]);
        assert_eq!(profiles[&1].win_streak, Some(4));
        assert_eq!(profiles[&2].win_streak, None);
    }

    #[test]
    fn test_parse_win_streak_rejects_junk() {
        assert_eq!(parse_win_streak("4W"), Some(4));
        assert_eq!(parse_win_streak(" 10W "), Some(10));
        assert_eq!(parse_win_streak("3L"), None);
        assert_eq!(parse_win_streak("W"), None);
        assert_eq!(parse_win_streak(""), None);
        assert_eq!(parse_win_streak("streaking"), None);
    }

    // ── Matchup pairing ─────────────────────────────────────────────────────

    #[test]
    fn test_pair_matchups_home_is_lower_roster_id() {
        let rosters = vec![roster(1, None, 5, 900.0, 850.0), roster(2, None, 4, 880.0, 870.0)];
        let profiles = profiles_for(&rosters);
        // Higher roster first in the response; pairing must reorder
        let rows = vec![
            row(2, Some(1), Some(70.0), Some(100.0)),
            row(1, Some(1), Some(80.0), Some(110.0)),
        ];

        let matchups = pair_matchups("sleeper", "42", 3, &rows, &profiles);
        assert_eq!(matchups.len(), 1);
        assert_eq!(matchups[0].home.team_id, "1");
        assert_eq!(matchups[0].away.team_id, "2");
        assert_eq!(matchups[0].id, "sleeper:42:3:1");
        assert_eq!(matchups[0].week, 3);
    }

    #[test]
    fn test_pair_matchups_win_prob_from_projections() {
        let rosters = vec![roster(1, None, 5, 900.0, 850.0), roster(2, None, 4, 880.0, 870.0)];
        let profiles = profiles_for(&rosters);
        let rows = vec![
            row(1, Some(1), Some(0.0), Some(120.0)),
            row(2, Some(1), Some(0.0), Some(80.0)),
        ];

        let matchups = pair_matchups("sleeper", "42", 1, &rows, &profiles);
        assert_eq!(matchups[0].home.win_prob, Some(0.6));
        assert_eq!(matchups[0].away.win_prob, Some(0.4));
    }

    #[test]
    fn test_pair_matchups_basis_falls_back_to_points() {
        let rosters = vec![roster(1, None, 5, 900.0, 850.0), roster(2, None, 4, 880.0, 870.0)];
        let profiles = profiles_for(&rosters);
        // No projections at all; live points drive the probability
        let rows = vec![
            row(1, Some(1), Some(30.0), None),
            row(2, Some(1), Some(10.0), None),
        ];

        let matchups = pair_matchups("sleeper", "42", 1, &rows, &profiles);
        assert_eq!(matchups[0].home.win_prob, Some(0.75));
        assert_eq!(matchups[0].away.win_prob, Some(0.25));
    }

    #[test]
    fn test_pair_matchups_no_signal_splits_even() {
        let rosters = vec![roster(1, None, 5, 900.0, 850.0), roster(2, None, 4, 880.0, 870.0)];
        let profiles = profiles_for(&rosters);
        let rows = vec![row(1, Some(1), None, None), row(2, Some(1), None, None)];

        let matchups = pair_matchups("sleeper", "42", 1, &rows, &profiles);
        assert_eq!(matchups[0].home.win_prob, Some(0.5));
        assert_eq!(matchups[0].away.win_prob, Some(0.5));
        assert_eq!(matchups[0].home.points, None);
        assert_eq!(matchups[0].home.projected, None);
    }

    #[test]
    fn test_pair_matchups_skips_bye_rows() {
        let rosters = vec![
            roster(1, None, 5, 900.0, 850.0),
            roster(2, None, 4, 880.0, 870.0),
            roster(3, None, 3, 860.0, 890.0),
        ];
        let profiles = profiles_for(&rosters);
        let rows = vec![
            row(1, Some(1), Some(80.0), None),
            row(2, Some(1), Some(70.0), None),
            row(3, None, None, None), // bye
        ];

        let matchups = pair_matchups("sleeper", "42", 1, &rows, &profiles);
        assert_eq!(matchups.len(), 1);
    }

    #[test]
    fn test_pair_matchups_drops_incomplete_groups() {
        let rosters = vec![
            roster(1, None, 5, 900.0, 850.0),
            roster(2, None, 4, 880.0, 870.0),
            roster(3, None, 3, 860.0, 890.0),
        ];
        let profiles = profiles_for(&rosters);
        // Group 1 has three rows, group 2 has one
        let rows = vec![
            row(1, Some(1), None, None),
            row(2, Some(1), None, None),
            row(3, Some(1), None, None),
            row(1, Some(2), None, None),
        ];

        let matchups = pair_matchups("sleeper", "42", 1, &rows, &profiles);
        assert!(matchups.is_empty());
    }

    #[test]
    fn test_pair_matchups_drops_unknown_rosters() {
        let rosters = vec![roster(1, None, 5, 900.0, 850.0)];
        let profiles = profiles_for(&rosters);
        // Roster 9 has no roster record
        let rows = vec![
            row(1, Some(1), Some(80.0), None),
            row(9, Some(1), Some(70.0), None),
        ];

        let matchups = pair_matchups("sleeper", "42", 1, &rows, &profiles);
        assert!(matchups.is_empty());
    }

    #[test]
    fn test_pair_matchups_ordered_by_matchup_id() {
        let rosters: Vec<SleeperRoster> = (1..=6)
            .map(|id| roster(id, None, 5, 900.0, 850.0))
            .collect();
        let profiles = profiles_for(&rosters);
        let rows = vec![
            row(5, Some(3), None, None),
            row(6, Some(3), None, None),
            row(1, Some(1), None, None),
            row(2, Some(1), None, None),
            row(3, Some(2), None, None),
            row(4, Some(2), None, None),
        ];

        let matchups = pair_matchups("sleeper", "42", 1, &rows, &profiles);
        let ids: Vec<&str> = matchups.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["sleeper:42:1:1", "sleeper:42:1:2", "sleeper:42:1:3"]);
    }

    // ── Quick stats ─────────────────────────────────────────────────────────

    #[test]
    fn test_quick_stats_top_seed_most_wins() {
        let rosters = vec![
            roster(1, None, 5, 900.0, 850.0),
            roster(2, None, 8, 880.0, 870.0),
            roster(3, None, 3, 860.0, 890.0),
        ];

        let stats = derive_quick_stats(&profiles_for(&rosters));
        assert_eq!(stats.top_seed.unwrap().team_id, "2");
        assert_eq!(stats.team_count, 3);
    }

    #[test]
    fn test_quick_stats_top_seed_ties_break_on_points_then_id() {
        // Equal wins: more points-for wins the seed
        let rosters = vec![roster(1, None, 6, 900.0, 0.0), roster(2, None, 6, 950.0, 0.0)];
        let stats = derive_quick_stats(&profiles_for(&rosters));
        assert_eq!(stats.top_seed.unwrap().team_id, "2");

        // Equal wins and points: lower roster ID wins
        let rosters = vec![roster(2, None, 6, 900.0, 0.0), roster(1, None, 6, 900.0, 0.0)];
        let stats = derive_quick_stats(&profiles_for(&rosters));
        assert_eq!(stats.top_seed.unwrap().team_id, "1");
    }

    #[test]
    fn test_quick_stats_points_leader_rounds_to_whole_points() {
        let mut r = roster(1, None, 5, 1104.0, 0.0);
        r.settings.fpts_decimal = 44.0; // 1104.44 rounds down
        let mut s = roster(2, None, 5, 1104.0, 0.0);
        s.settings.fpts_decimal = 61.0; // 1104.61 rounds up

        let stats = derive_quick_stats(&profiles_for(&[r, s]));
        let leader = stats.points_for_leader.unwrap();
        assert_eq!(leader.team_id, "2");
        assert_eq!(leader.points, 1105);
    }

    #[test]
    fn test_quick_stats_waiver_order_worst_points_against_first() {
        let rosters = vec![
            roster(1, None, 5, 900.0, 850.0),
            roster(2, None, 5, 900.0, 990.0),
            roster(3, None, 5, 900.0, 920.0),
        ];

        let stats = derive_quick_stats(&profiles_for(&rosters));
        assert_eq!(
            stats.waiver_order.unwrap(),
            vec!["2".to_string(), "3".to_string(), "1".to_string()]
        );
    }

    #[test]
    fn test_quick_stats_longest_streak() {
        let mut a = roster(1, None, 5, 900.0, 850.0);
        a.metadata = Some(SleeperRosterMeta {
            streak: Some("2W".to_string()),
            record: None,
        });
        let mut b = roster(2, None, 6, 880.0, 870.0);
        b.metadata = Some(SleeperRosterMeta {
            streak: Some("5W".to_string()),
            record: None,
        });
        let mut c = roster(3, None, 3, 860.0, 890.0);
        c.metadata = Some(SleeperRosterMeta {
            streak: Some("7L".to_string()),
            record: None,
        });

        let stats = derive_quick_stats(&profiles_for(&[a, b, c]));
        let streak = stats.longest_streak.unwrap();
        assert_eq!(streak.team_id, "2");
        assert_eq!(streak.length, 5);
    }

    #[test]
    fn test_quick_stats_no_streak_data_omits_entry() {
        let rosters = vec![roster(1, None, 5, 900.0, 850.0)];
        let stats = derive_quick_stats(&profiles_for(&rosters));
        assert!(stats.longest_streak.is_none());
    }

    #[test]
    fn test_quick_stats_empty_league() {
        let stats = derive_quick_stats(&BTreeMap::new());
        assert!(stats.top_seed.is_none());
        assert!(stats.points_for_leader.is_none());
        assert!(stats.longest_streak.is_none());
        assert_eq!(stats.waiver_order.unwrap(), Vec::<String>::new());
        assert_eq!(stats.team_count, 0);
    }

    // ── Full dashboard assembly ─────────────────────────────────────────────

    fn sample_league() -> SleeperLeague {
        SleeperLeague {
            league_id: "992093861812401152".to_string(),
            name: "Dynasty Degenerates".to_string(),
            season: "2024".to_string(),
        }
    }

    fn sample_inputs() -> (Vec<SleeperUser>, Vec<SleeperRoster>, Vec<SleeperMatchup>) {
        let users = vec![
            user("u1", "Gridiron Guru"),
            user("u2", "Bench Warmer"),
            user("u3", "Waiver Wire Wizard"),
            user("u4", "Red Zone Raider"),
        ];
        let rosters = vec![
            roster(1, Some("u1"), 6, 1104.0, 987.0),
            roster(2, Some("u2"), 4, 998.0, 1050.0),
            roster(3, Some("u3"), 7, 1180.0, 940.0),
            roster(4, Some("u4"), 2, 870.0, 1110.0),
        ];
        let rows = vec![
            row(1, Some(1), Some(55.0), Some(110.0)),
            row(2, Some(1), Some(48.0), Some(95.0)),
            row(3, Some(2), Some(60.0), Some(120.0)),
            row(4, Some(2), Some(40.0), Some(80.0)),
        ];
        (users, rosters, rows)
    }

    #[test]
    fn test_build_dashboard_end_to_end() {
        let (users, rosters, rows) = sample_inputs();
        let dashboard = build_dashboard(
            "sleeper",
            "992093861812401152",
            9,
            &sample_league(),
            &users,
            &rosters,
            &rows,
            "https://cdn.example/avatars",
        );

        assert_eq!(dashboard.league.id, "992093861812401152");
        assert_eq!(dashboard.league.season, 2024);
        assert_eq!(dashboard.league.week, 9);
        assert_eq!(dashboard.matchups.len(), 2);
        assert_eq!(dashboard.quick_stats.team_count, 4);
        assert_eq!(dashboard.quick_stats.top_seed.as_ref().unwrap().team_id, "3");
        assert_eq!(
            dashboard.quick_stats.points_for_leader.as_ref().unwrap().points,
            1180
        );

        // Waiver priority runs from worst points-against down
        assert_eq!(
            dashboard.quick_stats.waiver_order.as_ref().unwrap(),
            &vec!["4".to_string(), "2".to_string(), "1".to_string(), "3".to_string()]
        );
    }

    #[test]
    fn test_build_dashboard_unparseable_season_is_zero() {
        let mut league = sample_league();
        league.season = "offseason".to_string();
        let (users, rosters, rows) = sample_inputs();

        let dashboard = build_dashboard(
            "sleeper",
            "42",
            1,
            &league,
            &users,
            &rosters,
            &rows,
            "https://cdn.example/avatars",
        );
        assert_eq!(dashboard.league.season, 0);
    }

    #[test]
    fn test_build_dashboard_is_deterministic() {
        let (users, rosters, rows) = sample_inputs();
        let build = || {
            build_dashboard(
                "sleeper",
                "42",
                9,
                &sample_league(),
                &users,
                &rosters,
                &rows,
                "https://cdn.example/avatars",
            )
        };

        let first = serde_json::to_string(&build()).unwrap();
        let second = serde_json::to_string(&build()).unwrap();
        assert_eq!(first, second);
    }
}
