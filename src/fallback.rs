//! Synthetic dashboard served when the provider is unreachable.
//!
//! The roster table and quick stats are fixed; only the point and
//! projection magnitudes are random. The output satisfies the same shape
//! and invariants as provider data, so clients cannot tell the difference
//! except through the response headers.

use rand::Rng;

use crate::models::{
    League, LeagueDashboard, Matchup, PointsLeader, QuickStats, RecordSummary, StreakLeader,
    TeamRef, TeamSide,
};
use crate::provider::normalize::win_probability;

/// Fixed roster table: (id, name, handle, wins, losses, rank).
const MOCK_TEAMS: [(&str, &str, &str, u32, u32, u32); 8] = [
    ("1", "The Whistle Blowers", "whistlers", 8, 4, 1),
    ("2", "Penalty Box Heroes", "penaltybox", 7, 5, 2),
    ("3", "Red Card Rebels", "redcards", 6, 6, 3),
    ("4", "Touchdown Zebras", "zebras", 9, 3, 4),
    ("5", "Flag Throwers", "flags", 5, 7, 5),
    ("6", "Sideline Sheriffs", "sheriffs", 4, 8, 6),
    ("7", "End Zone Enforcers", "enforcers", 10, 2, 7),
    ("8", "Fumble Finders", "fumblers", 3, 9, 8),
];

const MOCK_LEAGUE_NAME: &str = "The Commissioner's League";
const MOCK_SEASON: i32 = 2024;

/// Build a schema-valid synthetic dashboard for the requested league and week.
pub fn fallback_dashboard(league_id: &str, week: u16) -> LeagueDashboard {
    let mut rng = rand::thread_rng();

    let teams: Vec<TeamSide> = MOCK_TEAMS
        .iter()
        .map(|&(id, name, handle, wins, losses, rank)| TeamSide {
            team_id: id.to_string(),
            display_name: name.to_string(),
            handle: Some(handle.to_string()),
            avatar_url: None,
            projected: Some(rng.gen_range(95..=135) as f64),
            points: Some(rng.gen_range(0..=40) as f64),
            record: Some(RecordSummary {
                wins,
                losses,
                ties: 0,
                rank: Some(rank),
            }),
            win_prob: None,
        })
        .collect();

    // Adjacent table entries play each other: (1,2), (3,4), (5,6), (7,8)
    let matchups = teams
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let mut home = pair[0].clone();
            let mut away = pair[1].clone();
            let (p_home, p_away) = win_probability(
                home.projected.unwrap_or(0.0),
                away.projected.unwrap_or(0.0),
            );
            home.win_prob = Some(p_home);
            away.win_prob = Some(p_away);

            Matchup {
                id: format!("matchup_{}", i + 1),
                week,
                home,
                away,
            }
        })
        .collect();

    LeagueDashboard {
        league: League {
            id: league_id.to_string(),
            name: MOCK_LEAGUE_NAME.to_string(),
            season: MOCK_SEASON,
            week,
        },
        matchups,
        quick_stats: mock_quick_stats(),
    }
}

fn mock_quick_stats() -> QuickStats {
    QuickStats {
        top_seed: Some(TeamRef {
            team_id: "7".to_string(),
            display_name: "End Zone Enforcers".to_string(),
        }),
        points_for_leader: Some(PointsLeader {
            team_id: "4".to_string(),
            display_name: "Touchdown Zebras".to_string(),
            points: 1247,
        }),
        longest_streak: Some(StreakLeader {
            team_id: "7".to_string(),
            display_name: "End Zone Enforcers".to_string(),
            length: 5,
        }),
        waiver_order: Some((1..=8).rev().map(|n| n.to_string()).collect()),
        team_count: 8,
    }
}
