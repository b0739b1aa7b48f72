//! League table: fold every counted match into per-player totals, then rank.
//!
//! The table is rebuilt from the full match log on every call. Nothing is
//! cached between calls, so corrected or late score edits are always reflected.

use crate::logic::validator::points_for;
use crate::models::{League, LeagueStanding, LeagueSummary, PlayerId};
use std::cmp::Ordering;
use std::collections::HashMap;

/// PPG values closer than this are treated as equal when ranking.
pub const PPG_EPSILON: f64 = 1e-6;

/// Compute the ranked league table.
///
/// 1. Seed every roster player (zero-activity players still appear).
/// 2. For each participant of each match: add substitutes on first sight, then
///    record the validator's award when the match counts for them.
/// 3. Derive PPG and trophy eligibility (60% of the most games played).
/// 4. Stable sort by PPG, points, wins, games played (all descending).
pub fn compute_standings(league: &League) -> Vec<LeagueStanding> {
    let mut table = Table::default();
    for player in &league.players {
        if !player.id.is_empty() {
            table.row_mut(&player.id, 0);
        }
    }

    for (day_index, day) in league.days.iter().enumerate() {
        for game in &day.matches {
            if game.is_completed && game.resolved_scores().is_none() {
                log::debug!("match {} is completed but has no usable score; skipped", game.id);
            }
            for player_id in game.participants() {
                let row = table.row_mut(player_id, day_index);
                if game.no_show_player_ids.contains(player_id) {
                    row.no_shows += 1;
                }
                if let Some(award) = points_for(player_id, game) {
                    row.record(&award);
                }
            }
        }
        for row in &mut table.rows {
            row.ppg_history.push(row.current_ppg());
        }
    }

    let mut standings = table.rows;
    let max_played = max_games_played(&standings);
    let min_required = min_required_games(max_played);
    for s in &mut standings {
        s.ppg = s.current_ppg();
        s.eligible_for_trophies = s.games_played > 0 && s.games_played >= min_required;
    }

    // sort_by is stable: exact ties keep roster / first-appearance order.
    standings.sort_by(rank_order);
    standings
}

/// Ranking comparator: PPG (within [`PPG_EPSILON`]), then points, wins, games played.
/// Higher values come first.
pub fn rank_order(a: &LeagueStanding, b: &LeagueStanding) -> Ordering {
    if (b.ppg - a.ppg).abs() > PPG_EPSILON {
        return b.ppg.total_cmp(&a.ppg);
    }
    b.points
        .cmp(&a.points)
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| b.games_played.cmp(&a.games_played))
}

/// `ceil(max_played * 0.6)`, in integer arithmetic.
pub fn min_required_games(max_played: u32) -> u32 {
    (max_played * 3).div_ceil(5)
}

fn max_games_played(standings: &[LeagueStanding]) -> u32 {
    standings.iter().map(|s| s.games_played).max().unwrap_or(0)
}

/// League-wide totals for a table produced by [`compute_standings`] on the same league.
pub fn league_summary(league: &League, standings: &[LeagueStanding]) -> LeagueSummary {
    let total_matches = league
        .matches()
        .filter(|game| {
            game.participants()
                .into_iter()
                .any(|p| points_for(p, game).is_some())
        })
        .count();
    let max_played = max_games_played(standings);

    LeagueSummary {
        total_matches: u32::try_from(total_matches).unwrap_or(u32::MAX),
        max_played,
        min_required: min_required_games(max_played),
        players: u32::try_from(standings.len()).unwrap_or(u32::MAX),
    }
}

/// Rows in insertion order plus an id index.
#[derive(Default)]
struct Table {
    rows: Vec<LeagueStanding>,
    index: HashMap<PlayerId, usize>,
}

impl Table {
    /// Row for `player_id`, created if missing. A player first seen on day
    /// `days_done` gets zero PPG history for the days before.
    fn row_mut(&mut self, player_id: &str, days_done: usize) -> &mut LeagueStanding {
        let idx = match self.index.get(player_id) {
            Some(&idx) => idx,
            None => {
                let mut row = LeagueStanding::new(player_id);
                row.ppg_history = vec![0.0; days_done];
                self.rows.push(row);
                self.index.insert(player_id.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        &mut self.rows[idx]
    }
}
