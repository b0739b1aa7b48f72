//! Match validation and the DBZ points law.
//!
//! [`points_for`] is the only place that decides whether a match counts. The
//! live table, the league summary and the exported report all go through it.

use crate::models::{LeagueMatch, MatchAward, MatchStatus, Side};

/// Base award for a win.
pub const WIN_POINTS: u32 = 3;
/// Base award for a loss.
pub const LOSS_POINTS: u32 = 1;
/// Extra point for a bagel win or a close loss.
pub const BONUS_POINT: u32 = 1;
/// A loser scoring at least this many points has a close loss.
pub const CLOSE_LOSS_SCORE: u32 = 10;

/// Points `player_id` earns from `game`, or None when the match does not count for them.
///
/// The match counts only if it is completed (flag and status), not a forfeit, has
/// no no-shows, has two resolvable scores, and the player is on exactly one team.
///
/// Winner: 3, or 4 on a bagel (opponent scored 0).
/// Loser: 1, or 2 with 10+ points (close loss), or 0 when held scoreless.
/// Equal scores give no winner: both sides are scored as losers.
pub fn points_for(player_id: &str, game: &LeagueMatch) -> Option<MatchAward> {
    if !counts_for_standings(game) {
        return None;
    }
    let (score_a, score_b) = game.resolved_scores()?;
    let (player_score, opponent_score) = match game.side_of(player_id)? {
        Side::A => (score_a, score_b),
        Side::B => (score_b, score_a),
    };

    let is_win = player_score > opponent_score;
    let is_close_loss = !is_win && player_score >= CLOSE_LOSS_SCORE;
    let is_bagel = is_win && opponent_score == 0;

    let points_earned = if is_win {
        if is_bagel {
            WIN_POINTS + BONUS_POINT
        } else {
            WIN_POINTS
        }
    } else if player_score == 0 {
        0
    } else if is_close_loss {
        LOSS_POINTS + BONUS_POINT
    } else {
        LOSS_POINTS
    };

    Some(MatchAward {
        player_id: player_id.to_string(),
        points_earned,
        is_win,
        is_bagel,
        is_close_loss,
    })
}

/// The per-match half of the predicate (everything except team membership).
pub fn counts_for_standings(game: &LeagueMatch) -> bool {
    game.is_completed
        && game.status == MatchStatus::Completed
        && !game.is_forfeit
        && game.no_show_player_ids.is_empty()
        && game.resolved_scores().is_some()
}
