//! Per-match awards and per-player standings rows.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// What one counted match earned one player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAward {
    pub player_id: PlayerId,
    pub points_earned: u32,
    pub is_win: bool,
    /// Won while the opponent scored zero.
    pub is_bagel: bool,
    /// Lost while scoring 10 or more.
    pub is_close_loss: bool,
}

/// One row of the league table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStanding {
    pub player_id: PlayerId,
    pub points: u32,
    pub wins: u32,
    pub losses: u32,
    pub games_played: u32,
    /// Points per game, unrounded. 0 when no games were played.
    pub ppg: f64,
    /// Bagel wins.
    pub bonus_points: u32,
    pub close_losses: u32,
    /// Matches where the player is on the no-show list.
    pub no_shows: u32,
    /// Running PPG after each league day.
    pub ppg_history: Vec<f64>,
    pub eligible_for_trophies: bool,
}

impl LeagueStanding {
    pub fn new(player_id: impl Into<PlayerId>) -> Self {
        Self {
            player_id: player_id.into(),
            ..Self::default()
        }
    }

    /// Fold one counted match into the totals.
    pub fn record(&mut self, award: &MatchAward) {
        self.games_played += 1;
        self.points += award.points_earned;
        if award.is_win {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        if award.is_bagel {
            self.bonus_points += 1;
        }
        if award.is_close_loss {
            self.close_losses += 1;
        }
    }

    /// Current points per game (0 with no games).
    pub fn current_ppg(&self) -> f64 {
        if self.games_played > 0 {
            f64::from(self.points) / f64::from(self.games_played)
        } else {
            0.0
        }
    }
}

/// League-wide figures that accompany the table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSummary {
    /// Matches that counted for at least one participant.
    pub total_matches: u32,
    pub max_played: u32,
    /// Games needed for trophy eligibility (60% of `max_played`, rounded up).
    pub min_required: u32,
    pub players: u32,
}
