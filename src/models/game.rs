//! League match records and their ingestion from the league store.
//!
//! The store has used two field-naming conventions over time (`teamA`/`teamB`
//! and `team1`/`team2`, `courtId` and `court`, numeric scores or a legacy
//! `"11-9"` string). Everything is normalized here, once, into [`LeagueMatch`].

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = String;

/// Lifecycle status of a match as recorded by the league store.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
    Cancelled,
    Walkover,
    /// Anything the store sends that we do not recognize.
    #[serde(other)]
    Unknown,
}

/// Which team of a match a player is on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

/// A single match, in canonical shape.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMatch", rename_all = "camelCase")]
pub struct LeagueMatch {
    pub id: MatchId,
    /// Team A player ids (1 for singles, 2 for doubles).
    pub team_a: Vec<PlayerId>,
    /// Team B player ids.
    pub team_b: Vec<PlayerId>,
    /// None when absent or not a non-negative integer.
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    /// Legacy `"A-B"` score string.
    #[serde(rename = "score")]
    pub score_text: Option<String>,
    pub is_completed: bool,
    pub status: MatchStatus,
    pub is_forfeit: bool,
    pub no_show_player_ids: Vec<PlayerId>,
    #[serde(rename = "courtId")]
    pub court: Option<u32>,
    pub round: Option<u32>,
    pub order_index: Option<u32>,
}

impl LeagueMatch {
    /// A scheduled 0-0 match with a fresh id and no court assignment.
    pub fn new(team_a: Vec<PlayerId>, team_b: Vec<PlayerId>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            team_a,
            team_b,
            score_a: None,
            score_b: None,
            score_text: None,
            is_completed: false,
            status: MatchStatus::Scheduled,
            is_forfeit: false,
            no_show_player_ids: Vec::new(),
            court: None,
            round: None,
            order_index: None,
        }
    }

    pub fn with_score(mut self, score_a: u32, score_b: u32) -> Self {
        self.score_a = Some(score_a);
        self.score_b = Some(score_b);
        self
    }

    /// Mark as finished: `is_completed` and status `completed`.
    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self.status = MatchStatus::Completed;
        self
    }

    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    pub fn on_court(mut self, court: u32) -> Self {
        self.court = Some(court);
        self
    }

    pub fn in_round(mut self, round: u32) -> Self {
        self.round = Some(round);
        self
    }

    pub fn with_order_index(mut self, order_index: u32) -> Self {
        self.order_index = Some(order_index);
        self
    }

    /// Court number, 0 when unassigned.
    pub fn court(&self) -> u32 {
        self.court.unwrap_or(0)
    }

    /// The side `player_id` plays on. None if on neither team, or (malformed) on both.
    pub fn side_of(&self, player_id: &str) -> Option<Side> {
        let in_a = self.team_a.iter().any(|p| p == player_id);
        let in_b = self.team_b.iter().any(|p| p == player_id);
        match (in_a, in_b) {
            (true, false) => Some(Side::A),
            (false, true) => Some(Side::B),
            _ => None,
        }
    }

    /// Unique participant ids, team A first, in team order.
    pub fn participants(&self) -> Vec<&PlayerId> {
        let mut seen: Vec<&PlayerId> = Vec::with_capacity(self.team_a.len() + self.team_b.len());
        for id in self.team_a.iter().chain(self.team_b.iter()) {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        seen
    }

    /// Both scores as valid non-negative integers: the numeric fields when both are
    /// present, otherwise parsed from the legacy `"A-B"` string.
    pub fn resolved_scores(&self) -> Option<(u32, u32)> {
        if let (Some(a), Some(b)) = (self.score_a, self.score_b) {
            return Some((a, b));
        }
        self.score_text.as_deref().and_then(parse_score_text)
    }

    /// Scores for a scoreboard: like [`resolved_scores`](Self::resolved_scores) but
    /// anything missing is 0.
    pub fn board_scores(&self) -> (u32, u32) {
        self.resolved_scores()
            .unwrap_or((self.score_a.unwrap_or(0), self.score_b.unwrap_or(0)))
    }

    /// Finished for display purposes (completed flag, or a terminal status).
    pub fn is_finished(&self) -> bool {
        self.is_completed || matches!(self.status, MatchStatus::Completed | MatchStatus::Walkover)
    }
}

/// Parse `"11-9"` into `(11, 9)`. Each side takes its leading digits after
/// whitespace, so `" 11 - 9 "` parses too; a side without digits fails.
pub fn parse_score_text(text: &str) -> Option<(u32, u32)> {
    let (a, b) = text.split_once('-')?;
    Some((leading_int(a)?, leading_int(b)?))
}

fn leading_int(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

/// Match as stored, under either naming convention.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMatch {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    team_a: Option<Vec<PlayerId>>,
    #[serde(default)]
    team_b: Option<Vec<PlayerId>>,
    #[serde(default)]
    team1: Option<Vec<PlayerId>>,
    #[serde(default)]
    team2: Option<Vec<PlayerId>>,
    #[serde(default)]
    score_a: Option<Value>,
    #[serde(default)]
    score_b: Option<Value>,
    #[serde(default)]
    score: Option<Value>,
    #[serde(default)]
    is_completed: Option<bool>,
    #[serde(default)]
    status: Option<MatchStatus>,
    #[serde(default)]
    is_forfeit: Option<bool>,
    #[serde(default)]
    no_show_player_ids: Option<Vec<PlayerId>>,
    #[serde(default)]
    court_id: Option<Value>,
    #[serde(default)]
    court: Option<Value>,
    #[serde(default)]
    round: Option<Value>,
    #[serde(default)]
    order_index: Option<Value>,
}

impl From<RawMatch> for LeagueMatch {
    fn from(raw: RawMatch) -> Self {
        let id = match raw.id {
            Some(Value::String(s)) if !s.is_empty() => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => Uuid::new_v4().to_string(),
        };
        let court = lenient_u32(raw.court_id.as_ref())
            .filter(|c| *c != 0)
            .or_else(|| lenient_u32(raw.court.as_ref()));
        let score_text = match raw.score {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };

        Self {
            id,
            team_a: raw.team_a.or(raw.team1).unwrap_or_default(),
            team_b: raw.team_b.or(raw.team2).unwrap_or_default(),
            score_a: lenient_u32(raw.score_a.as_ref()),
            score_b: lenient_u32(raw.score_b.as_ref()),
            score_text,
            is_completed: raw.is_completed.unwrap_or(false),
            status: raw.status.unwrap_or_default(),
            is_forfeit: raw.is_forfeit.unwrap_or(false),
            no_show_player_ids: raw.no_show_player_ids.unwrap_or_default(),
            court,
            round: lenient_u32(raw.round.as_ref()),
            order_index: lenient_u32(raw.order_index.as_ref()),
        }
    }
}

/// A non-negative integer from a JSON number (integral floats included) or numeric string.
fn lenient_u32(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()).or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                .map(|f| f as u32)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
