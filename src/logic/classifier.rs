//! Court board: split the current day's unfinished matches into live and queued.
//!
//! Once any match has a point on the board (or is flagged live by the scorer),
//! only real live matches are shown as active. While the whole day is still at
//! 0-0, the next match on each featured court is shown as a preview instead.

use crate::models::{DayStatus, League, LeagueDay, LeagueMatch, MatchId, MatchStatus, PlayerId};
use serde::{Deserialize, Serialize};

/// Courts that get a preview placeholder when nothing is live yet.
pub const PREVIEW_COURTS: [u32; 2] = [1, 2];

/// Queue position for matches without an explicit `orderIndex`.
pub const DEFAULT_ORDER_INDEX: u32 = 999;

/// Board status of an unfinished match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtStatus {
    Live,
    Pending,
}

/// An unfinished match, normalized for the board.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedMatch {
    pub id: MatchId,
    pub court: u32,
    pub team1: Vec<PlayerId>,
    pub team2: Vec<PlayerId>,
    pub score_a: u32,
    pub score_b: u32,
    pub round: Option<u32>,
    #[serde(skip)]
    order_index: Option<u32>,
    pub status: CourtStatus,
}

impl ClassifiedMatch {
    pub fn from_match(game: &LeagueMatch) -> Self {
        let (score_a, score_b) = game.board_scores();
        let status = if score_a > 0 || score_b > 0 || game.status == MatchStatus::Live {
            CourtStatus::Live
        } else {
            CourtStatus::Pending
        };
        Self {
            id: game.id.clone(),
            court: game.court(),
            team1: game.team_a.clone(),
            team2: game.team_b.clone(),
            score_a,
            score_b,
            round: game.round,
            order_index: game.order_index,
            status,
        }
    }

    fn queue_key(&self) -> (u32, u32, u32) {
        (
            self.order_index.unwrap_or(DEFAULT_ORDER_INDEX),
            self.round.unwrap_or(0),
            self.court,
        )
    }
}

/// What is on court now and what is waiting.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchBoard {
    /// Sorted by court.
    pub active: Vec<ClassifiedMatch>,
    /// Sorted by order index, round, court.
    pub queued: Vec<ClassifiedMatch>,
}

/// Classify one day's unfinished matches.
pub fn classify(day: &LeagueDay) -> MatchBoard {
    let (live, mut pending): (Vec<_>, Vec<_>) = day
        .matches
        .iter()
        .filter(|m| !m.is_finished())
        .map(ClassifiedMatch::from_match)
        .partition(|m| m.status == CourtStatus::Live);

    pending.sort_by_key(ClassifiedMatch::queue_key);

    let mut board = if !live.is_empty() {
        MatchBoard {
            active: live,
            queued: pending,
        }
    } else {
        preview_board(pending)
    };
    board.active.sort_by_key(|m| m.court);
    board
}

/// Nothing started yet: first queued match on each preview court becomes active.
fn preview_board(pending: Vec<ClassifiedMatch>) -> MatchBoard {
    let mut board = MatchBoard::default();
    for m in pending {
        let court_taken = board.active.iter().any(|a| a.court == m.court);
        if PREVIEW_COURTS.contains(&m.court) && !court_taken {
            board.active.push(m);
        } else {
            board.queued.push(m);
        }
    }
    board
}

/// The day currently being played.
#[derive(Clone, Copy, Debug)]
pub struct CurrentDay<'a> {
    pub index: usize,
    pub day: &'a LeagueDay,
    pub is_complete: bool,
}

/// First day not marked completed; if every day is completed, the last one
/// (flagged complete). None for a league with no days.
pub fn current_day(league: &League) -> Option<CurrentDay<'_>> {
    if let Some((index, day)) = league
        .days
        .iter()
        .enumerate()
        .find(|(_, d)| d.status != DayStatus::Completed)
    {
        return Some(CurrentDay {
            index,
            day,
            is_complete: day.all_matches_completed(),
        });
    }
    let index = league.days.len().checked_sub(1)?;
    Some(CurrentDay {
        index,
        day: &league.days[index],
        is_complete: true,
    })
}
