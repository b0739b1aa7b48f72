//! Display model for the broadcast viewer: standings with names, court board,
//! day status. Built fresh from a store snapshot on every call.

use crate::logic::classifier::{classify, current_day, ClassifiedMatch};
use crate::logic::standings::{compute_standings, league_summary};
use crate::models::{LeagueSummary, PlayerDirectory, PlayerId};
use crate::store::StorePayload;
use serde::Serialize;

const DEFAULT_SAGA_NAME: &str = "PBZ Saga";

/// A standings row ready for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerStanding {
    /// 1-based.
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub points: u32,
    pub wins: u32,
    pub losses: u32,
    pub played: u32,
    pub ppg: f64,
    pub bonus_points: u32,
    pub close_losses: u32,
    pub no_shows: u32,
    pub is_eligible: bool,
    /// Checked in for the current day.
    pub is_present: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerSnapshot {
    pub saga_name: String,
    pub day: u32,
    pub standings: Vec<ViewerStanding>,
    pub active_matches: Vec<ClassifiedMatch>,
    pub upcoming_matches: Vec<ClassifiedMatch>,
    pub player_names: PlayerDirectory,
    pub attendees: Vec<PlayerId>,
    pub is_day_complete: bool,
    pub league_stats: LeagueSummary,
}

pub fn build_viewer_snapshot(payload: &StorePayload) -> ViewerSnapshot {
    let directory = PlayerDirectory::from_roster(payload.roster());
    let league = payload.league();

    let table = compute_standings(&league);
    let league_stats = league_summary(&league, &table);

    let today = current_day(&league);
    let attendees: Vec<PlayerId> = today.map(|d| d.day.attendees.clone()).unwrap_or_default();
    let board = today.map(|d| classify(d.day)).unwrap_or_default();
    let is_day_complete = today.map(|d| d.is_complete).unwrap_or(false);

    let standings = table
        .into_iter()
        .enumerate()
        .map(|(i, s)| ViewerStanding {
            rank: i + 1,
            name: directory.name_of(&s.player_id),
            is_present: attendees.contains(&s.player_id),
            points: s.points,
            wins: s.wins,
            losses: s.losses,
            played: s.games_played,
            ppg: s.ppg,
            bonus_points: s.bonus_points,
            close_losses: s.close_losses,
            no_shows: s.no_shows,
            is_eligible: s.eligible_for_trophies,
            player_id: s.player_id,
        })
        .collect();

    let saga_name = league
        .name
        .clone()
        .or_else(|| payload.saga_name.clone())
        .or_else(|| payload.name.clone())
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SAGA_NAME.to_string());
    let day = league
        .current_day
        .or(payload.day)
        .or(payload.current_day)
        .unwrap_or(1);

    log::debug!(
        "viewer snapshot: {} players, {} active, {} queued",
        league_stats.players,
        board.active.len(),
        board.queued.len()
    );

    ViewerSnapshot {
        saga_name,
        day,
        standings,
        active_matches: board.active,
        upcoming_matches: board.queued,
        player_names: directory,
        attendees,
        is_day_complete,
        league_stats,
    }
}
