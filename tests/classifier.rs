//! Integration tests for the court board: live vs queued, preview mode, current day.

use saga_standings::{
    classify, current_day, CourtStatus, DayStatus, League, LeagueDay, LeagueMatch, MatchBoard,
    MatchStatus,
};

fn pending(id: &str, court: u32) -> LeagueMatch {
    let mut m = LeagueMatch::new(vec![format!("{id}_a")], vec![format!("{id}_b")]).on_court(court);
    m.id = id.to_string();
    m
}

fn ids(board: &[saga_standings::ClassifiedMatch]) -> Vec<&str> {
    board.iter().map(|m| m.id.as_str()).collect()
}

#[test]
fn preview_mode_shows_one_match_per_court() {
    let day = LeagueDay::new(vec![pending("m2", 2), pending("m1", 1)]);
    let board = classify(&day);

    assert_eq!(ids(&board.active), vec!["m1", "m2"]);
    assert!(board.queued.is_empty());
    assert!(board.active.iter().all(|m| m.status == CourtStatus::Pending));
    assert!(board.active.iter().all(|m| m.score_a == 0 && m.score_b == 0));
}

#[test]
fn preview_mode_takes_next_in_queue_order_and_queues_the_rest() {
    let day = LeagueDay::new(vec![
        pending("c1_late", 1).with_order_index(4),
        pending("c1_next", 1).with_order_index(2),
        pending("c2_next", 2).with_order_index(1),
        pending("c3", 3).with_order_index(0),
    ]);
    let board = classify(&day);

    assert_eq!(ids(&board.active), vec!["c1_next", "c2_next"]);
    // Court 3 never gets a preview slot.
    assert_eq!(ids(&board.queued), vec!["c3", "c1_late"]);
}

#[test]
fn live_matches_take_priority_over_previews() {
    let day = LeagueDay::new(vec![
        pending("idle_c1", 1),
        pending("started_c2", 2).with_score(1, 0),
        pending("idle_c2", 2),
    ]);
    let board = classify(&day);

    assert_eq!(ids(&board.active), vec!["started_c2"]);
    assert_eq!(board.active[0].status, CourtStatus::Live);
    assert_eq!(board.active[0].score_a, 1);
    assert_eq!(ids(&board.queued), vec!["idle_c1", "idle_c2"]);
    assert!(board.queued.iter().all(|m| m.status == CourtStatus::Pending));
}

#[test]
fn explicit_live_status_counts_at_zero_zero() {
    let day = LeagueDay::new(vec![
        pending("flagged", 2).with_status(MatchStatus::Live),
        pending("waiting", 1),
    ]);
    let board = classify(&day);
    assert_eq!(ids(&board.active), vec!["flagged"]);
    assert_eq!(ids(&board.queued), vec!["waiting"]);
}

#[test]
fn all_live_matches_are_active_sorted_by_court() {
    let day = LeagueDay::new(vec![
        pending("c3", 3).with_score(2, 2),
        pending("c1", 1).with_score(0, 5),
        pending("c2", 2).with_status(MatchStatus::Live),
    ]);
    let board = classify(&day);
    assert_eq!(ids(&board.active), vec!["c1", "c2", "c3"]);
    assert!(board.queued.is_empty());
}

#[test]
fn finished_matches_are_left_out() {
    let mut flagged = pending("flagged", 1).with_score(11, 3);
    flagged.is_completed = true;
    let day = LeagueDay::new(vec![
        flagged,
        pending("walkover", 1).with_status(MatchStatus::Walkover),
        pending("done", 2).with_status(MatchStatus::Completed),
        pending("next", 2),
    ]);
    let board = classify(&day);
    assert_eq!(ids(&board.active), vec!["next"]);
    assert!(board.queued.is_empty());
}

#[test]
fn queue_orders_by_order_index_then_round_then_court() {
    let day = LeagueDay::new(vec![
        pending("live", 1).with_score(3, 1),
        pending("no_index", 1).in_round(1),
        pending("r2_c1", 1).with_order_index(5).in_round(2),
        pending("r1_c2", 2).with_order_index(5).in_round(1),
        pending("r1_c1", 1).with_order_index(5).in_round(1),
        pending("first", 2).with_order_index(0).in_round(9),
    ]);
    let board = classify(&day);
    assert_eq!(
        ids(&board.queued),
        vec!["first", "r1_c1", "r1_c2", "r2_c1", "no_index"]
    );
}

#[test]
fn unassigned_court_is_zero_and_never_previewed() {
    let mut m = LeagueMatch::new(vec!["a".to_string()], vec!["b".to_string()]);
    m.id = "floating".to_string();
    let board = classify(&LeagueDay::new(vec![m]));
    assert!(board.active.is_empty());
    assert_eq!(board.queued[0].court, 0);
}

#[test]
fn legacy_score_string_marks_match_live() {
    let mut m = pending("legacy", 2);
    m.score_text = Some("3-1".to_string());
    let board = classify(&LeagueDay::new(vec![m, pending("other", 1)]));
    assert_eq!(ids(&board.active), vec!["legacy"]);
    assert_eq!((board.active[0].score_a, board.active[0].score_b), (3, 1));
}

#[test]
fn classified_match_keeps_teams() {
    let board = classify(&LeagueDay::new(vec![pending("m", 1)]));
    assert_eq!(board.active[0].team1, vec!["m_a".to_string()]);
    assert_eq!(board.active[0].team2, vec!["m_b".to_string()]);
}

#[test]
fn empty_day_gives_empty_board() {
    assert_eq!(classify(&LeagueDay::default()), MatchBoard::default());
}

fn day_with_status(status: DayStatus, matches: Vec<LeagueMatch>) -> LeagueDay {
    LeagueDay {
        status,
        ..LeagueDay::new(matches)
    }
}

#[test]
fn current_day_is_first_open_day() {
    let done = pending("old", 1).with_score(11, 2).completed();
    let league = League::new(
        Vec::new(),
        vec![
            day_with_status(DayStatus::Completed, vec![done]),
            day_with_status(DayStatus::Generated, vec![pending("today", 1)]),
            day_with_status(DayStatus::Generated, vec![pending("later", 1)]),
        ],
    );
    let today = current_day(&league).unwrap();
    assert_eq!(today.index, 1);
    assert!(!today.is_complete);
    assert_eq!(today.day.matches[0].id, "today");
}

#[test]
fn open_day_with_every_match_done_is_complete() {
    let done = pending("a", 1).with_score(11, 2).completed();
    let league = League::new(Vec::new(), vec![day_with_status(DayStatus::Generated, vec![done])]);
    assert!(current_day(&league).unwrap().is_complete);

    let empty = League::new(Vec::new(), vec![day_with_status(DayStatus::Generated, Vec::new())]);
    assert!(!current_day(&empty).unwrap().is_complete);
}

#[test]
fn all_days_completed_falls_back_to_last_day() {
    let league = League::new(
        Vec::new(),
        vec![
            day_with_status(DayStatus::Completed, vec![pending("d1", 1)]),
            day_with_status(DayStatus::Completed, vec![pending("d2", 1)]),
        ],
    );
    let today = current_day(&league).unwrap();
    assert_eq!(today.index, 1);
    assert!(today.is_complete);
}

#[test]
fn league_without_days_has_no_current_day() {
    assert!(current_day(&League::default()).is_none());
}
