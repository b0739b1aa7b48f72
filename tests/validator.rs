//! Integration tests for match validation and the DBZ points law.

use saga_standings::{points_for, LeagueMatch, MatchStatus};

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Completed doubles match: a1/a2 vs b1/b2.
fn doubles(score_a: u32, score_b: u32) -> LeagueMatch {
    LeagueMatch::new(ids(&["a1", "a2"]), ids(&["b1", "b2"]))
        .with_score(score_a, score_b)
        .completed()
}

#[test]
fn bagel_win_earns_four_and_bageled_side_zero() {
    let m = doubles(11, 0);
    for p in ["a1", "a2"] {
        let award = points_for(p, &m).unwrap();
        assert_eq!(award.points_earned, 4);
        assert!(award.is_win);
        assert!(award.is_bagel);
        assert!(!award.is_close_loss);
    }
    for p in ["b1", "b2"] {
        let award = points_for(p, &m).unwrap();
        assert_eq!(award.points_earned, 0);
        assert!(!award.is_win);
        assert!(!award.is_bagel);
    }
}

#[test]
fn close_loss_earns_bonus_point() {
    let m = doubles(11, 10);
    let winner = points_for("a1", &m).unwrap();
    assert_eq!(winner.points_earned, 3);
    assert!(!winner.is_bagel);

    let loser = points_for("b2", &m).unwrap();
    assert_eq!(loser.points_earned, 2);
    assert!(loser.is_close_loss);
    assert!(!loser.is_win);
}

#[test]
fn ordinary_result_is_three_and_one() {
    let m = doubles(6, 11);
    assert_eq!(points_for("b1", &m).unwrap().points_earned, 3);
    assert_eq!(points_for("a1", &m).unwrap().points_earned, 1);
    assert!(!points_for("a1", &m).unwrap().is_close_loss);
}

#[test]
fn award_carries_player_id() {
    let m = doubles(11, 4);
    assert_eq!(points_for("a2", &m).unwrap().player_id, "a2");
}

#[test]
fn exactly_one_side_wins_when_scores_differ() {
    for (a, b) in [(11, 0), (11, 9), (3, 11), (15, 13), (0, 1)] {
        let m = doubles(a, b);
        let a_wins = points_for("a1", &m).unwrap().is_win;
        let b_wins = points_for("b1", &m).unwrap().is_win;
        assert!(a_wins ^ b_wins, "score {a}-{b}");
        assert_eq!(a_wins, points_for("a2", &m).unwrap().is_win);
        assert_eq!(b_wins, points_for("b2", &m).unwrap().is_win);
    }
}

#[test]
fn equal_scores_leave_both_sides_non_winners() {
    let m = doubles(7, 7);
    for p in ["a1", "a2", "b1", "b2"] {
        let award = points_for(p, &m).unwrap();
        assert!(!award.is_win);
        assert!(!award.is_bagel);
        assert_eq!(award.points_earned, 1);
    }

    let high = doubles(10, 10);
    let award = points_for("b1", &high).unwrap();
    assert!(award.is_close_loss);
    assert_eq!(award.points_earned, 2);

    let nil = doubles(0, 0);
    assert_eq!(points_for("a1", &nil).unwrap().points_earned, 0);
    assert!(!points_for("a1", &nil).unwrap().is_bagel);
}

#[test]
fn unfinished_match_does_not_count() {
    let not_flagged = LeagueMatch::new(ids(&["a1"]), ids(&["b1"]))
        .with_score(11, 3)
        .with_status(MatchStatus::Completed);
    assert!(points_for("a1", &not_flagged).is_none());

    let mut flagged_but_live = doubles(11, 3);
    flagged_but_live.status = MatchStatus::Live;
    assert!(points_for("a1", &flagged_but_live).is_none());
}

#[test]
fn walkover_and_cancelled_do_not_count() {
    for status in [MatchStatus::Walkover, MatchStatus::Cancelled, MatchStatus::Unknown] {
        let m = doubles(11, 0).with_status(status);
        assert!(points_for("a1", &m).is_none());
        assert!(points_for("b1", &m).is_none());
    }
}

#[test]
fn forfeit_does_not_count() {
    let mut m = doubles(11, 0);
    m.is_forfeit = true;
    assert!(points_for("a1", &m).is_none());
    assert!(points_for("b1", &m).is_none());
}

#[test]
fn no_show_voids_match_for_everyone() {
    let mut m = doubles(11, 5);
    m.no_show_player_ids = ids(&["a1"]);
    for p in ["a1", "a2", "b1", "b2"] {
        assert!(points_for(p, &m).is_none(), "{p} should get nothing");
    }
}

#[test]
fn legacy_score_string_is_used_when_numbers_missing() {
    let mut m = LeagueMatch::new(ids(&["a1"]), ids(&["b1"])).completed();
    m.score_text = Some("9-11".to_string());
    assert_eq!(points_for("b1", &m).unwrap().points_earned, 3);
    assert_eq!(points_for("a1", &m).unwrap().points_earned, 1);

    // One numeric score alone is not enough; the string wins.
    m.score_a = Some(4);
    assert_eq!(points_for("b1", &m).unwrap().points_earned, 3);
}

#[test]
fn unresolvable_score_voids_match() {
    let missing = LeagueMatch::new(ids(&["a1"]), ids(&["b1"])).completed();
    assert!(points_for("a1", &missing).is_none());

    let mut garbage = missing.clone();
    garbage.score_text = Some("abc".to_string());
    assert!(points_for("a1", &garbage).is_none());
    assert!(points_for("b1", &garbage).is_none());

    let mut half = missing;
    half.score_text = Some("11-".to_string());
    assert!(points_for("a1", &half).is_none());
}

#[test]
fn player_must_be_on_exactly_one_team() {
    let m = doubles(11, 2);
    assert!(points_for("stranger", &m).is_none());

    let both = LeagueMatch::new(ids(&["a1", "x"]), ids(&["x", "b1"]))
        .with_score(11, 2)
        .completed();
    assert!(points_for("x", &both).is_none());
    assert!(points_for("a1", &both).is_some());
}
