//! League logic: match validation, standings, court board, display model, report.

mod classifier;
mod export;
mod standings;
mod validator;
mod view;

pub use classifier::{
    classify, current_day, ClassifiedMatch, CourtStatus, CurrentDay, MatchBoard,
    DEFAULT_ORDER_INDEX, PREVIEW_COURTS,
};
pub use export::{below_threshold, write_standings_report, BelowThreshold};
pub use standings::{compute_standings, league_summary, min_required_games, rank_order, PPG_EPSILON};
pub use validator::{counts_for_standings, points_for};
pub use view::{build_viewer_snapshot, ViewerSnapshot, ViewerStanding};
