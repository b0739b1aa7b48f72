//! Saga league standings: library with models, the standings engine and the viewer glue.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::{AccessMode, ConfigError, ServerConfig};
pub use logic::{
    below_threshold, build_viewer_snapshot, classify, compute_standings, current_day,
    league_summary, min_required_games, points_for, write_standings_report, BelowThreshold,
    ClassifiedMatch, CourtStatus, CurrentDay, MatchBoard, ViewerSnapshot, ViewerStanding,
};
pub use models::{
    format_id_to_name, parse_score_text, DayStatus, League, LeagueDay, LeagueMatch,
    LeagueStanding, LeagueSummary, MatchAward, MatchId, MatchStatus, Player, PlayerDirectory,
    PlayerId, Side,
};
pub use store::{load_store_payload, parse_store_payload, save_store_payload, StoreError, StorePayload};
