//! Data structures for the Saga league: players, matches, days, standings.

mod game;
mod league;
mod player;
mod standing;

pub use game::{parse_score_text, LeagueMatch, MatchId, MatchStatus, Side};
pub use league::{DayStatus, League, LeagueDay};
pub use player::{format_id_to_name, Player, PlayerDirectory, PlayerId};
pub use standing::{LeagueStanding, LeagueSummary, MatchAward};
