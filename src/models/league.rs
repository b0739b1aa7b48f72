//! League and Day: the snapshot the engine reads.

use crate::models::game::LeagueMatch;
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Whether a league day is still being played.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    #[default]
    Generated,
    Completed,
    /// Any other status the store sends. Treated as still open.
    #[serde(other)]
    Unknown,
}

/// One league day (session): its matches and who showed up.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDay {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<LeagueMatch>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: DayStatus,
    /// Player ids checked in for the day.
    #[serde(default, deserialize_with = "null_as_default")]
    pub attendees: Vec<PlayerId>,
}

impl LeagueDay {
    pub fn new(matches: Vec<LeagueMatch>) -> Self {
        Self {
            matches,
            ..Self::default()
        }
    }

    /// A day is complete when it has at least one match and all are completed.
    pub fn all_matches_completed(&self) -> bool {
        !self.matches.is_empty() && self.matches.iter().all(|m| m.is_completed)
    }
}

/// A league: roster plus ordered days.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<Player>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: Vec<LeagueDay>,
    #[serde(default)]
    pub current_day: Option<u32>,
}

impl League {
    pub fn new(players: Vec<Player>, days: Vec<LeagueDay>) -> Self {
        Self {
            players,
            days,
            ..Self::default()
        }
    }

    /// Every match of every day, in day order.
    pub fn matches(&self) -> impl Iterator<Item = &LeagueMatch> {
        self.days.iter().flat_map(|d| d.matches.iter())
    }
}

/// The store sometimes writes `null` where a list is expected.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
