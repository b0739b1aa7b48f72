//! Player roster entries and the id -> display name directory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique identifier for a player (used in teams, no-show lists and lookups).
pub type PlayerId = String;

/// A player on the league roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "RosterEntry")]
pub struct Player {
    pub id: PlayerId,
    /// Display-only. Absent names fall back to the id.
    pub name: Option<String>,
}

/// Roster rows come either as bare id strings or as `{id, name}` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum RosterEntry {
    Id(String),
    Full {
        #[serde(default)]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<RosterEntry> for Player {
    fn from(entry: RosterEntry) -> Self {
        match entry {
            RosterEntry::Id(id) => Player { id, name: None },
            RosterEntry::Full { id, name } => Player { id, name },
        }
    }
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Name for display; the id when no (non-blank) name is known.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.id,
        }
    }
}

/// Lookup from player id to display name, built from a roster.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlayerDirectory {
    names: BTreeMap<PlayerId, String>,
}

impl PlayerDirectory {
    /// Only roster entries with a non-blank name are recorded.
    pub fn from_roster(players: &[Player]) -> Self {
        let names = players
            .iter()
            .filter(|p| !p.id.is_empty())
            .filter_map(|p| {
                p.name
                    .as_ref()
                    .filter(|n| !n.trim().is_empty())
                    .map(|n| (p.id.clone(), n.clone()))
            })
            .collect();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Directory name, or a name derived from the id (see [`format_id_to_name`]).
    pub fn name_of(&self, id: &str) -> String {
        match self.names.get(id) {
            Some(name) => name.clone(),
            None => format_id_to_name(id),
        }
    }
}

/// Turn an id like `p_goku_black` into `Goku Black`: strip a leading `p_`
/// (any case), underscores become spaces, then title-case each word.
pub fn format_id_to_name(id: &str) -> String {
    let stripped = match id.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("p_") => &id[2..],
        _ => id,
    };
    let lowered = stripped.replace('_', " ").to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut at_word_start = true;
    for c in lowered.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
