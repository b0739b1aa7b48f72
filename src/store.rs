//! League store snapshots: the JSON document the remote store hands out.

use crate::models::{League, Player};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::path::Path;

/// Errors reading or decoding a store snapshot.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    Io(std::io::Error),
    /// The snapshot is not valid JSON, or not shaped like a league payload.
    Json(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Snapshot I/O failed: {}", e),
            StoreError::Json(e) => write!(f, "Invalid snapshot JSON: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

/// Full store snapshot: the active league plus display metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePayload {
    #[serde(default)]
    pub active_league: Option<League>,
    /// Player directory. Falls back to the league roster when empty.
    #[serde(default)]
    pub players: Option<Vec<Player>>,
    #[serde(default)]
    pub saga_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub day: Option<u32>,
    #[serde(default)]
    pub current_day: Option<u32>,
}

impl StorePayload {
    pub fn from_league(league: League) -> Self {
        Self {
            active_league: Some(league),
            ..Self::default()
        }
    }

    /// Roster used for player names.
    pub fn roster(&self) -> &[Player] {
        match self.players.as_deref() {
            Some(players) if !players.is_empty() => players,
            _ => self
                .active_league
                .as_ref()
                .map(|l| l.players.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// League to compute standings on. A league without its own roster borrows
    /// the directory's, so every known player gets a row.
    pub fn league(&self) -> Cow<'_, League> {
        match &self.active_league {
            Some(league) if !league.players.is_empty() => Cow::Borrowed(league),
            Some(league) => Cow::Owned(League {
                players: self.roster().to_vec(),
                ..league.clone()
            }),
            None => Cow::Owned(League::new(self.roster().to_vec(), Vec::new())),
        }
    }
}

/// Decode a snapshot body. Empty bodies and `null` give `None`; the store's
/// `{"success": true, "data": {...}}` wrapper is unwrapped.
pub fn parse_store_payload(text: &str) -> Result<Option<StorePayload>, StoreError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let mut value: Value = serde_json::from_str(text)?;
    if value.get("success").and_then(Value::as_bool) == Some(true) {
        let data = value.get_mut("data").map(Value::take);
        if let Some(data) = data.filter(|d| !d.is_null()) {
            value = data;
        }
    }
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

/// Read and decode a snapshot file.
pub async fn load_store_payload(path: &Path) -> Result<Option<StorePayload>, StoreError> {
    let text = tokio::fs::read_to_string(path).await?;
    parse_store_payload(&text)
}

/// Write a snapshot file (pretty JSON).
pub async fn save_store_payload(path: &Path, payload: &StorePayload) -> Result<(), StoreError> {
    let text = serde_json::to_string_pretty(payload)?;
    tokio::fs::write(path, text).await?;
    Ok(())
}
