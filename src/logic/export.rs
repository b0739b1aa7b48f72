//! Standings report export (CSV).

use crate::logic::view::ViewerSnapshot;
use serde::Serialize;
use std::io;

#[derive(Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "Rank")]
    rank: usize,
    #[serde(rename = "Fighter")]
    fighter: &'a str,
    #[serde(rename = "PPG")]
    ppg: String,
    #[serde(rename = "W-L")]
    record: String,
    #[serde(rename = "Matches")]
    matches: u32,
    #[serde(rename = "Total Points")]
    total_points: u32,
    #[serde(rename = "Eligible")]
    eligible: &'static str,
}

/// Write the full table, in ranking order, as CSV with a header row.
pub fn write_standings_report<W: io::Write>(writer: W, snapshot: &ViewerSnapshot) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for s in &snapshot.standings {
        wtr.serialize(ReportRow {
            rank: s.rank,
            fighter: &s.name,
            ppg: format!("{:.2}", s.ppg),
            record: format!("{}-{}", s.wins, s.losses),
            matches: s.played,
            total_points: s.points,
            eligible: if s.is_eligible { "yes" } else { "no" },
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// A player short of the 60% participation rule.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BelowThreshold {
    pub name: String,
    pub played: u32,
    pub required: u32,
}

/// Players not eligible for trophies, in ranking order.
pub fn below_threshold(snapshot: &ViewerSnapshot) -> Vec<BelowThreshold> {
    let required = snapshot.league_stats.min_required;
    snapshot
        .standings
        .iter()
        .filter(|s| !s.is_eligible)
        .map(|s| BelowThreshold {
            name: s.name.clone(),
            played: s.played,
            required,
        })
        .collect()
}
