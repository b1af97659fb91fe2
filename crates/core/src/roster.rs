//! Client-side roster state.
//!
//! Dashboard views hold an in-memory roster populated once from the listing
//! endpoint and kept current by merging live check-in events. The merge,
//! filtering, and statistics below are pure functions so any UI layer can
//! drive them.

use serde::{Deserialize, Serialize};

use crate::{DbId, Timestamp};

/// A participant as held in a dashboard's local roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(rename = "regId")]
    pub reg_id: String,
    #[serde(rename = "checkedInAt")]
    pub checked_in_at: Option<Timestamp>,
}

impl RosterEntry {
    pub fn is_present(&self) -> bool {
        self.checked_in_at.is_some()
    }
}

/// Presence filter applied on top of the free-text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Present,
    Absent,
}

/// Merge an incoming live update into the roster.
///
/// If the id is already known the entry is replaced in place (no duplicate
/// rows); otherwise the update is prepended as the newest entry.
pub fn merge_update(roster: &mut Vec<RosterEntry>, incoming: RosterEntry) {
    match roster.iter_mut().find(|e| e.id == incoming.id) {
        Some(slot) => *slot = incoming,
        None => roster.insert(0, incoming),
    }
}

/// Filter the roster by a case-insensitive substring search on name, email,
/// or registration code, intersected with a presence filter.
pub fn filter_roster<'a>(
    roster: &'a [RosterEntry],
    search: &str,
    status: StatusFilter,
) -> Vec<&'a RosterEntry> {
    let needle = search.to_lowercase();
    roster
        .iter()
        .filter(|e| {
            let matches_search = needle.is_empty()
                || e.name.to_lowercase().contains(&needle)
                || e.email.to_lowercase().contains(&needle)
                || e.reg_id.to_lowercase().contains(&needle);
            let matches_status = match status {
                StatusFilter::All => true,
                StatusFilter::Present => e.is_present(),
                StatusFilter::Absent => !e.is_present(),
            };
            matches_search && matches_status
        })
        .collect()
}

/// Aggregate roster counts for the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RosterStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    /// Percentage present, rounded to the nearest integer. Zero for an
    /// empty roster.
    pub present_rate: u32,
}

pub fn roster_stats(roster: &[RosterEntry]) -> RosterStats {
    let total = roster.len();
    let present = roster.iter().filter(|e| e.is_present()).count();
    let present_rate = if total == 0 {
        0
    } else {
        ((present as f64 / total as f64) * 100.0).round() as u32
    };
    RosterStats {
        total,
        present,
        absent: total - present,
        present_rate,
    }
}
