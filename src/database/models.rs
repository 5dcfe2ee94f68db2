//! Data models for expense records

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single spending record as persisted in the expenses store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Storage-assigned identifier, never reused
    pub id: i64,
    /// User-supplied label
    pub item: String,
    /// Amount as entered, in the display currency
    pub amount: f64,
    /// Creation time as an ISO-8601 string (e.g. `2024-12-05T09:30:00.000Z`)
    pub date: String,
}

impl Expense {
    /// Parse the stored creation date
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.date).ok()
    }

    /// Serialize to the persisted record layout `{id, item, amount, date}`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
