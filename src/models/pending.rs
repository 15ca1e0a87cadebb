use super::location::PunchLocation;
use super::punch::PunchEvent;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A punch recorded locally after a successful register call but not yet
/// visible in the server's work-day record. Lives only in the pending
/// ledger file; owned exclusively by the reconciler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingPunch {
    /// Punch instant, epoch milliseconds.
    pub timestamp_ms: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: PunchLocation,
    /// When the entry was written, epoch milliseconds. Drives TTL eviction.
    pub created_at_ms: i64,
}

impl PendingPunch {
    pub fn recorded_at(now: DateTime<Local>, location: PunchLocation) -> Self {
        // punch timestamps carry 1-minute resolution; the ledger stores
        // the same so a same-minute server card confirms the entry
        let minute = now
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);
        Self {
            timestamp_ms: minute.timestamp_millis(),
            date: minute.date_naive(),
            time: minute.time(),
            location,
            created_at_ms: now.timestamp_millis(),
        }
    }

    pub fn to_event(&self) -> PunchEvent {
        PunchEvent {
            date: self.date,
            time: self.time,
            source_label: Some("App Web".to_string()),
            location: Some(self.location.clone()),
            pending: true,
        }
    }
}
