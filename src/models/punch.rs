use super::location::PunchLocation;
use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};
use serde::Serialize;

/// One clock-in/clock-out record for a calendar day.
///
/// The vendor carries date and wall-clock minute separately; together they
/// form a timestamp with 1-minute resolution. Within one day events are
/// totally ordered by timestamp and index parity decides the role:
/// even index = clock-in, odd index = clock-out. An odd total count means
/// the employee is still inside (open clock-in).
#[derive(Debug, Clone, Serialize)]
pub struct PunchEvent {
    pub date: NaiveDate, // ⇔ card.date ("dd/mm/yyyy" on the wire)
    pub time: NaiveTime, // ⇔ card.time ("HH:MM" on the wire)
    pub source_label: Option<String>,
    pub location: Option<PunchLocation>,
    /// Recorded locally but not yet confirmed by the server.
    pub pending: bool,
}

impl PunchEvent {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time,
            source_label: None,
            location: None,
            pending: false,
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        let dt = self.date.and_time(self.time);
        match dt.and_local_timezone(Local) {
            LocalResult::Single(t) => t,
            LocalResult::Ambiguous(t, _) => t,
            // a wall time skipped by DST falls back to its UTC reading
            LocalResult::None => Local.from_utc_datetime(&dt),
        }
    }

    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp().timestamp_millis()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
