use crate::models::punch::PunchEvent;
use chrono::{DateTime, Local};

/// Total worked milliseconds for the day, pairing events (0,1), (2,3), …
/// An open pair (odd total count, still clocked in) counts up to `now`.
/// Negative or inverted intervals contribute zero; the result is ≥ 0 and
/// non-decreasing as `now` advances while the sequence is unchanged.
pub fn worked_duration(events: &[PunchEvent], now: DateTime<Local>) -> i64 {
    let times: Vec<DateTime<Local>> = events.iter().map(|e| e.timestamp()).collect();
    let mut total = 0i64;
    let mut i = 0;
    while i < times.len() {
        let t_in = times[i];
        let t_out = if i + 1 < times.len() { times[i + 1] } else { now };
        if t_out > t_in {
            total += (t_out - t_in).num_milliseconds();
        }
        i += 2;
    }
    total
}
