use super::{HOUR_MS, worked};
use crate::models::punch::PunchEvent;
use chrono::{DateTime, Duration, Local};

/// Mandatory unpaid break before a full shift counts as complete.
pub const MANDATORY_BREAK_MS: i64 = HOUR_MS;

/// Projected instant at which the day's worked time reaches the target.
///
/// No projection (None) when there are no events or the count is even:
/// the employee is clocked out and a re-entry time cannot be predicted.
///
/// Labor rule: at least one completed clock-out→clock-in gap of ≥60
/// minutes must exist; a shorter break does not discharge the
/// requirement, so the missing hour is added to the remaining time.
pub fn expected_end(
    events: &[PunchEvent],
    target_hours: u32,
    now: DateTime<Local>,
) -> Option<DateTime<Local>> {
    if events.is_empty() || events.len() % 2 == 0 {
        return None;
    }

    let times: Vec<DateTime<Local>> = events.iter().map(|e| e.timestamp()).collect();

    // Completed gaps are the pairs (1,2), (3,4), …
    let mut has_valid_break = false;
    let mut i = 1;
    while i + 1 < times.len() {
        let break_ms = (times[i + 1] - times[i]).num_milliseconds();
        if break_ms >= MANDATORY_BREAK_MS {
            has_valid_break = true;
            break;
        }
        i += 2;
    }
    let penalty = if has_valid_break {
        0
    } else {
        MANDATORY_BREAK_MS
    };

    let worked_ms = worked::worked_duration(events, now);
    let target_ms = i64::from(target_hours) * HOUR_MS;

    if worked_ms >= target_ms {
        return Some(now);
    }

    Some(now + Duration::milliseconds(target_ms - worked_ms + penalty))
}
