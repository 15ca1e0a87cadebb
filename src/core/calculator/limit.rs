use super::HOUR_MS;
use crate::models::punch::PunchEvent;
use crate::utils::time::today_at;
use chrono::{DateTime, Duration, Local};

/// Hour after which worked time falls under the night-shift premium.
pub const NIGHT_SHIFT_HOUR: u32 = 22;

/// Earliest wall-clock time after which continued work counts as
/// overtime, for the standard regime the minimum of:
///
///   L1 — last punch + 6h (no single stretch may exceed 6h),
///   L2 — now + (10h − worked) (absolute daily cap),
///   L3 — today at 22:00 (night-shift threshold).
///
/// The reduced regime has no separate overtime rule: the expected end is
/// passed through unchanged. With worked time already past 10h, L2 lies
/// in the past and is still returned; recognizing a past limit as
/// "already in overtime" is the caller's concern.
pub fn overtime_limit(
    events: &[PunchEvent],
    worked_ms: i64,
    standard_regime: bool,
    expected_end: Option<DateTime<Local>>,
    now: DateTime<Local>,
) -> Option<DateTime<Local>> {
    if !standard_regime {
        return expected_end;
    }

    let last = events.last()?.timestamp();

    let stretch_limit = last + Duration::milliseconds(6 * HOUR_MS);
    let daily_cap = now + Duration::milliseconds(10 * HOUR_MS - worked_ms);
    let night_shift = today_at(now, NIGHT_SHIFT_HOUR, 0);

    Some(stretch_limit.min(daily_cap).min(night_shift))
}
