use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use rponto::core::calculator::{HOUR_MS, expected, limit, worked};
use rponto::models::punch::PunchEvent;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 27).unwrap()
}

fn at(h: u32, m: u32) -> DateTime<Local> {
    day()
        .and_hms_opt(h, m, 0)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
}

fn ev(h: u32, m: u32) -> PunchEvent {
    PunchEvent::new(day(), NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

// ---------------------------------------------------------------
// worked_duration
// ---------------------------------------------------------------

#[test]
fn worked_is_zero_without_events() {
    assert_eq!(worked::worked_duration(&[], at(12, 0)), 0);
}

#[test]
fn worked_sums_closed_pairs() {
    let events = vec![ev(9, 0), ev(12, 0), ev(13, 0), ev(15, 30)];
    assert_eq!(
        worked::worked_duration(&events, at(18, 0)),
        3 * HOUR_MS + 2 * HOUR_MS + HOUR_MS / 2
    );
}

#[test]
fn worked_open_pair_counts_up_to_now() {
    let events = vec![ev(9, 0)];
    assert_eq!(worked::worked_duration(&events, at(10, 0)), HOUR_MS);
}

#[test]
fn worked_is_monotonic_while_clocked_in() {
    let events = vec![ev(9, 0), ev(12, 0), ev(13, 0)];
    let mut previous = 0;
    for minute in 0..120 {
        let now = at(13, 0) + chrono::Duration::minutes(minute);
        let current = worked::worked_duration(&events, now);
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn worked_ignores_inverted_intervals() {
    // out-of-order garbage contributes nothing, it never goes negative
    let events = vec![ev(12, 0), ev(9, 0)];
    assert_eq!(worked::worked_duration(&events, at(18, 0)), 0);
}

// ---------------------------------------------------------------
// expected_end
// ---------------------------------------------------------------

#[test]
fn expected_is_none_when_empty_or_clocked_out() {
    assert!(expected::expected_end(&[], 8, at(12, 0)).is_none());
    let clocked_out = vec![ev(9, 0), ev(12, 0)];
    assert!(expected::expected_end(&clocked_out, 8, at(12, 30)).is_none());
}

#[test]
fn expected_single_clock_in_includes_mandatory_break() {
    // no break taken yet: 8h of work plus the 1h mandatory break
    let events = vec![ev(9, 0)];
    assert_eq!(
        expected::expected_end(&events, 8, at(9, 0)),
        Some(at(18, 0))
    );
}

#[test]
fn expected_hour_long_break_discharges_the_rule() {
    // 09:00–12:00 worked, 12:00–13:00 break (exactly 1h), back at 13:00
    let events = vec![ev(9, 0), ev(12, 0), ev(13, 0)];
    assert_eq!(
        expected::expected_end(&events, 8, at(13, 0)),
        Some(at(18, 0))
    );
}

#[test]
fn expected_short_break_adds_the_missing_hour() {
    // a 15-minute break does not discharge the requirement
    let events = vec![ev(9, 0), ev(12, 0), ev(12, 15)];
    assert_eq!(
        expected::expected_end(&events, 8, at(12, 15)),
        Some(at(18, 15))
    );
}

#[test]
fn expected_returns_now_once_target_is_met() {
    let events = vec![ev(6, 0)];
    // 9h worked by 15:00, target 8h
    assert_eq!(
        expected::expected_end(&events, 8, at(15, 0)),
        Some(at(15, 0))
    );
}

#[test]
fn expected_reduced_target_applies() {
    let events = vec![ev(9, 0)];
    assert_eq!(expected::expected_end(&events, 6, at(9, 0)), Some(at(16, 0)));
}

// ---------------------------------------------------------------
// overtime_limit
// ---------------------------------------------------------------

#[test]
fn limit_standard_takes_the_earliest_candidate() {
    // last punch 13:00, 9h worked at 18:00:
    // L1 = 19:00, L2 = 18:00 + 1h = 19:00, L3 = 22:00
    let events = vec![ev(13, 0)];
    let result = limit::overtime_limit(&events, 9 * HOUR_MS, true, None, at(18, 0));
    assert_eq!(result, Some(at(19, 0)));
}

#[test]
fn limit_night_shift_threshold_wins_late_in_the_day() {
    // last punch 17:00 with barely any work: 22:00 comes first
    let events = vec![ev(17, 0)];
    let result = limit::overtime_limit(&events, HOUR_MS, true, None, at(17, 30));
    assert_eq!(result, Some(at(22, 0)));
}

#[test]
fn limit_reduced_regime_passes_expected_end_through() {
    let events = vec![ev(9, 0)];
    let expected_end = Some(at(15, 0));
    assert_eq!(
        limit::overtime_limit(&events, HOUR_MS, false, expected_end, at(10, 0)),
        expected_end
    );
    assert_eq!(
        limit::overtime_limit(&events, HOUR_MS, false, None, at(10, 0)),
        None
    );
}

#[test]
fn limit_is_none_without_events() {
    assert_eq!(limit::overtime_limit(&[], 0, true, None, at(10, 0)), None);
}

#[test]
fn limit_past_daily_cap_is_returned_as_is() {
    // 11h already worked: the 10h-cap candidate sits in the past and
    // still wins the minimum; flagging "already in overtime" is the
    // caller's job
    let events = vec![ev(16, 0)];
    let result = limit::overtime_limit(&events, 11 * HOUR_MS, true, None, at(18, 0));
    assert_eq!(result, Some(at(17, 0)));
}
