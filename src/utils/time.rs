//! Time utilities: parsing the vendor's dd/mm/yyyy + HH:MM formats,
//! wall-clock helpers for the engine, bank-expiration dates.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, Weekday};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Vendor dates come as "dd/mm/yyyy".
pub fn parse_dmy(d: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(d, "%d/%m/%Y").ok()
}

pub fn fmt_time(t: DateTime<Local>) -> String {
    t.format("%H:%M").to_string()
}

/// Today's date at the given wall-clock hour, e.g. the 22:00 night-shift
/// threshold. Falls back to `now` itself if the hour cannot be built
/// (never happens for 0..=23, but the engine must stay total).
pub fn today_at(now: DateTime<Local>, hour: u32, minute: u32) -> DateTime<Local> {
    now.date_naive()
        .and_hms_opt(hour, minute, 0)
        .and_then(|dt| dt.and_local_timezone(Local).earliest())
        .unwrap_or(now)
}

/// Next expiration date of the hour bank: last day of April, August or
/// December, rolled back to Friday when it lands on a weekend.
pub fn next_bank_expiration(today: NaiveDate) -> NaiveDate {
    let (target_year, target_month) = match today.month() {
        1..=3 => (today.year(), 4),
        4..=7 => (today.year(), 8),
        8..=11 => (today.year(), 12),
        _ => (today.year() + 1, 4),
    };

    let first_of_next = if target_month == 12 {
        NaiveDate::from_ymd_opt(target_year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(target_year, target_month + 1, 1)
    };
    let mut last_day = match first_of_next.and_then(|d| d.pred_opt()) {
        Some(d) => d,
        None => return today,
    };

    match last_day.weekday() {
        Weekday::Sun => {
            if let Some(d) = last_day.checked_sub_days(chrono::Days::new(2)) {
                last_day = d;
            }
        }
        Weekday::Sat => {
            if let Some(d) = last_day.checked_sub_days(chrono::Days::new(1)) {
                last_day = d;
            }
        }
        _ => {}
    }
    last_day
}
