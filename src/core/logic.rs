use crate::core::calculator::{expected, limit, worked};
use crate::models::classification::EmployeeClassification;
use crate::models::day_summary::DaySummary;
use crate::models::punch::PunchEvent;
use chrono::{DateTime, Local};

pub struct Core;

impl Core {
    /// One engine pass over the merged, time-ordered punch sequence.
    /// `now` is captured once by the caller so all three figures agree.
    pub fn build_day_summary(
        events: &[PunchEvent],
        classification: &EmployeeClassification,
        now: DateTime<Local>,
    ) -> DaySummary {
        let worked_ms = worked::worked_duration(events, now);
        let expected_end = expected::expected_end(events, classification.target_hours_per_day, now);
        let overtime_limit = limit::overtime_limit(
            events,
            worked_ms,
            classification.standard_regime,
            expected_end,
            now,
        );

        DaySummary {
            punches: events.to_vec(),
            worked_ms,
            expected_end,
            overtime_limit,
        }
    }
}
