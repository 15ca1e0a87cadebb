use super::punch::PunchEvent;
use chrono::{DateTime, Local};

/// Engine output for one refresh cycle, computed against a single fixed
/// "now". `None` projections mean the input state does not permit one,
/// not an error.
#[derive(Debug, Default, Clone)]
pub struct DaySummary {
    pub punches: Vec<PunchEvent>,
    pub worked_ms: i64,
    pub expected_end: Option<DateTime<Local>>,
    pub overtime_limit: Option<DateTime<Local>>,
}
