use serde::Serialize;

/// Employee classification driving which labor-rule variant the engine
/// applies: standard regime targets 8h/day and is subject to the
/// 6h-stretch / 10h-cap / 22:00 overtime limits; the reduced regime
/// (e.g. interns) targets 6h/day with no separate overtime rule.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmployeeClassification {
    pub standard_regime: bool,
    pub target_hours_per_day: u32,
}

impl EmployeeClassification {
    pub fn standard() -> Self {
        Self {
            standard_regime: true,
            target_hours_per_day: 8,
        }
    }

    pub fn reduced() -> Self {
        Self {
            standard_regime: false,
            target_hours_per_day: 6,
        }
    }
}

impl Default for EmployeeClassification {
    // Unknown classification defaults to the more restrictive rule set.
    fn default() -> Self {
        Self::standard()
    }
}
