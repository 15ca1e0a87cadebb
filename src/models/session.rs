use super::classification::EmployeeClassification;
use super::location::LocationReference;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Authenticated vendor session. Created by login, persisted as JSON,
/// destroyed on logout. Required input for any authenticated API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub client: String,
    pub uid: String,
    #[serde(default)]
    pub sign_in_count: i64,
    #[serde(default)]
    pub last_sign_in_ip: String,
    #[serde(default)]
    pub last_sign_in_at: i64,
    /// Generated once per install and reused across logins; the vendor's
    /// register payload identifies the device by it.
    pub device_uuid: String,
}

/// What the session adapter extracts from `GET /api/session`.
#[derive(Debug, Clone, Default)]
pub struct SessionInfo {
    pub employee_id: Option<i64>,
    pub classification: EmployeeClassification,
    /// Accumulated time-bank balance, seconds (negative = owed).
    pub time_balance_secs: Option<i64>,
    /// Last punch as the vendor reports it: ("dd/mm/yyyy", "HH:MM").
    pub last_punch: Option<(String, String)>,
    pub location_references: Vec<LocationReference>,
    /// Raw vendor employee object, forwarded verbatim by the register
    /// payload (the vendor expects its own shape back).
    pub employee_raw: Value,
}
