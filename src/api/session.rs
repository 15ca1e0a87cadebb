use crate::api::client::ApiClient;
use crate::errors::AppResult;
use crate::models::classification::EmployeeClassification;
use crate::models::location::LocationReference;
use crate::models::session::SessionInfo;
use serde_json::Value;

pub async fn fetch_session(client: &ApiClient) -> AppResult<SessionInfo> {
    let res = client.get("/api/session").await?;
    Ok(parse_session(res.json()?))
}

/// Shape the vendor session payload into [`SessionInfo`]. The employee
/// block has moved around across vendor versions, so the extraction
/// probes the known spots instead of binding to one structure; anything
/// unknown falls back to a safe default (standard regime, empty fields).
pub fn parse_session(data: Value) -> SessionInfo {
    let sess = data.get("session").unwrap_or(&data);
    let employee = sess
        .get("employee")
        .or_else(|| sess.get("current_employee"))
        .or_else(|| sess.pointer("/user/employee"))
        .cloned()
        .unwrap_or(Value::Null);

    let classification = match employee.get("is_clt").and_then(|v| v.as_bool()) {
        Some(false) => EmployeeClassification::reduced(),
        _ => EmployeeClassification::standard(),
    };

    let employee_id = employee
        .get("id")
        .and_then(|v| v.as_i64())
        .or_else(|| employee.get("employee_id").and_then(|v| v.as_i64()));

    let time_balance_secs = employee
        .get("time_balance")
        .and_then(|v| v.as_i64())
        .or_else(|| employee.get("bank_balance").and_then(|v| v.as_i64()));

    let last_punch = {
        let ws = employee.get("work_status_time_card");
        let date = ws.and_then(|w| w.get("date")).and_then(|v| v.as_str());
        let time = ws.and_then(|w| w.get("time")).and_then(|v| v.as_str());
        match (date, time) {
            (Some(d), Some(t)) => Some((d.to_string(), t.to_string())),
            _ => None,
        }
    };

    let location_references = employee
        .get("location_references")
        .cloned()
        .and_then(|v| serde_json::from_value::<Vec<LocationReference>>(v).ok())
        .unwrap_or_default();

    SessionInfo {
        employee_id,
        classification,
        time_balance_secs,
        last_punch,
        location_references,
        employee_raw: employee,
    }
}
