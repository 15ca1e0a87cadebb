use crate::api::client::{ApiClient, ApiRequest, Method};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::location::PunchLocation;
use crate::models::session::{AuthSession, SessionInfo};
use serde_json::{Value, json};

/// The vendor only accepts register calls claiming its own web origin.
/// Calling it directly, the client sets these headers itself; through the
/// relay proxy they are injected server-side instead.
const VENDOR_ORIGIN: &str = "https://app2.pontomais.com.br";

#[derive(Debug, Clone, Copy)]
pub struct RegisterOutcome {
    pub status: u16,
    /// 202: the server accepted the write asynchronously and subsequent
    /// GETs may not reflect it yet.
    pub accepted_async: bool,
}

/// `POST /api/time_cards/register`, either directly against the vendor
/// or through the configured CORS-relay proxy (a blind forwarder; status
/// and body are relayed verbatim, so it is a drop-in replacement).
pub async fn register_punch(
    client: &ApiClient,
    cfg: &Config,
    info: &SessionInfo,
    location: &PunchLocation,
) -> AppResult<RegisterOutcome> {
    let auth = client.auth().ok_or(AppError::MissingSession)?;
    let payload = build_payload(auth, info, location);

    let mut headers = vec![
        ("client".to_string(), auth.client.clone()),
        ("access-token".to_string(), auth.token.clone()),
        ("token".to_string(), auth.token.clone()),
        ("uid".to_string(), auth.uid.clone()),
        ("uuid".to_string(), auth.device_uuid.clone()),
        ("content-type".to_string(), "application/json".to_string()),
    ];

    let url = if cfg.use_proxy && !cfg.proxy_url.is_empty() {
        cfg.proxy_url.clone()
    } else {
        headers.push(("origin".to_string(), VENDOR_ORIGIN.to_string()));
        headers.push(("referer".to_string(), format!("{VENDOR_ORIGIN}/")));
        format!(
            "{}/api/time_cards/register",
            cfg.api_base.trim_end_matches('/')
        )
    };

    let res = client
        .send_raw(ApiRequest {
            method: Method::Post,
            url,
            headers,
            body: Some(payload),
        })
        .await?;

    Ok(RegisterOutcome {
        status: res.status,
        accepted_async: res.accepted_async(),
    })
}

/// The vendor validates the whole app-shaped payload, not just the time
/// card: the employee object is echoed back verbatim and the device
/// block repeats the login response under `uuid`.
fn build_payload(auth: &AuthSession, info: &SessionInfo, location: &PunchLocation) -> Value {
    let employee = if info.employee_raw.is_null() {
        json!({ "id": info.employee_id, "pin": null })
    } else {
        info.employee_raw.clone()
    };

    json!({
        "image": null,
        "employee": employee,
        "time_card": {
            "latitude": location.latitude,
            "longitude": location.longitude,
            "address": location.address,
            "reference_id": location.reference_id,
            "original_latitude": location.original_latitude,
            "original_longitude": location.original_longitude,
            "original_address": location.original_address,
            "location_edited": location.location_edited,
            "accuracy": location.accuracy,
            "accuracy_method": location.accuracy_method,
            "image": null
        },
        "_path": "/registrar-ponto",
        "_appVersion": "0.10.32",
        "_device": {
            "browser": {
                "name": "chrome",
                "version": "138.0.0.0",
                "versionSearchString": "chrome"
            },
            "manufacturer": "null",
            "model": "null",
            "uuid": {
                "success": "Login efetuado com sucesso!",
                "token": auth.token,
                "client_id": auth.client,
                "data": {
                    "login": auth.uid,
                    "sign_in_count": auth.sign_in_count,
                    "last_sign_in_ip": auth.last_sign_in_ip,
                    "last_sign_in_at": auth.last_sign_in_at
                },
                "uuid": auth.device_uuid,
                "authorization": ""
            },
            "version": "null"
        }
    })
}
