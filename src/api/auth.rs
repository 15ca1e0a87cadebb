use crate::api::client::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::session::AuthSession;
use chrono::Local;
use serde_json::json;

/// `POST /api/auth/sign_in`. A response without token/client_id/login is
/// an incomplete login and is surfaced immediately, never retried.
pub async fn sign_in(
    client: &ApiClient,
    email: &str,
    password: &str,
    device_uuid: String,
) -> AppResult<AuthSession> {
    let body = json!({ "login": email.trim(), "password": password });
    let res = client.post("/api/auth/sign_in", body).await?;
    let data = res.json()?;

    let token = data.get("token").and_then(|v| v.as_str());
    let client_id = data.get("client_id").and_then(|v| v.as_str());
    let (Some(token), Some(client_id)) = (token, client_id) else {
        return Err(AppError::AuthIncomplete);
    };

    let uid = data
        .pointer("/data/login")
        .and_then(|v| v.as_str())
        .unwrap_or(email.trim());
    if token.is_empty() || client_id.is_empty() || uid.is_empty() {
        return Err(AppError::AuthIncomplete);
    }

    Ok(AuthSession {
        token: token.to_string(),
        client: client_id.to_string(),
        uid: uid.to_string(),
        sign_in_count: data
            .pointer("/data/sign_in_count")
            .and_then(|v| v.as_i64())
            .unwrap_or(0),
        last_sign_in_ip: data
            .pointer("/data/last_sign_in_ip")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
        last_sign_in_at: data
            .pointer("/data/last_sign_in_at")
            .and_then(|v| v.as_i64())
            .unwrap_or_else(|| Local::now().timestamp()),
        device_uuid,
    })
}
