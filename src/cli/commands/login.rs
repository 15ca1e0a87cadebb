use crate::api::{self, client::ApiClient};
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::auth::AuthStore;
use crate::ui::messages;
use std::io::{self, Write};
use uuid::Uuid;

pub async fn handle(cfg: &Config, email: &str, password: Option<&str>) -> AppResult<()> {
    let password = match password {
        Some(p) => p.to_string(),
        None => prompt_password()?,
    };

    let store = AuthStore::new(Config::session_file());

    // The device identifier outlives individual logins.
    let device_uuid = store
        .load()
        .map(|s| s.device_uuid)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let client = ApiClient::new(cfg, None);
    let session = api::auth::sign_in(&client, email, &password, device_uuid).await?;
    store.save(&session)?;

    messages::success(format!("Logged in as {}", session.uid));
    Ok(())
}

fn prompt_password() -> AppResult<String> {
    print!("Password: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
