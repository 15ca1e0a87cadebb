use crate::api::{self, client::ApiClient};
use crate::cli::commands::status;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::location::PunchLocation;
use crate::models::pending::PendingPunch;
use crate::models::punch::PunchEvent;
use crate::models::session::SessionInfo;
use crate::store::auth::AuthStore;
use crate::store::ledger::PendingLedger;
use crate::ui::messages;
use chrono::Local;

pub struct PunchArgs {
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub last: bool,
    pub favorite: Option<usize>,
}

pub async fn handle(cfg: &Config, args: &PunchArgs) -> AppResult<()> {
    let auth = AuthStore::new(Config::session_file())
        .load()
        .ok_or(AppError::MissingSession)?;
    let client = ApiClient::new(cfg, Some(auth));

    let info = api::session::fetch_session(&client).await?;
    let today = Local::now().date_naive();
    let cards = api::workday::fetch_work_day(&client, today, info.employee_id).await?;

    let location = resolve_location(args, &info, &cards)?;

    messages::info(format!(
        "Registering punch at {}",
        if location.address.is_empty() {
            format!("{:.6}, {:.6}", location.latitude, location.longitude)
        } else {
            location.address.clone()
        }
    ));

    let outcome = api::register::register_punch(&client, cfg, &info, &location).await?;

    // Optimistic write: the ledger entry survives until the server
    // reflects the punch or the TTL expires.
    let now = Local::now();
    PendingLedger::new(Config::ledger_file()).append(PendingPunch::recorded_at(now, location))?;

    messages::success(format!("Punch registered (HTTP {})", outcome.status));
    if outcome.accepted_async {
        messages::info("Accepted asynchronously; the server may take a moment to reflect it");
    }

    println!();
    let (info, summary) = status::refresh(&client).await?;
    status::render(&info, &summary);
    Ok(())
}

/// Pick the punch location: explicit coordinates/address beat the
/// favorites, which beat the last registered punch's location. Without
/// a GPS reading there is no "current position" option.
fn resolve_location(
    args: &PunchArgs,
    info: &SessionInfo,
    cards: &[PunchEvent],
) -> AppResult<PunchLocation> {
    if let (Some(lat), Some(lng)) = (args.latitude, args.longitude) {
        return Ok(PunchLocation::manual(
            lat,
            lng,
            args.address.as_deref().unwrap_or_default(),
        ));
    }
    if let Some(addr) = &args.address {
        return Ok(PunchLocation::manual(0.0, 0.0, addr));
    }

    if let Some(n) = args.favorite {
        let idx = n
            .checked_sub(1)
            .ok_or_else(|| AppError::NoLocation("favorite index is 1-based".to_string()))?;
        let reference = info
            .location_references
            .get(idx)
            .ok_or_else(|| AppError::NoLocation(format!("no favorite location #{n}")))?;
        return reference
            .to_punch_location()
            .ok_or_else(|| AppError::NoLocation(format!("favorite #{n} has no coordinates")));
    }

    // --last, also the default when nothing else was given
    if let Some(mut loc) = cards.iter().rev().find_map(|c| c.location.clone()) {
        loc.reference_id = None;
        return Ok(loc);
    }
    if !args.last {
        if let Some(loc) = info
            .location_references
            .iter()
            .find_map(|r| r.to_punch_location())
        {
            return Ok(loc);
        }
    }

    Err(AppError::NoLocation(
        "pass --address, --latitude/--longitude, --last or --favorite".to_string(),
    ))
}
