use crate::api::{self, client::ApiClient};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::models::session::SessionInfo;
use crate::store::auth::AuthStore;
use crate::store::ledger::PendingLedger;
use crate::ui::messages;
use crate::utils::address::clean_address;
use crate::utils::formatting::{ms_to_hhmm, pad_display};
use crate::utils::time::{fmt_time, next_bank_expiration};
use chrono::Local;

pub async fn handle(cfg: &Config) -> AppResult<()> {
    let auth = AuthStore::new(Config::session_file())
        .load()
        .ok_or(AppError::MissingSession)?;
    let client = ApiClient::new(cfg, Some(auth));

    let (info, summary) = refresh(&client).await?;
    render(&info, &summary);
    Ok(())
}

/// One refresh cycle: session → today's punches → merge with the pending
/// ledger → engine. The two fetches are sequenced because the day fetch
/// uses the employee id learned from the session; `now` is captured once
/// so worked/expected/limit agree with each other.
pub async fn refresh(client: &ApiClient) -> AppResult<(SessionInfo, DaySummary)> {
    let info = api::session::fetch_session(client).await?;

    let today = Local::now().date_naive();
    let cards = api::workday::fetch_work_day(client, today, info.employee_id).await?;

    let now = Local::now();
    let merged = PendingLedger::new(Config::ledger_file()).merge(cards, now)?;

    let summary = Core::build_day_summary(&merged, &info.classification, now);
    Ok((info, summary))
}

pub fn render(info: &SessionInfo, summary: &DaySummary) {
    messages::header("Today");

    messages::kv("Worked today", ms_to_hhmm(summary.worked_ms, false));
    messages::kv(
        "Shift ends at",
        summary.expected_end.map(fmt_time).unwrap_or_else(dash),
    );
    messages::kv(
        "Overtime after",
        summary.overtime_limit.map(fmt_time).unwrap_or_else(dash),
    );

    if let Some(balance_secs) = info.time_balance_secs {
        messages::kv("Hour bank", ms_to_hhmm(balance_secs * 1000, true));
        let expiry = next_bank_expiration(Local::now().date_naive());
        messages::note(format!("expires on {}", expiry.format("%d/%m/%Y")));
    }

    if let Some(last) = summary.punches.last() {
        messages::kv(
            "Last punch",
            format!("{} {}", last.date_str(), last.time_str()),
        );
    } else if let Some((date, time)) = &info.last_punch {
        messages::kv("Last punch", format!("{date} {time}"));
    }

    println!();
    if summary.punches.is_empty() {
        messages::info("No punches today");
        return;
    }

    for (idx, punch) in summary.punches.iter().enumerate() {
        let role = if idx % 2 == 0 { "in " } else { "out" };
        let badge = punch.source_label.as_deref().unwrap_or("");
        let mark = if punch.pending { " (pending)" } else { "" };
        let mut line = format!(
            "  {}  {}  {}{}",
            punch.time_str(),
            role,
            pad_display(badge, 14),
            mark
        );
        if let Some(loc) = &punch.location {
            let addr = clean_address(&loc.address);
            if !addr.is_empty() {
                line.push_str(&format!("  📍 {addr}"));
            }
        }
        println!("{}", line.trim_end());
    }
}

fn dash() -> String {
    "—".to_string()
}
