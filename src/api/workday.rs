use crate::api::client::ApiClient;
use crate::errors::AppResult;
use crate::models::location::PunchLocation;
use crate::models::punch::PunchEvent;
use crate::utils::time;
use chrono::NaiveDate;
use serde_json::Value;

pub async fn fetch_work_day(
    client: &ApiClient,
    date: NaiveDate,
    employee_id: Option<i64>,
) -> AppResult<Vec<PunchEvent>> {
    let mut path = format!(
        "/api/time_cards/work_days?start_date={date}&end_date={date}&attributes=time_cards"
    );
    if let Some(id) = employee_id {
        path.push_str(&format!("&employee_id={id}"));
    }
    let res = client.get(&path).await?;
    Ok(parse_work_day(res.json()?))
}

/// Shape the vendor work-day payload into the day's punch sequence.
/// Vendor ordering is not guaranteed, so cards are sorted by
/// reconstructed timestamp before they reach the engine.
pub fn parse_work_day(data: Value) -> Vec<PunchEvent> {
    let cards = data
        .pointer("/work_days/0/time_cards")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default();

    let mut events = Vec::with_capacity(cards.len());
    for card in &cards {
        match card_to_event(card) {
            Some(ev) => events.push(ev),
            None => tracing::debug!(%card, "skipping time card without a parsable date/time"),
        }
    }
    events.sort_by_key(|e| e.timestamp());
    events
}

fn card_to_event(card: &Value) -> Option<PunchEvent> {
    let date = time::parse_dmy(card.get("date")?.as_str()?)?;
    let hhmm = time::parse_time(card.get("time")?.as_str()?)?;

    let source_label = card
        .pointer("/software_method/name")
        .or_else(|| card.pointer("/source/name"))
        .and_then(|v| v.as_str())
        .map(short_source_label);

    Some(PunchEvent {
        date,
        time: hhmm,
        source_label,
        location: card_location(card),
        pending: false,
    })
}

/// The vendor spells out the registration channel verbosely
/// ("Registro de ponto pelo aplicativo …"); keep the short tail.
fn short_source_label(name: &str) -> String {
    if name.contains("Comunicação") {
        return "Ponto Físico".to_string();
    }
    name.replace("Registro de ponto pelo ", "")
        .replace("aplicativo ", "")
        .replace("Inserção por ", "")
}

fn card_location(card: &Value) -> Option<PunchLocation> {
    let latitude = card.get("latitude")?.as_f64()?;
    let longitude = card.get("longitude")?.as_f64()?;
    let address = card
        .get("address")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    Some(PunchLocation {
        latitude,
        longitude,
        accuracy: card.get("accuracy").and_then(|v| v.as_f64()).unwrap_or(0.0),
        original_latitude: card
            .get("original_latitude")
            .and_then(|v| v.as_f64())
            .unwrap_or(latitude),
        original_longitude: card
            .get("original_longitude")
            .and_then(|v| v.as_f64())
            .unwrap_or(longitude),
        original_address: card
            .get("original_address")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| address.clone()),
        location_edited: card
            .get("location_edited")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
        accuracy_method: card
            .get("accuracy_method")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        reference_id: None,
        address,
    })
}
