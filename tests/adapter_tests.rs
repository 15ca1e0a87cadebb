use rponto::api::session::parse_session;
use rponto::api::workday::parse_work_day;
use serde_json::json;

// ---------------------------------------------------------------
// session adapter
// ---------------------------------------------------------------

#[test]
fn session_extracts_employee_fields() {
    let data = json!({
        "session": {
            "employee": {
                "id": 4242,
                "is_clt": false,
                "time_balance": -23520,
                "work_status_time_card": { "date": "27/10/2025", "time": "07:54" },
                "location_references": [
                    {
                        "id": 7,
                        "description": "HQ",
                        "address": "Av. Afonso Pena, 100",
                        "latitude": -19.92,
                        "longitude": -43.94
                    }
                ]
            }
        }
    });

    let info = parse_session(data);

    assert_eq!(info.employee_id, Some(4242));
    assert!(!info.classification.standard_regime);
    assert_eq!(info.classification.target_hours_per_day, 6);
    assert_eq!(info.time_balance_secs, Some(-23520));
    assert_eq!(
        info.last_punch,
        Some(("27/10/2025".to_string(), "07:54".to_string()))
    );
    assert_eq!(info.location_references.len(), 1);
    assert_eq!(info.location_references[0].id, Some(7));
}

#[test]
fn session_defaults_to_standard_regime() {
    let info = parse_session(json!({}));

    assert!(info.classification.standard_regime);
    assert_eq!(info.classification.target_hours_per_day, 8);
    assert_eq!(info.employee_id, None);
    assert!(info.location_references.is_empty());
    assert!(info.last_punch.is_none());
}

#[test]
fn session_probes_alternate_employee_spots() {
    let via_current = json!({ "session": { "current_employee": { "id": 1 } } });
    assert_eq!(parse_session(via_current).employee_id, Some(1));

    let via_user = json!({ "user": { "employee": { "id": 2, "is_clt": true } } });
    let info = parse_session(via_user);
    assert_eq!(info.employee_id, Some(2));
    assert!(info.classification.standard_regime);
}

#[test]
fn session_falls_back_to_bank_balance() {
    let data = json!({ "session": { "employee": { "bank_balance": 600 } } });
    assert_eq!(parse_session(data).time_balance_secs, Some(600));
}

// ---------------------------------------------------------------
// work-day adapter
// ---------------------------------------------------------------

#[test]
fn work_day_sorts_cards_by_timestamp() {
    let data = json!({
        "work_days": [{
            "time_cards": [
                { "date": "27/10/2025", "time": "13:02" },
                { "date": "27/10/2025", "time": "07:54" },
                { "date": "27/10/2025", "time": "12:00" }
            ]
        }]
    });

    let events = parse_work_day(data);

    let times: Vec<String> = events.iter().map(|e| e.time_str()).collect();
    assert_eq!(times, vec!["07:54", "12:00", "13:02"]);
    assert!(events.iter().all(|e| !e.pending));
}

#[test]
fn work_day_shortens_the_source_label() {
    let data = json!({
        "work_days": [{
            "time_cards": [
                {
                    "date": "27/10/2025",
                    "time": "07:54",
                    "software_method": { "name": "Registro de ponto pelo aplicativo PontoMais" }
                },
                {
                    "date": "27/10/2025",
                    "time": "12:00",
                    "source": { "name": "Comunicação REP" }
                }
            ]
        }]
    });

    let events = parse_work_day(data);

    assert_eq!(events[0].source_label.as_deref(), Some("PontoMais"));
    assert_eq!(events[1].source_label.as_deref(), Some("Ponto Físico"));
}

#[test]
fn work_day_keeps_location_when_present() {
    let data = json!({
        "work_days": [{
            "time_cards": [{
                "date": "27/10/2025",
                "time": "07:54",
                "latitude": -19.92,
                "longitude": -43.94,
                "address": "Av. Afonso Pena, 100",
                "accuracy": 12.5
            }]
        }]
    });

    let events = parse_work_day(data);
    let location = events[0].location.as_ref().unwrap();

    assert_eq!(location.latitude, -19.92);
    assert_eq!(location.original_latitude, -19.92);
    assert_eq!(location.address, "Av. Afonso Pena, 100");
    assert_eq!(location.accuracy, 12.5);
}

#[test]
fn work_day_skips_unparsable_cards() {
    let data = json!({
        "work_days": [{
            "time_cards": [
                { "date": "27/10/2025", "time": "07:54" },
                { "date": "27/10/2025" },
                { "date": "not a date", "time": "09:00" }
            ]
        }]
    });

    assert_eq!(parse_work_day(data).len(), 1);
}

#[test]
fn work_day_is_empty_on_unexpected_shapes() {
    assert!(parse_work_day(json!({})).is_empty());
    assert!(parse_work_day(json!({ "work_days": [] })).is_empty());
}
