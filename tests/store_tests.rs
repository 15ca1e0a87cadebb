use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use rponto::models::location::PunchLocation;
use rponto::models::pending::PendingPunch;
use rponto::models::punch::PunchEvent;
use rponto::models::session::AuthSession;
use rponto::store::auth::AuthStore;
use rponto::store::ledger::PendingLedger;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Unique file path inside the system temp dir, removed up front.
fn temp_store(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_rponto.json", name));
    fs::remove_file(&path).ok();
    path
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 27).unwrap()
}

fn at(h: u32, m: u32) -> DateTime<Local> {
    day()
        .and_hms_opt(h, m, 0)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
}

fn pending_at(h: u32, m: u32) -> PendingPunch {
    PendingPunch::recorded_at(at(h, m), PunchLocation::manual(-19.92, -43.94, "Av. Afonso Pena"))
}

#[test]
fn ledger_appends_and_reloads() {
    let ledger = PendingLedger::new(temp_store("ledger_roundtrip"));

    assert!(ledger.load().is_empty());
    ledger.append(pending_at(12, 0)).unwrap();
    ledger.append(pending_at(12, 30)).unwrap();

    let entries = ledger.load();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
}

#[test]
fn ledger_merge_rewrites_the_file() {
    let path = temp_store("ledger_rewrite");
    let ledger = PendingLedger::new(path.clone());
    ledger.append(pending_at(12, 0)).unwrap();

    // a server punch at the same minute confirms the entry
    let server = vec![PunchEvent::new(
        day(),
        NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
    )];
    let merged = ledger.merge(server, at(12, 5)).unwrap();

    assert_eq!(merged.len(), 1);
    assert!(ledger.load().is_empty());
    // the file itself was rewritten, not just the in-memory view
    let on_disk: Vec<PendingPunch> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(on_disk.is_empty());
}

#[test]
fn ledger_survives_a_corrupt_file() {
    let path = temp_store("ledger_corrupt");
    fs::write(&path, "not json at all").unwrap();

    let ledger = PendingLedger::new(path);
    assert!(ledger.load().is_empty());
    // a refresh over a corrupt ledger must still work
    let merged = ledger.merge(vec![], at(12, 0)).unwrap();
    assert!(merged.is_empty());
}

#[test]
fn auth_store_roundtrip_and_clear() {
    let store = AuthStore::new(temp_store("auth_roundtrip"));
    assert!(store.load().is_none());

    let session = AuthSession {
        token: "tok".to_string(),
        client: "cli".to_string(),
        uid: "user@example.com".to_string(),
        sign_in_count: 3,
        last_sign_in_ip: "10.0.0.1".to_string(),
        last_sign_in_at: 1_761_000_000,
        device_uuid: "3f6e0d0c-8a44-4f5e-9c2a-1b7d2e9f0a11".to_string(),
    };
    store.save(&session).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.uid, "user@example.com");
    assert_eq!(loaded.device_uuid, session.device_uuid);

    store.clear().unwrap();
    assert!(store.load().is_none());
}

#[test]
fn auth_store_ignores_corrupt_sessions() {
    let path = temp_store("auth_corrupt");
    fs::write(&path, "{{{{").unwrap();
    assert!(AuthStore::new(path).load().is_none());
}
