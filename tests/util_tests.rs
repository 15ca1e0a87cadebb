use chrono::NaiveDate;
use rponto::utils::address::clean_address;
use rponto::utils::formatting::ms_to_hhmm;
use rponto::utils::time::next_bank_expiration;

#[test]
fn clean_address_strips_cep_state_and_country() {
    let raw = "Rua Afonso Pena, 100 - Centro, Belo Horizonte - MG, 30130-010, Brazil";
    assert_eq!(
        clean_address(raw),
        "Rua Afonso Pena, 100 - Centro, Belo Horizonte"
    );
}

#[test]
fn clean_address_keeps_plain_addresses() {
    assert_eq!(clean_address("Av. Paulista, 1578"), "Av. Paulista, 1578");
    assert_eq!(clean_address(""), "");
}

#[test]
fn ms_to_hhmm_formats_and_signs() {
    assert_eq!(ms_to_hhmm(0, false), "00:00");
    assert_eq!(ms_to_hhmm(3 * 3_600_000 + 25 * 60_000, false), "03:25");
    assert_eq!(ms_to_hhmm(2 * 3_600_000 + 5 * 60_000, true), "+02:05");
    assert_eq!(ms_to_hhmm(-(3_600_000 + 10 * 60_000), true), "-01:10");
    // unsigned rendering still shows magnitude only
    assert_eq!(ms_to_hhmm(-60_000, false), "00:01");
}

#[test]
fn bank_expiration_targets_april_august_december() {
    let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

    // Thursday 2026-04-30 needs no weekend roll
    assert_eq!(next_bank_expiration(d(2026, 1, 15)), d(2026, 4, 30));
    // Monday 2026-08-31 needs no weekend roll
    assert_eq!(next_bank_expiration(d(2026, 5, 10)), d(2026, 8, 31));
    // December rolls over to April of the next year
    assert_eq!(next_bank_expiration(d(2026, 12, 5)), d(2027, 4, 30));
}

#[test]
fn bank_expiration_rolls_weekends_back_to_friday() {
    let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

    // 2025-08-31 is a Sunday → Friday 2025-08-29
    assert_eq!(next_bank_expiration(d(2025, 5, 1)), d(2025, 8, 29));
}
