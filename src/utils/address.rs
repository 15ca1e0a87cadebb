//! Vendor addresses come back from reverse geocoding with postal code,
//! state and country attached; the UI wants the short street-level form.

use regex::Regex;
use std::sync::OnceLock;

fn cep_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",?\s*\d{5}-\d{3}\s*,?").unwrap())
}

fn state_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*-\s*[A-Z]{2}\s*,?").unwrap())
}

fn country_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i),?\s*Brazil\s*$").unwrap())
}

fn double_comma_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",\s*,").unwrap())
}

/// Strip postal code (NNNNN-NNN), trailing two-letter state, country and
/// duplicate commas from a reverse-geocoded address.
pub fn clean_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }
    let cleaned = cep_re().replace_all(address, "");
    let cleaned = state_re().replace_all(&cleaned, "");
    let cleaned = country_re().replace_all(&cleaned, "");
    let cleaned = double_comma_re().replace_all(&cleaned, ",");
    cleaned.trim().trim_matches(',').trim().to_string()
}
