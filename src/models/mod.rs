pub mod classification;
pub mod day_summary;
pub mod location;
pub mod pending;
pub mod punch;
pub mod session;
