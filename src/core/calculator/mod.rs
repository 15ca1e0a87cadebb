pub mod expected;
pub mod limit;
pub mod worked;

pub const HOUR_MS: i64 = 3_600_000;
