use chrono::NaiveDate;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub schedule_days: u32,
    /// Source of the current calendar date; `schedule::utc_today` outside tests.
    pub today: fn() -> NaiveDate,
}
