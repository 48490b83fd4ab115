use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_CONFIRMED: &str = "confirmed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub time: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: String,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub format_type: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

/// Request body for a new reservation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewBooking {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub format_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub name: String,
    pub text: String,
    pub rating: u8,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub players: u32,
    pub games_per_month: u32,
    pub rating: f64,
    pub bookings: i64,
}
