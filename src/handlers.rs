use crate::{
    db,
    error::AppError,
    models::{Booking, DaySchedule, NewBooking, Review, Stats},
    reviews,
    schedule::{self, DATE_FORMAT, MAX_DAYS},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct RootMessage {
    message: &'static str,
}

pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "Padel Center API",
    })
}

#[derive(Deserialize)]
pub struct ScheduleParams {
    days: Option<u32>,
}

pub async fn get_schedule(
    State(app_state): State<AppState>,
    Query(params): Query<ScheduleParams>,
) -> Result<Json<Vec<DaySchedule>>, AppError> {
    let days = params.days.unwrap_or(app_state.schedule_days);
    if days > MAX_DAYS {
        return Err(AppError::BadRequest(format!(
            "days must be at most {MAX_DAYS}"
        )));
    }

    let mut calendar = schedule::generate_schedule(days, (app_state.today)());
    let booked = db::booked_slots(&app_state.pool).await?;
    schedule::mark_booked(&mut calendar, &booked);
    Ok(Json(calendar))
}

pub async fn create_booking(
    State(app_state): State<AppState>,
    Json(payload): Json<NewBooking>,
) -> Result<Json<Booking>, AppError> {
    let request = validate_booking(payload, (app_state.today)(), MAX_DAYS)?;
    match db::create_booking(&app_state.pool, request).await {
        Ok(booking) => {
            tracing::info!(id = %booking.id, date = %booking.date, time = %booking.time, "booking confirmed");
            Ok(Json(booking))
        }
        Err(AppError::Conflict(msg)) => {
            tracing::warn!(%msg, "booking rejected");
            Err(AppError::Conflict(msg))
        }
        Err(e) => Err(e),
    }
}

pub async fn get_bookings(State(app_state): State<AppState>) -> Result<Json<Vec<Booking>>, AppError> {
    db::get_all_bookings(&app_state.pool).await.map(Json)
}

pub async fn get_reviews() -> Json<&'static [Review]> {
    Json(reviews::all())
}

pub async fn get_stats(State(app_state): State<AppState>) -> Result<Json<Stats>, AppError> {
    let bookings = db::count_bookings(&app_state.pool).await?;
    Ok(Json(Stats {
        players: 1247,
        games_per_month: 234,
        rating: 4.9,
        bookings,
    }))
}

/// Trims every field and checks the request names a slot the calendar offers.
pub fn validate_booking(
    payload: NewBooking,
    today: NaiveDate,
    window_days: u32,
) -> Result<NewBooking, AppError> {
    let request = NewBooking {
        name: payload.name.trim().to_string(),
        phone: payload.phone.trim().to_string(),
        date: payload.date.trim().to_string(),
        time: payload.time.trim().to_string(),
        format_type: payload.format_type.trim().to_string(),
    };

    for (field, value) in [
        ("name", &request.name),
        ("phone", &request.phone),
        ("date", &request.date),
        ("time", &request.time),
        ("format_type", &request.format_type),
    ] {
        if value.is_empty() {
            return Err(AppError::BadRequest(format!("{field} is required")));
        }
    }

    let date = NaiveDate::parse_from_str(&request.date, DATE_FORMAT)
        .map_err(|_| AppError::BadRequest(format!("invalid date {:?}", request.date)))?;
    // Re-format so "2025-1-1" and "2025-01-01" land on the same slot.
    let request = NewBooking {
        date: date.format(DATE_FORMAT).to_string(),
        ..request
    };

    if !schedule::is_slot_time(&request.time) {
        return Err(AppError::BadRequest(format!(
            "{} is not a bookable time",
            request.time
        )));
    }
    if !schedule::in_window(date, today, window_days) {
        return Err(AppError::BadRequest(format!(
            "{} is outside the booking window",
            request.date
        )));
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn payload(date: &str, time: &str) -> NewBooking {
        NewBooking {
            name: " A ".to_string(),
            phone: "+1".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            format_type: "open".to_string(),
        }
    }

    #[test]
    fn accepts_slot_inside_window() {
        let request = validate_booking(payload("2025-01-01", "09:00"), jan_first(), 14).unwrap();
        assert_eq!(request.name, "A");
        assert_eq!(request.date, "2025-01-01");
    }

    #[test]
    fn normalises_date() {
        let request = validate_booking(payload("2025-1-3", "12:00"), jan_first(), 14).unwrap();
        assert_eq!(request.date, "2025-01-03");
    }

    #[test]
    fn rejects_blank_fields() {
        let mut blank = payload("2025-01-01", "09:00");
        blank.phone = "   ".to_string();
        let err = validate_booking(blank, jan_first(), 14).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "phone is required"));
    }

    #[test]
    fn rejects_unknown_time_and_bad_date() {
        assert!(matches!(
            validate_booking(payload("2025-01-01", "08:30"), jan_first(), 14),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            validate_booking(payload("01.01.2025", "09:00"), jan_first(), 14),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn booking_window_spans_widest_schedule() {
        let last = validate_booking(payload("2025-03-01", "21:00"), jan_first(), MAX_DAYS).unwrap();
        assert_eq!(last.date, "2025-03-01");
        assert!(matches!(
            validate_booking(payload("2025-03-02", "21:00"), jan_first(), MAX_DAYS),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_dates_outside_window() {
        for date in ["2024-12-31", "2025-01-15"] {
            assert!(matches!(
                validate_booking(payload(date, "09:00"), jan_first(), 14),
                Err(AppError::BadRequest(_))
            ));
        }
    }
}
