use crate::error::AppError;
use crate::models::{Booking, NewBooking, STATUS_CONFIRMED};
use crate::schedule::BookedSlots;
use chrono::Utc;
use nanoid::nanoid;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS bookings (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            phone TEXT NOT NULL,
            date TEXT NOT NULL,
            time TEXT NOT NULL,
            format_type TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL,
            status TEXT NOT NULL DEFAULT 'confirmed',
            UNIQUE(date, time)
        );",
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn booked_slots(pool: &SqlitePool) -> Result<BookedSlots, AppError> {
    let rows: Vec<(String, String)> = sqlx::query_as("SELECT date, time FROM bookings")
        .fetch_all(pool)
        .await?;

    let mut booked = BookedSlots::new();
    for (date, time) in rows {
        booked.entry(date).or_default().insert(time);
    }
    Ok(booked)
}

pub async fn find_booking_by_slot(
    pool: &SqlitePool,
    date: &str,
    time: &str,
) -> Result<Option<Booking>, AppError> {
    sqlx::query_as("SELECT * FROM bookings WHERE date = ? AND time = ?")
        .bind(date)
        .bind(time)
        .fetch_optional(pool)
        .await
        .map_err(AppError::from)
}

/// Inserts a confirmed booking, refusing a slot that is already taken.
///
/// The lookup gives the common case a clean error; the `UNIQUE(date, time)`
/// constraint settles requests that race past it.
pub async fn create_booking(pool: &SqlitePool, new: NewBooking) -> Result<Booking, AppError> {
    if find_booking_by_slot(pool, &new.date, &new.time).await?.is_some() {
        return Err(slot_taken(&new.date, &new.time));
    }

    let booking = Booking {
        id: nanoid!(),
        name: new.name,
        phone: new.phone,
        date: new.date,
        time: new.time,
        format_type: new.format_type,
        created_at: Utc::now(),
        status: STATUS_CONFIRMED.to_string(),
    };

    let inserted = sqlx::query(
        "INSERT INTO bookings (id, name, phone, date, time, format_type, created_at, status) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&booking.id)
    .bind(&booking.name)
    .bind(&booking.phone)
    .bind(&booking.date)
    .bind(&booking.time)
    .bind(&booking.format_type)
    .bind(booking.created_at)
    .bind(&booking.status)
    .execute(pool)
    .await;

    match inserted {
        Ok(_) => Ok(booking),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(slot_taken(&booking.date, &booking.time))
        }
        Err(e) => Err(e.into()),
    }
}

fn slot_taken(date: &str, time: &str) -> AppError {
    AppError::Conflict(format!("slot {date} {time} is already booked"))
}

pub async fn get_all_bookings(pool: &SqlitePool) -> Result<Vec<Booking>, AppError> {
    sqlx::query_as("SELECT * FROM bookings ORDER BY created_at ASC, rowid ASC")
        .fetch_all(pool)
        .await
        .map_err(AppError::from)
}

pub async fn count_bookings(pool: &SqlitePool) -> Result<i64, AppError> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings")
        .fetch_one(pool)
        .await?;
    Ok(count.0)
}
