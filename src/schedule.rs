use crate::models::{DaySchedule, TimeSlot};
use chrono::{NaiveDate, Utc};
use nanoid::nanoid;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_DAYS: u32 = 14;

/// Largest window a schedule may cover; bookings are accepted anywhere inside it.
pub const MAX_DAYS: u32 = 60;

pub const BASE_TIMES: [&str; 13] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00",
    "19:00", "20:00", "21:00",
];

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Booked times grouped by date.
pub type BookedSlots = HashMap<String, HashSet<String>>;

pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Builds `days` consecutive days starting at `today`, every slot open.
pub fn generate_schedule(days: u32, today: NaiveDate) -> Vec<DaySchedule> {
    today
        .iter_days()
        .take(days as usize)
        .map(|day| DaySchedule {
            date: day.format(DATE_FORMAT).to_string(),
            slots: BASE_TIMES
                .iter()
                .map(|time| TimeSlot {
                    id: nanoid!(),
                    time: (*time).to_string(),
                    available: true,
                })
                .collect(),
        })
        .collect()
}

/// Closes every slot whose (date, time) pair is already booked.
pub fn mark_booked(schedule: &mut [DaySchedule], booked: &BookedSlots) {
    for day in schedule.iter_mut() {
        let Some(times) = booked.get(&day.date) else {
            continue;
        };
        for slot in day.slots.iter_mut() {
            if times.contains(&slot.time) {
                slot.available = false;
            }
        }
    }
}

pub fn is_slot_time(time: &str) -> bool {
    BASE_TIMES.contains(&time)
}

/// True when `date` falls inside the window a schedule of `days` would cover.
pub fn in_window(date: NaiveDate, today: NaiveDate, days: u32) -> bool {
    date >= today && (date - today).num_days() < i64::from(days)
}
