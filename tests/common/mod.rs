#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use beehive_core::{
    category::Category,
    config::ConfigManager,
    ledger::{Movement, MovementKind, PlannedMovement},
    schedule::{compute_schedule, RecurrenceFrequency},
    time::ManualClock,
};
use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use tempfile::TempDir;
use uuid::Uuid;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    ymd(y, m, d).and_hms_opt(h, min, 0).expect("valid time")
}

pub fn clock_at(y: i32, m: u32, d: u32, h: u32) -> Arc<ManualClock> {
    let start = Utc
        .with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .expect("unambiguous timestamp");
    Arc::new(ManualClock::new(start))
}

/// Config manager rooted in a fresh temporary directory.
pub fn temp_config_manager() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base)
}

pub fn expense(amount: f64, category: Category, date: NaiveDate) -> Movement {
    Movement::expense(Uuid::nil(), "expense", amount, category, date)
}

pub fn income(amount: f64, date: NaiveDate) -> Movement {
    Movement::income(Uuid::nil(), "income", amount, date)
}

pub fn planned(description: &str, frequency: RecurrenceFrequency, reference: NaiveDateTime) -> PlannedMovement {
    let schedule = compute_schedule(frequency, reference);
    PlannedMovement::from_schedule(
        Uuid::new_v4(),
        description,
        -25.0,
        MovementKind::Expense,
        Category::Other,
        &schedule,
    )
}
