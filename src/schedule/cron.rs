use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use super::{calendar::days_in_month, frequency::RecurrenceFrequency};
use crate::errors::{BeehiveError, Result};

/// A five-field cron schedule (`minute hour day-of-month month day-of-week`)
/// restricted to the shapes a recurrence can produce.
///
/// Day-of-week uses `0` for Sunday; `7` is accepted as Sunday when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CronSchedule {
    Daily {
        hour: u32,
        minute: u32,
    },
    Weekly {
        weekday: Weekday,
        hour: u32,
        minute: u32,
    },
    Monthly {
        day: u32,
        hour: u32,
        minute: u32,
    },
    Yearly {
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
}

impl CronSchedule {
    /// Anchors a schedule of `frequency` on the reference wall clock.
    pub fn from_reference(frequency: RecurrenceFrequency, reference: NaiveDateTime) -> Self {
        let hour = reference.hour();
        let minute = reference.minute();
        match frequency.effective() {
            RecurrenceFrequency::Weekly => CronSchedule::Weekly {
                weekday: reference.weekday(),
                hour,
                minute,
            },
            RecurrenceFrequency::Monthly => CronSchedule::Monthly {
                day: reference.day(),
                hour,
                minute,
            },
            RecurrenceFrequency::Yearly => CronSchedule::Yearly {
                month: reference.month(),
                day: reference.day(),
                hour,
                minute,
            },
            _ => CronSchedule::Daily { hour, minute },
        }
    }

    pub fn frequency(&self) -> RecurrenceFrequency {
        match self {
            CronSchedule::Daily { .. } => RecurrenceFrequency::Daily,
            CronSchedule::Weekly { .. } => RecurrenceFrequency::Weekly,
            CronSchedule::Monthly { .. } => RecurrenceFrequency::Monthly,
            CronSchedule::Yearly { .. } => RecurrenceFrequency::Yearly,
        }
    }

    pub fn hour(&self) -> u32 {
        match *self {
            CronSchedule::Daily { hour, .. }
            | CronSchedule::Weekly { hour, .. }
            | CronSchedule::Monthly { hour, .. }
            | CronSchedule::Yearly { hour, .. } => hour,
        }
    }

    pub fn minute(&self) -> u32 {
        match *self {
            CronSchedule::Daily { minute, .. }
            | CronSchedule::Weekly { minute, .. }
            | CronSchedule::Monthly { minute, .. }
            | CronSchedule::Yearly { minute, .. } => minute,
        }
    }
}

impl fmt::Display for CronSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CronSchedule::Daily { hour, minute } => write!(f, "{minute} {hour} * * *"),
            CronSchedule::Weekly {
                weekday,
                hour,
                minute,
            } => write!(f, "{minute} {hour} * * {}", weekday.num_days_from_sunday()),
            CronSchedule::Monthly { day, hour, minute } => {
                write!(f, "{minute} {hour} {day} * *")
            }
            CronSchedule::Yearly {
                month,
                day,
                hour,
                minute,
            } => write!(f, "{minute} {hour} {day} {month} *"),
        }
    }
}

impl FromStr for CronSchedule {
    type Err = BeehiveError;

    fn from_str(expression: &str) -> Result<Self> {
        let fields: Vec<&str> = expression.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(BeehiveError::invalid_cron(
                expression,
                format!("expected 5 fields, found {}", fields.len()),
            ));
        }
        let minute = parse_field(expression, "minute", fields[0], 0, 59)?;
        let hour = parse_field(expression, "hour", fields[1], 0, 23)?;

        match (fields[2], fields[3], fields[4]) {
            ("*", "*", "*") => Ok(CronSchedule::Daily { hour, minute }),
            ("*", "*", dow) => {
                let index = parse_field(expression, "day-of-week", dow, 0, 7)?;
                Ok(CronSchedule::Weekly {
                    weekday: weekday_from_sunday(index),
                    hour,
                    minute,
                })
            }
            (dom, "*", "*") => {
                let day = parse_field(expression, "day-of-month", dom, 1, 31)?;
                Ok(CronSchedule::Monthly { day, hour, minute })
            }
            (dom, month, "*") => {
                let month = parse_field(expression, "month", month, 1, 12)?;
                // Leap years allow 29 February.
                let max_day = days_in_month(2000, month);
                let day = parse_field(expression, "day-of-month", dom, 1, max_day)?;
                Ok(CronSchedule::Yearly {
                    month,
                    day,
                    hour,
                    minute,
                })
            }
            _ => Err(BeehiveError::invalid_cron(
                expression,
                "unsupported field combination",
            )),
        }
    }
}

fn parse_field(expression: &str, name: &str, raw: &str, min: u32, max: u32) -> Result<u32> {
    let value: u32 = raw.parse().map_err(|_| {
        BeehiveError::invalid_cron(expression, format!("{name} `{raw}` is not a number"))
    })?;
    if value < min || value > max {
        return Err(BeehiveError::invalid_cron(
            expression,
            format!("{name} {value} is outside {min}..={max}"),
        ));
    }
    Ok(value)
}

fn weekday_from_sunday(index: u32) -> Weekday {
    match index % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}
