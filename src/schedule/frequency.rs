use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::calendar::{shift_days, shift_months, shift_years};
use crate::errors::BeehiveError;

/// How often a planned movement repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurrenceFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// Placeholder without an editor yet; behaves like [`RecurrenceFrequency::Daily`].
    Custom,
}

impl RecurrenceFrequency {
    pub const ALL: [RecurrenceFrequency; 5] = [
        RecurrenceFrequency::Daily,
        RecurrenceFrequency::Weekly,
        RecurrenceFrequency::Monthly,
        RecurrenceFrequency::Yearly,
        RecurrenceFrequency::Custom,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            RecurrenceFrequency::Daily => "DAILY",
            RecurrenceFrequency::Weekly => "WEEKLY",
            RecurrenceFrequency::Monthly => "MONTHLY",
            RecurrenceFrequency::Yearly => "YEARLY",
            RecurrenceFrequency::Custom => "CUSTOM",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecurrenceFrequency::Daily => "Daily",
            RecurrenceFrequency::Weekly => "Weekly",
            RecurrenceFrequency::Monthly => "Monthly",
            RecurrenceFrequency::Yearly => "Yearly",
            RecurrenceFrequency::Custom => "Custom",
        }
    }

    /// Parses a raw form value, falling back to daily for anything unknown.
    pub fn from_label_lenient(raw: &str) -> RecurrenceFrequency {
        raw.parse().unwrap_or_else(|_| {
            warn!("unrecognized recurrence `{raw}`, falling back to DAILY");
            RecurrenceFrequency::Daily
        })
    }

    /// The frequency actually used for date arithmetic and cron shape.
    pub fn effective(&self) -> RecurrenceFrequency {
        match self {
            RecurrenceFrequency::Custom => RecurrenceFrequency::Daily,
            other => *other,
        }
    }

    /// Date of the following occurrence after `from`.
    pub fn next_date(&self, from: NaiveDate) -> NaiveDate {
        match self.effective() {
            RecurrenceFrequency::Weekly => shift_days(from, 7),
            RecurrenceFrequency::Monthly => shift_months(from, 1),
            RecurrenceFrequency::Yearly => shift_years(from, 1),
            _ => shift_days(from, 1),
        }
    }
}

impl fmt::Display for RecurrenceFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RecurrenceFrequency {
    type Err = BeehiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        RecurrenceFrequency::ALL
            .iter()
            .copied()
            .find(|frequency| frequency.code() == normalized)
            .ok_or_else(|| BeehiveError::InvalidInput(format!("unknown recurrence `{s}`")))
    }
}
