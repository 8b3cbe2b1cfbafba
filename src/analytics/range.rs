use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    errors::BeehiveError,
    schedule::calendar::{month_end, shift_days, shift_months, shift_years},
};

/// Reporting period selected on the analytics page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl TimeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFilter::Day => "day",
            TimeFilter::Week => "week",
            TimeFilter::Month => "month",
            TimeFilter::Year => "year",
        }
    }

    /// Unknown values select the monthly view.
    pub fn from_str_lenient(raw: &str) -> TimeFilter {
        raw.parse().unwrap_or_else(|_| {
            warn!("unknown time filter `{raw}`, using month");
            TimeFilter::Month
        })
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFilter {
    type Err = BeehiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(TimeFilter::Day),
            "week" => Ok(TimeFilter::Week),
            "month" => Ok(TimeFilter::Month),
            "year" => Ok(TimeFilter::Year),
            _ => Err(BeehiveError::InvalidInput(format!("unknown time filter `{s}`"))),
        }
    }
}

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The period containing `today`.
    pub fn current(filter: TimeFilter, today: NaiveDate) -> Self {
        match filter {
            TimeFilter::Day => Self::new(today, today),
            TimeFilter::Week => {
                let start = shift_days(today, -i64::from(today.weekday().num_days_from_monday()));
                Self::new(start, shift_days(start, 6))
            }
            TimeFilter::Month => {
                let start = today.with_day(1).unwrap_or(today);
                Self::new(start, month_end(today))
            }
            TimeFilter::Year => {
                let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
                let end = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
                Self::new(start, end)
            }
        }
    }

    /// The period immediately before the one containing `today`.
    pub fn previous(filter: TimeFilter, today: NaiveDate) -> Self {
        let anchor = match filter {
            TimeFilter::Day => shift_days(today, -1),
            TimeFilter::Week => shift_days(today, -7),
            TimeFilter::Month => shift_months(today, -1),
            TimeFilter::Year => shift_years(today, -1),
        };
        Self::current(filter, anchor)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |day| day.succ_opt())
            .take_while(move |day| *day <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_runs_monday_to_sunday() {
        // 2025-06-15 is a Sunday.
        let range = DateRange::current(TimeFilter::Week, ymd(2025, 6, 15));
        assert_eq!(range, DateRange::new(ymd(2025, 6, 9), ymd(2025, 6, 15)));
        let previous = DateRange::previous(TimeFilter::Week, ymd(2025, 6, 15));
        assert_eq!(previous, DateRange::new(ymd(2025, 6, 2), ymd(2025, 6, 8)));
    }

    #[test]
    fn previous_month_from_month_end() {
        let previous = DateRange::previous(TimeFilter::Month, ymd(2025, 3, 31));
        assert_eq!(previous, DateRange::new(ymd(2025, 2, 1), ymd(2025, 2, 28)));
    }

    #[test]
    fn day_and_year_ranges() {
        let today = ymd(2024, 1, 1);
        assert_eq!(
            DateRange::previous(TimeFilter::Day, today),
            DateRange::new(ymd(2023, 12, 31), ymd(2023, 12, 31))
        );
        assert_eq!(
            DateRange::current(TimeFilter::Year, today),
            DateRange::new(ymd(2024, 1, 1), ymd(2024, 12, 31))
        );
        assert_eq!(DateRange::current(TimeFilter::Year, today).days().count(), 366);
    }

    #[test]
    fn ranges_saturate_at_calendar_limit() {
        let last = NaiveDate::MAX;
        let week = DateRange::current(TimeFilter::Week, last);
        assert!(week.start <= last);
        assert_eq!(week.end, last);
        assert_eq!(week.days().last(), Some(last));

        let first = NaiveDate::MIN;
        assert_eq!(DateRange::previous(TimeFilter::Day, first), DateRange::new(first, first));
        assert_eq!(DateRange::current(TimeFilter::Month, last).end, last);
    }

    #[test]
    fn lenient_filter_parse() {
        assert_eq!(TimeFilter::from_str_lenient("WEEK"), TimeFilter::Week);
        assert_eq!(TimeFilter::from_str_lenient("quarter"), TimeFilter::Month);
    }
}
