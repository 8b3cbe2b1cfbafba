//! Calendar arithmetic that clamps the day-of-month instead of overflowing.
//!
//! Shifts past the representable range saturate at `NaiveDate::MIN` or
//! `NaiveDate::MAX` rather than panicking.

use chrono::{Datelike, Duration, Months, NaiveDate};

fn saturated(forward: bool) -> NaiveDate {
    if forward {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    }
}

/// Shifts `date` by `months`, clamping to the last day of the target month
/// (`2025-03-31` plus one month is `2025-04-30`).
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or_else(|| saturated(months >= 0))
}

/// Shifts `date` by whole years; 29 February lands on 28 February in common years.
pub fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    shift_months(date, years.saturating_mul(12))
}

pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or_else(|| saturated(days >= 0))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 12 {
        return 31;
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Last calendar day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let last = days_in_month(date.year(), date.month());
    date.with_day(last).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_shift_clamps() {
        assert_eq!(shift_months(ymd(2025, 3, 31), 1), ymd(2025, 4, 30));
        assert_eq!(shift_months(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
        assert_eq!(shift_months(ymd(2025, 1, 31), 1), ymd(2025, 2, 28));
        assert_eq!(shift_months(ymd(2025, 12, 15), 1), ymd(2026, 1, 15));
        assert_eq!(shift_months(ymd(2025, 1, 15), -1), ymd(2024, 12, 15));
    }

    #[test]
    fn year_shift_handles_leap_day() {
        assert_eq!(shift_years(ymd(2024, 2, 29), 1), ymd(2025, 2, 28));
        assert_eq!(shift_years(ymd(2024, 2, 29), 4), ymd(2028, 2, 29));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(month_end(ymd(2025, 4, 3)), ymd(2025, 4, 30));
        assert_eq!(month_end(NaiveDate::MAX), NaiveDate::MAX);
    }

    #[test]
    fn shifts_saturate_at_calendar_limits() {
        assert_eq!(shift_days(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(shift_days(NaiveDate::MIN, -7), NaiveDate::MIN);
        assert_eq!(shift_days(ymd(2025, 1, 1), i64::MAX), NaiveDate::MAX);
        assert_eq!(shift_months(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(shift_months(NaiveDate::MIN, -1), NaiveDate::MIN);
        assert_eq!(shift_years(ymd(2025, 6, 1), i32::MAX), NaiveDate::MAX);
    }
}
