use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{calendar::shift_months, cron::CronSchedule, frequency::RecurrenceFrequency};

const MAX_HORIZON_MONTHS: u32 = 12_000;

/// How far ahead a new plan runs by default, in months per frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizonPolicy {
    pub daily_months: u32,
    pub weekly_months: u32,
    pub monthly_months: u32,
    pub yearly_months: u32,
    pub custom_months: u32,
}

impl Default for HorizonPolicy {
    fn default() -> Self {
        Self {
            daily_months: 1,
            weekly_months: 3,
            monthly_months: 12,
            yearly_months: 60,
            custom_months: 1,
        }
    }
}

impl HorizonPolicy {
    pub fn months_for(&self, frequency: RecurrenceFrequency) -> u32 {
        match frequency {
            RecurrenceFrequency::Daily => self.daily_months,
            RecurrenceFrequency::Weekly => self.weekly_months,
            RecurrenceFrequency::Monthly => self.monthly_months,
            RecurrenceFrequency::Yearly => self.yearly_months,
            RecurrenceFrequency::Custom => self.custom_months,
        }
    }
}

/// Everything needed to register a recurring movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDescriptor {
    pub frequency: RecurrenceFrequency,
    pub cron: CronSchedule,
    pub next_execution: NaiveDate,
    pub end_date: NaiveDate,
}

impl ScheduleDescriptor {
    pub fn cron_expression(&self) -> String {
        self.cron.to_string()
    }
}

/// Derives cron, first execution and default end date from a reference time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleCalculator {
    horizons: HorizonPolicy,
}

impl ScheduleCalculator {
    pub fn new(horizons: HorizonPolicy) -> Self {
        Self { horizons }
    }

    pub fn horizons(&self) -> &HorizonPolicy {
        &self.horizons
    }

    /// Dates saturate at the end of the calendar; a schedule that would run
    /// past it ends on `NaiveDate::MAX` with its next execution the day before.
    pub fn compute(
        &self,
        frequency: RecurrenceFrequency,
        reference: NaiveDateTime,
    ) -> ScheduleDescriptor {
        let start = reference.date();
        let cron = CronSchedule::from_reference(frequency, reference);
        let mut next_execution = frequency.next_date(start);
        let mut end_date = self.default_end_date(frequency, start);
        if end_date <= next_execution {
            end_date = frequency.next_date(next_execution);
        }
        if end_date <= next_execution {
            end_date = NaiveDate::MAX;
            next_execution = end_date.pred_opt().unwrap_or(end_date);
        }

        debug!("computed {frequency} schedule `{cron}` next={next_execution} end={end_date}");
        ScheduleDescriptor {
            frequency,
            cron,
            next_execution,
            end_date,
        }
    }

    /// Same as [`ScheduleCalculator::compute`] for a raw form value.
    pub fn compute_from_label(&self, label: &str, reference: NaiveDateTime) -> ScheduleDescriptor {
        self.compute(RecurrenceFrequency::from_label_lenient(label), reference)
    }

    /// End of the default horizon, measured from `start`.
    pub fn default_end_date(&self, frequency: RecurrenceFrequency, start: NaiveDate) -> NaiveDate {
        let months = self.horizons.months_for(frequency).min(MAX_HORIZON_MONTHS);
        shift_months(start, months as i32)
    }
}

pub fn compute_schedule(
    frequency: RecurrenceFrequency,
    reference: NaiveDateTime,
) -> ScheduleDescriptor {
    ScheduleCalculator::default().compute(frequency, reference)
}

pub fn compute_schedule_from_label(label: &str, reference: NaiveDateTime) -> ScheduleDescriptor {
    ScheduleCalculator::default().compute_from_label(label, reference)
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        ymd(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn daily_schedule() {
        let schedule = compute_schedule(RecurrenceFrequency::Daily, at(2025, 1, 15, 14, 30));
        assert_eq!(schedule.cron_expression(), "30 14 * * *");
        assert_eq!(schedule.next_execution, ymd(2025, 1, 16));
        assert_eq!(schedule.end_date, ymd(2025, 2, 15));
    }

    #[test]
    fn weekly_schedule_keeps_weekday() {
        let schedule = compute_schedule(RecurrenceFrequency::Weekly, at(2025, 1, 15, 14, 30));
        assert_eq!(schedule.cron_expression(), "30 14 * * 3");
        assert_eq!(schedule.next_execution, ymd(2025, 1, 22));
        assert_eq!(schedule.end_date, ymd(2025, 4, 15));
    }

    #[test]
    fn monthly_schedule_clamps_short_months() {
        let schedule = compute_schedule(RecurrenceFrequency::Monthly, at(2025, 3, 31, 0, 0));
        assert_eq!(schedule.cron_expression(), "0 0 31 * *");
        assert_eq!(schedule.next_execution, ymd(2025, 4, 30));
        assert_eq!(schedule.end_date, ymd(2026, 3, 31));
    }

    #[test]
    fn yearly_schedule_from_leap_day() {
        let schedule = compute_schedule(RecurrenceFrequency::Yearly, at(2024, 2, 29, 6, 5));
        assert_eq!(schedule.cron_expression(), "5 6 29 2 *");
        assert_eq!(schedule.next_execution, ymd(2025, 2, 28));
        assert_eq!(schedule.end_date, ymd(2029, 2, 28));
    }

    #[test]
    fn custom_and_unknown_labels_behave_daily() {
        let reference = at(2025, 6, 1, 12, 0);
        let custom = compute_schedule(RecurrenceFrequency::Custom, reference);
        assert_eq!(custom.frequency, RecurrenceFrequency::Custom);
        assert_eq!(custom.cron_expression(), "0 12 * * *");
        assert_eq!(custom.next_execution, ymd(2025, 6, 2));

        let unknown = compute_schedule_from_label("fortnightly", reference);
        assert_eq!(unknown.frequency, RecurrenceFrequency::Daily);
        assert_eq!(unknown.next_execution, custom.next_execution);
        assert_eq!(unknown.end_date, custom.end_date);
    }

    #[test]
    fn short_horizon_is_extended_past_next_execution() {
        let calculator = ScheduleCalculator::new(HorizonPolicy {
            monthly_months: 0,
            weekly_months: 0,
            ..HorizonPolicy::default()
        });
        let monthly = calculator.compute(RecurrenceFrequency::Monthly, at(2025, 1, 31, 8, 0));
        assert_eq!(monthly.next_execution, ymd(2025, 2, 28));
        assert_eq!(monthly.end_date, ymd(2025, 3, 28));

        let weekly = calculator.compute(RecurrenceFrequency::Weekly, at(2025, 1, 1, 8, 0));
        assert!(weekly.end_date > weekly.next_execution);
    }

    #[test]
    fn end_is_always_after_next() {
        let calculator = ScheduleCalculator::default();
        let mut day = ymd(2024, 1, 1);
        while day < ymd(2025, 1, 1) {
            let reference = day.and_hms_opt(23, 59, 0).unwrap();
            for frequency in RecurrenceFrequency::ALL {
                let schedule = calculator.compute(frequency, reference);
                assert!(
                    schedule.end_date > schedule.next_execution,
                    "{frequency} from {day}"
                );
                assert!(schedule.next_execution > day);
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn end_stays_after_next_at_calendar_limit() {
        let calculator = ScheduleCalculator::default();
        let last = NaiveDate::MAX;
        let days = [
            last,
            last.pred_opt().unwrap(),
            last - chrono::Duration::days(5),
            ymd(last.year(), 12, 15),
            ymd(last.year(), 6, 30),
        ];
        for day in days {
            let reference = day.and_hms_opt(9, 0, 0).unwrap();
            for frequency in RecurrenceFrequency::ALL {
                let schedule = calculator.compute(frequency, reference);
                assert!(
                    schedule.end_date > schedule.next_execution,
                    "{frequency} from {day}"
                );
            }
        }

        let monthly = calculator.compute(
            RecurrenceFrequency::Monthly,
            ymd(last.year(), 12, 15).and_hms_opt(9, 0, 0).unwrap(),
        );
        assert_eq!(monthly.end_date, last);
        assert_eq!(monthly.next_execution, last.pred_opt().unwrap());
        assert!(monthly.next_execution > ymd(last.year(), 12, 15));
    }
}
