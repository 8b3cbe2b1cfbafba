//! Recurrence handling for planned movements: frequencies, cron shapes,
//! first execution and default end dates.

pub mod calculator;
pub mod calendar;
pub mod cron;
pub mod frequency;
pub mod upcoming;

pub use calculator::{
    compute_schedule, compute_schedule_from_label, HorizonPolicy, ScheduleCalculator,
    ScheduleDescriptor,
};
pub use cron::CronSchedule;
pub use frequency::RecurrenceFrequency;
pub use upcoming::{upcoming_planned, UpcomingConfig};
