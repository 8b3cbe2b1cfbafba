use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::movement::{MovementKind, MovementStatus};
use crate::{
    category::Category,
    errors::Result,
    schedule::{CronSchedule, RecurrenceFrequency, ScheduleDescriptor},
};

/// A recurring movement that has not executed yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMovement {
    pub id: Uuid,
    pub account_id: Uuid,
    pub description: String,
    pub amount: f64,
    pub kind: MovementKind,
    pub status: MovementStatus,
    pub category: Category,
    pub recurrence: RecurrenceFrequency,
    pub cron: String,
    pub next_execution: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl PlannedMovement {
    /// Builds a pending planned movement from a computed schedule.
    pub fn from_schedule(
        account_id: Uuid,
        description: impl Into<String>,
        amount: f64,
        kind: MovementKind,
        category: Category,
        schedule: &ScheduleDescriptor,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            description: description.into(),
            amount,
            kind,
            status: MovementStatus::Pending,
            category,
            recurrence: schedule.frequency,
            cron: schedule.cron_expression(),
            next_execution: schedule.next_execution,
            end_date: Some(schedule.end_date),
        }
    }

    pub fn with_status(mut self, status: MovementStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_next_execution(mut self, next_execution: NaiveDate) -> Self {
        self.next_execution = next_execution;
        self
    }

    /// Cancelled and failed plans never execute again.
    pub fn is_active(&self) -> bool {
        !matches!(
            self.status,
            MovementStatus::Cancelled | MovementStatus::Failed
        )
    }

    pub fn cron_schedule(&self) -> Result<CronSchedule> {
        self.cron.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::compute_schedule;

    #[test]
    fn from_schedule_copies_dates_and_cron() {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 31)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        let schedule = compute_schedule(RecurrenceFrequency::Monthly, reference);
        let planned = PlannedMovement::from_schedule(
            Uuid::new_v4(),
            "Rent",
            -850.0,
            MovementKind::Expense,
            Category::Rent,
            &schedule,
        );
        assert_eq!(planned.status, MovementStatus::Pending);
        assert_eq!(planned.cron, "15 9 31 * *");
        assert_eq!(
            planned.next_execution,
            NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()
        );
        assert_eq!(planned.cron_schedule().unwrap(), schedule.cron);
        assert!(planned.is_active());
        assert!(!planned.with_status(MovementStatus::Failed).is_active());
    }
}
