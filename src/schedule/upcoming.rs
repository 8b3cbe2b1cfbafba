use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::ledger::PlannedMovement;

/// Window and size of the "upcoming planned movements" list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpcomingConfig {
    pub window_days: u32,
    pub limit: usize,
}

impl Default for UpcomingConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            limit: 3,
        }
    }
}

/// Active planned movements due after `now` and before `now + window_days`,
/// soonest first, at most `limit` of them.
///
/// Execution dates count from midnight, so a plan due today is already past
/// unless `now` is exactly midnight.
pub fn upcoming_planned<'a>(
    planned: &'a [PlannedMovement],
    now: NaiveDateTime,
    window_days: u32,
    limit: usize,
) -> Vec<&'a PlannedMovement> {
    let horizon = now
        .checked_add_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(NaiveDateTime::MAX);
    let mut upcoming: Vec<&PlannedMovement> = planned
        .iter()
        .filter(|plan| plan.is_active())
        .filter(|plan| {
            let due = plan.next_execution.and_time(NaiveTime::MIN);
            due > now && due < horizon
        })
        .collect();
    upcoming.sort_by_key(|plan| plan.next_execution);
    upcoming.truncate(limit);
    upcoming
}

impl UpcomingConfig {
    pub fn select<'a>(
        &self,
        planned: &'a [PlannedMovement],
        now: NaiveDateTime,
    ) -> Vec<&'a PlannedMovement> {
        upcoming_planned(planned, now, self.window_days, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::{
        category::Category,
        ledger::{MovementKind, MovementStatus},
        schedule::{compute_schedule, RecurrenceFrequency},
    };

    fn plan(description: &str, next: NaiveDate) -> PlannedMovement {
        let reference = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let schedule = compute_schedule(RecurrenceFrequency::Monthly, reference);
        PlannedMovement::from_schedule(
            Uuid::new_v4(),
            description,
            -10.0,
            MovementKind::Expense,
            Category::Other,
            &schedule,
        )
        .with_next_execution(next)
    }

    fn ymd(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn selects_soonest_active_within_window() {
        let now = ymd(10).and_hms_opt(15, 0, 0).unwrap();
        let plans = vec![
            plan("later", ymd(25)),
            plan("today", ymd(10)),
            plan("cancelled", ymd(11)).with_status(MovementStatus::Cancelled),
            plan("failed", ymd(12)).with_status(MovementStatus::Failed),
            plan("soon", ymd(14)),
            plan("tomorrow", ymd(11)),
            plan("next", ymd(20)),
            plan("too far", NaiveDate::from_ymd_opt(2025, 7, 11).unwrap()),
        ];
        let names: Vec<_> = upcoming_planned(&plans, now, 30, 3)
            .into_iter()
            .map(|p| p.description.as_str())
            .collect();
        assert_eq!(names, vec!["tomorrow", "soon", "next"]);
    }

    #[test]
    fn window_end_is_exclusive() {
        let now = ymd(1).and_hms_opt(0, 0, 0).unwrap();
        let plans = vec![plan("edge", ymd(11)), plan("inside", ymd(10))];
        let picked = upcoming_planned(&plans, now, 10, 5);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].description, "inside");
    }

    #[test]
    fn window_near_calendar_limit_does_not_overflow() {
        let last = NaiveDate::MAX;
        let now = last.pred_opt().unwrap().and_hms_opt(0, 0, 0).unwrap();
        let plans = vec![plan("final day", last)];
        let picked = upcoming_planned(&plans, now, u32::MAX, 5);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].description, "final day");
    }
}
