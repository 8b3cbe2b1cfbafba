//! Income/expense statistics over a reporting period.

pub mod range;

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    category::Category,
    ledger::{Movement, MovementKind},
    schedule::calendar::{month_end, shift_days},
};

pub use range::{DateRange, TimeFilter};

/// Number of categories kept in the expense breakdown.
pub const BREAKDOWN_LIMIT: usize = 6;

const DAY_LABELS: [&str; 5] = ["00h", "06h", "12h", "18h", "24h"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub label: String,
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub name: String,
    pub category: Category,
    pub amount: f64,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsStatistics {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
    pub income_change: f64,
    pub expense_change: f64,
    pub chart_data: Vec<ChartDataPoint>,
    pub category_breakdown: Vec<CategoryBreakdown>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    income: f64,
    expense: f64,
}

impl Totals {
    fn add(&mut self, movement: &Movement) {
        match movement.kind {
            MovementKind::Income => self.income += movement.amount,
            MovementKind::Expense => self.expense += movement.magnitude(),
        }
    }

    fn of<'a>(movements: impl IntoIterator<Item = &'a Movement>) -> Self {
        let mut totals = Totals::default();
        for movement in movements {
            totals.add(movement);
        }
        totals
    }

    fn into_point(self, label: impl Into<String>) -> ChartDataPoint {
        ChartDataPoint {
            label: label.into(),
            income: self.income,
            expense: self.expense,
        }
    }
}

/// Computes the statistics of the period selected by `filter` around `today`.
///
/// `movements` may span any dates; only confirmed, non-transfer movements
/// inside the current and previous periods are considered.
pub fn calculate_analytics(
    movements: &[Movement],
    filter: TimeFilter,
    today: NaiveDate,
) -> AnalyticsStatistics {
    let current_range = DateRange::current(filter, today);
    let previous_range = DateRange::previous(filter, today);

    let current: Vec<&Movement> = in_range(movements, current_range);
    let previous = Totals::of(in_range(movements, previous_range));
    let totals = Totals::of(current.iter().copied());

    let income_change = round_half_up(percentage_change(previous.income, totals.income), 1);
    let expense_change = round_half_up(percentage_change(previous.expense, totals.expense), 1);

    info!(
        "analytics for {filter} ({} to {}): income {:.2}, expenses {:.2}, change {income_change}%/{expense_change}%",
        current_range.start, current_range.end, totals.income, totals.expense
    );

    AnalyticsStatistics {
        total_income: totals.income,
        total_expenses: totals.expense,
        net_balance: totals.income - totals.expense,
        income_change,
        expense_change,
        chart_data: chart_data(&current, current_range, filter),
        category_breakdown: category_breakdown(&current),
    }
}

fn in_range(movements: &[Movement], range: DateRange) -> Vec<&Movement> {
    movements
        .iter()
        .filter(|movement| movement.counts_toward_totals() && range.contains(movement.date))
        .collect()
}

/// Relative change in percent; growth from zero counts as 100%.
pub fn percentage_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    (current - previous) / previous * 100.0
}

fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

fn chart_data(movements: &[&Movement], range: DateRange, filter: TimeFilter) -> Vec<ChartDataPoint> {
    let points = match filter {
        TimeFilter::Day => {
            // Movements carry no time of day, so everything lands in the first slot.
            let mut slots = [Totals::default(); 5];
            for movement in movements {
                slots[0].add(movement);
            }
            DAY_LABELS
                .iter()
                .zip(slots)
                .map(|(label, totals)| totals.into_point(*label))
                .collect()
        }
        TimeFilter::Week => range
            .days()
            .map(|day| {
                Totals::of(movements.iter().copied().filter(|m| m.date == day))
                    .into_point(day.format("%a").to_string())
            })
            .collect(),
        TimeFilter::Month => {
            let mut points = Vec::new();
            let mut start = range.start;
            let mut week = 1;
            while start <= range.end {
                let end = shift_days(start, 6).min(range.end);
                let bucket = DateRange::new(start, end);
                points.push(
                    Totals::of(movements.iter().copied().filter(|m| bucket.contains(m.date)))
                        .into_point(format!("W{week}")),
                );
                let Some(next) = start.checked_add_days(Days::new(7)) else {
                    break;
                };
                start = next;
                week += 1;
            }
            points
        }
        TimeFilter::Year => {
            let mut points = Vec::new();
            let mut start = range.start;
            while start <= range.end {
                let bucket = DateRange::new(start, month_end(start).min(range.end));
                points.push(
                    Totals::of(movements.iter().copied().filter(|m| bucket.contains(m.date)))
                        .into_point(start.format("%b").to_string()),
                );
                let next = start
                    .with_day(1)
                    .and_then(|first| first.checked_add_months(Months::new(1)));
                let Some(next) = next else {
                    break;
                };
                start = next;
            }
            points
        }
    };
    debug!("built {} chart points for {filter}", points.len());
    points
}

fn category_breakdown(movements: &[&Movement]) -> Vec<CategoryBreakdown> {
    let mut per_category: BTreeMap<Category, f64> = BTreeMap::new();
    for movement in movements.iter().filter(|m| m.is_expense()) {
        *per_category.entry(movement.category).or_default() += movement.magnitude();
    }
    let total: f64 = per_category.values().sum();
    if total == 0.0 {
        return Vec::new();
    }

    let mut breakdown: Vec<CategoryBreakdown> = per_category
        .into_iter()
        .map(|(category, amount)| CategoryBreakdown {
            name: breakdown_name(category),
            category,
            amount,
            percentage: round_half_up(amount / total * 100.0, 0) as i64,
        })
        .collect();
    breakdown.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    breakdown.truncate(BREAKDOWN_LIMIT);
    breakdown
}

/// Title-cased category code, e.g. `HOME_MAINTENANCE_REPAIRS` becomes
/// `Home Maintenance Repairs`.
fn breakdown_name(category: Category) -> String {
    category
        .code()
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
