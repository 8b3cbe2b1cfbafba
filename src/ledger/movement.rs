use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementStatus {
    Pending,
    Confirmed,
    Cancelled,
    Failed,
}

/// A single money movement on an account.
///
/// Expense amounts may be stored signed or unsigned; aggregations use
/// [`Movement::magnitude`] for expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: Uuid,
    pub account_id: Uuid,
    pub description: String,
    pub amount: f64,
    pub kind: MovementKind,
    pub status: MovementStatus,
    pub category: Category,
    pub date: NaiveDate,
}

impl Movement {
    pub fn new(
        account_id: Uuid,
        description: impl Into<String>,
        amount: f64,
        kind: MovementKind,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            description: description.into(),
            amount,
            kind,
            status: MovementStatus::Confirmed,
            category,
            date,
        }
    }

    pub fn income(account_id: Uuid, description: &str, amount: f64, date: NaiveDate) -> Self {
        Self::new(
            account_id,
            description,
            amount,
            MovementKind::Income,
            Category::Salary,
            date,
        )
    }

    pub fn expense(
        account_id: Uuid,
        description: &str,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self::new(
            account_id,
            description,
            amount,
            MovementKind::Expense,
            category,
            date,
        )
    }

    pub fn with_status(mut self, status: MovementStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == MovementKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == MovementKind::Expense
    }

    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    /// Only confirmed, non-transfer movements feed statistics.
    pub fn counts_toward_totals(&self) -> bool {
        self.status == MovementStatus::Confirmed && self.category != Category::Transfer
    }
}
