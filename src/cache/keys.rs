use regex::Regex;

use crate::errors::Result;

/// Builders for the cache keys and invalidation patterns used by the app.
pub struct CacheKeys;

impl CacheKeys {
    pub fn landing_stats(user_id: &str) -> String {
        format!("landing:stats:{user_id}")
    }

    pub fn total_balance(user_id: &str) -> String {
        format!("landing:total-balance:{user_id}")
    }

    pub fn balance_trend(user_id: &str) -> String {
        format!("landing:balance-trend:{user_id}")
    }

    pub fn month_income(user_id: &str, year: i32, month: u32) -> String {
        format!("landing:month-income:{user_id}:{year}-{month}")
    }

    pub fn month_expenses(user_id: &str, year: i32, month: u32) -> String {
        format!("landing:month-expenses:{user_id}:{year}-{month}")
    }

    pub fn upcoming_planned(user_id: &str, year: i32, month: u32) -> String {
        format!("planned:upcoming:{user_id}:{year}-{month}")
    }

    /// Every landing-page key belonging to `user_id`.
    pub fn all_landing_for_user(user_id: &str) -> Result<Regex> {
        let user = regex::escape(user_id);
        Ok(Regex::new(&format!(r"^landing:.*:{user}(:|$)"))?)
    }

    /// Landing keys derived from account balances.
    pub fn balance_related(user_id: &str) -> Result<Regex> {
        let user = regex::escape(user_id);
        Ok(Regex::new(&format!(r"^landing:(total-balance|balance-trend|stats):{user}(:|$)"))?)
    }

    pub fn upcoming_for_user(user_id: &str) -> Result<Regex> {
        let user = regex::escape(user_id);
        Ok(Regex::new(&format!(r"^planned:upcoming:{user}:"))?)
    }
}
