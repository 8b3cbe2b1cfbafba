#![doc(test(attr(deny(warnings))))]

//! BeeHive Core holds the client-side logic of the BeeHive personal finance
//! app: category suggestions for movement descriptions, recurrence schedules
//! for planned movements, a time-bounded data cache with change-driven
//! invalidation, and period analytics.

pub mod analytics;
pub mod cache;
pub mod category;
pub mod config;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod schedule;
pub mod time;
pub mod utils;

use std::sync::Once;

pub use category::{all_categories, suggest_categories, Category};
pub use errors::{BeehiveError, Result};
pub use schedule::{compute_schedule, RecurrenceFrequency, ScheduleDescriptor};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let build = utils::build_info::current();
        tracing::info!("{} tracing initialized.", build.summary());
    });
}
