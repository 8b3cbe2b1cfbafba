use std::sync::Arc;

use tracing::{debug, warn};

use super::{ChangeNotifier, DataChange, SubscriptionId};
use crate::{
    cache::{CacheKeys, DataCache},
    errors::Result,
};

/// Keeps cached landing data consistent with data-change events.
#[derive(Clone)]
pub struct CacheInvalidator {
    cache: Arc<DataCache>,
}

impl CacheInvalidator {
    pub fn new(cache: Arc<DataCache>) -> Self {
        Self { cache }
    }

    /// Subscribes an invalidator for `cache` to `notifier`.
    pub fn attach(notifier: &ChangeNotifier, cache: Arc<DataCache>) -> SubscriptionId {
        let invalidator = Self::new(cache);
        notifier.subscribe(move |event| {
            if let Err(err) = invalidator.handle(event) {
                warn!("cache invalidation for {:?} failed: {}", event, err);
            }
        })
    }

    /// Applies the invalidation rule for `event`; returns removed entries.
    pub fn handle(&self, event: &DataChange) -> Result<usize> {
        let user_id = event.user_id();
        let removed = match event {
            DataChange::MovementChanged { .. } | DataChange::AccountChanged { .. } => self
                .cache
                .invalidate_matching(&CacheKeys::balance_related(user_id)?),
            DataChange::PlannedMovementChanged { .. } => {
                self.cache
                    .invalidate_matching(&CacheKeys::balance_related(user_id)?)
                    + self
                        .cache
                        .invalidate_matching(&CacheKeys::upcoming_for_user(user_id)?)
            }
            DataChange::UserSignedOut { .. } => self
                .cache
                .invalidate_matching(&CacheKeys::all_landing_for_user(user_id)?),
        };
        debug!("{:?} invalidated {} cache entries", event, removed);
        Ok(removed)
    }
}
