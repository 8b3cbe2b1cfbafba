//! Explicit publish/subscribe channel for data-change notifications.

pub mod invalidator;

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub use invalidator::CacheInvalidator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DataChange {
    MovementChanged { user_id: String, account_id: String },
    PlannedMovementChanged { user_id: String, account_id: String },
    AccountChanged { user_id: String },
    UserSignedOut { user_id: String },
}

impl DataChange {
    pub fn user_id(&self) -> &str {
        match self {
            DataChange::MovementChanged { user_id, .. }
            | DataChange::PlannedMovementChanged { user_id, .. }
            | DataChange::AccountChanged { user_id }
            | DataChange::UserSignedOut { user_id } => user_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

type Handler = Arc<dyn Fn(&DataChange) + Send + Sync>;

/// Fans data-change events out to registered handlers in subscription order.
#[derive(Default)]
pub struct ChangeNotifier {
    handlers: Mutex<Vec<(SubscriptionId, Handler)>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&DataChange) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.lock().push((id, Arc::new(handler)));
        debug!("subscriber {id} registered");
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.lock();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    /// Delivers `event` to every current subscriber; returns how many ran.
    ///
    /// Handlers run on a snapshot, so they may subscribe or unsubscribe.
    pub fn publish(&self, event: &DataChange) -> usize {
        let snapshot: Vec<Handler> = self
            .lock()
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in &snapshot {
            handler(event);
        }
        debug!("published {:?} to {} subscribers", event, snapshot.len());
        snapshot.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Handler)>> {
        self.handlers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement(user: &str) -> DataChange {
        DataChange::MovementChanged {
            user_id: user.into(),
            account_id: "acc".into(),
        }
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        let notifier = ChangeNotifier::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        for name in ["first", "second"] {
            let log = Arc::clone(&log);
            notifier.subscribe(move |event| {
                log.lock().unwrap().push(format!("{name}:{}", event.user_id()));
            });
        }
        assert_eq!(notifier.publish(&movement("7")), 2);
        assert_eq!(*log.lock().unwrap(), vec!["first:7", "second:7"]);
    }

    #[test]
    fn unsubscribed_handlers_stop_receiving() {
        let notifier = ChangeNotifier::new();
        let id = notifier.subscribe(|_| {});
        assert_eq!(notifier.subscriber_count(), 1);
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        assert_eq!(notifier.publish(&movement("1")), 0);
    }

    #[test]
    fn handler_may_subscribe_during_publish() {
        let notifier = Arc::new(ChangeNotifier::new());
        let inner = Arc::clone(&notifier);
        notifier.subscribe(move |_| {
            inner.subscribe(|_| {});
        });
        assert_eq!(notifier.publish(&movement("1")), 1);
        assert_eq!(notifier.subscriber_count(), 2);
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let json = serde_json::to_value(DataChange::UserSignedOut {
            user_id: "9".into(),
        })
        .unwrap();
        assert_eq!(json["type"], "user_signed_out");
    }
}
