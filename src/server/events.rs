//! Mutation change events.
//!
//! Every successful mutation publishes an [`EntityChanged`] event naming the
//! affected table and, when known, the individual row. Read-side caches
//! subscribe and invalidate matching entries instead of each mutation
//! hard-wiring knowledge of every cache. Failed mutations publish nothing.

use tokio::sync::broadcast;
use uuid::Uuid;

/// A row in `table` (or the whole collection when `id` is `None`) changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityChanged {
    pub table: &'static str,
    pub id: Option<Uuid>,
}

/// Broadcast bus for [`EntityChanged`] events.
///
/// Publishing never blocks and never fails the mutation: a bus with no
/// subscribers simply drops the event.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<EntityChanged>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { tx }
    }

    pub fn publish(&self, table: &'static str, id: Option<Uuid>) {
        let event = EntityChanged { table, id };
        tracing::debug!(table = table, id = ?id, "entity changed");
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EntityChanged> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        let id = Uuid::new_v4();
        bus.publish("donors", Some(id));

        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            EntityChanged {
                table: "donors",
                id: Some(id)
            }
        );
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_a_no_op() {
        let bus = EventBus::new();

        // Must not panic or error
        bus.publish("areas", None);
    }
}
