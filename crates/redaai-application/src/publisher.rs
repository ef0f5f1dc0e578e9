//! Event subscription plumbing shared by the stores.

use std::sync::Mutex;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Fans store events out to any number of subscribers.
///
/// Subscribers whose receiver was dropped are pruned on the next
/// publish.
pub(crate) struct EventPublisher<E> {
    subscribers: Mutex<Vec<UnboundedSender<E>>>,
}

impl<E: Clone> EventPublisher<E> {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn subscribe(&self) -> UnboundedReceiver<E> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers
            .lock()
            .expect("subscriber list poisoned")
            .push(tx);
        rx
    }

    pub(crate) fn publish(&self, event: E) {
        let mut subscribers = self.subscribers.lock().expect("subscriber list poisoned");
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_subscribers_receive_events() {
        let publisher: EventPublisher<u32> = EventPublisher::new();
        let mut first = publisher.subscribe();
        let mut second = publisher.subscribe();

        publisher.publish(7);

        assert_eq!(first.recv().await, Some(7));
        assert_eq!(second.recv().await, Some(7));
    }

    #[tokio::test]
    async fn test_dropped_subscribers_are_pruned() {
        let publisher: EventPublisher<u32> = EventPublisher::new();
        let first = publisher.subscribe();
        let mut second = publisher.subscribe();

        drop(first);
        publisher.publish(1);
        publisher.publish(2);

        assert_eq!(second.recv().await, Some(1));
        assert_eq!(second.recv().await, Some(2));
        assert_eq!(publisher.subscribers.lock().unwrap().len(), 1);
    }
}
