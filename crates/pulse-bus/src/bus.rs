//! Topic-keyed event fan-out.

use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::broadcast;

use crate::event::Event;

const CHANNEL_CAPACITY: usize = 256;

/// Fan-out events to listeners over per-topic tokio broadcast channels.
///
/// Channels are created lazily on first subscription; emitting to a topic
/// with no live receivers silently drops the event.
pub struct EventBus {
    topics: Mutex<HashMap<String, broadcast::Sender<Event>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            topics: Mutex::new(HashMap::new()),
        }
    }

    /// Subscribe to one named topic.
    pub fn on(&self, topic: &str) -> broadcast::Receiver<Event> {
        let mut topics = self.topics.lock().unwrap();
        topics
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Publish an event to one named topic's subscribers.
    pub fn emit(&self, topic: &str, event: Event) {
        let topics = self.topics.lock().unwrap();
        if let Some(tx) = topics.get(topic) {
            let _ = tx.send(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
