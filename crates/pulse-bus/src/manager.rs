//! Subscription registry: one running job per timeframe key.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::broadcast;
use tracing::info;

use pulse_cron::{CronExpr, CronJob};

use crate::bus::EventBus;
use crate::error::Result;
use crate::event::{time_topic, Event, TOPIC_SUBSCRIPTIONS, TOPIC_TIME_WILDCARD};
use crate::timeframe::to_cron_rule;

/// Maps subscription keys to running jobs and fans their ticks out as events.
///
/// Every tick publishes twice with an identical payload: once on the exact
/// `TIME/<key>` topic and once on the `TIME/*` catch-all. The single lock
/// around the job map serialises `subscribe` and `unsubscribe_all`; ticks
/// never take it.
pub struct SubscriptionManager {
    bus: Arc<EventBus>,
    jobs: Mutex<HashMap<String, CronJob>>,
}

impl SubscriptionManager {
    pub fn new() -> Self {
        Self {
            bus: Arc::new(EventBus::new()),
            jobs: Mutex::new(HashMap::new()),
        }
    }

    /// Listen on [`TOPIC_SUBSCRIPTIONS`], an exact `TIME/<key>`, or the
    /// [`TOPIC_TIME_WILDCARD`] catch-all.
    pub fn on(&self, topic: &str) -> broadcast::Receiver<Event> {
        self.bus.on(topic)
    }

    /// Start ticking for `timeframe` — a shorthand token or a cron string.
    ///
    /// Re-subscribing an existing key is a no-op: the stored job keeps
    /// running, no duplicate timer is created, and no second confirmation is
    /// published. On first-time registration a [`Event::subscribed`]
    /// confirmation goes out on [`TOPIC_SUBSCRIPTIONS`]. Must be called from
    /// within a tokio runtime.
    pub fn subscribe(&self, timeframe: &str) -> Result<()> {
        let mut jobs = self.jobs.lock().unwrap();
        if jobs.contains_key(timeframe) {
            return Ok(());
        }

        let rule = to_cron_rule(timeframe)?;
        let expr = CronExpr::parse(&rule)?;

        let bus = Arc::clone(&self.bus);
        let key = timeframe.to_string();
        let mut job = CronJob::new(expr, move || {
            let event = Event::tick(&key, Utc::now());
            bus.emit(&time_topic(&key), event.clone());
            bus.emit(TOPIC_TIME_WILDCARD, event);
        });
        job.start();
        jobs.insert(timeframe.to_string(), job);
        info!(timeframe = %timeframe, rule = %rule, "subscription added");

        self.bus.emit(TOPIC_SUBSCRIPTIONS, Event::subscribed(timeframe));
        Ok(())
    }

    /// Stop every job and clear the registry. Safe to call repeatedly and on
    /// an empty registry; completion callbacks of stopped jobs fire before
    /// this returns.
    pub fn unsubscribe_all(&self) {
        let mut jobs = self.jobs.lock().unwrap();
        for (key, job) in jobs.iter_mut() {
            job.stop();
            info!(timeframe = %key, "subscription stopped");
        }
        jobs.clear();
    }

    /// Number of distinct active subscription keys.
    pub fn subscription_count(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }

    /// Whether `timeframe` currently has a stored job.
    pub fn is_subscribed(&self, timeframe: &str) -> bool {
        self.jobs.lock().unwrap().contains_key(timeframe)
    }
}

impl Default for SubscriptionManager {
    fn default() -> Self {
        Self::new()
    }
}
