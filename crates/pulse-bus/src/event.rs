//! Event types and topic names.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Topic carrying subscription confirmations.
pub const TOPIC_SUBSCRIPTIONS: &str = "SUBSCRIPTIONS";

/// Catch-all topic receiving every tick regardless of timeframe.
pub const TOPIC_TIME_WILDCARD: &str = "TIME/*";

/// Event type of a subscription confirmation.
pub const EVENT_SUBSCRIBED: &str = "SUBSCRIBED";

/// Exact tick topic for one subscription key.
pub fn time_topic(timeframe: &str) -> String {
    format!("TIME/{timeframe}")
}

/// One event as delivered to listeners and serialised on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// `TIME/<key>` for ticks, [`EVENT_SUBSCRIBED`] for confirmations.
    #[serde(rename = "type")]
    pub event_type: String,
    pub payload: EventPayload,
}

/// Payload variants. Untagged on the wire; `Tick` is tried first since its
/// field set is a superset of `Subscribed`'s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventPayload {
    Tick(TickPayload),
    Subscribed(SubscribedPayload),
}

/// Payload of a `TIME/<key>` tick and its `TIME/*` mirror.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickPayload {
    /// Fire time in UTC, truncated to the whole second (always `.000Z`).
    pub timestamp: String,
    /// Original subscription key.
    pub timeframe: String,
}

/// Payload of a [`EVENT_SUBSCRIBED`] confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribedPayload {
    pub timeframe: String,
}

impl Event {
    /// Tick event for `timeframe`, stamped with `at` truncated to the second.
    pub fn tick(timeframe: &str, at: DateTime<Utc>) -> Self {
        let whole_second = at.with_nanosecond(0).unwrap_or(at);
        Self {
            event_type: time_topic(timeframe),
            payload: EventPayload::Tick(TickPayload {
                timestamp: whole_second.to_rfc3339_opts(SecondsFormat::Millis, true),
                timeframe: timeframe.to_string(),
            }),
        }
    }

    /// Confirmation event published on [`TOPIC_SUBSCRIPTIONS`].
    pub fn subscribed(timeframe: &str) -> Self {
        Self {
            event_type: EVENT_SUBSCRIBED.to_string(),
            payload: EventPayload::Subscribed(SubscribedPayload {
                timeframe: timeframe.to_string(),
            }),
        }
    }
}
