//! `pulse-bus` — timeframe tick events over a publish/subscribe bus.
//!
//! # Overview
//!
//! A [`SubscriptionManager`] turns timeframe tokens (`"5s"`, `"1d"`) or cron
//! strings into running [`pulse_cron::CronJob`]s, one per distinct key, and
//! publishes every tick on an [`EventBus`].
//!
//! # Topics
//!
//! | Topic           | Carries                                        |
//! |-----------------|------------------------------------------------|
//! | `TIME/<key>`    | Ticks of one subscription                      |
//! | `TIME/*`        | Every tick, regardless of timeframe            |
//! | `SUBSCRIPTIONS` | `SUBSCRIBED` confirmations for new keys        |

pub mod bus;
pub mod error;
pub mod event;
pub mod manager;
pub mod timeframe;

pub use bus::EventBus;
pub use error::{BusError, Result};
pub use event::{
    time_topic, Event, EventPayload, SubscribedPayload, TickPayload, EVENT_SUBSCRIBED,
    TOPIC_SUBSCRIPTIONS, TOPIC_TIME_WILDCARD,
};
pub use manager::SubscriptionManager;
pub use timeframe::to_cron_rule;
