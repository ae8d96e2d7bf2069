use thiserror::Error;

use pulse_cron::CronError;

/// Errors surfaced synchronously from [`crate::SubscriptionManager::subscribe`].
#[derive(Debug, Error)]
pub enum BusError {
    /// The token is neither a recognised shorthand nor a cron string.
    #[error("Invalid timeframe or cron string: {0:?}")]
    InvalidTimeframe(String),

    /// The token looked like a cron string but failed to parse as a rule.
    #[error(transparent)]
    Cron(#[from] CronError),
}

pub type Result<T> = std::result::Result<T, BusError>;
