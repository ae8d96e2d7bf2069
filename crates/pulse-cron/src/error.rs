use thiserror::Error;

/// Errors that can occur while parsing or evaluating cron rules.
#[derive(Debug, Error)]
pub enum CronError {
    /// The rule text does not describe a valid five- or six-field rule.
    #[error("Invalid cron expression: {0}")]
    InvalidExpression(String),

    /// No matching instant exists within the four-year search horizon.
    #[error("No matching instant within the search horizon")]
    SearchExhausted,
}

pub type Result<T> = std::result::Result<T, CronError>;
