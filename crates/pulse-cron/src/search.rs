//! Bounded forward search for the next instant matching a rule.

use chrono::{DateTime, Duration, Utc};

use crate::error::{CronError, Result};
use crate::expr::CronExpr;

/// Search horizon in candidate seconds (~4 years).
pub const MAX_SEARCH_SECONDS: i64 = 4 * 365 * 24 * 3600;

/// Earliest whole-second instant `>= from` that satisfies `expr`.
///
/// When `from` itself lies on a whole-second boundary and matches, it is
/// returned unchanged, which lets a freshly started job fire immediately.
/// Returns [`CronError::SearchExhausted`] when nothing matches within
/// [`MAX_SEARCH_SECONDS`] — never a silently wrong instant.
pub fn next_occurrence(expr: &CronExpr, from: DateTime<Utc>) -> Result<DateTime<Utc>> {
    next_occurrence_within(expr, from, MAX_SEARCH_SECONDS)
}

fn next_occurrence_within(
    expr: &CronExpr,
    from: DateTime<Utc>,
    horizon: i64,
) -> Result<DateTime<Utc>> {
    if from.timestamp_subsec_nanos() == 0 && expr.matches(from) {
        return Ok(from);
    }

    // timestamp() floors sub-second noise, so this is the start of the next
    // whole second. from_timestamp only fails at the edges of chrono's range.
    let mut candidate = DateTime::<Utc>::from_timestamp(from.timestamp() + 1, 0)
        .ok_or(CronError::SearchExhausted)?;

    for _ in 0..horizon {
        if expr.matches(candidate) {
            return Ok(candidate);
        }
        candidate += Duration::seconds(1);
    }

    Err(CronError::SearchExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn expr(text: &str) -> CronExpr {
        CronExpr::parse(text).expect("parse failed")
    }

    #[test]
    fn matching_boundary_instant_returned_unchanged() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 45).unwrap();
        let next = next_occurrence(&expr("* * * * * *"), from).unwrap();
        assert_eq!(next, from);
    }

    #[test]
    fn minute_boundary_rule_advances_to_next_minute() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 45).unwrap();
        let next = next_occurrence(&expr("0 * * * * *"), from).unwrap();
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 1, 1, 12, 31, 0).unwrap());
    }

    #[test]
    fn stepped_seconds_advance_to_next_multiple() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 7).unwrap();
        let next = next_occurrence(&expr("*/5 * * * * *"), from).unwrap();
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 10).unwrap());
    }

    #[test]
    fn daily_rule_advances_to_next_midnight() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
        let next = next_occurrence(&expr("0 0 * * *"), from).unwrap();
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn sub_second_start_rounds_up_to_next_second() {
        let from = Utc
            .with_ymd_and_hms(2024, 1, 1, 12, 30, 45)
            .unwrap()
            .with_nanosecond(500_000_000)
            .unwrap();
        let next = next_occurrence(&expr("* * * * * *"), from).unwrap();
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 46).unwrap());
        assert_eq!(next.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn exhausted_horizon_is_an_error() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let result = next_occurrence_within(&expr("30 * * * * *"), from, 10);
        assert!(matches!(result, Err(CronError::SearchExhausted)));
    }

    #[test]
    fn boundary_instant_that_does_not_match_is_skipped() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 45).unwrap();
        let next = next_occurrence(&expr("50 * * * * *"), from).unwrap();
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 50).unwrap());
    }
}
