//! Six-field cron rules.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::error::{CronError, Result};
use crate::field::FieldSpec;

/// A fully parsed cron rule: second, minute, hour, day-of-month, month,
/// day-of-week (0 = Sunday).
///
/// Five-field rules are accepted as the same rule with second pinned to `0`,
/// so `*/5 * * * *` fires at second 0 of every fifth minute.
#[derive(Debug, Clone)]
pub struct CronExpr {
    text: String,
    second: FieldSpec,
    minute: FieldSpec,
    hour: FieldSpec,
    day_of_month: FieldSpec,
    month: FieldSpec,
    day_of_week: FieldSpec,
}

impl CronExpr {
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        let fields: [&str; 6] = match parts[..] {
            [sec, min, hour, dom, mon, dow] => [sec, min, hour, dom, mon, dow],
            [min, hour, dom, mon, dow] => ["0", min, hour, dom, mon, dow],
            _ => {
                return Err(CronError::InvalidExpression(format!(
                    "expected 5 or 6 fields, got {}: {text:?}",
                    parts.len()
                )))
            }
        };

        Ok(Self {
            text: text.to_string(),
            second: FieldSpec::parse(fields[0], 0, 59)?,
            minute: FieldSpec::parse(fields[1], 0, 59)?,
            hour: FieldSpec::parse(fields[2], 0, 23)?,
            day_of_month: FieldSpec::parse(fields[3], 1, 31)?,
            month: FieldSpec::parse(fields[4], 1, 12)?,
            day_of_week: FieldSpec::parse(fields[5], 0, 6)?,
        })
    }

    /// Whether `instant` satisfies all six fields. Sub-second precision is
    /// ignored; there is no day-of-month/day-of-week OR special case — both
    /// must match when both are constrained.
    pub fn matches(&self, instant: DateTime<Utc>) -> bool {
        self.second.matches(instant.second())
            && self.minute.matches(instant.minute())
            && self.hour.matches(instant.hour())
            && self.day_of_month.matches(instant.day())
            && self.month.matches(instant.month())
            && self
                .day_of_week
                .matches(instant.weekday().num_days_from_sunday())
    }

    /// The rule text this expression was parsed from.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for CronExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for CronExpr {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        CronExpr::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        // 2024-01-01 is a Monday.
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, s).unwrap()
    }

    #[test]
    fn every_second_matches_everything() {
        let expr = CronExpr::parse("* * * * * *").unwrap();
        assert!(expr.matches(at(0, 0, 0)));
        assert!(expr.matches(at(23, 59, 59)));
    }

    #[test]
    fn five_fields_pin_second_to_zero() {
        let expr = CronExpr::parse("*/5 * * * *").unwrap();
        assert!(expr.matches(at(12, 30, 0)));
        assert!(!expr.matches(at(12, 30, 5)));
        assert!(!expr.matches(at(12, 31, 0)));
    }

    #[test]
    fn all_fields_are_required_to_match() {
        let expr = CronExpr::parse("0 30 12 1 1 1").unwrap();
        assert!(expr.matches(at(12, 30, 0)));
        // Same wall-clock time but Tuesday 2024-01-02 (dom 2, dow 2).
        let tuesday = Utc.with_ymd_and_hms(2024, 1, 2, 12, 30, 0).unwrap();
        assert!(!expr.matches(tuesday));
    }

    #[test]
    fn day_of_week_counts_from_sunday() {
        let expr = CronExpr::parse("0 0 0 * * 0").unwrap();
        let sunday = Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap();
        assert!(expr.matches(sunday));
        assert!(!expr.matches(at(0, 0, 0)));
    }

    #[test]
    fn wrong_field_count_rejected() {
        assert!(CronExpr::parse("* * * *").is_err());
        assert!(CronExpr::parse("* * * * * * *").is_err());
        assert!(CronExpr::parse("").is_err());
    }

    #[test]
    fn display_keeps_original_text() {
        let expr = CronExpr::parse("0 0 * * *").unwrap();
        assert_eq!(expr.to_string(), "0 0 * * *");
    }

    #[test]
    fn impossible_date_still_parses() {
        // Day-of-month 31 in February never matches but is not an error.
        assert!(CronExpr::parse("0 0 0 31 2 *").is_ok());
    }
}
