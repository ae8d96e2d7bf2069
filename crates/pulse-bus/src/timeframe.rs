//! Shorthand timeframe tokens.

use crate::error::{BusError, Result};

/// Translate a shorthand token (`"5s"`, `"2h"`) into a cron rule.
///
/// Classification is deliberately duck-typed: anything that splits into 5 or
/// 6 whitespace-separated parts is treated as an already-valid cron string
/// and passed through unchanged (the rule parser has the final say).
/// Otherwise the last character is the unit and the leading digits the count:
///
/// | Unit | Rule                                  |
/// |------|---------------------------------------|
/// | `s`  | `*/N * * * * *`                       |
/// | `m`  | `*/N * * * *`                         |
/// | `h`  | `0 */N * * *`                         |
/// | `d`  | `0 0 * * *` (N = 1), `0 0 */N * *`    |
pub fn to_cron_rule(token: &str) -> Result<String> {
    let parts = token.split_whitespace().count();
    if parts == 5 || parts == 6 {
        return Ok(token.to_string());
    }

    let unit = token
        .chars()
        .last()
        .ok_or_else(|| BusError::InvalidTimeframe(token.to_string()))?;
    let count: u64 = token[..token.len() - unit.len_utf8()]
        .parse()
        .map_err(|_| BusError::InvalidTimeframe(token.to_string()))?;

    let rule = match unit {
        's' => format!("*/{count} * * * * *"),
        'm' => format!("*/{count} * * * *"),
        'h' => format!("0 */{count} * * *"),
        'd' if count == 1 => "0 0 * * *".to_string(),
        'd' => format!("0 0 */{count} * *"),
        _ => return Err(BusError::InvalidTimeframe(token.to_string())),
    };
    Ok(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_shorthand() {
        assert_eq!(to_cron_rule("5s").unwrap(), "*/5 * * * * *");
        assert_eq!(to_cron_rule("1s").unwrap(), "*/1 * * * * *");
    }

    #[test]
    fn minutes_shorthand() {
        assert_eq!(to_cron_rule("10m").unwrap(), "*/10 * * * *");
    }

    #[test]
    fn hours_shorthand() {
        assert_eq!(to_cron_rule("3h").unwrap(), "0 */3 * * *");
    }

    #[test]
    fn single_day_differs_from_multi_day() {
        assert_eq!(to_cron_rule("1d").unwrap(), "0 0 * * *");
        assert_eq!(to_cron_rule("7d").unwrap(), "0 0 */7 * *");
    }

    #[test]
    fn cron_strings_pass_through() {
        assert_eq!(to_cron_rule("*/15 * * * *").unwrap(), "*/15 * * * *");
        assert_eq!(
            to_cron_rule("0 0 12 * * 1-5").unwrap(),
            "0 0 12 * * 1-5"
        );
    }

    #[test]
    fn unknown_unit_rejected() {
        assert!(matches!(
            to_cron_rule("5x"),
            Err(BusError::InvalidTimeframe(_))
        ));
    }

    #[test]
    fn missing_count_rejected() {
        assert!(to_cron_rule("s").is_err());
        assert!(to_cron_rule("").is_err());
    }

    #[test]
    fn non_numeric_count_rejected() {
        assert!(to_cron_rule("abcs").is_err());
    }
}
