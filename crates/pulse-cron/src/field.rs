//! Single cron field patterns.
//!
//! Patterns are parsed once when a rule is constructed and evaluated as a
//! pure function afterwards, so the per-second candidate scan never touches
//! the original text.

use crate::error::{CronError, Result};

/// One parsed cron field pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// `*` — any value.
    Wildcard,
    /// A single value, e.g. `30`.
    Exact(u32),
    /// Comma-separated alternatives, e.g. `1,15,30-40`.
    List(Vec<FieldSpec>),
    /// Inclusive range `a-b`.
    Range(u32, u32),
    /// `*/s` — values divisible by the step.
    SteppedWildcard(u32),
    /// `a-b/s` — values in the range at step offsets from `a`.
    SteppedRange(u32, u32, u32),
}

impl FieldSpec {
    /// Parse one field pattern, validating values against `[min, max]`.
    ///
    /// A step of zero is rejected here so evaluation never divides by it.
    pub fn parse(text: &str, min: u32, max: u32) -> Result<Self> {
        let text = text.trim();

        if text == "*" {
            return Ok(FieldSpec::Wildcard);
        }

        if text.contains(',') {
            let items = text
                .split(',')
                .map(|part| FieldSpec::parse(part, min, max))
                .collect::<Result<Vec<_>>>()?;
            return Ok(FieldSpec::List(items));
        }

        if let Some((range, step)) = text.split_once('/') {
            let step = parse_number(step, text)?;
            if step == 0 {
                return Err(CronError::InvalidExpression(format!(
                    "step must be non-zero in {text:?}"
                )));
            }
            if range == "*" {
                return Ok(FieldSpec::SteppedWildcard(step));
            }
            let (start, end) = parse_range(range, min, max, text)?;
            return Ok(FieldSpec::SteppedRange(start, end, step));
        }

        if text.contains('-') {
            let (start, end) = parse_range(text, min, max, text)?;
            return Ok(FieldSpec::Range(start, end));
        }

        let value = parse_number(text, text)?;
        check_domain(value, min, max, text)?;
        Ok(FieldSpec::Exact(value))
    }

    /// Whether `value` satisfies this pattern.
    pub fn matches(&self, value: u32) -> bool {
        match self {
            FieldSpec::Wildcard => true,
            FieldSpec::Exact(n) => value == *n,
            FieldSpec::List(items) => items.iter().any(|item| item.matches(value)),
            FieldSpec::Range(start, end) => (*start..=*end).contains(&value),
            FieldSpec::SteppedWildcard(step) => value % step == 0,
            FieldSpec::SteppedRange(start, end, step) => {
                (*start..=*end).contains(&value) && (value - start) % step == 0
            }
        }
    }
}

fn parse_number(text: &str, pattern: &str) -> Result<u32> {
    text.trim()
        .parse()
        .map_err(|_| CronError::InvalidExpression(format!("bad number in {pattern:?}")))
}

fn parse_range(text: &str, min: u32, max: u32, pattern: &str) -> Result<(u32, u32)> {
    let (start, end) = text.split_once('-').ok_or_else(|| {
        CronError::InvalidExpression(format!("expected a range in {pattern:?}"))
    })?;
    let start = parse_number(start, pattern)?;
    let end = parse_number(end, pattern)?;
    check_domain(start, min, max, pattern)?;
    check_domain(end, min, max, pattern)?;
    if start > end {
        return Err(CronError::InvalidExpression(format!(
            "inverted range in {pattern:?}"
        )));
    }
    Ok((start, end))
}

fn check_domain(value: u32, min: u32, max: u32, pattern: &str) -> Result<()> {
    if value < min || value > max {
        return Err(CronError::InvalidExpression(format!(
            "{value} out of range {min}-{max} in {pattern:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> FieldSpec {
        FieldSpec::parse(text, 0, 59).expect("parse failed")
    }

    #[test]
    fn wildcard_matches_anything() {
        let spec = parse("*");
        assert!(spec.matches(0));
        assert!(spec.matches(59));
    }

    #[test]
    fn exact_value() {
        let spec = parse("30");
        assert!(spec.matches(30));
        assert!(!spec.matches(31));
    }

    #[test]
    fn stepped_range_matches_offsets_from_start() {
        let spec = parse("10-20/2");
        assert!(spec.matches(10));
        assert!(!spec.matches(11));
        assert!(spec.matches(20));
        assert!(!spec.matches(22));
    }

    #[test]
    fn list_matches_any_member() {
        let spec = parse("5,10,15");
        assert!(spec.matches(10));
        assert!(!spec.matches(7));
    }

    #[test]
    fn list_can_mix_forms() {
        let spec = parse("1-3,30,*/20");
        assert!(spec.matches(2));
        assert!(spec.matches(30));
        assert!(spec.matches(40));
        assert!(!spec.matches(7));
    }

    #[test]
    fn stepped_wildcard_uses_divisibility() {
        let spec = parse("*/5");
        assert!(spec.matches(0));
        assert!(spec.matches(55));
        assert!(!spec.matches(7));
    }

    #[test]
    fn plain_range_is_inclusive() {
        let spec = parse("10-20");
        assert!(spec.matches(10));
        assert!(spec.matches(20));
        assert!(!spec.matches(9));
        assert!(!spec.matches(21));
    }

    #[test]
    fn zero_step_rejected() {
        assert!(FieldSpec::parse("*/0", 0, 59).is_err());
        assert!(FieldSpec::parse("1-10/0", 0, 59).is_err());
    }

    #[test]
    fn out_of_domain_value_rejected() {
        assert!(FieldSpec::parse("60", 0, 59).is_err());
        assert!(FieldSpec::parse("0", 1, 31).is_err());
        assert!(FieldSpec::parse("50-70", 0, 59).is_err());
    }

    #[test]
    fn inverted_range_rejected() {
        assert!(FieldSpec::parse("20-10", 0, 59).is_err());
    }

    #[test]
    fn garbage_rejected() {
        assert!(FieldSpec::parse("abc", 0, 59).is_err());
        assert!(FieldSpec::parse("5/2", 0, 59).is_err());
        assert!(FieldSpec::parse("", 0, 59).is_err());
    }
}
