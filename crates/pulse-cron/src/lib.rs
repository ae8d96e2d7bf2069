//! `pulse-cron` — cron rules and self-rescheduling timers.
//!
//! # Overview
//!
//! A [`CronExpr`] is parsed once into six tagged field patterns and evaluated
//! as a pure function of an instant. [`next_occurrence`] scans forward one
//! second at a time (bounded to ~4 years) for the earliest matching instant,
//! and a [`CronJob`] sleeps until that instant, fires its callback, and
//! reschedules itself from a fresh clock reading until stopped.
//!
//! # Rule syntax
//!
//! Six whitespace-separated fields — second, minute, hour, day-of-month,
//! month, day-of-week (0 = Sunday). Five-field rules are accepted with the
//! second pinned to `0`. Each field is one of:
//!
//! | Form    | Meaning                                    |
//! |---------|--------------------------------------------|
//! | `*`     | any value                                  |
//! | `7`     | exactly 7                                  |
//! | `1-5`   | 1 through 5 inclusive                      |
//! | `*/15`  | values divisible by 15                     |
//! | `2-30/4`| 2 through 30 at step-4 offsets from 2      |
//! | `a,b,c` | any of the listed sub-patterns             |

pub mod error;
pub mod expr;
pub mod field;
pub mod job;
pub mod search;

pub use error::{CronError, Result};
pub use expr::CronExpr;
pub use field::FieldSpec;
pub use job::{CronJob, JobState};
pub use search::{next_occurrence, MAX_SEARCH_SECONDS};
