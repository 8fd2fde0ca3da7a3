//! Calendar ranges for history requests

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("unrecognised range '{0}' (use 30d, mtd, ytd or FROM:TO dates)")]
    Unrecognised(String),
    #[error("invalid date '{0}'")]
    InvalidDate(String),
    #[error("range starts after it ends ({from} > {to})")]
    Inverted { from: NaiveDate, to: NaiveDate },
}

/// Requested window of calendar days, relative to "today" unless custom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// The last `n` calendar days, today included
    Days(u32),
    MonthToDate,
    YearToDate,
    Custom { from: NaiveDate, to: NaiveDate },
}

/// Inclusive resolved bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Calendar range wide enough to hold `sessions` trading days
    pub fn for_sessions(sessions: usize) -> Self {
        // five sessions a week plus slack for exchange holidays
        let days = sessions.saturating_mul(7) / 5 + 14;
        DateRange::Days(u32::try_from(days).unwrap_or(u32::MAX))
    }

    pub fn resolve(&self, today: NaiveDate) -> DateSpan {
        match *self {
            DateRange::Days(n) => {
                let back = i64::from(n.max(1)) - 1;
                DateSpan {
                    from: today - Duration::days(back),
                    to: today,
                }
            }
            DateRange::MonthToDate => DateSpan {
                from: today.with_day(1).unwrap_or(today),
                to: today,
            },
            DateRange::YearToDate => DateSpan {
                from: NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
                to: today,
            },
            DateRange::Custom { from, to } => DateSpan { from, to },
        }
    }
}

impl FromStr for DateRange {
    type Err = DateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        match text.as_str() {
            "mtd" => return Ok(DateRange::MonthToDate),
            "ytd" => return Ok(DateRange::YearToDate),
            _ => {}
        }

        if let Some(days) = text.strip_suffix('d') {
            if let Ok(n) = days.parse::<u32>() {
                if n > 0 {
                    return Ok(DateRange::Days(n));
                }
            }
        }

        if let Some((from, to)) = text.split_once(':') {
            let parse = |d: &str| {
                let d = d.trim();
                NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .ok()
                    .or_else(|| parse_ddmmyyyy(d))
                    .ok_or_else(|| DateRangeError::InvalidDate(d.to_string()))
            };
            let (from, to) = (parse(from)?, parse(to)?);
            if from > to {
                return Err(DateRangeError::Inverted { from, to });
            }
            return Ok(DateRange::Custom { from, to });
        }

        Err(DateRangeError::Unrecognised(s.trim().to_string()))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRange::Days(n) => write!(f, "{}d", n),
            DateRange::MonthToDate => write!(f, "mtd"),
            DateRange::YearToDate => write!(f, "ytd"),
            DateRange::Custom { from, to } => write!(f, "{}:{}", from, to),
        }
    }
}

/// Parse a `DD-MM-YYYY` date, rejecting impossible calendar days
pub fn parse_ddmmyyyy(s: &str) -> Option<NaiveDate> {
    let mut parts = s.trim().split('-');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
