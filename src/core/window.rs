//! The daily check-in window: an inclusive time-of-day range.
//! Dates never enter the comparison, only the wall-clock time does.

use crate::errors::{AppError, AppResult};
use crate::utils::time::{format_time_12h, format_time_24h, parse_time};
use chrono::NaiveTime;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckinWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl CheckinWindow {
    /// A window must not be inverted; `start == end` is a one-second window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidWindow(format!(
                "start {} is after end {}",
                format_time_24h(start),
                format_time_24h(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// Build from a pair of "HH:MM[:SS]" bounds (config file values).
    pub fn from_bounds(start: &str, end: &str) -> AppResult<Self> {
        let s = parse_time(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
        let e = parse_time(end).ok_or_else(|| AppError::InvalidTime(end.to_string()))?;
        Self::new(s, e)
    }

    /// Parse the compact "START-END" form used by `serve --window`.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let (start, end) = raw.split_once('-').ok_or_else(|| {
            AppError::InvalidWindow(format!("expected START-END, got '{raw}'"))
        })?;
        Self::from_bounds(start.trim(), end.trim())
    }

    /// Inclusive on both bounds. The probe keeps sub-second precision, so
    /// 19:30:00.4 already falls outside a window ending at 19:30:00.
    pub fn contains(&self, t: NaiveTime) -> bool {
        self.start <= t && t <= self.end
    }

    /// Page heading form, e.g. "6:30 PM - 7:30 PM".
    pub fn label_12h(&self) -> String {
        format!(
            "{} - {}",
            format_time_12h(self.start),
            format_time_12h(self.end)
        )
    }

    /// The error shown when a submission lands outside the window.
    pub fn rejection_message(&self) -> String {
        format!(
            "Check-in is only allowed between {} and {}.",
            format_time_12h(self.start),
            format_time_12h(self.end)
        )
    }
}

impl fmt::Display for CheckinWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_time_24h(self.start),
            format_time_24h(self.end)
        )
    }
}
