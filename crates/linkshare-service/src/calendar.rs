//! Expiration date arithmetic and formatting for one dialog session.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Days, NaiveDate, NaiveTime};

use linkshare_core::error::AppError;

/// The session's notion of "today" plus the locale date format.
///
/// Captured once when the dialog opens so that resolving the same inputs
/// twice always yields the same dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpirationCalendar {
    today: NaiveDate,
    date_format: String,
}

impl ExpirationCalendar {
    /// Creates a calendar, rejecting format strings chrono cannot render
    /// for a plain date, such as time or time zone specifiers.
    pub fn new(today: NaiveDate, date_format: impl Into<String>) -> Result<Self, AppError> {
        let date_format = date_format.into();
        let malformed = StrftimeItems::new(&date_format).any(|item| matches!(item, Item::Error));
        if malformed || write!(String::new(), "{}", today.format(&date_format)).is_err() {
            return Err(AppError::configuration(format!(
                "Invalid expiration date format: '{date_format}'"
            )));
        }
        Ok(Self { today, date_format })
    }

    /// The session's current date.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Earliest date a link can expire on.
    pub fn earliest_selectable(&self) -> NaiveDate {
        self.today + Days::new(1)
    }

    /// Today plus the given number of days; `None` for zero days.
    pub fn default_expiration(&self, days: u32) -> Option<NaiveDate> {
        if days == 0 {
            return None;
        }
        self.today.checked_add_days(Days::new(u64::from(days)))
    }

    /// Whether a picked date is within the allowed window.
    ///
    /// `max_days` bounds the window when the server enforces expiration.
    pub fn is_selectable(&self, date: NaiveDate, max_days: Option<u32>) -> bool {
        if date < self.earliest_selectable() {
            return false;
        }
        match max_days.and_then(|days| self.default_expiration(days)) {
            Some(latest) => date <= latest,
            None => true,
        }
    }

    /// Renders a date with the session format.
    pub fn format(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.to_string();
        }
        out
    }

    /// Reads a date typed into the expiration field.
    pub fn parse(&self, text: &str) -> Result<NaiveDate, AppError> {
        NaiveDate::parse_from_str(text.trim(), &self.date_format).map_err(|e| {
            AppError::date_parse(format!(
                "'{text}' does not match the date format '{}': {e}",
                self.date_format
            ))
        })
    }

    /// Midnight UTC of the date, in epoch milliseconds.
    pub fn to_millis(date: NaiveDate) -> i64 {
        date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }
}
