//! Current-month filter
//!
//! Stored dates are interpreted in the local time zone, so a record created
//! close to midnight on a month boundary may fall into the neighbouring month
//! depending on where it is read.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use log::warn;
use crate::database::Expense;

/// Calendar month/year predicate over expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthFilter {
    month: u32,
    year: i32,
}

impl MonthFilter {
    /// Filter for a specific 1-based month
    pub fn new(month: u32, year: i32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { month, year })
    }

    /// Filter for the month containing the local "now"
    pub fn current() -> Self {
        Self::for_date(&Local::now())
    }

    /// Filter for the month containing `date` in its own time zone
    pub fn for_date<Tz: TimeZone>(date: &DateTime<Tz>) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    /// 1-based month
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Check whether an instant, seen in its own time zone, falls in this month
    pub fn contains<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> bool {
        date.month() == self.month && date.year() == self.year
    }

    /// Check whether an expense was created in this month (local calendar)
    pub fn matches(&self, expense: &Expense) -> bool {
        match expense.timestamp() {
            Some(ts) => self.contains(&ts.with_timezone(&Local)),
            None => {
                warn!("Skipping expense {} with unreadable date '{}'", expense.id, expense.date);
                false
            }
        }
    }

    /// Keep the matching expenses, preserving order
    pub fn filter<I>(&self, expenses: I) -> Vec<Expense>
    where
        I: IntoIterator<Item = Expense>,
    {
        expenses.into_iter().filter(|e| self.matches(e)).collect()
    }

    /// Header text, e.g. "December 2024"
    pub fn title(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => self.year.to_string(),
        }
    }
}
