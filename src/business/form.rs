//! Form controller
//!
//! Validates submitted input before anything reaches storage and relays
//! delete clicks from rendered rows.

use log::{debug, warn};
use crate::database::Expense;
use crate::error::{TrackerError, Result};
use crate::INVALID_INPUT_MESSAGE;
use super::surface::ExpenseSurface;
use super::tracker::ExpenseTracker;

/// Raw input from the expense form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub item: String,
    pub amount: String,
}

/// Input that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidExpense {
    pub item: String,
    pub amount: f64,
}

impl ExpenseForm {
    pub fn new(item: &str, amount: &str) -> Self {
        Self {
            item: item.to_string(),
            amount: amount.to_string(),
        }
    }

    /// Trim both fields; the item must be non-empty and the amount a finite number above zero
    pub fn validate(&self) -> Result<ValidExpense> {
        let item = self.item.trim();
        let amount = self.amount.trim();

        if item.is_empty() {
            return Err(TrackerError::Validation(INVALID_INPUT_MESSAGE.to_string()));
        }

        match amount.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(ValidExpense {
                item: item.to_string(),
                amount: value,
            }),
            _ => Err(TrackerError::Validation(INVALID_INPUT_MESSAGE.to_string())),
        }
    }
}

/// Parse the `data-id` attribute of a rendered row
pub fn parse_row_id(data_id: &str) -> Option<i64> {
    data_id.trim().parse().ok()
}

impl ExpenseTracker {
    /// Handle a form submission.
    ///
    /// Invalid input raises an alert and writes nothing. On a successful write
    /// the list is redrawn and the form reset; a failed write only gets logged.
    pub fn submit(&mut self, surface: &mut dyn ExpenseSurface, form: &ExpenseForm) -> Option<Expense> {
        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(e) => {
                debug!("Rejected submission {:?}: {}", form, e);
                surface.alert(INVALID_INPUT_MESSAGE);
                return None;
            }
        };

        let expense = self.repo.create(&valid.item, valid.amount).ok()?;
        self.refresh(surface);
        surface.reset_form();
        Some(expense)
    }

    /// Delete an expense by id and redraw. Returns false if the write failed.
    pub fn delete(&mut self, surface: &mut dyn ExpenseSurface, id: i64) -> bool {
        if self.repo.delete(id).is_err() {
            return false;
        }
        self.refresh(surface);
        true
    }

    /// Handle a delete click on the row carrying `data_id`
    pub fn delete_clicked(&mut self, surface: &mut dyn ExpenseSurface, data_id: &str) -> bool {
        match parse_row_id(data_id) {
            Some(id) => self.delete(surface, id),
            None => {
                warn!("Ignoring delete for malformed row id '{}'", data_id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::HtmlSurface;
    use crate::config::TrackerConfig;

    fn tracker(surface: &mut HtmlSurface) -> ExpenseTracker {
        ExpenseTracker::in_memory(&TrackerConfig::default(), surface).unwrap()
    }

    #[test]
    fn test_validate_trims() {
        let valid = ExpenseForm::new("  Lunch ", " 250 ").validate().unwrap();
        assert_eq!(valid.item, "Lunch");
        assert_eq!(valid.amount, 250.0);

        let valid = ExpenseForm::new("Tea", "0.5").validate().unwrap();
        assert_eq!(valid.amount, 0.5);
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        for (item, amount) in [
            ("", "10"),
            ("   ", "10"),
            ("Lunch", ""),
            ("Lunch", "-5"),
            ("Lunch", "0"),
            ("Lunch", "abc"),
            ("Lunch", "NaN"),
            ("Lunch", "inf"),
        ] {
            let err = ExpenseForm::new(item, amount).validate().unwrap_err();
            assert!(err.is_user_facing(), "{:?}/{:?} should be rejected", item, amount);
        }
    }

    #[test]
    fn test_parse_row_id() {
        assert_eq!(parse_row_id("12"), Some(12));
        assert_eq!(parse_row_id(" 3 "), Some(3));
        assert_eq!(parse_row_id("x1"), None);
        assert_eq!(parse_row_id(""), None);
    }

    #[test]
    fn test_submit_valid() {
        let mut surface = HtmlSurface::new();
        let mut tracker = tracker(&mut surface);

        let expense = tracker.submit(&mut surface, &ExpenseForm::new("Lunch", "250")).unwrap();

        assert_eq!(expense.item, "Lunch");
        assert_eq!(surface.row_ids(), vec![expense.id]);
        assert_eq!(surface.total_text(), "KES 250.00");
        assert_eq!(surface.form_resets(), 1);
        assert!(surface.alerts().is_empty());
    }

    #[test]
    fn test_submit_invalid_alerts() {
        let mut surface = HtmlSurface::new();
        let mut tracker = tracker(&mut surface);

        assert!(tracker.submit(&mut surface, &ExpenseForm::new("", "-5")).is_none());

        assert_eq!(surface.alerts(), [INVALID_INPUT_MESSAGE.to_string()]);
        assert_eq!(surface.form_resets(), 0);
        assert_eq!(tracker.repository().count().unwrap(), 0);
    }

    #[test]
    fn test_submit_write_failure_keeps_form() {
        let mut surface = HtmlSurface::new();
        let mut tracker = tracker(&mut surface);
        tracker.repository().database().connection().unwrap()
            .execute_batch("DROP TABLE expenses")
            .unwrap();

        assert!(tracker.submit(&mut surface, &ExpenseForm::new("Lunch", "250")).is_none());
        assert_eq!(surface.form_resets(), 0);
        assert!(surface.alerts().is_empty());
    }

    #[test]
    fn test_delete_clicked() {
        let mut surface = HtmlSurface::new();
        let mut tracker = tracker(&mut surface);
        let lunch = tracker.submit(&mut surface, &ExpenseForm::new("Lunch", "250")).unwrap();

        assert!(!tracker.delete_clicked(&mut surface, "not-a-number"));
        assert_eq!(surface.row_ids(), vec![lunch.id]);

        assert!(tracker.delete_clicked(&mut surface, &lunch.id.to_string()));
        assert!(surface.is_empty_state());
        assert!(!surface.is_total_visible());
    }
}
