//! Month view rendering
//!
//! Every render clears the list and rebuilds it from scratch; no row state
//! survives between renders.

use crate::database::Expense;
use crate::utils::{escape_html, format_amount};
use crate::EMPTY_STATE_MESSAGE;
use super::month::MonthFilter;
use super::surface::ExpenseSurface;

/// A displayed expense
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: i64,
    pub item: String,
    pub amount: f64,
}

impl From<Expense> for ExpenseRow {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            item: expense.item,
            amount: expense.amount,
        }
    }
}

impl ExpenseRow {
    /// Row markup with the label escaped and a delete control
    pub fn markup(&self, currency: &str) -> String {
        format!(
            "<div class=\"expense-item\" data-id=\"{}\"><span class=\"expense-name\">{}</span><span class=\"expense-amount\">{}</span><button class=\"delete-btn\">Delete</button></div>",
            self.id,
            escape_html(&self.item),
            format_amount(currency, self.amount),
        )
    }
}

/// Markup shown when the month has no expenses
pub fn empty_state_markup() -> String {
    format!("<div class=\"empty-state\"><p>{}</p></div>", EMPTY_STATE_MESSAGE)
}

/// The current month's rows and their total
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    rows: Vec<ExpenseRow>,
    total: f64,
    currency: String,
}

impl MonthView {
    /// Filter `expenses` to the month and sum the amounts
    pub fn build<I>(filter: &MonthFilter, expenses: I, currency: &str) -> Self
    where
        I: IntoIterator<Item = Expense>,
    {
        let rows: Vec<ExpenseRow> = filter
            .filter(expenses)
            .into_iter()
            .map(ExpenseRow::from)
            .collect();
        let total = rows.iter().map(|r| r.amount).sum();

        Self {
            rows,
            total,
            currency: currency.to_string(),
        }
    }

    pub fn rows(&self) -> &[ExpenseRow] {
        &self.rows
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total formatted for display, e.g. "KES 300.00"
    pub fn total_text(&self) -> String {
        format_amount(&self.currency, self.total)
    }

    /// Clear the list and redraw it, hiding the total when there is nothing to show
    pub fn render(&self, surface: &mut dyn ExpenseSurface) {
        surface.clear_list();

        if self.rows.is_empty() {
            surface.show_empty_state(&empty_state_markup());
            surface.set_total_visible(false);
            return;
        }

        for row in &self.rows {
            surface.append_row(row.id, &row.markup(&self.currency));
        }
        surface.set_total(&self.total_text());
        surface.set_total_visible(true);
    }
}
