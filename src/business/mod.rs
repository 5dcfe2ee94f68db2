//! Business logic layer for Expense Tracker
//!
//! This module provides the repository over the expenses store, the
//! current-month filter, the list renderer and the form controller, tied
//! together by the [`ExpenseTracker`] facade.

pub mod repository;
pub mod month;
pub mod surface;
pub mod render;
pub mod form;
pub mod tracker;

pub use repository::ExpenseRepository;
pub use month::MonthFilter;
pub use surface::{ExpenseSurface, HtmlSurface};
pub use render::{MonthView, ExpenseRow};
pub use form::{ExpenseForm, ValidExpense};
pub use tracker::ExpenseTracker;
