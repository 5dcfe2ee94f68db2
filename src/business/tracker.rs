//! Main tracker API
//!
//! Ties the repository, month filter and renderer together: open the store,
//! paint the month header, list and filter, render. Storage failures are
//! logged by the repository; a failed read leaves the list cleared.

use log::info;
use crate::config::TrackerConfig;
use crate::error::Result;
use super::month::MonthFilter;
use super::render::MonthView;
use super::repository::ExpenseRepository;
use super::surface::ExpenseSurface;

/// Expense tracker bound to one store
pub struct ExpenseTracker {
    /// Repository over the owned storage handle
    pub(crate) repo: ExpenseRepository,
    /// Label prefixed to displayed amounts
    pub(crate) currency: String,
}

impl ExpenseTracker {
    /// Open the configured store and paint the current month
    pub fn open(config: &TrackerConfig, surface: &mut dyn ExpenseSurface) -> Result<Self> {
        let repo = ExpenseRepository::open(&config.database_path)?;
        Ok(Self::start(repo, config, surface))
    }

    /// Open an in-memory store and paint the current month
    pub fn in_memory(config: &TrackerConfig, surface: &mut dyn ExpenseSurface) -> Result<Self> {
        let repo = ExpenseRepository::in_memory()?;
        Ok(Self::start(repo, config, surface))
    }

    fn start(repo: ExpenseRepository, config: &TrackerConfig, surface: &mut dyn ExpenseSurface) -> Self {
        let tracker = Self::from_repository(repo, &config.currency_label);
        info!("Expense tracker ready");
        tracker.refresh(surface);
        tracker
    }

    /// Wrap an existing repository without rendering
    pub fn from_repository(repo: ExpenseRepository, currency: &str) -> Self {
        Self {
            repo,
            currency: currency.to_string(),
        }
    }

    /// Repository access
    pub fn repository(&self) -> &ExpenseRepository {
        &self.repo
    }

    /// Mutable repository access
    pub fn repository_mut(&mut self) -> &mut ExpenseRepository {
        &mut self.repo
    }

    /// Currency label used for display
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Build the view for the current month
    pub fn current_view(&self) -> Result<MonthView> {
        let filter = MonthFilter::current();
        let expenses = self.repo.list_all()?;
        Ok(MonthView::build(&filter, expenses, &self.currency))
    }

    /// Repaint the month header and list. Returns false if the list could not be read.
    pub fn refresh(&self, surface: &mut dyn ExpenseSurface) -> bool {
        let filter = MonthFilter::current();
        surface.set_month_title(&filter.title());
        surface.clear_list();

        match self.repo.list_all() {
            Ok(expenses) => {
                MonthView::build(&filter, expenses, &self.currency).render(surface);
                true
            }
            Err(_) => false,
        }
    }
}
