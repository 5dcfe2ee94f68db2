//! Display surface the tracker renders onto
//!
//! The surface stands in for the page: a month header, the expense list, a
//! total section that can be hidden, the input form and a blocking alert.

/// Operations the renderer and form controller perform on the page
pub trait ExpenseSurface {
    /// Set the month header text
    fn set_month_title(&mut self, title: &str);

    /// Remove every entry from the expense list
    fn clear_list(&mut self);

    /// Append one rendered expense row
    fn append_row(&mut self, id: i64, markup: &str);

    /// Replace the list content with the empty-state block
    fn show_empty_state(&mut self, markup: &str);

    /// Set the total amount text
    fn set_total(&mut self, text: &str);

    /// Show or hide the total section
    fn set_total_visible(&mut self, visible: bool);

    /// Show a blocking message to the user
    fn alert(&mut self, message: &str);

    /// Clear the input form fields
    fn reset_form(&mut self);
}

/// One entry of the rendered list
#[derive(Debug, Clone, PartialEq, Eq)]
enum ListEntry {
    Row { id: i64, markup: String },
    Empty(String),
}

/// In-memory surface that keeps the rendered page state as HTML fragments
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    month_title: String,
    list: Vec<ListEntry>,
    total_text: String,
    total_visible: bool,
    alerts: Vec<String>,
    form_resets: usize,
}

impl HtmlSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Current month header
    pub fn month_title(&self) -> &str {
        &self.month_title
    }

    /// Ids of the rows currently in the list, in display order
    pub fn row_ids(&self) -> Vec<i64> {
        self.list
            .iter()
            .filter_map(|entry| match entry {
                ListEntry::Row { id, .. } => Some(*id),
                ListEntry::Empty(_) => None,
            })
            .collect()
    }

    /// True if the list holds the empty-state block
    pub fn is_empty_state(&self) -> bool {
        matches!(self.list.as_slice(), [ListEntry::Empty(_)])
    }

    /// Inner HTML of the list container
    pub fn list_html(&self) -> String {
        self.list
            .iter()
            .map(|entry| match entry {
                ListEntry::Row { markup, .. } | ListEntry::Empty(markup) => markup.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Total amount text (meaningful only while visible)
    pub fn total_text(&self) -> &str {
        &self.total_text
    }

    /// Whether the total section is shown
    pub fn is_total_visible(&self) -> bool {
        self.total_visible
    }

    /// Alerts raised so far, oldest first
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Number of times the form was reset
    pub fn form_resets(&self) -> usize {
        self.form_resets
    }

    /// Render the whole page body
    pub fn to_html(&self) -> String {
        let display = if self.total_visible { "block" } else { "none" };
        format!(
            "<h2 id=\"monthTitle\">{}</h2>\n<div id=\"expenseList\">\n{}\n</div>\n<div id=\"totalSection\" style=\"display: {}\"><span id=\"totalAmount\">{}</span></div>",
            crate::utils::escape_html(&self.month_title),
            self.list_html(),
            display,
            self.total_text,
        )
    }
}

impl ExpenseSurface for HtmlSurface {
    fn set_month_title(&mut self, title: &str) {
        self.month_title = title.to_string();
    }

    fn clear_list(&mut self) {
        self.list.clear();
    }

    fn append_row(&mut self, id: i64, markup: &str) {
        self.list.push(ListEntry::Row { id, markup: markup.to_string() });
    }

    fn show_empty_state(&mut self, markup: &str) {
        self.list = vec![ListEntry::Empty(markup.to_string())];
    }

    fn set_total(&mut self, text: &str) {
        self.total_text = text.to_string();
    }

    fn set_total_visible(&mut self, visible: bool) {
        self.total_visible = visible;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn reset_form(&mut self) {
        self.form_resets += 1;
    }
}
