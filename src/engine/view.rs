//! Per-page list state: records, criteria, page window and row selection

use std::collections::BTreeSet;

use super::criteria::FilterCriteria;
use super::filter::{filter, paginate, Page, PageSize, PageWindow};
use crate::models::Record;

/// State backing one log table.
///
/// Changing the records, the criteria or the page size returns to page 1.
/// Any page-window change drops the row selection.
pub struct ListView<R: Record> {
    records: Vec<R>,
    criteria: FilterCriteria<R::Field>,
    window: PageWindow,
    selected: BTreeSet<String>,
}

impl<R: Record> ListView<R> {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            records: Vec::new(),
            criteria: FilterCriteria::new(),
            window: PageWindow::new(page_size),
            selected: BTreeSet::new(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria<R::Field> {
        &self.criteria
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Swap in a new record collection
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.reset_window();
    }

    /// Replace the criteria wholesale, as a search submission does
    pub fn set_criteria(&mut self, criteria: FilterCriteria<R::Field>) {
        self.criteria = criteria;
        self.reset_window();
    }

    pub fn reset_criteria(&mut self) {
        self.set_criteria(FilterCriteria::new());
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.window.page_size = page_size;
        self.reset_window();
    }

    /// Jump to `page`, clamped to the pages that exist
    pub fn set_page(&mut self, page: usize) {
        let last = self.window.page_count(self.matched_count());
        let page = page.clamp(1, last);
        if page != self.window.current_page {
            self.window.current_page = page;
            self.selected.clear();
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.window.current_page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.window.current_page.saturating_sub(1));
    }

    pub fn page_count(&self) -> usize {
        self.window.page_count(self.matched_count())
    }

    /// Select or deselect a row by key; returns whether it is now selected
    pub fn toggle_selection(&mut self, key: &str) -> bool {
        if self.selected.remove(key) {
            false
        } else {
            self.selected.insert(key.to_string());
            true
        }
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    pub fn matched_count(&self) -> usize {
        filter(&self.records, &self.criteria).len()
    }

    /// Recompute the visible page from the full collection
    pub fn page(&self) -> Page<&R> {
        let matched = filter(&self.records, &self.criteria);
        tracing::debug!(
            records = self.records.len(),
            matched = matched.len(),
            page = self.window.current_page,
            size = self.window.page_size.get(),
            "Materializing page"
        );
        paginate(&matched, self.window)
    }

    fn reset_window(&mut self) {
        self.window.current_page = 1;
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::criteria::Criterion;
    use crate::models::{AttackField, AttackLog};

    fn records(n: usize) -> Vec<AttackLog> {
        (1..=n)
            .map(|i| AttackLog {
                key: i.to_string(),
                attacker_ip: format!("10.0.0.{}", i),
                intel_type: if i % 2 == 0 { "钓鱼攻击" } else { "僵尸网络" }.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn view(n: usize) -> ListView<AttackLog> {
        let mut view = ListView::new(PageSize::Ten);
        view.replace_records(records(n));
        view
    }

    #[test]
    fn displayed_rows_follow_window() {
        let mut view = view(25);
        assert_eq!(view.page().rows.len(), 10);
        view.set_page(3);
        let page = view.page();
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.total, 25);
    }

    #[test]
    fn page_is_clamped() {
        let mut view = view(25);
        view.set_page(99);
        assert_eq!(view.window().current_page, 3);
        view.set_page(0);
        assert_eq!(view.window().current_page, 1);
        view.prev_page();
        assert_eq!(view.window().current_page, 1);
    }

    #[test]
    fn criteria_change_resets_page_and_selection() {
        let mut view = view(25);
        view.set_page(2);
        view.toggle_selection("11");
        assert!(view.is_selected("11"));

        view.set_criteria(FilterCriteria::new().with(AttackField::IntelType, Criterion::contains("僵尸")));

        assert_eq!(view.window().current_page, 1);
        assert!(view.selection().is_empty());
        assert_eq!(view.page().total, 13);
    }

    #[test]
    fn page_size_change_resets_page_and_selection() {
        let mut view = view(25);
        view.next_page();
        view.toggle_selection("12");

        view.set_page_size(PageSize::Fifty);

        assert_eq!(view.window().current_page, 1);
        assert_eq!(view.window().page_size, PageSize::Fifty);
        assert!(view.selection().is_empty());
        assert_eq!(view.page().rows.len(), 25);
    }

    #[test]
    fn new_records_reset_page_and_selection() {
        let mut view = view(25);
        view.set_page(3);
        view.toggle_selection("21");

        view.replace_records(records(40));

        assert_eq!(view.window().current_page, 1);
        assert!(view.selection().is_empty());
        assert_eq!(view.page_count(), 4);
    }

    #[test]
    fn changing_page_drops_selection() {
        let mut view = view(25);
        view.toggle_selection("1");
        view.next_page();
        assert!(view.selection().is_empty());
    }

    #[test]
    fn selection_toggles() {
        let mut view = view(3);
        assert!(view.toggle_selection("2"));
        assert!(!view.toggle_selection("2"));
        assert!(view.selection().is_empty());
    }
}
