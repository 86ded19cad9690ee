//! Record filtering and pagination

use serde::{Deserialize, Serialize};

use super::criteria::FilterCriteria;
use crate::models::Record;

/// Keep the records satisfying every criterion, in their original order.
pub fn filter<'a, R: Record>(records: &'a [R], criteria: &FilterCriteria<R::Field>) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| matches(*record, criteria))
        .collect()
}

/// Whether a single record satisfies every criterion
pub fn matches<R: Record>(record: &R, criteria: &FilterCriteria<R::Field>) -> bool {
    criteria
        .iter()
        .all(|(field, criterion)| criterion.matches(record.field(field).as_deref()))
}

/// Rows allowed per page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub fn all() -> &'static [PageSize] {
        &[Self::Ten, Self::Twenty, Self::Fifty, Self::Hundred]
    }

    pub fn get(&self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    /// Next larger size, wrapping around to the smallest
    pub fn cycle(&self) -> Self {
        match self {
            Self::Ten => Self::Twenty,
            Self::Twenty => Self::Fifty,
            Self::Fifty => Self::Hundred,
            Self::Hundred => Self::Ten,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::Twenty
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(v: usize) -> Result<Self, Self::Error> {
        match v {
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            50 => Ok(Self::Fifty),
            100 => Ok(Self::Hundred),
            other => Err(format!("unsupported page size {}, expected 10, 20, 50 or 100", other)),
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

/// Which slice of the matched records is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number
    pub current_page: usize,
    pub page_size: PageSize,
}

impl PageWindow {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.current_page = page.max(1);
        self
    }

    /// Index of the first row of the current page
    pub fn offset(&self) -> usize {
        (self.current_page.max(1) - 1).saturating_mul(self.page_size.get())
    }

    /// Number of pages needed for `total` rows; never less than one
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.get()).max(1)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

/// One materialized page of matches
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    /// Matches across all pages
    pub total: usize,
}

/// Slice `matched` down to the rows of `window`.
///
/// Out-of-range pages produce an empty page rather than an error.
pub fn paginate<T: Clone>(matched: &[T], window: PageWindow) -> Page<T> {
    let start = window.offset().min(matched.len());
    let end = start.saturating_add(window.page_size.get()).min(matched.len());

    Page {
        rows: matched[start..end].to_vec(),
        total: matched.len(),
    }
}
