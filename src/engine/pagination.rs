//! Pagination engine: slice a filtered side into one page.
//!
//! `paginate` never corrects the requested page; keeping the stored page in
//! range is the controller's job (see [`clamp_page`]).

use crate::model::Item;
use serde::{Deserialize, Serialize};

/// Page size used when none (or zero) is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination settings shared by both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// When false every item is on page 1.
    pub enabled: bool,
    /// Items per page. Zero is treated as [`DEFAULT_PAGE_SIZE`].
    pub page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationConfig {
    /// Paginated with the given page size.
    pub fn paged(page_size: usize) -> Self {
        Self {
            enabled: true,
            page_size,
        }
    }

    /// Page size with zero normalised to the default.
    pub fn effective_page_size(&self) -> usize {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }

    /// Page count for `total` items, never below 1.
    pub fn total_pages(&self, total: usize) -> usize {
        if !self.enabled {
            return 1;
        }
        total.div_ceil(self.effective_page_size()).max(1)
    }
}

/// One page of a side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// Items on this page.
    pub items: Vec<&'a Item>,
    /// Items across all pages.
    pub total: usize,
    /// 1-based page number, as requested.
    pub page: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
}

/// Slice `items` to page `page` (1-based).
///
/// Slicing is `[(page-1)*size, page*size)` clipped to the available length.
/// A page past the end yields an empty slice.
pub fn paginate<'a>(items: &[&'a Item], page: usize, config: &PaginationConfig) -> Page<'a> {
    let total = items.len();
    let total_pages = config.total_pages(total);

    if !config.enabled {
        return Page {
            items: items.to_vec(),
            total,
            page,
            total_pages,
        };
    }

    let size = config.effective_page_size();
    let start = page.saturating_sub(1).saturating_mul(size).min(total);
    let end = start.saturating_add(size).min(total);

    Page {
        items: items[start..end].to_vec(),
        total,
        page,
        total_pages,
    }
}

/// Clamp a requested page into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}
