//! Pagination.

use serde::{Deserialize, Serialize};

/// One page of a listing: a zero-based page number and a page size.
///
/// The window for page `n` of size `s` is `[n*s, min((n+1)*s, len))`.
/// A page that starts at or past the end of the data is empty, never an
/// error.
///
/// ```
/// use roster::Page;
///
/// let items = [1, 2, 3, 4, 5];
/// assert_eq!(Page::new(1, 2).apply(&items), &[3, 4]);
/// assert_eq!(Page::new(2, 2).apply(&items), &[5]);
/// assert!(Page::new(9, 2).apply(&items).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub number: usize,
    pub size: usize,
}

impl Page {
    /// Page size used when a caller does not ask for one.
    pub const DEFAULT_SIZE: usize = 3;

    pub fn new(number: usize, size: usize) -> Self {
        Page { number, size }
    }

    /// The first page of the given size.
    pub fn first(size: usize) -> Self {
        Page { number: 0, size }
    }

    /// Index of the first item on this page, or `None` on overflow.
    pub fn offset(&self) -> Option<usize> {
        self.number.checked_mul(self.size)
    }

    /// Returns the slice of `items` that falls on this page.
    ///
    /// An offset that overflows `usize` is past any possible data and
    /// yields an empty page.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Some(start) = self.offset() else {
            return &[];
        };
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.size).min(items.len());
        &items[start..end]
    }

    /// Owned variant of [`apply`](Self::apply) that keeps only this page.
    pub fn take<T>(&self, items: Vec<T>) -> Vec<T> {
        let Some(start) = self.offset() else {
            return Vec::new();
        };
        items.into_iter().skip(start).take(self.size).collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::first(Self::DEFAULT_SIZE)
    }
}
