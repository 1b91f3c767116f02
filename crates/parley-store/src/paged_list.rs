// parley-core-client/parley-store
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

/// A single page of a paginated query result. Items are ordered by arrival,
/// not re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, has_more: bool) -> Self {
        Page { items, has_more }
    }
}

/// The value shape of list-type cache entries: an ordered sequence of pages.
/// Page 0 holds the most recent items; loading older data appends pages at
/// the tail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedList<T> {
    pub pages: Vec<Page<T>>,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        PagedList { pages: Vec::new() }
    }
}

impl<T> PagedList<T> {
    pub fn from_page(page: Page<T>) -> Self {
        PagedList { pages: vec![page] }
    }

    /// Appends a newly-arrived item to the first (most recent) page, creating
    /// that page if the list is empty. Callers are expected to perform their
    /// own existence check first.
    pub fn append_newest(&mut self, item: T) {
        match self.pages.first_mut() {
            Some(page) => page.items.push(item),
            None => self.pages.push(Page::new(vec![item], false)),
        }
    }

    /// Inserts an item at the front of the first page.
    pub fn prepend_newest(&mut self, item: T) {
        match self.pages.first_mut() {
            Some(page) => page.items.insert(0, item),
            None => self.pages.push(Page::new(vec![item], false)),
        }
    }

    /// Appends a page of older data at the tail. Page order is preserved.
    pub fn append_page(&mut self, page: Page<T>) {
        self.pages.push(page);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.pages.iter().flat_map(|page| page.items.iter())
    }

    pub fn len(&self) -> usize {
        self.pages.iter().map(|page| page.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|page| page.items.is_empty())
    }

    pub fn contains(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.iter().any(pred)
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.iter().find(|item| pred(item))
    }

    /// Applies `f` to every item matching `pred` across all pages. Returns
    /// the number of items touched.
    pub fn update_where(
        &mut self,
        pred: impl Fn(&T) -> bool,
        mut f: impl FnMut(&mut T),
    ) -> usize {
        let mut updated = 0;
        for page in &mut self.pages {
            for item in &mut page.items {
                if pred(item) {
                    f(item);
                    updated += 1;
                }
            }
        }
        updated
    }

    /// Replaces the first item matching `pred` in place. The slot position is
    /// preserved; returns `false` when nothing matched.
    pub fn replace_first(&mut self, pred: impl Fn(&T) -> bool, replacement: T) -> bool {
        for page in &mut self.pages {
            for item in &mut page.items {
                if pred(item) {
                    *item = replacement;
                    return true;
                }
            }
        }
        false
    }

    /// Drops every item for which `pred` returns `false`. Returns the number
    /// of removed items. Pages are kept even when they become empty.
    pub fn retain(&mut self, pred: impl Fn(&T) -> bool) -> usize {
        let before = self.len();
        for page in &mut self.pages {
            page.items.retain(|item| pred(item));
        }
        before - self.len()
    }
}
