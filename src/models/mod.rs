pub mod pages;
pub mod schools;

use serde::{Deserialize, Serialize};

/// Raw query parameters of the list page: `?page=1&count=10&q=...`
///
/// Numbers arrive as text so that `?page=` or `?page=-1` fall back to the
/// defaults instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub count: Option<String>,
    pub q: Option<String>,
}

impl ListParams {
    pub fn into_state(self, default_page_size: u32) -> QueryState {
        QueryState::new(
            positive(self.page.as_deref()).unwrap_or(1),
            positive(self.count.as_deref()).unwrap_or(default_page_size),
            self.q.unwrap_or_default(),
        )
    }
}

/// Parameters of a page-size change: the state being left plus `new_count`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResizeParams {
    pub page: Option<String>,
    pub count: Option<String>,
    pub q: Option<String>,
    pub new_count: Option<String>,
}

impl ResizeParams {
    /// Returns the current state and the state to move to, if anything changes.
    pub fn resolve(self, default_page_size: u32) -> (QueryState, Option<QueryState>) {
        let new_count = positive(self.new_count.as_deref());
        let current = ListParams {
            page: self.page,
            count: self.count,
            q: self.q,
        }
        .into_state(default_page_size);
        let next = new_count.and_then(|size| current.resize(size));
        (current, next)
    }
}

/// A positive integer, or `None` for anything else.
fn positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|v| v.trim().parse::<u32>().ok()).filter(|n| *n > 0)
}

/// What the user is looking at: which page, how many rows per page, and the
/// search text. Serializes to the query string the remote API and our own
/// links share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    pub page: u32,
    #[serde(rename = "count")]
    pub page_size: u32,
    #[serde(rename = "q")]
    pub search_text: String,
}

impl QueryState {
    /// Zero page or page size is bumped to 1.
    pub fn new(page: u32, page_size: u32, search_text: impl Into<String>) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            search_text: search_text.into().trim().to_string(),
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Zero-based index of the first record on the current page.
    pub fn first_item_index(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Switch to `new_size` rows per page, keeping the first visible record
    /// on screen. `None` when the size is zero or unchanged.
    pub fn resize(&self, new_size: u32) -> Option<Self> {
        if new_size == 0 || new_size == self.page_size {
            return None;
        }

        let new_page = self.first_item_index() / u64::from(new_size) + 1;
        let new_page = u32::try_from(new_page).unwrap_or(u32::MAX).max(1);

        Some(Self {
            page: new_page,
            page_size: new_size,
            search_text: self.search_text.clone(),
        })
    }

    /// Link to the list page showing this state.
    pub fn href(&self) -> String {
        format!("/?{}", serde_html_form::to_string(self).unwrap_or_default())
    }
}
