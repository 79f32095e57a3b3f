//! Pager layout: the "records x-y of z" line and the row of page controls.
//!
//! Up to [`FULL_RANGE_LIMIT`] pages every number is shown. Past that the row
//! is `1 … window … last`, where the window spans two pages either side of
//! the current one and an ellipsis stands in for each gap.

use serde::Serialize;

use crate::models::QueryState;
use crate::models::pages::PageResult;

/// Largest page count rendered without ellipses.
pub const FULL_RANGE_LIMIT: u32 = 10;

const WINDOW_RADIUS: u32 = 2;

/// One slot in the pager row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageControl {
    /// `target` is `None` when disabled.
    Previous { target: Option<u32> },
    Page { number: u32, active: bool },
    Ellipsis,
    Next { target: Option<u32> },
}

/// Page count used for layout: never below 1.
pub fn clamp_pages(total_pages: i64) -> u32 {
    u32::try_from(total_pages.max(1)).unwrap_or(u32::MAX)
}

/// Record total used for the range line: never below 0.
pub fn clamp_total(total_count: i64) -> u64 {
    u64::try_from(total_count).unwrap_or(0)
}

/// "start-end of total". The step between pages is the number of records
/// actually returned, so a short page still reports its true range.
pub fn range_text(page: u32, records_len: usize, total: u64) -> String {
    if records_len == 0 {
        return format!("No records — 0 of {total}");
    }

    let len = records_len as u64;
    let start = u64::from(page.saturating_sub(1)) * len + 1;
    let end = (start + len - 1).min(total);
    format!("{start}-{end} of {total}")
}

/// Layout of the pager row for `page` out of `pages` (already clamped).
pub fn page_controls(page: u32, pages: u32) -> Vec<PageControl> {
    let numbered = |number: u32| PageControl::Page {
        number,
        active: number == page,
    };

    let mut controls = vec![PageControl::Previous {
        target: (page > 1).then(|| page - 1),
    }];

    if pages <= FULL_RANGE_LIMIT {
        controls.extend((1..=pages).map(numbered));
    } else {
        controls.push(numbered(1));
        if page > WINDOW_RADIUS + 2 {
            controls.push(PageControl::Ellipsis);
        }

        let start = page.saturating_sub(WINDOW_RADIUS).max(2);
        let end = page.saturating_add(WINDOW_RADIUS).min(pages - 1);
        controls.extend((start..=end).map(numbered));

        if page < pages - (WINDOW_RADIUS + 1) {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(numbered(pages));
    }

    controls.push(PageControl::Next {
        target: (page < pages).then(|| page + 1),
    });
    controls
}

/// A pager slot with its link resolved against the current query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlLink {
    pub kind: &'static str,
    pub label: String,
    /// `None` for disabled arrows and ellipses.
    pub href: Option<String>,
    pub active: bool,
    pub disabled: bool,
    pub class: &'static str,
}

impl ControlLink {
    fn from_control(control: PageControl, query: &QueryState) -> Self {
        match control {
            PageControl::Previous { target } => {
                Self::arrow("previous", "\u{2039}", "control__button-prev", target, query)
            }
            PageControl::Next { target } => {
                Self::arrow("next", "\u{203a}", "control__button-next", target, query)
            }
            PageControl::Page { number, active } => Self {
                kind: "page",
                label: number.to_string(),
                href: Some(query.with_page(number).href()),
                active,
                disabled: false,
                class: "control__button-page",
            },
            PageControl::Ellipsis => Self {
                kind: "ellipsis",
                label: "...".to_string(),
                href: None,
                active: false,
                disabled: false,
                class: "control__ellipsis",
            },
        }
    }

    fn arrow(
        kind: &'static str,
        label: &str,
        class: &'static str,
        target: Option<u32>,
        query: &QueryState,
    ) -> Self {
        Self {
            kind,
            label: label.to_string(),
            href: target.map(|page| query.with_page(page).href()),
            active: false,
            disabled: target.is_none(),
            class,
        }
    }
}

/// Everything the template needs to draw the pager.
#[derive(Debug, Clone, Serialize)]
pub struct PaginationView {
    pub page: u32,
    pub pages: u32,
    pub total: u64,
    pub range_text: String,
    pub controls: Vec<ControlLink>,
}

impl PaginationView {
    pub fn build(result: &PageResult, query: &QueryState) -> Self {
        let pages = clamp_pages(result.total_pages);
        let total = clamp_total(result.total_count);
        let page = result.page.max(1);

        let controls = page_controls(page, pages)
            .into_iter()
            .map(|control| ControlLink::from_control(control, query))
            .collect();

        Self {
            page,
            pages,
            total,
            range_text: range_text(page, result.records.len(), total),
            controls,
        }
    }
}
