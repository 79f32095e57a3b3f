use serde::Serialize;
use serde_json::Value;

use crate::models::schools::SchoolRecord;

/// Most recent pagination totals seen in a successful response.
///
/// Starts at zero and is only ever overwritten by values the API actually
/// reported, so a failed request does not collapse the pager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LastKnownPagination {
    pub total_pages: i64,
    pub total_count: i64,
}

impl LastKnownPagination {
    /// Overwrite whichever totals were reported.
    pub fn absorb(&mut self, total_pages: Option<i64>, total_count: Option<i64>) {
        if let Some(pages) = total_pages {
            self.total_pages = pages;
        }
        if let Some(count) = total_count {
            self.total_count = count;
        }
    }
}

/// Fields pulled out of a `{ data: { list, page, pages_count, total_count } }`
/// body. A missing or wrong-typed field is `None`; `records` is empty when
/// `list` is not an array.
#[derive(Debug, Clone, Default)]
pub struct ReportedPage {
    pub records: Vec<SchoolRecord>,
    pub page: Option<u32>,
    pub pages_count: Option<i64>,
    pub total_count: Option<i64>,
}

impl ReportedPage {
    pub fn from_body(body: &Value) -> Self {
        let data = body.get("data");
        let field = |name: &str| data.and_then(|d| d.get(name));

        let records = field("list")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(SchoolRecord::from_value).collect())
            .unwrap_or_default();

        let page = field("page")
            .and_then(as_integer)
            .filter(|page| *page > 0)
            .and_then(|page| u32::try_from(page).ok());

        Self {
            records,
            page,
            pages_count: field("pages_count").and_then(as_integer),
            total_count: field("total_count").and_then(as_integer),
        }
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|number| number as i64))
}

/// One page of schools, ready to render.
#[derive(Debug, Clone, Default)]
pub struct PageResult {
    pub records: Vec<SchoolRecord>,
    pub page: u32,
    pub total_pages: i64,
    pub total_count: i64,
}

impl PageResult {
    /// Fill the gaps of a reported page from the requested page number and
    /// the last-known totals.
    pub fn resolve(reported: ReportedPage, requested_page: u32, known: LastKnownPagination) -> Self {
        Self {
            records: reported.records,
            page: reported.page.unwrap_or(requested_page),
            total_pages: reported.pages_count.unwrap_or(known.total_pages),
            total_count: reported.total_count.unwrap_or(known.total_count),
        }
    }

    /// What a failed fetch shows: no rows, remembered totals.
    pub fn fallback(requested_page: u32, known: LastKnownPagination) -> Self {
        Self {
            records: Vec::new(),
            page: requested_page,
            total_pages: known.total_pages,
            total_count: known.total_count,
        }
    }
}
