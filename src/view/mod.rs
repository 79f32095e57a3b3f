pub mod pagination;
pub mod render;
pub mod state;
pub mod table;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::client::SchoolSource;
use crate::config::ErrorPolicy;
use crate::error::FetchError;
use crate::models::QueryState;
use crate::models::pages::{LastKnownPagination, PageResult, ReportedPage};
use crate::view::pagination::PaginationView;
use crate::view::state::ViewState;
use crate::view::table::{TableRow, table_rows};

/// Notice shown under `ErrorPolicy::Banner` when a fetch fails.
pub const FETCH_FAILED_NOTICE: &str = "School data is temporarily unavailable.";

/// Fully resolved list page: rows, pager and the query that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    pub query: QueryState,
    pub rows: Vec<TableRow>,
    pub pagination: PaginationView,
    pub notice: Option<&'static str>,
}

/// The paginated schools list.
///
/// Owns the only state that outlives a request: the last-known pagination
/// totals and the sequence counter that keeps out-of-order responses from
/// overwriting them.
pub struct SchoolListView {
    source: Arc<dyn SchoolSource>,
    state: RwLock<ViewState>,
    sequence: AtomicU64,
    error_policy: ErrorPolicy,
}

impl SchoolListView {
    pub fn new(source: Arc<dyn SchoolSource>, error_policy: ErrorPolicy) -> Self {
        Self {
            source,
            state: RwLock::new(ViewState::new()),
            sequence: AtomicU64::new(0),
            error_policy,
        }
    }

    pub async fn last_known(&self) -> LastKnownPagination {
        self.state.read().await.last_known
    }

    /// Fetch one page. Totals missing from the response come from the
    /// last-known pagination; totals present in it replace the last-known
    /// ones unless a newer response already did.
    pub async fn fetch_page(&self, query: &QueryState) -> Result<PageResult, FetchError> {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let body = self.source.fetch(query).await?;
        let reported = ReportedPage::from_body(&body);

        let known = {
            let mut state = self.state.write().await;
            if !state.apply(seq, reported.pages_count, reported.total_count) {
                debug!(
                    seq,
                    applied = state.applied_seq,
                    "Dropping pagination totals from stale response"
                );
            }
            state.last_known
        };

        Ok(PageResult::resolve(reported, query.page, known))
    }

    /// Fetch and lay out one page. Never fails: a fetch error renders an
    /// empty table with the last-known pager.
    pub async fn load(&self, query: &QueryState) -> ListPage {
        let (result, notice) = match self.fetch_page(query).await {
            Ok(result) => (result, None),
            Err(e) => {
                warn!("Failed to fetch schools page {}: {e}", query.page);
                let notice = match self.error_policy {
                    ErrorPolicy::Silent => None,
                    ErrorPolicy::Banner => Some(FETCH_FAILED_NOTICE),
                };
                (PageResult::fallback(query.page, self.last_known().await), notice)
            }
        };

        ListPage {
            query: query.clone(),
            rows: table_rows(&result.records),
            pagination: PaginationView::build(&result, query),
            notice,
        }
    }
}
