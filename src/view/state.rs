use crate::models::pages::LastKnownPagination;

/// Mutable state shared by every render of the list.
///
/// `applied_seq` is the sequence number of the response that last wrote
/// `last_known`; a response numbered lower arrived out of order and must not
/// overwrite newer totals.
#[derive(Debug, Default)]
pub struct ViewState {
    pub last_known: LastKnownPagination,
    pub applied_seq: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the totals reported by response `seq`. Returns `false` when the
    /// response is stale and was dropped.
    pub fn apply(&mut self, seq: u64, total_pages: Option<i64>, total_count: Option<i64>) -> bool {
        if seq < self.applied_seq {
            return false;
        }

        self.applied_seq = seq;
        self.last_known.absorb(total_pages, total_count);
        true
    }
}
