use serde::Serialize;

use crate::models::schools::SchoolRecord;

/// Columns of the schools table: region, name, address, education level.
pub const COLUMN_COUNT: usize = 4;

/// Placeholder row text for an empty page.
pub const NO_DATA: &str = "No data";

const MISSING: &str = "-";
const NAME_NOT_SET: &str = "Not set";

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub region: String,
    pub name: String,
    pub address: String,
    pub levels: Vec<&'static str>,
}

impl From<&SchoolRecord> for TableRow {
    fn from(record: &SchoolRecord) -> Self {
        Self {
            region: record.region_name().unwrap_or(MISSING).to_string(),
            name: record.short_name().unwrap_or(NAME_NOT_SET).to_string(),
            address: record.post_address().unwrap_or(MISSING).to_string(),
            levels: record
                .education_levels()
                .into_iter()
                .map(|level| level.label())
                .collect(),
        }
    }
}

/// Rows in the order the API returned them. An empty result yields no rows;
/// the template draws the `NO_DATA` placeholder in that case.
pub fn table_rows(records: &[SchoolRecord]) -> Vec<TableRow> {
    records.iter().map(TableRow::from).collect()
}
