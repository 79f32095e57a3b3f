#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};

use school_catalog::client::SchoolSource;
use school_catalog::error::FetchError;
use school_catalog::models::QueryState;

/// In-memory stand-in for the remote API: answers with queued responses in
/// order and remembers every query it was asked for. Once the queue is empty
/// it answers HTTP 503.
#[derive(Default)]
pub struct StubSource {
    responses: Mutex<VecDeque<Result<Value, FetchError>>>,
    seen: Mutex<Vec<QueryState>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, body: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body));
        self
    }

    pub fn with_failure(self, status: StatusCode) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(FetchError::HttpStatus(status)));
        self
    }

    pub fn seen(&self) -> Vec<QueryState> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl SchoolSource for StubSource {
    async fn fetch(&self, query: &QueryState) -> Result<Value, FetchError> {
        self.seen.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(FetchError::HttpStatus(StatusCode::SERVICE_UNAVAILABLE)))
    }
}

/// A school as the registry sends it.
pub fn school(region: &str, name: &str, address: &str, levels: &[&str]) -> Value {
    let programs: Vec<Value> = levels
        .iter()
        .map(|level| json!({ "edu_level": { "name": level } }))
        .collect();

    json!({
        "edu_org": {
            "region": { "name": region },
            "short_name": name,
            "contact_info": { "post_address": address }
        },
        "supplements": [ { "educational_programs": programs } ]
    })
}

/// A `{ data: { list, page, pages_count, total_count } }` body with `len`
/// generated schools.
pub fn page_body(len: usize, page: u32, pages_count: i64, total_count: i64) -> Value {
    let list: Vec<Value> = (1..=len)
        .map(|i| {
            school(
                "Москва",
                &format!("Школа №{i}"),
                &format!("ул. Ленина, {i}"),
                &["Высшее образование - бакалавриат"],
            )
        })
        .collect();

    json!({
        "data": {
            "list": list,
            "page": page,
            "pages_count": pages_count,
            "total_count": total_count
        }
    })
}
