//! In-memory (single process) implementation of the record store contract,
//! for tests and local development.
//!
//! Records live in a vector behind an async mutex. Submission assigns the
//! store builtins (`id`, `added_at`); queries evaluate conditions in process
//! and paginate with the query's page size. Fault switches allow tests to
//! exercise the failure paths of callers.

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod error;

pub use error::Error;

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use cloudlog_store::{builtin, Condition, Direction, ModelId, Page, Query, Record, RecordStore};
use serde_json::Value;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    rows: Vec<(ModelId, Record)>,
    pages_served: usize,
    fail_submissions: bool,
    fail_queries: bool,
    fail_pages_after: Option<usize>,
}

/// In-memory record store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent submission fail.
    pub async fn fail_submissions(&self, fail: bool) {
        self.inner.lock().await.fail_submissions = fail;
    }

    /// Makes every subsequent query fail.
    pub async fn fail_queries(&self, fail: bool) {
        self.inner.lock().await.fail_queries = fail;
    }

    /// Serves `pages` page requests normally, then fails the rest.
    pub async fn fail_pages_after(&self, pages: usize) {
        self.inner.lock().await.fail_pages_after = Some(pages);
    }

    /// Number of records stored for `model`.
    pub async fn stored(&self, model: ModelId) -> usize {
        let inner = self.inner.lock().await;
        inner.rows.iter().filter(|(m, _)| *m == model).count()
    }

    /// Number of page requests served so far, successful or not.
    pub async fn pages_served(&self) -> usize {
        self.inner.lock().await.pages_served
    }

    /// Snapshot of all records stored for `model`, in insertion order.
    pub async fn records(&self, model: ModelId) -> Vec<Record> {
        let inner = self.inner.lock().await;
        inner
            .rows
            .iter()
            .filter(|(m, _)| *m == model)
            .map(|(_, r)| r.clone())
            .collect()
    }

    fn select(inner: &Inner, model: ModelId, query: &Query) -> Vec<Record> {
        let mut matches: Vec<Record> = inner
            .rows
            .iter()
            .filter(|(m, record)| {
                *m == model
                    && query
                        .condition()
                        .map_or(true, |condition| matches_condition(record, condition))
            })
            .map(|(_, record)| record.clone())
            .collect();

        if let Some((field, direction)) = query.ordering() {
            matches.sort_by(|a, b| {
                let ordering = compare_values(a.get(field), b.get(field));
                match direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            });
        }

        matches
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    type Error = Error;

    async fn submit(&self, model: ModelId, mut record: Record) -> Result<(), Self::Error> {
        let mut inner = self.inner.lock().await;
        if inner.fail_submissions {
            return Err(Error::SubmissionRejected);
        }

        inner.next_id += 1;
        record.set(builtin::ID, inner.next_id);
        record.set(
            builtin::ADDED_AT,
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        );

        inner.rows.push((model, record));
        Ok(())
    }

    async fn fetch_page(
        &self,
        model: ModelId,
        query: &Query,
        page: usize,
    ) -> Result<Page, Self::Error> {
        let mut inner = self.inner.lock().await;
        inner.pages_served += 1;
        let drop_page = inner
            .fail_pages_after
            .is_some_and(|pages| inner.pages_served > pages);
        if inner.fail_queries || drop_page {
            return Err(Error::QueryRejected);
        }

        let matches = Self::select(&inner, model, query);
        let page_records = matches
            .into_iter()
            .skip(page * query.page_len())
            .take(query.page_len())
            .collect();

        Ok(Page::new(page_records))
    }

    async fn count(&self, model: ModelId, query: &Query) -> Result<u64, Self::Error> {
        let inner = self.inner.lock().await;
        if inner.fail_queries {
            return Err(Error::QueryRejected);
        }

        Ok(Self::select(&inner, model, query).len() as u64)
    }
}

/// String form used for equality and range comparisons.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn matches_condition(record: &Record, condition: &Condition) -> bool {
    match condition {
        Condition::Equals { field, value } => record
            .get(field)
            .is_some_and(|found| value_text(found) == *value),
        Condition::Between { field, from, to } => record.get(field).is_some_and(|found| {
            let text = value_text(found);
            from.as_ref().map_or(true, |from| text.as_str() >= from.as_str())
                && to.as_ref().map_or(true, |to| text.as_str() <= to.as_str())
        }),
        Condition::And(inner) => inner
            .iter()
            .all(|condition| matches_condition(record, condition)),
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            match (a.as_i64(), b.as_i64()) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => a
                    .as_f64()
                    .partial_cmp(&b.as_f64())
                    .unwrap_or(Ordering::Equal),
            }
        }
        (Some(a), Some(b)) => value_text(a).cmp(&value_text(b)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
