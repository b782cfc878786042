//! Backend contract for cloud record storage.
//!
//! The logging facade and the reporter never talk to a backend directly; they
//! go through the [`RecordStore`] trait defined here. A store accepts records
//! tagged with a [`ModelId`], answers filtered and ordered queries one page at
//! a time, and supports a count projection over the same filters. Transport,
//! authentication and query execution are entirely the store's business.

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod query;
mod record;

pub use query::{Condition, Direction, Query, DEFAULT_PAGE_SIZE};
pub use record::Record;

use std::error::Error;
use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Field names assigned by the store itself on submission.
pub mod builtin {
    /// Monotonic record identifier.
    pub const ID: &str = "id";
    /// Creation timestamp, formatted `YYYY-MM-DD HH:MM:SS`.
    pub const ADDED_AT: &str = "added_at";
}

/// Identifier of the backend-side model (schema/collection) records go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(pub u64);

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ModelId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Opaque secret + id pair authenticating calls to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Client secret key.
    pub csk: String,
    /// Application client id.
    pub aci: String,
}

impl Credentials {
    /// Creates a credentials pair.
    pub fn new(csk: impl Into<String>, aci: impl Into<String>) -> Self {
        Self {
            csk: csk.into(),
            aci: aci.into(),
        }
    }
}

/// One page of query results.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Records in this page, in query order.
    pub records: Vec<Record>,
    /// Number of records the backend returned for this page.
    pub returned: usize,
}

impl Page {
    /// Creates a page from a batch of records.
    pub fn new(records: Vec<Record>) -> Self {
        let returned = records.len();
        Self { records, returned }
    }

    /// Whether this page carried no records.
    pub fn is_empty(&self) -> bool {
        self.returned == 0
    }
}

/// A record store with asynchronous submission and query operations.
///
/// Implementations are cheap to clone and safe to share across tasks. Every
/// operation is a single round trip; pagination is driven by the caller via
/// the zero-based `page` index of [`fetch_page`](RecordStore::fetch_page).
#[async_trait]
pub trait RecordStore: Clone + Send + Sync + 'static {
    /// Store-specific error type.
    type Error: Debug + Error + Send + Sync;

    /// Submits one record to the given model.
    async fn submit(&self, model: ModelId, record: Record) -> Result<(), Self::Error>;

    /// Fetches one page of records matching `query`.
    async fn fetch_page(
        &self,
        model: ModelId,
        query: &Query,
        page: usize,
    ) -> Result<Page, Self::Error>;

    /// Counts the records matching `query`.
    async fn count(&self, model: ModelId, query: &Query) -> Result<u64, Self::Error>;
}
