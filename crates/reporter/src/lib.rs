//! Report client for cloud-stored log records.
//!
//! A [`Reporter`] runs filtered, paginated queries over records previously
//! submitted by the logging facade: [`fetch`](Reporter::fetch) drains
//! matching records page by page for a severity and date range, and
//! [`count`](Reporter::count) returns how many match. Query failures never
//! reach the caller; at most they produce operator warnings.
//!
//! ```no_run
//! use cloudlog_logger::Level;
//! use cloudlog_reporter::{Reporter, ReporterOptions};
//! use cloudlog_store::Credentials;
//! use cloudlog_store_memory::MemoryStore;
//!
//! # async fn example() -> cloudlog_reporter::Result<()> {
//! let reporter = Reporter::new(
//!     ReporterOptions::new()
//!         .credentials(Credentials::new("csk#...", "aci#..."))
//!         .model(42u64),
//!     MemoryStore::new(),
//! )?;
//!
//! reporter
//!     .fetch(Level::Error, None, None, |records| {
//!         for record in records {
//!             println!("{:?}", record.get_str("text"));
//!         }
//!     })
//!     .await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod error;
mod reporter;
mod time_bound;

pub use error::{Error, Result};
pub use reporter::{Reporter, ReporterOptions};
pub use time_bound::TimeBound;
