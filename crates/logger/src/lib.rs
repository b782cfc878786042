//! Cloud-backed logging facade.
//!
//! A [`Logger`] accepts calls at six severities, optionally mirrors each one
//! into a caller-supplied [`LegacyLogger`], and, when the call's level passes
//! the configured threshold, assembles a record and submits it to a
//! [`RecordStore`](cloudlog_store::RecordStore) in the background. Submission
//! is fire-and-forget: a failed submit never reaches the caller, at most it
//! produces an operator warning.
//!
//! ```no_run
//! use cloudlog_logger::{Level, Logger, LoggerOptions};
//! use cloudlog_store_memory::MemoryStore;
//!
//! # async fn example() -> cloudlog_logger::Result<()> {
//! let logger = Logger::new(
//!     LoggerOptions::new()
//!         .csk("csk#...")
//!         .aci("aci#...")
//!         .level(Level::Error)
//!         .model(42u64),
//!     MemoryStore::new(),
//! )?;
//!
//! logger.debug("below the threshold, not submitted", None, None);
//! logger.fatal("submitted", None, None);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod legacy;
mod level;
mod log_error;
mod logger;

pub use config::{LoggerConfig, LoggerOptions, Settings, DEFAULT_REPORT_LIMIT};
pub use error::{Error, Result};
pub use legacy::LegacyLogger;
pub use level::Level;
pub use log_error::LogError;
pub use logger::{fields, Logger};
