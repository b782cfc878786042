//! Report execution: filtered, paginated queries over stored records.

use std::path::PathBuf;

use cloudlog_logger::{fields, Level, Settings, DEFAULT_REPORT_LIMIT};
use cloudlog_store::{builtin, Condition, Credentials, Direction, ModelId, Query, Record, RecordStore};
use tracing::warn;

use crate::error::{Error, Result};
use crate::time_bound::TimeBound;

/// Options for building a [`Reporter`].
#[derive(Debug, Default)]
pub struct ReporterOptions {
    settings_file: Option<PathBuf>,
    credentials: Option<Credentials>,
    model: Option<ModelId>,
    warning: Option<bool>,
    report_limit: Option<usize>,
}

impl ReporterOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Points at a JSON settings file; its csk/aci are merged into a
    /// credentials pair.
    pub fn settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_file = Some(path.into());
        self
    }

    /// Sets the backend credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the target model identifier.
    pub fn model(mut self, model: impl Into<ModelId>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Enables or disables operator warnings.
    pub fn warning(mut self, warning: bool) -> Self {
        self.warning = Some(warning);
        self
    }

    /// Caps the cumulative records a single fetch drains across pages.
    pub fn report_limit(mut self, limit: usize) -> Self {
        self.report_limit = Some(limit);
        self
    }

    fn into_config(self) -> Result<ReporterConfig> {
        let mut credentials = self.credentials;
        let mut model = self.model;
        let mut warning = self.warning;
        let mut report_limit = self.report_limit;

        if let Some(path) = &self.settings_file {
            let settings = Settings::load(path)?;
            if let (Some(csk), Some(aci)) = (settings.csk, settings.aci) {
                credentials = Some(Credentials::new(csk, aci));
            }
            model = settings.model_identifier.map(ModelId).or(model);
            warning = settings.warning.or(warning);
            report_limit = settings.report_limit.or(report_limit);
        }

        Ok(ReporterConfig {
            credentials: credentials.ok_or(Error::MissingCredentials)?,
            model: model.ok_or(Error::MissingModel)?,
            warning: warning.unwrap_or(false),
            report_limit: report_limit.unwrap_or(DEFAULT_REPORT_LIMIT),
        })
    }
}

/// Merged reporter configuration. Immutable once built.
#[derive(Debug)]
struct ReporterConfig {
    credentials: Credentials,
    model: ModelId,
    warning: bool,
    report_limit: usize,
}

/// Queries previously stored log records.
///
/// Reports run over a level and a closed creation-date range; results come
/// back newest first, one fixed-size page at a time.
pub struct Reporter<S: RecordStore> {
    config: ReporterConfig,
    store: S,
}

impl<S: RecordStore> Reporter<S> {
    /// Builds a reporter from `options`, querying `store`.
    pub fn new(options: ReporterOptions, store: S) -> Result<Self> {
        Ok(Self {
            config: options.into_config()?,
            store,
        })
    }

    /// Backend credentials, for building the store client.
    pub fn credentials(&self) -> &Credentials {
        &self.config.credentials
    }

    /// Cumulative record cap for one fetch.
    pub fn report_limit(&self) -> usize {
        self.config.report_limit
    }

    /// Fetches records at `level` created within the bounds, newest first,
    /// invoking `on_page` once per delivered page.
    ///
    /// The first page is always delivered, even when empty. Draining then
    /// continues sequentially and stops once a page comes back empty or the
    /// running total of delivered records reaches the report limit. The
    /// limit caps total records drained, not requests issued. A page-fetch
    /// failure ends the drain silently, surfaced only through the warning
    /// channel; nothing is raised to the caller.
    pub async fn fetch<F>(
        &self,
        level: Level,
        from: Option<TimeBound>,
        to: Option<TimeBound>,
        mut on_page: F,
    ) where
        F: FnMut(&[Record]),
    {
        let query = self
            .filter(level, from, to)
            .order_by(builtin::ID, Direction::Desc);

        let mut page = 0;
        let mut seen = 0;

        loop {
            let batch = match self.store.fetch_page(self.config.model, &query, page).await {
                Ok(batch) => batch,
                Err(e) => {
                    self.warn_it(format_args!("report page {page} failed: {e:?}"));
                    return;
                }
            };

            // Continuation pages that come back empty mark exhaustion and
            // are not delivered; the first page is the caller's answer even
            // when empty.
            if page > 0 && batch.is_empty() {
                return;
            }

            on_page(&batch.records);
            seen += batch.returned;

            if batch.is_empty() || seen >= self.config.report_limit {
                return;
            }

            page += 1;
        }
    }

    /// Counts records at `level` created within the bounds.
    ///
    /// Returns 0 when the backend reports nothing or the query fails (the
    /// failure is surfaced only through the warning channel).
    pub async fn count(
        &self,
        level: Level,
        from: Option<TimeBound>,
        to: Option<TimeBound>,
    ) -> u64 {
        let query = self.filter(level, from, to);

        match self.store.count(self.config.model, &query).await {
            Ok(count) => count,
            Err(e) => {
                self.warn_it(format_args!("report count failed: {e:?}"));
                0
            }
        }
    }

    /// Level equality AND creation timestamp between the rendered bounds.
    /// `None` bounds stay unbounded and are never formatted.
    fn filter(&self, level: Level, from: Option<TimeBound>, to: Option<TimeBound>) -> Query {
        Query::new().filter(Condition::and([
            Condition::equals(fields::LEVEL, level.as_str()),
            Condition::between(
                builtin::ADDED_AT,
                from.map(|bound| bound.render()),
                to.map(|bound| bound.render()),
            ),
        ]))
    }

    fn warn_it(&self, message: std::fmt::Arguments<'_>) {
        if self.config.warning {
            warn!(target: "cloudlog", "{message}");
        }
    }
}
