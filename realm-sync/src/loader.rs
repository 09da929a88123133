//! Archive loader — remote tabular export with placeholder fallback.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use realm_core::archive;
use realm_core::config::ArchiveConfig;
use realm_core::tabular;
use realm_core::types::Record;

use crate::error::SyncError;

/// Where the loader reads records from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveSource {
    /// Published comma-separated export.
    Remote {
        /// Export URL.
        url: String,
    },
    /// No export configured; generate the placeholder archive.
    Placeholder,
}

/// Which source actually produced a [`LoadedArchive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveOrigin {
    /// Records came from the remote export.
    Remote,
    /// Records are the generated placeholder archive.
    Placeholder,
}

/// Result of a load: the records plus where they came from.
#[derive(Debug, Clone)]
pub struct LoadedArchive {
    /// Records in load order.
    pub records: Vec<Record>,
    /// Source that produced them.
    pub origin: ArchiveOrigin,
}

/// Loads the archive once at startup.
pub struct ArchiveLoader {
    source: ArchiveSource,
    http: Client,
    timeout_ms: u64,
    per_category: usize,
}

impl ArchiveLoader {
    /// Create a loader for an explicit source.
    #[must_use]
    pub fn new(source: ArchiveSource, timeout_ms: u64, per_category: usize) -> Self {
        Self {
            source,
            http: Client::new(),
            timeout_ms,
            per_category,
        }
    }

    /// Create a loader from the `[archive]` config section.
    ///
    /// A missing or blank `csv_url` selects [`ArchiveSource::Placeholder`].
    #[must_use]
    pub fn from_config(config: &ArchiveConfig) -> Self {
        let source = match config.remote_url() {
            Some(url) => ArchiveSource::Remote {
                url: url.to_string(),
            },
            None => ArchiveSource::Placeholder,
        };
        Self::new(source, config.request_timeout_ms, config.placeholder_per_category)
    }

    /// The configured source.
    #[must_use]
    pub fn source(&self) -> &ArchiveSource {
        &self.source
    }

    /// Load the archive. Never fails; see the crate docs for the fallback rules.
    pub async fn load(&self) -> LoadedArchive {
        let ArchiveSource::Remote { url } = &self.source else {
            info!(per_category = self.per_category, "No archive URL configured, using placeholder archive");
            return self.placeholder();
        };

        match self.fetch_remote(url).await {
            Ok(records) => {
                info!(url = %url, count = records.len(), "Loaded remote archive");
                LoadedArchive {
                    records,
                    origin: ArchiveOrigin::Remote,
                }
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Archive fetch failed, falling back to placeholder archive");
                self.placeholder()
            }
        }
    }

    /// Fetch and parse the remote export.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] on network failure, timeout, a non-success
    /// status, or a payload with no usable records.
    pub async fn fetch_remote(&self, url: &str) -> Result<Vec<Record>, SyncError> {
        let resp = self
            .http
            .get(url)
            .timeout(Duration::from_millis(self.timeout_ms))
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| self.classify(e))?;
        debug!(bytes = body.len(), "Archive export downloaded");

        let records = tabular::parse_records(&body);
        if records.is_empty() {
            return Err(SyncError::Malformed("export contains no usable rows".into()));
        }
        Ok(records)
    }

    fn classify(&self, err: reqwest::Error) -> SyncError {
        match SyncError::from(err) {
            SyncError::Timeout(_) => SyncError::Timeout(self.timeout_ms),
            other => other,
        }
    }

    fn placeholder(&self) -> LoadedArchive {
        LoadedArchive {
            records: archive::placeholder_archive(self.per_category),
            origin: ArchiveOrigin::Placeholder,
        }
    }
}
