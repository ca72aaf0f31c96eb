use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use serde::Serialize;
use uuid::Uuid;

use crate::config::FeedConfig;
use crate::error::{Error, Result};

/// One flash-briefing item, serialized with the field order the feed expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRecord {
    pub uid: String,
    pub update_date: String,
    pub title_text: String,
    pub main_text: String,
    pub stream_url: String,
    pub redirection_url: String,
}

impl FeedRecord {
    /// Build a record from an explicit id and timestamp.
    pub fn new(
        stream_url: String,
        config: &FeedConfig,
        id: Uuid,
        updated: DateTime<FixedOffset>,
    ) -> Result<Self> {
        if stream_url.is_empty() {
            return Err(Error::EmptyStreamUrl);
        }
        Ok(Self {
            uid: format!("urn:uuid:{}", id.hyphenated()),
            update_date: updated.to_rfc3339_opts(SecondsFormat::Secs, true),
            title_text: config.title_text.clone(),
            main_text: config.main_text.clone(),
            stream_url,
            redirection_url: config.redirection_url.clone(),
        })
    }

    /// Build a record with a random v4 id, stamped with the local time.
    pub fn now(stream_url: String, config: &FeedConfig) -> Result<Self> {
        Self::new(stream_url, config, Uuid::new_v4(), Local::now().fixed_offset())
    }
}

/// Destination for the serialized feed.
pub trait FeedStore {
    /// Replace the stored feed with `bytes`.
    fn store(&self, bytes: &[u8]) -> Result<()>;
}

/// Writes the feed to a file, truncating whatever was there.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedStore for FileStore {
    fn store(&self, bytes: &[u8]) -> Result<()> {
        std::fs::write(&self.path, bytes).map_err(|source| Error::WriteError {
            path: self.path.clone(),
            source,
        })
    }
}

/// Serialize `record` in full, then hand it to `store`.
pub fn write_feed<S: FeedStore>(record: &FeedRecord, store: &S) -> Result<()> {
    let bytes = serde_json::to_vec(record)?;
    store.store(&bytes)
}

/// Build a fresh record for `stream_url` and write it to the configured file.
pub fn create_feed(stream_url: String, config: &FeedConfig) -> Result<FeedRecord> {
    let record = FeedRecord::now(stream_url, config)?;
    let store = FileStore::new(&config.output_path);
    write_feed(&record, &store)?;
    tracing::info!(path = %store.path().display(), uid = %record.uid, "feed written");
    Ok(record)
}
