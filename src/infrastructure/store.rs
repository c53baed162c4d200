use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::utils::idgen::generate_id;

/// Failure of the backing file: either the I/O itself or the persisted
/// content no longer parsing as a JSON array of records.
#[derive(Debug, Display)]
pub enum StoreError {
    #[display("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[display("invalid JSON in {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Corrupt { source, .. } => Some(source),
        }
    }
}

/// A persistable record of one collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    fn id(&self) -> &str;
    fn assign_id(&mut self, id: String);
    fn slug(&self) -> &str;
    /// Refreshes the record's `updated_at` timestamp.
    fn touch(&mut self, at: DateTime<Utc>);
}

/// Durable storage for one ordered collection of records, backed by a single
/// JSON file holding a pretty-printed array.
///
/// Every operation is a full read-modify-write cycle over the whole file.
/// There is no locking and no optimistic-concurrency check: two concurrent
/// writers race, and the last full-file overwrite wins, discarding the other
/// writer's change. The store is only suitable for a single-writer,
/// personal-site-scale deployment.
pub struct JsonStore<T> {
    path: PathBuf,
    lenient_reads: bool,
    _marker: PhantomData<T>,
}

impl<T: Record> JsonStore<T> {
    /// With `lenient_reads` a corrupt backing file is logged and read as an
    /// empty collection. Pass `false` to surface `StoreError::Corrupt` to
    /// the caller instead.
    pub fn new(path: impl Into<PathBuf>, lenient_reads: bool) -> Self {
        JsonStore {
            path: path.into(),
            lenient_reads,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole collection. A missing file is materialized as `[]`
    /// first, so absence of the file is equivalent to an empty collection.
    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        self.ensure_file().await?;

        let raw = fs::read(&self.path).await.map_err(|e| self.io_err(e))?;

        match serde_json::from_slice(&raw) {
            Ok(records) => Ok(records),
            Err(source) if self.lenient_reads => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %source,
                    "collection file is corrupt, treating as empty"
                );
                Ok(Vec::new())
            }
            Err(source) => Err(StoreError::Corrupt {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Serializes the full sequence and overwrites the backing file.
    /// Write failures propagate; nothing is retried.
    pub async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| self.io_err(e))?;
        }

        let body = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, body).await.map_err(|e| self.io_err(e))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        let records = self.load().await?;
        Ok(records.into_iter().find(|r| r.id() == id))
    }

    /// First record with a matching slug. Slug uniqueness is not enforced at
    /// write time, so duplicates are reachable only through their ids.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<T>, StoreError> {
        let records = self.load().await?;
        Ok(records.into_iter().find(|r| r.slug() == slug))
    }

    /// Assigns a fresh id, appends the record, and persists the collection.
    pub async fn insert(&self, mut record: T) -> Result<T, StoreError> {
        record.assign_id(generate_id());

        let mut records = self.load().await?;
        records.push(record.clone());
        self.save(&records).await?;

        Ok(record)
    }

    /// Applies `apply` to the record with the given id, refreshes its
    /// `updated_at`, and persists. Returns `None` when the id is unknown.
    pub async fn update_by_id<F>(&self, id: &str, apply: F) -> Result<Option<T>, StoreError>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.load().await?;

        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };

        apply(record);
        record.touch(Utc::now());
        let updated = record.clone();

        self.save(&records).await?;
        Ok(Some(updated))
    }

    /// Removes exactly the record with the given id. Returns `false` without
    /// rewriting the file when the id is unknown.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self.load().await?;

        let Some(index) = records.iter().position(|r| r.id() == id) else {
            return Ok(false);
        };

        records.remove(index);
        self.save(&records).await?;
        Ok(true)
    }

    async fn ensure_file(&self) -> Result<(), StoreError> {
        if fs::try_exists(&self.path).await.map_err(|e| self.io_err(e))? {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| self.io_err(e))?;
        }
        fs::write(&self.path, b"[]").await.map_err(|e| self.io_err(e))
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
