//! Persistent fingerprint frequencies.

use crate::consts::FINGERPRINT_FORMAT_VERSION;
use crate::encoder::Fingerprint;
use crate::error::{KeyWalkError, KwResult};
use crate::util::fingerprint_key;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFingerprint {
    pub fingerprint: Fingerprint,
    pub example: String,
    pub count: u64,
}

pub trait FingerprintStore {
    /// Adds `count` to the fingerprint's tally. The first example stored
    /// is kept.
    fn upsert(&mut self, fingerprint: &Fingerprint, example: &str, count: u64) -> KwResult<()>;

    fn get(&self, fingerprint: &Fingerprint) -> Option<StoredFingerprint>;

    fn is_file_processed(&self, name: &str) -> bool;

    fn mark_file_processed(&mut self, name: &str) -> KwResult<()>;

    fn entries(&self) -> Vec<StoredFingerprint>;

    fn flush(&mut self) -> KwResult<()> {
        Ok(())
    }

    /// Entries by descending count, ties by fingerprint.
    fn ranked(&self) -> Vec<StoredFingerprint> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.fingerprint.cmp(&b.fingerprint))
        });
        entries
    }
}

/// On-disk document layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    pub format_version: u32,
    /// Keyed by hex SHA-256 of the fingerprint.
    pub fingerprints: BTreeMap<String, StoredFingerprint>,
    pub processed_files: BTreeSet<String>,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            format_version: FINGERPRINT_FORMAT_VERSION,
            fingerprints: BTreeMap::new(),
            processed_files: BTreeSet::new(),
        }
    }
}

impl StoreDocument {
    fn upsert(&mut self, fingerprint: &Fingerprint, example: &str, count: u64) {
        self.fingerprints
            .entry(fingerprint_key(fingerprint.as_str()))
            .and_modify(|e| e.count += count)
            .or_insert_with(|| StoredFingerprint {
                fingerprint: fingerprint.clone(),
                example: example.to_string(),
                count,
            });
    }

    fn get(&self, fingerprint: &Fingerprint) -> Option<StoredFingerprint> {
        self.fingerprints
            .get(&fingerprint_key(fingerprint.as_str()))
            .cloned()
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: StoreDocument,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FingerprintStore for MemoryStore {
    fn upsert(&mut self, fingerprint: &Fingerprint, example: &str, count: u64) -> KwResult<()> {
        self.doc.upsert(fingerprint, example, count);
        Ok(())
    }

    fn get(&self, fingerprint: &Fingerprint) -> Option<StoredFingerprint> {
        self.doc.get(fingerprint)
    }

    fn is_file_processed(&self, name: &str) -> bool {
        self.doc.processed_files.contains(name)
    }

    fn mark_file_processed(&mut self, name: &str) -> KwResult<()> {
        self.doc.processed_files.insert(name.to_string());
        Ok(())
    }

    fn entries(&self) -> Vec<StoredFingerprint> {
        self.doc.fingerprints.values().cloned().collect()
    }
}

/// JSON document rewritten atomically on [`FingerprintStore::flush`].
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    doc: StoreDocument,
    dirty: bool,
}

impl JsonFileStore {
    /// Opens `path`, or starts empty if it does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> KwResult<Self> {
        let path = path.as_ref().to_path_buf();
        let doc = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let doc: StoreDocument = serde_json::from_str(&content)?;
            if doc.format_version != FINGERPRINT_FORMAT_VERSION {
                return Err(KeyWalkError::Store(format!(
                    "{} holds format version {}, expected {}",
                    path.display(),
                    doc.format_version,
                    FINGERPRINT_FORMAT_VERSION
                )));
            }
            info!(
                "Opened store {} ({} fingerprints, {} files processed)",
                path.display(),
                doc.fingerprints.len(),
                doc.processed_files.len()
            );
            doc
        } else {
            debug!("Creating new store at {}", path.display());
            StoreDocument::default()
        };
        Ok(Self {
            path,
            doc,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FingerprintStore for JsonFileStore {
    fn upsert(&mut self, fingerprint: &Fingerprint, example: &str, count: u64) -> KwResult<()> {
        self.doc.upsert(fingerprint, example, count);
        self.dirty = true;
        Ok(())
    }

    fn get(&self, fingerprint: &Fingerprint) -> Option<StoredFingerprint> {
        self.doc.get(fingerprint)
    }

    fn is_file_processed(&self, name: &str) -> bool {
        self.doc.processed_files.contains(name)
    }

    fn mark_file_processed(&mut self, name: &str) -> KwResult<()> {
        if self.doc.processed_files.insert(name.to_string()) {
            self.dirty = true;
        }
        Ok(())
    }

    fn entries(&self) -> Vec<StoredFingerprint> {
        self.doc.fingerprints.values().cloned().collect()
    }

    fn flush(&mut self) -> KwResult<()> {
        if !self.dirty && self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.doc)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        self.dirty = false;
        debug!("Flushed store to {}", self.path.display());
        Ok(())
    }
}
