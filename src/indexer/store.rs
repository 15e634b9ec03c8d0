use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;

use super::builder::build_session_record;
use super::discovery::discover_log_files;
use crate::config::IndexerConfig;
use crate::error::IndexerError;
use crate::index_storage::{Fingerprint, load_document, needs_rebuild, save_document};
use crate::models::IndexDocument;

/// What a reconcile pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub rebuilt: usize,
    pub pruned: usize,
    pub unchanged: usize,
}

impl ReconcileStats {
    /// Whether the document differs from what was loaded
    pub fn is_dirty(&self) -> bool {
        self.rebuilt > 0 || self.pruned > 0
    }
}

/// Result of a full load-reconcile-persist pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub document: IndexDocument,
    pub stats: ReconcileStats,
    /// Whether the index file was written
    pub persisted: bool,
}

/// Incrementally maintained index of one session directory
#[derive(Debug, Clone)]
pub struct IndexStore {
    dir: PathBuf,
    config: IndexerConfig,
}

impl IndexStore {
    /// Open the store for an existing session directory
    pub fn open(dir: &Path, config: IndexerConfig) -> Result<Self, IndexerError> {
        if !dir.is_dir() {
            return Err(IndexerError::DirectoryNotFound(dir.to_path_buf()));
        }
        Ok(Self { dir: dir.to_path_buf(), config })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.dir.join(&self.config.index_file_name)
    }

    /// Load the stored document; missing, corrupt or incompatible files yield an empty one
    pub fn load(&self) -> IndexDocument {
        let path = self.index_path();
        match load_document(&path) {
            Ok(Some(document)) => document,
            Ok(None) => IndexDocument::empty(),
            Err(e) => {
                log::warn!("Discarding unreadable index, rebuilding: {:#}", e);
                IndexDocument::empty()
            }
        }
    }

    /// Bring `document` in line with the log files currently in the directory
    ///
    /// Entries whose fingerprint changed (or all entries, when `force` is set) are
    /// rebuilt; entries whose file is gone are pruned.
    pub fn reconcile(&self, document: &mut IndexDocument, force: bool) -> Result<ReconcileStats> {
        let files = discover_log_files(&self.dir, &self.config)?;
        let indexed_at = Utc::now();
        let mut stats = ReconcileStats::default();
        let mut present = BTreeSet::new();

        for file in files {
            let fingerprint = match Fingerprint::from_path(&file.path) {
                Ok(fingerprint) => fingerprint,
                Err(e) => {
                    log::warn!("Skipping {}: {:#}", file.path.display(), e);
                    continue;
                }
            };

            let stored = document.sessions.get(&file.stem).map(|record| record.fingerprint());
            if needs_rebuild(stored.as_ref(), &fingerprint, force) {
                log::debug!("Indexing {}", file.path.display());
                let record = build_session_record(&file.path, &file.stem, fingerprint, &self.config, indexed_at);
                document.sessions.insert(file.stem.clone(), record);
                stats.rebuilt += 1;
            } else {
                stats.unchanged += 1;
            }
            present.insert(file.stem);
        }

        let before = document.sessions.len();
        document.sessions.retain(|key, _| present.contains(key));
        stats.pruned = before - document.sessions.len();

        Ok(stats)
    }

    /// Write the document if the pass changed it; returns whether it was written
    pub fn persist(&self, document: &mut IndexDocument, stats: &ReconcileStats) -> Result<bool> {
        if !stats.is_dirty() {
            return Ok(false);
        }
        document.updated_at = Some(Utc::now());
        save_document(&self.index_path(), document)?;
        Ok(true)
    }

    /// Load, reconcile and persist in one pass
    pub fn update(&self, force: bool) -> Result<UpdateOutcome> {
        let mut document = self.load();
        let stats = self.reconcile(&mut document, force)?;
        let persisted = self.persist(&mut document, &stats)?;

        log::info!(
            "Indexed {}: {} rebuilt, {} unchanged, {} pruned ({} total)",
            self.dir.display(),
            stats.rebuilt,
            stats.unchanged,
            stats.pruned,
            document.len()
        );

        Ok(UpdateOutcome { document, stats, persisted })
    }
}
