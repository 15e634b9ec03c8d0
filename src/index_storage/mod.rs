//! Persistent index storage with incremental updates
//!
//! Each session directory carries one JSON index document (`.session-index.json`).
//! Entries record a [`Fingerprint`] (size + modification time) of their log file so the
//! next pass can skip files that did not change. Writes go to a temporary file that is
//! renamed over the index, so a failed pass never leaves a half-written document.

pub mod metadata;
pub mod persistence;

pub use metadata::{Fingerprint, needs_rebuild};
pub use persistence::{load_document, save_document};
