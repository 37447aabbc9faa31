//! Saving and resuming sessions as JSON drafts.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{NewsdeskError, Result};
use crate::selection::Selection;

use super::ClassificationSession;

/// Current version of the draft format.
pub const DRAFT_FORMAT_VERSION: &str = "1.0.0";

/// Serialized session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub newsdesk_version: String,
    /// Fingerprint of the catalog the selection was made against.
    pub catalog_fingerprint: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub selection: Selection,
}

impl ClassificationSession {
    /// Snapshot the session as a draft.
    pub fn to_draft(&self) -> Draft {
        Draft {
            newsdesk_version: DRAFT_FORMAT_VERSION.to_string(),
            catalog_fingerprint: self.catalog.fingerprint().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            selection: self.selection.clone(),
        }
    }

    /// Resume a draft against `catalog`.
    ///
    /// Fails with [`NewsdeskError::StaleDraft`] if the catalog has changed
    /// since the draft was saved, since ids may now sit in other groups.
    pub fn from_draft(draft: Draft, catalog: Arc<Catalog>) -> Result<Self> {
        if draft.catalog_fingerprint != catalog.fingerprint() {
            return Err(NewsdeskError::StaleDraft {
                expected: draft.catalog_fingerprint,
                found: catalog.fingerprint().to_string(),
            });
        }

        Ok(Self {
            catalog,
            selection: draft.selection,
            notice: None,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
        })
    }

    /// Save the session to a JSON file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| NewsdeskError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = File::create(path).map_err(|source| NewsdeskError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.to_draft())?;

        tracing::debug!(path = %path.display(), "draft saved");
        Ok(())
    }

    /// Load a session saved with [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>, catalog: Arc<Catalog>) -> Result<Self> {
        let draft = Draft::load(path)?;
        Self::from_draft(draft, catalog)
    }
}

impl Draft {
    /// Read a draft without checking it against a catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| NewsdeskError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, GroupResolver, MainGroup};
    use tempfile::TempDir;

    fn catalog(parent: &str) -> Arc<Catalog> {
        Arc::new(
            Catalog::new(
                vec![Category::new(10, "Parliament", "parliament").with_parent(parent)],
                &GroupResolver::new(),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_draft_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("draft.json");

        let session = ClassificationSession::edit(catalog("politics"));
        session.save(&path).unwrap();

        let draft = Draft::load(&path).unwrap();
        assert_eq!(draft.newsdesk_version, DRAFT_FORMAT_VERSION);
        assert_eq!(draft.selection, Selection::edit(None));
    }

    #[test]
    fn test_stale_draft_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.json");

        let mut session = ClassificationSession::edit(catalog("politics"));
        session.select_main_group(MainGroup::Politics);
        session.toggle(10);
        session.save(&path).unwrap();

        match ClassificationSession::load(&path, catalog("sports")) {
            Err(NewsdeskError::StaleDraft { .. }) => {}
            other => panic!("Expected StaleDraft, got {:?}", other.map(|s| s.to_draft())),
        }
    }
}
