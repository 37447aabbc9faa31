//! Caller-side classification state.
//!
//! A [`ClassificationSession`] is what a form or filter panel holds: the
//! shared catalog, the current selection, and the last rejection notice. Each
//! command rebuilds an [`Engine`] over the current snapshot and keeps the
//! selection it returns.
//!
//! ```no_run
//! use std::sync::Arc;
//! use newsdesk::{Catalog, ClassificationSession, MainGroup};
//!
//! # fn example(catalog: Arc<Catalog>) -> newsdesk::Result<()> {
//! let mut session = ClassificationSession::edit(catalog);
//! session.select_main_group(MainGroup::Politics);
//! let result = session.toggle(10);
//! if !result.success {
//!     println!("{}", session.take_notice().map(|n| n.message).unwrap_or_default());
//! }
//! session.save("draft.classification.json")?;
//! # Ok(())
//! # }
//! ```

mod draft;

pub use draft::{DRAFT_FORMAT_VERSION, Draft};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CategoryId, MainGroup};
use crate::engine::{CommandResult, Engine, GroupChange, Toggle};
use crate::error::Result;
use crate::selection::Selection;
use crate::submission::{FilterQuery, Submission};

/// Transient message from a rejected command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Selection state plus the catalog it is interpreted against.
#[derive(Debug, Clone)]
pub struct ClassificationSession {
    catalog: Arc<Catalog>,
    selection: Selection,
    notice: Option<Notice>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ClassificationSession {
    /// Start an authoring session with nothing chosen.
    pub fn edit(catalog: Arc<Catalog>) -> Self {
        Self::with_selection(catalog, Selection::edit(None))
    }

    /// Start a filter session with nothing chosen.
    pub fn filter(catalog: Arc<Catalog>) -> Self {
        Self::with_selection(catalog, Selection::filter([]))
    }

    /// Resume from an existing selection.
    pub fn with_selection(catalog: Arc<Catalog>, selection: Selection) -> Self {
        let now = Utc::now();
        Self {
            catalog,
            selection,
            notice: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Engine over the current snapshot.
    pub fn engine(&self) -> Engine<'_> {
        Engine::new(&self.catalog, &self.selection)
    }

    /// Switch the main category, dropping any sub-categories.
    pub fn select_main_group(&mut self, group: MainGroup) -> CommandResult {
        let change: GroupChange = self.engine().select_main_group(group);
        self.selection = change.selection.clone();
        self.notice = None;
        self.touch();
        change.into_result()
    }

    /// Toggle a sub-category.
    pub fn toggle(&mut self, id: CategoryId) -> CommandResult {
        let outcome = self.engine().toggle_sub_category(id);
        self.apply(outcome)
    }

    /// Choose the primary category.
    pub fn set_primary(&mut self, id: CategoryId) -> CommandResult {
        let outcome = self.engine().set_primary(id);
        self.apply(outcome)
    }

    /// Drop every selected id, keeping mode and main category.
    pub fn clear(&mut self) {
        self.selection = self.engine().clear();
        self.notice = None;
        self.touch();
    }

    /// Back to a fresh session of the same mode (e.g. after a successful save).
    pub fn reset(&mut self) {
        self.selection = match self.selection {
            Selection::Edit(_) => Selection::edit(None),
            Selection::Filter(_) => Selection::filter([]),
        };
        self.notice = None;
        self.touch();
    }

    /// Most recent rejection notice, if it has not been dismissed.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Take and dismiss the current notice.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Fields to save with the content record.
    pub fn submission(&self) -> Result<Submission> {
        Submission::from_selection(&self.catalog, &self.selection)
    }

    /// Listing filter parameters for the current selection.
    pub fn filter_query(&self) -> FilterQuery {
        FilterQuery::from_selection(&self.selection)
    }

    fn apply(&mut self, outcome: Toggle) -> CommandResult {
        match &outcome {
            Toggle::Applied { selection } => {
                self.selection = selection.clone();
                self.notice = None;
                self.touch();
            }
            Toggle::Rejected { reason } => {
                self.notice = Some(Notice {
                    message: reason.message().to_string(),
                    at: Utc::now(),
                });
            }
        }
        outcome.into_result()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
