//! The classification engine.
//!
//! An [`Engine`] is a read-only view over a catalog and a selection. Queries
//! answer what the UI should render; commands return a new selection instead
//! of changing the one they were built from. Callers rebuild the engine
//! whenever their selection changes.
//!
//! Invariants are guaranteed for every selection produced by a command:
//!
//! - an edit selection has at most one active main group,
//! - every selected id belongs to that group,
//! - at most [`MAX_SUB_CATEGORIES`] ids are selected,
//! - the primary, when there is one, is among the selected ids.
//!
//! Snapshots handed in by callers are trusted for reads and never repaired.
//!
//! # Example
//!
//! ```
//! use newsdesk::{Catalog, Category, Engine, GroupResolver, MainGroup, Selection};
//!
//! let catalog = Catalog::new(
//!     vec![
//!         Category::new(10, "Parliament", "parliament").with_parent("politics"),
//!         Category::new(20, "Football", "football").with_parent("sports"),
//!     ],
//!     &GroupResolver::new(),
//! )
//! .unwrap();
//!
//! let selection = Selection::edit(Some(MainGroup::Politics));
//! let engine = Engine::new(&catalog, &selection);
//!
//! assert!(engine.is_disabled(20));
//! let selection = engine.toggle_sub_category(10).apply_to(selection.clone());
//! assert_eq!(selection.ids(), &[10]);
//! ```

mod outcome;
mod reason;

pub use outcome::{CommandResult, GroupChange, Toggle};
pub use reason::DisabledReason;

use serde::Serialize;

use crate::catalog::{Catalog, Category, CategoryId, MainGroup};
use crate::selection::{EditSelection, MAX_SUB_CATEGORIES, Selection};

/// Per-group counts shown in pickers and filter panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub group: MainGroup,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Categories in the group.
    pub total: usize,
    /// Of those, how many are selected.
    pub selected: usize,
    /// Whether this is the active main group of an edit selection.
    pub active: bool,
}

/// Render state of a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryState<'a> {
    pub category: &'a Category,
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<DisabledReason>,
}

/// Queries and commands over one `(catalog, selection)` snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    catalog: &'a Catalog,
    selection: &'a Selection,
}

impl<'a> Engine<'a> {
    pub fn new(catalog: &'a Catalog, selection: &'a Selection) -> Self {
        Self { catalog, selection }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn selection(&self) -> &'a Selection {
        self.selection
    }

    // Queries

    /// The nine main groups in display order.
    pub fn main_groups(&self) -> &'static [MainGroup] {
        &MainGroup::ALL
    }

    /// Sub-categories an editor can choose from under `group`.
    pub fn sub_categories_for(&self, group: MainGroup) -> Vec<&'a Category> {
        self.catalog.in_group(group)
    }

    /// Every category in `group`, for filter panels that show counts.
    pub fn all_categories_for(&self, group: MainGroup) -> Vec<&'a Category> {
        self.catalog.in_group(group)
    }

    pub fn is_selected(&self, id: CategoryId) -> bool {
        self.selection.contains(id)
    }

    pub fn selected_ids(&self) -> &'a [CategoryId] {
        self.selection.ids()
    }

    /// Selected categories that exist in the catalog, in selection order.
    pub fn selected_categories(&self) -> Vec<&'a Category> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .collect()
    }

    /// Whether selecting `id` now would break an invariant.
    pub fn is_disabled(&self, id: CategoryId) -> bool {
        self.disabled_reason(id).is_some()
    }

    /// Why `id` cannot be selected, or `None` if it can.
    ///
    /// Filters never disable anything. For edits the checks run in order:
    /// no main group, wrong group, limit reached. An id that is already
    /// selected is never blocked by the limit.
    pub fn disabled_reason(&self, id: CategoryId) -> Option<DisabledReason> {
        let Selection::Edit(edit) = self.selection else {
            return None;
        };

        let Some(active) = edit.group else {
            return Some(DisabledReason::NoMainGroup);
        };

        if self.catalog.group_of(id) != Some(active) {
            return Some(DisabledReason::OtherGroup);
        }

        if !edit.ids.contains(&id) && edit.ids.len() >= MAX_SUB_CATEGORIES {
            return Some(DisabledReason::LimitReached);
        }

        None
    }

    /// The category representing the content's main classification.
    pub fn primary_category(&self) -> Option<&'a Category> {
        self.selection
            .primary_id()
            .and_then(|id| self.catalog.get(id))
    }

    /// Number of selected ids that belong to `group`.
    pub fn selected_count_for(&self, group: MainGroup) -> usize {
        self.selection
            .ids()
            .iter()
            .filter(|id| self.catalog.group_of(**id) == Some(group))
            .count()
    }

    /// Counts for every main group, in display order.
    pub fn group_summaries(&self) -> Vec<GroupSummary> {
        let active = self.selection.group();
        MainGroup::ALL
            .iter()
            .map(|&group| GroupSummary {
                group,
                label: group.label(),
                icon: group.icon(),
                color: group.color(),
                total: self.catalog.group_len(group),
                selected: self.selected_count_for(group),
                active: active == Some(group),
            })
            .collect()
    }

    /// Selected/disabled state for every category in `group`.
    pub fn category_states(&self, group: MainGroup) -> Vec<CategoryState<'a>> {
        self.catalog
            .in_group(group)
            .into_iter()
            .map(|category| CategoryState {
                category,
                selected: self.is_selected(category.category_id),
                disabled_reason: self.disabled_reason(category.category_id),
            })
            .collect()
    }

    // Commands

    /// Switch the main category.
    ///
    /// Always succeeds and always drops the current sub-categories: they are
    /// meaningless under another group. A filter selection becomes an edit
    /// selection for `group`.
    pub fn select_main_group(&self, group: MainGroup) -> GroupChange {
        let change = GroupChange {
            previous: self.selection.group(),
            cleared: self.selection.ids().to_vec(),
            selection: Selection::edit(Some(group)),
        };
        tracing::debug!(
            from = ?change.previous,
            to = %group,
            cleared = change.cleared.len(),
            "main category switched"
        );
        change
    }

    /// Select `id` if it is not selected, deselect it if it is.
    pub fn toggle_sub_category(&self, id: CategoryId) -> Toggle {
        if self.is_selected(id) {
            tracing::debug!(category_id = id, "sub-category removed");
            return Toggle::Applied {
                selection: self.without(id),
            };
        }

        if let Some(reason) = self.disabled_reason(id) {
            tracing::debug!(category_id = id, ?reason, "toggle rejected");
            return Toggle::Rejected { reason };
        }

        tracing::debug!(category_id = id, "sub-category added");
        Toggle::Applied {
            selection: self.with(id),
        }
    }

    /// Make `id` the primary category, selecting it first if needed.
    pub fn set_primary(&self, id: CategoryId) -> Toggle {
        let Selection::Edit(edit) = self.selection else {
            return Toggle::Rejected {
                reason: DisabledReason::FilterMode,
            };
        };

        let mut next = edit.clone();
        if !next.ids.contains(&id) {
            if let Some(reason) = self.disabled_reason(id) {
                tracing::debug!(category_id = id, ?reason, "primary rejected");
                return Toggle::Rejected { reason };
            }
            next.ids.push(id);
        }
        next.primary = Some(id);

        tracing::debug!(category_id = id, "primary category set");
        Toggle::Applied {
            selection: Selection::Edit(next),
        }
    }

    /// Drop every selected id, keeping the mode and active group.
    pub fn clear(&self) -> Selection {
        self.selection.cleared()
    }

    fn with(&self, id: CategoryId) -> Selection {
        match self.selection {
            Selection::Edit(edit) => {
                let mut next = edit.clone();
                next.ids.push(id);
                Selection::Edit(next)
            }
            Selection::Filter(filter) => {
                let mut next = filter.clone();
                next.ids.push(id);
                Selection::Filter(next)
            }
        }
    }

    fn without(&self, id: CategoryId) -> Selection {
        match self.selection {
            Selection::Edit(edit) => {
                let primary = edit.primary.filter(|p| *p != id);
                Selection::Edit(EditSelection {
                    group: edit.group,
                    ids: edit.ids.iter().copied().filter(|i| *i != id).collect(),
                    primary,
                })
            }
            Selection::Filter(filter) => {
                Selection::filter(filter.ids.iter().copied().filter(|i| *i != id))
            }
        }
    }
}
