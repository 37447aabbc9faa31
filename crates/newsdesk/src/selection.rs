//! Selection state owned by forms and filter panels.
//!
//! The mode is part of the type: an editing form holds an [`EditSelection`]
//! (one main group, at most [`MAX_SUB_CATEGORIES`] ids), a listing filter
//! holds a [`FilterSelection`] (any ids, any groups). Engine commands take a
//! selection by reference and hand back a new one.

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryId, MainGroup};

/// Upper bound on sub-categories for a single piece of content.
pub const MAX_SUB_CATEGORIES: usize = 4;

/// Selection made in an authoring form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSelection {
    /// Active main group; `None` until the editor picks one.
    #[serde(default)]
    pub group: Option<MainGroup>,
    /// Selected sub-categories in the order they were picked.
    #[serde(default)]
    pub ids: Vec<CategoryId>,
    /// Explicitly chosen primary, if the editor overrode the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<CategoryId>,
}

/// Selection made in a listing or sharing filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub ids: Vec<CategoryId>,
}

/// Either kind of selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Selection {
    Edit(EditSelection),
    Filter(FilterSelection),
}

impl Selection {
    /// Empty authoring selection, optionally with a main group already chosen.
    pub fn edit(group: Option<MainGroup>) -> Self {
        Selection::Edit(EditSelection {
            group,
            ..Default::default()
        })
    }

    /// Authoring selection with a group and pre-selected ids (e.g. when
    /// reopening saved content). The ids are trusted as given.
    pub fn edit_with(group: MainGroup, ids: impl IntoIterator<Item = CategoryId>) -> Self {
        Selection::Edit(EditSelection {
            group: Some(group),
            ids: ids.into_iter().collect(),
            primary: None,
        })
    }

    /// Filter selection with the given ids.
    pub fn filter(ids: impl IntoIterator<Item = CategoryId>) -> Self {
        Selection::Filter(FilterSelection {
            ids: ids.into_iter().collect(),
        })
    }

    /// Build from the loose `(ids, active group?)` pair callers usually hold:
    /// a present group means an authoring form, an absent one a filter.
    pub fn from_parts(ids: impl IntoIterator<Item = CategoryId>, group: Option<MainGroup>) -> Self {
        match group {
            Some(group) => Selection::edit_with(group, ids),
            None => Selection::filter(ids),
        }
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[CategoryId] {
        match self {
            Selection::Edit(edit) => &edit.ids,
            Selection::Filter(filter) => &filter.ids,
        }
    }

    /// Active main group. Always `None` for filters.
    pub fn group(&self) -> Option<MainGroup> {
        match self {
            Selection::Edit(edit) => edit.group,
            Selection::Filter(_) => None,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Selection::Edit(_))
    }

    pub fn is_filter(&self) -> bool {
        matches!(self, Selection::Filter(_))
    }

    pub fn len(&self) -> usize {
        self.ids().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids().is_empty()
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.ids().contains(&id)
    }

    /// Id of the primary category.
    ///
    /// An explicit primary counts only while it is still selected; otherwise
    /// the first selected id is primary.
    pub fn primary_id(&self) -> Option<CategoryId> {
        if let Selection::Edit(EditSelection {
            primary: Some(primary),
            ids,
            ..
        }) = self
        {
            if ids.contains(primary) {
                return Some(*primary);
            }
        }
        self.ids().first().copied()
    }

    /// Same mode (and group, for edits) with nothing selected.
    pub fn cleared(&self) -> Self {
        match self {
            Selection::Edit(edit) => Selection::edit(edit.group),
            Selection::Filter(_) => Selection::filter([]),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::edit(None)
    }
}
