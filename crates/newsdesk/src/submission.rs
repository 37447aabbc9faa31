//! Values sent downstream: content-save fields and listing filter parameters.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CategoryId, MainGroup};
use crate::error::{NewsdeskError, Result};
use crate::selection::{MAX_SUB_CATEGORIES, Selection};

/// Classification fields stored with a content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub main_group: MainGroup,
    /// Selected sub-categories, in selection order.
    pub category_ids: Vec<CategoryId>,
    pub primary_category_id: CategoryId,
}

impl Submission {
    /// Check an authoring selection and extract the fields to save.
    ///
    /// Filter selections cannot be submitted.
    pub fn from_selection(catalog: &Catalog, selection: &Selection) -> Result<Self> {
        let Selection::Edit(edit) = selection else {
            return Err(NewsdeskError::Validation(
                "Only an authoring selection can be submitted".to_string(),
            ));
        };

        let main_group = edit
            .group
            .ok_or_else(|| NewsdeskError::Validation("Please select a main category".to_string()))?;

        if edit.ids.is_empty() {
            return Err(NewsdeskError::Validation(
                "Please select at least one category".to_string(),
            ));
        }

        if edit.ids.len() > MAX_SUB_CATEGORIES {
            return Err(NewsdeskError::Validation(format!(
                "Please select at most {} sub-categories",
                MAX_SUB_CATEGORIES
            )));
        }

        let mut seen = HashSet::with_capacity(edit.ids.len());
        for &id in &edit.ids {
            if !seen.insert(id) {
                return Err(NewsdeskError::Validation(format!(
                    "Category {} is selected more than once",
                    id
                )));
            }
            if catalog.group_of(id) != Some(main_group) {
                return Err(NewsdeskError::Validation(format!(
                    "Category {} does not belong to {}",
                    id,
                    main_group.label()
                )));
            }
        }

        let primary_category_id = selection
            .primary_id()
            .filter(|id| catalog.contains(*id))
            .ok_or_else(|| {
                NewsdeskError::Validation("Please select a primary category".to_string())
            })?;

        Ok(Self {
            main_group,
            category_ids: edit.ids.clone(),
            primary_category_id,
        })
    }

    /// Multipart form fields as the content-save endpoint expects them.
    pub fn form_fields(&self) -> Result<Vec<(&'static str, String)>> {
        Ok(vec![
            ("category_ids", serde_json::to_string(&self.category_ids)?),
            ("primary_category_id", self.primary_category_id.to_string()),
        ])
    }
}

/// Category filter for listing and sharing queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub category_ids: Vec<CategoryId>,
}

impl FilterQuery {
    /// Works for either selection mode.
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            category_ids: selection.ids().to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category_ids.is_empty()
    }

    /// Query pairs to append; empty when nothing is selected.
    pub fn query_pairs(&self) -> Result<Vec<(&'static str, String)>> {
        if self.category_ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![("category_ids", serde_json::to_string(&self.category_ids)?)])
    }
}
