//! Category records as delivered by the catalog endpoint.

use serde::{Deserialize, Serialize};

/// Stable identifier of a category.
pub type CategoryId = i64;

/// A sub-category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique, stable id.
    pub category_id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Explicit parent group, when the backend provides one.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "group")]
    pub parent: Option<String>,
}

impl Category {
    /// Create a category without an explicit parent.
    pub fn new(category_id: CategoryId, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            category_id,
            name: name.into(),
            slug: slug.into(),
            parent: None,
        }
    }

    /// Set the explicit parent group.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// Response body of the catalog endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub categories: Vec<Category>,
}
