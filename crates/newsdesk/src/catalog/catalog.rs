//! The immutable, indexed category catalog.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{NewsdeskError, Result};

use super::category::{Category, CategoryId};
use super::group::MainGroup;
use super::resolver::GroupResolver;

/// Statistics about a loaded catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Total number of categories.
    pub total_categories: usize,
    /// Category count per main group, in group order.
    pub per_group: IndexMap<MainGroup, usize>,
    /// Categories that resolved to no group.
    pub ungrouped: usize,
    /// Where the catalog came from.
    pub source: String,
}

/// Category catalog with group membership resolved once at load time.
///
/// A catalog is never mutated after construction, so any number of engines
/// can borrow it at the same time.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    /// Group of `categories[i]`.
    groups: Vec<Option<MainGroup>>,
    id_index: HashMap<CategoryId, usize>,
    /// Positions into `categories`, per group, in catalog order.
    by_group: IndexMap<MainGroup, Vec<usize>>,
    fingerprint: String,
    stats: CatalogStats,
}

impl Catalog {
    /// Build a catalog, resolving every category's group with `resolver`.
    pub fn new(categories: Vec<Category>, resolver: &GroupResolver) -> Result<Self> {
        let mut id_index = HashMap::with_capacity(categories.len());
        let mut by_group: IndexMap<MainGroup, Vec<usize>> =
            MainGroup::ALL.iter().map(|g| (*g, Vec::new())).collect();
        let mut groups = Vec::with_capacity(categories.len());

        for (position, category) in categories.iter().enumerate() {
            if id_index.insert(category.category_id, position).is_some() {
                return Err(NewsdeskError::Catalog(format!(
                    "Duplicate category_id {} ('{}')",
                    category.category_id, category.slug
                )));
            }

            let group = resolver.resolve(category);
            match group {
                Some(group) => by_group.entry(group).or_default().push(position),
                None => tracing::warn!(
                    category_id = category.category_id,
                    slug = %category.slug,
                    "category does not belong to any main group"
                ),
            }
            groups.push(group);
        }

        let fingerprint = compute_fingerprint(&categories, &groups);

        let mut catalog = Self {
            categories,
            groups,
            id_index,
            by_group,
            fingerprint,
            stats: CatalogStats::default(),
        };
        catalog.update_stats("in-memory");

        tracing::debug!(
            total = catalog.stats.total_categories,
            ungrouped = catalog.stats.ungrouped,
            "catalog indexed"
        );

        Ok(catalog)
    }

    /// A catalog with no categories. Every group query returns nothing.
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
            groups: Vec::new(),
            id_index: HashMap::new(),
            by_group: MainGroup::ALL.iter().map(|g| (*g, Vec::new())).collect(),
            fingerprint: compute_fingerprint(&[], &[]),
            stats: CatalogStats {
                per_group: MainGroup::ALL.iter().map(|g| (*g, 0)).collect(),
                source: "empty".to_string(),
                ..Default::default()
            },
        }
    }

    /// Record where the catalog was loaded from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.stats.source = source.into();
        self
    }

    fn update_stats(&mut self, source: &str) {
        self.stats = CatalogStats {
            total_categories: self.categories.len(),
            per_group: self
                .by_group
                .iter()
                .map(|(group, members)| (*group, members.len()))
                .collect(),
            ungrouped: self.groups.iter().filter(|g| g.is_none()).count(),
            source: source.to_string(),
        };
    }

    /// All categories in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look up a category by id.
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.id_index.get(&id).map(|&i| &self.categories[i])
    }

    /// Whether the id exists in the catalog.
    pub fn contains(&self, id: CategoryId) -> bool {
        self.id_index.contains_key(&id)
    }

    /// Group of a category id. `None` for unknown or ungrouped ids.
    pub fn group_of(&self, id: CategoryId) -> Option<MainGroup> {
        self.id_index.get(&id).and_then(|&i| self.groups[i])
    }

    /// Categories belonging to `group`, in catalog order.
    pub fn in_group(&self, group: MainGroup) -> Vec<&Category> {
        self.by_group
            .get(&group)
            .map(|members| members.iter().map(|&i| &self.categories[i]).collect())
            .unwrap_or_default()
    }

    /// Number of categories in `group`.
    pub fn group_len(&self, group: MainGroup) -> usize {
        self.by_group.get(&group).map_or(0, Vec::len)
    }

    /// Categories that resolved to no group.
    pub fn ungrouped(&self) -> Vec<&Category> {
        self.categories
            .iter()
            .zip(&self.groups)
            .filter(|(_, group)| group.is_none())
            .map(|(category, _)| category)
            .collect()
    }

    /// SHA-256 over the ordered `(id, slug, group)` tuples.
    ///
    /// Two catalogs with the same fingerprint classify every id identically.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Statistics about the catalog.
    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }
}

fn compute_fingerprint(categories: &[Category], groups: &[Option<MainGroup>]) -> String {
    let mut hasher = Sha256::new();
    for (category, group) in categories.iter().zip(groups) {
        hasher.update(category.category_id.to_le_bytes());
        hasher.update(category.slug.as_bytes());
        hasher.update([0u8]);
        hasher.update(group.map_or("", |g| g.key()).as_bytes());
        hasher.update([0u8]);
    }
    format!("sha256:{:x}", hasher.finalize())
}
