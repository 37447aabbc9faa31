//! Mapping categories to main groups.
//!
//! The explicit `parent` field always wins. Slug conventions are only applied
//! when a caller installs them; a category that matches nothing stays
//! ungrouped rather than being assigned by guesswork.

use regex::Regex;

use crate::error::Result;

use super::category::Category;
use super::group::MainGroup;

/// A slug pattern that assigns matching categories to a group.
#[derive(Debug, Clone)]
pub struct SlugRule {
    pattern: Regex,
    group: MainGroup,
}

impl SlugRule {
    /// Compile a rule from a regex pattern.
    pub fn new(pattern: &str, group: MainGroup) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            group,
        })
    }

    /// The group assigned by this rule.
    pub fn group(&self) -> MainGroup {
        self.group
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn matches(&self, slug: &str) -> bool {
        self.pattern.is_match(slug)
    }
}

/// Resolves which main group a category belongs to.
#[derive(Debug, Clone, Default)]
pub struct GroupResolver {
    slug_rules: Vec<SlugRule>,
}

impl GroupResolver {
    /// Resolver that only honours the explicit `parent` field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slug rule. Rules are tried in insertion order.
    pub fn with_slug_rule(mut self, pattern: &str, group: MainGroup) -> Result<Self> {
        self.slug_rules.push(SlugRule::new(pattern, group)?);
        Ok(self)
    }

    /// Install the `<group-key>-…` slug prefix convention for every group.
    ///
    /// `politics-parliament` and `politics` resolve to `politics`;
    /// `politicsweek` does not.
    pub fn with_slug_prefixes(self) -> Result<Self> {
        MainGroup::ALL.iter().try_fold(self, |resolver, &group| {
            resolver.with_slug_rule(&format!("^{}(-|$)", regex::escape(group.key())), group)
        })
    }

    /// Installed slug rules.
    pub fn slug_rules(&self) -> &[SlugRule] {
        &self.slug_rules
    }

    /// Resolve a category to its group, if any.
    pub fn resolve(&self, category: &Category) -> Option<MainGroup> {
        if let Some(parent) = category.parent.as_deref() {
            if let Ok(group) = parent.parse::<MainGroup>() {
                return Some(group);
            }
        }

        let slug = category.slug.trim().to_lowercase();
        self.slug_rules
            .iter()
            .find(|rule| rule.matches(&slug))
            .map(SlugRule::group)
    }
}
