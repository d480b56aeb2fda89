//! Category registry.
//!
//! Maps a URL-safe slug to the remote classification tag used to select
//! products and the title shown on the page. The registry is built once at
//! startup (from configuration or [`CategoryRegistry::builtin`]) and only
//! read afterwards.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One logical product category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// URL-safe identifier, unique within a registry.
    pub slug: String,
    /// Remote classification tag.
    pub tag: String,
    /// Display label.
    pub title: String,
}

impl CategoryDefinition {
    #[must_use]
    pub fn new(slug: &str, tag: &str, title: &str) -> Self {
        Self {
            slug: slug.to_string(),
            tag: tag.to_string(),
            title: title.to_string(),
        }
    }
}

/// The four categories the dashboard ships with.
#[must_use]
pub fn builtin_categories() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition::new("simple", "HJMQS", "Simple"),
        CategoryDefinition::new("2-button", "HJMQ2B", "2 Button"),
        CategoryDefinition::new("7-button", "HJMQ7B", "7 Button"),
        CategoryDefinition::new("quilt", "HJMQQ", "Quilt"),
    ]
}

/// Immutable slug → category lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    categories: Vec<CategoryDefinition>,
}

impl CategoryRegistry {
    /// Build a registry, rejecting empty lists, duplicate or non URL-safe
    /// slugs, and blank tags or titles.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] describing the first offending entry.
    pub fn new(categories: Vec<CategoryDefinition>) -> Result<Self, CoreError> {
        if categories.is_empty() {
            return Err(CoreError::Validation(
                "at least one category must be registered".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(categories.len());
        for category in &categories {
            if !is_url_safe(&category.slug) {
                return Err(CoreError::Validation(format!(
                    "category slug '{}' must be non-empty and contain only ASCII letters, digits, '-' or '_'",
                    category.slug
                )));
            }
            if !seen.insert(category.slug.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate category slug '{}'",
                    category.slug
                )));
            }
            if category.tag.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "category '{}' has an empty tag",
                    category.slug
                )));
            }
            if category.title.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "category '{}' has an empty title",
                    category.slug
                )));
            }
        }

        Ok(Self { categories })
    }

    /// Registry holding [`builtin_categories`].
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            categories: builtin_categories(),
        }
    }

    /// Look up a category by slug.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when no category has this slug.
    pub fn lookup(&self, slug: &str) -> Result<&CategoryDefinition, CoreError> {
        self.categories
            .iter()
            .find(|category| category.slug == slug)
            .ok_or_else(|| CoreError::category_not_found(slug))
    }

    /// Union of every registered tag.
    #[must_use]
    pub fn all_tags(&self) -> BTreeSet<String> {
        self.categories
            .iter()
            .map(|category| category.tag.clone())
            .collect()
    }

    /// Categories in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.categories.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_'))
}
