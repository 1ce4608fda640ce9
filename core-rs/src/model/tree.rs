//! Aggregate result of one taxonomy load.

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::model::category::{CategoryId, CategoryInfo};
use crate::model::property::PropertyDefinition;

/// Immutable, arena-backed category tree. Every load produces a new instance
/// with a fresh [`id`](TaxonomyTree::id).
#[derive(Debug)]
pub struct TaxonomyTree {
    id: Uuid,
    namespace: String,
    loaded_at: DateTime<Utc>,
    categories: Vec<CategoryInfo>,
    roots: Vec<CategoryId>,
    by_class_name: HashMap<String, CategoryId>,
}

impl TaxonomyTree {
    /// `categories[i].id` must equal `CategoryId(i)`; links must already be set.
    pub(crate) fn from_parts(namespace: impl Into<String>, categories: Vec<CategoryInfo>) -> Self {
        let by_class_name = categories
            .iter()
            .map(|c| (c.class_name.clone(), c.id))
            .collect();

        let mut roots: Vec<CategoryId> = categories
            .iter()
            .filter(|c| c.is_root())
            .map(|c| c.id)
            .collect();
        roots.sort_by(|a, b| categories[a.0].class_name.cmp(&categories[b.0].class_name));

        Self {
            id: Uuid::new_v4(),
            namespace: namespace.into(),
            loaded_at: Utc::now(),
            categories,
            roots,
            by_class_name,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Root categories in class-name order.
    pub fn root_categories(&self) -> impl Iterator<Item = &CategoryInfo> + '_ {
        self.roots.iter().map(move |id| &self.categories[id.0])
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub fn get(&self, id: CategoryId) -> Option<&CategoryInfo> {
        self.categories.get(id.0)
    }

    /// Exact, case-sensitive lookup over the whole tree.
    pub fn category_by_class_name(&self, class_name: &str) -> Option<&CategoryInfo> {
        self.by_class_name
            .get(class_name)
            .map(|id| &self.categories[id.0])
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.by_class_name.contains_key(class_name)
    }

    pub fn parent_of(&self, category: &CategoryInfo) -> Option<&CategoryInfo> {
        category.parent.and_then(|id| self.get(id))
    }

    pub fn children_of<'a>(
        &'a self,
        category: &'a CategoryInfo,
    ) -> impl Iterator<Item = &'a CategoryInfo> + 'a {
        category.children.iter().map(move |id| &self.categories[id.0])
    }

    /// Ancestors from the direct parent up to the root.
    pub fn ancestors_of(&self, category: &CategoryInfo) -> Vec<&CategoryInfo> {
        let mut ancestors = Vec::new();
        let mut current = self.parent_of(category);
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.parent_of(parent);
        }
        ancestors
    }

    /// Distance from the root; roots have depth 0.
    pub fn depth_of(&self, category: &CategoryInfo) -> usize {
        self.ancestors_of(category).len()
    }

    /// True if `class_name` is `ancestor` or lies below it.
    pub fn is_subclass_of(&self, class_name: &str, ancestor: &str) -> bool {
        let Some(category) = self.category_by_class_name(class_name) else {
            return false;
        };
        category.class_name == ancestor
            || self
                .ancestors_of(category)
                .iter()
                .any(|a| a.class_name == ancestor)
    }

    /// Depth-first, pre-order walk starting from every root.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Every category below `category`, depth-first.
    pub fn descendants_of(&self, category: &CategoryInfo) -> Vec<&CategoryInfo> {
        let walk = Walk {
            tree: self,
            stack: category.children.iter().rev().copied().collect(),
        };
        walk.collect()
    }

    /// Own properties followed by inherited ones; the nearest declaration of a
    /// name hides those further up.
    pub fn effective_properties<'a>(
        &'a self,
        category: &'a CategoryInfo,
    ) -> Vec<&'a PropertyDefinition> {
        let mut seen = HashSet::new();
        std::iter::once(category)
            .chain(self.ancestors_of(category))
            .flat_map(|c| c.properties.iter())
            .filter(|p| seen.insert(p.name()))
            .collect()
    }

    pub fn total_properties(&self) -> usize {
        self.categories.iter().map(|c| c.properties.len()).sum()
    }
}

pub struct Walk<'a> {
    tree: &'a TaxonomyTree,
    stack: Vec<CategoryId>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a CategoryInfo;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let category = &self.tree.categories[id.0];
        self.stack.extend(category.children.iter().rev().copied());
        Some(category)
    }
}
