//! Taxonomy cache and query service.
//!
//! Holds at most one cached [`TaxonomyTree`] per service instance. Loads are
//! serialized by a dedicated lock so concurrent first callers trigger a single
//! build and all receive the same `Arc`; readers of an already cached tree
//! only take a short read lock to clone it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::ops::Deref;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{info, warn};
use uuid::Uuid;

use crate::builder::TreeBuilder;
use crate::config::TaxonomyConfig;
use crate::errors::Result;
use crate::model::{CategoryId, CategoryInfo, PropertyDefinition, PropertyType, TaxonomyTree};
use crate::schema::locator::{SchemaSourceLocator, LOGISTICS};
use crate::schema::reader::{RdfsSchemaReader, SchemaSourceReader};

/// Counts describing the currently cached tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyStats {
    pub total_categories: usize,
    pub root_categories: usize,
    pub total_properties: usize,
    pub max_depth: usize,
    pub tree_id: Uuid,
    pub loaded_at: DateTime<Utc>,
}

/// A category together with the tree that owns it.
#[derive(Debug, Clone)]
pub struct CategoryHandle {
    tree: Arc<TaxonomyTree>,
    id: CategoryId,
}

impl CategoryHandle {
    pub fn tree(&self) -> &Arc<TaxonomyTree> {
        &self.tree
    }

    pub fn parent(&self) -> Option<CategoryHandle> {
        self.parent_id().map(|id| self.sibling(id))
    }

    pub fn children(&self) -> Vec<CategoryHandle> {
        self.child_ids().iter().map(|id| self.sibling(*id)).collect()
    }

    /// Own and inherited properties, nearest declaration first.
    pub fn effective_properties(&self) -> Vec<PropertyDefinition> {
        self.tree
            .effective_properties(self)
            .into_iter()
            .cloned()
            .collect()
    }

    fn sibling(&self, id: CategoryId) -> CategoryHandle {
        CategoryHandle {
            tree: Arc::clone(&self.tree),
            id,
        }
    }
}

impl Deref for CategoryHandle {
    type Target = CategoryInfo;

    fn deref(&self) -> &CategoryInfo {
        // ids are only minted from the same tree
        self.tree
            .get(self.id)
            .unwrap_or_else(|| unreachable!("category id {} outside its tree", self.id.index()))
    }
}

pub struct TaxonomyService {
    locator: Box<dyn SchemaSourceLocator>,
    reader: Box<dyn SchemaSourceReader>,
    builder: TreeBuilder,
    cache: RwLock<Option<Arc<TaxonomyTree>>>,
    load_lock: Mutex<()>,
}

impl TaxonomyService {
    /// Service with an empty cache for the variant described by `locator`.
    pub fn new(
        locator: impl SchemaSourceLocator + 'static,
        reader: impl SchemaSourceReader + 'static,
    ) -> Self {
        Self {
            locator: Box::new(locator),
            reader: Box::new(reader),
            builder: TreeBuilder::new(),
            cache: RwLock::new(None),
            load_lock: Mutex::new(()),
        }
    }

    /// Logistics base taxonomy from the embedded schema.
    pub fn logistics() -> Self {
        Self::new(LOGISTICS, RdfsSchemaReader::default())
    }

    /// Service for a configured variant; `None` picks the default variant.
    pub fn from_config(config: &TaxonomyConfig, variant: Option<&str>) -> Result<Self> {
        let locator = match variant {
            Some(name) => config.variant(name)?,
            None => config.default_variant()?,
        };
        Ok(Self::new(locator, RdfsSchemaReader::new(config.resource_resolver())))
    }

    pub fn locator(&self) -> &dyn SchemaSourceLocator {
        self.locator.as_ref()
    }

    /// The cached tree, without loading.
    pub fn cached_taxonomy(&self) -> Option<Arc<TaxonomyTree>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Cached tree, building it on first use. Repeated calls return the same
    /// `Arc` until [`reload_base_taxonomy`](Self::reload_base_taxonomy).
    pub fn load_base_taxonomy(&self) -> Result<Arc<TaxonomyTree>> {
        if let Some(tree) = self.cached_taxonomy() {
            return Ok(tree);
        }

        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(tree) = self.cached_taxonomy() {
            return Ok(tree);
        }

        let tree = Arc::new(self.build()?);
        self.store(Arc::clone(&tree));
        info!(
            namespace = self.locator.namespace(),
            tree_id = %tree.id(),
            categories = tree.len(),
            roots = tree.root_count(),
            "taxonomy loaded"
        );
        Ok(tree)
    }

    /// Rebuild unconditionally and replace the cache. On failure the previous
    /// tree stays cached.
    pub fn reload_base_taxonomy(&self) -> Result<Arc<TaxonomyTree>> {
        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let tree = match self.build() {
            Ok(tree) => Arc::new(tree),
            Err(e) => {
                warn!(
                    namespace = self.locator.namespace(),
                    error = %e,
                    "taxonomy reload failed, keeping cached tree"
                );
                return Err(e);
            }
        };

        let previous = self.store(Arc::clone(&tree));
        info!(
            namespace = self.locator.namespace(),
            tree_id = %tree.id(),
            previous_id = ?previous.map(|p| p.id()),
            categories = tree.len(),
            "taxonomy reloaded"
        );
        Ok(tree)
    }

    /// Exact class-name lookup over the whole tree. A miss is `Ok(None)`.
    pub fn get_category_by_class_name(&self, class_name: &str) -> Result<Option<CategoryHandle>> {
        let tree = self.load_base_taxonomy()?;
        let id = tree.category_by_class_name(class_name).map(|c| c.id());
        Ok(id.map(|id| CategoryHandle { tree, id }))
    }

    pub fn is_base_taxonomy_class(&self, class_name: &str) -> Result<bool> {
        Ok(self.get_category_by_class_name(class_name)?.is_some())
    }

    pub fn get_stats(&self) -> Result<TaxonomyStats> {
        let tree = self.load_base_taxonomy()?;

        let mut total_categories = 0;
        let mut max_depth = 0;
        for category in tree.walk() {
            total_categories += 1;
            max_depth = max_depth.max(tree.depth_of(category));
        }

        Ok(TaxonomyStats {
            total_categories,
            root_categories: tree.root_count(),
            total_properties: tree.total_properties(),
            max_depth,
            tree_id: tree.id(),
            loaded_at: tree.loaded_at(),
        })
    }

    /// Effective properties of a class with their semantic kinds.
    pub fn classify_properties(
        &self,
        class_name: &str,
    ) -> Result<Option<Vec<(PropertyDefinition, PropertyType)>>> {
        Ok(self.get_category_by_class_name(class_name)?.map(|category| {
            category
                .effective_properties()
                .into_iter()
                .map(|p| {
                    let kind = p.property_type();
                    (p, kind)
                })
                .collect()
        }))
    }

    fn build(&self) -> Result<TaxonomyTree> {
        let definitions = self.reader.read(self.locator.as_ref())?;
        self.builder.build(
            self.locator.namespace(),
            &definitions.classes,
            &definitions.properties,
        )
    }

    fn store(&self, tree: Arc<TaxonomyTree>) -> Option<Arc<TaxonomyTree>> {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(tree)
    }
}
