//! One node of a taxonomy tree.

use serde::Serialize;

use crate::model::property::PropertyDefinition;

/// Index of a category inside its [`TaxonomyTree`](crate::model::TaxonomyTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CategoryId(pub(crate) usize);

impl CategoryId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Immutable taxonomy category. Parent and child links are indices into the
/// owning tree and are only set while the tree is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub(crate) id: CategoryId,
    pub(crate) class_name: String,
    pub(crate) uri: String,
    pub(crate) english_name: String,
    pub(crate) norwegian_name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) parent: Option<CategoryId>,
    pub(crate) children: Vec<CategoryId>,
    pub(crate) properties: Vec<PropertyDefinition>,
}

impl CategoryInfo {
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Unique identifier within the tree (local name of the class IRI).
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn english_name(&self) -> &str {
        &self.english_name
    }

    pub fn norwegian_name(&self) -> Option<&str> {
        self.norwegian_name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn parent_id(&self) -> Option<CategoryId> {
        self.parent
    }

    pub fn child_ids(&self) -> &[CategoryId] {
        &self.children
    }

    /// Properties declared directly on this class, sorted by name.
    pub fn properties(&self) -> &[PropertyDefinition] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.name() == name)
    }
}
