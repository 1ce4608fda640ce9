//! Error types for the taxonomy engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("Schema source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Schema parse error: {0}")]
    SchemaParse(String),

    #[error("Duplicate class: {0}")]
    DuplicateClass(String),

    #[error("Unresolved parent '{parent}' declared by class '{class}'")]
    UnresolvedParent { class: String, parent: String },

    #[error("Unresolved domain '{domain}' for property '{property}'")]
    UnresolvedDomain { property: String, domain: String },

    #[error("Class '{class}' declares multiple parents: {}", parents.join(", "))]
    MultipleParents { class: String, parents: Vec<String> },

    #[error("Cyclic class hierarchy through: {0}")]
    CyclicHierarchy(String),

    #[error("Duplicate property '{property}' on class '{class}'")]
    DuplicateProperty { class: String, property: String },

    #[error("RDF store error: {0}")]
    Store(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown taxonomy variant: {0}")]
    UnknownVariant(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl TaxonomyError {
    /// True for integrity failures detected while assembling the tree,
    /// as opposed to failures reading or parsing the schema source.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::DuplicateClass(_)
                | Self::UnresolvedParent { .. }
                | Self::UnresolvedDomain { .. }
                | Self::MultipleParents { .. }
                | Self::CyclicHierarchy(_)
                | Self::DuplicateProperty { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TaxonomyError>;
