//! Raw definitions handed from the schema reader to the tree builder.

/// Display labels and description attached to a class or property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    pub english: Option<String>,
    pub norwegian: Option<String>,
    pub description: Option<String>,
}

/// One class as declared in the schema source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    /// Full class IRI.
    pub uri: String,
    /// Declared superclass IRIs, in the order the reader found them.
    pub parents: Vec<String>,
    pub labels: Labels,
}

impl ClassDefinition {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            parents: Vec::new(),
            labels: Labels::default(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }
}

/// One property as declared in the schema source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    /// Full property IRI.
    pub uri: String,
    /// Declared domain class IRIs.
    pub domains: Vec<String>,
    /// Declared range IRI, if any.
    pub range: Option<String>,
    pub labels: Labels,
}

impl PropertyRecord {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            domains: Vec::new(),
            range: None,
            labels: Labels::default(),
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domains.push(domain.into());
        self
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }
}

/// Everything one read of a schema source produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDefinitions {
    pub classes: Vec<ClassDefinition>,
    pub properties: Vec<PropertyRecord>,
}
