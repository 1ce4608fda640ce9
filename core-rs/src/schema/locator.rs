//! Where a taxonomy variant's schema lives.
//!
//! Each variant (e.g. "logistics") is described by a locator value rather than
//! a dedicated loader type: the namespace its classes live in and the resource
//! path of the serialized schema document.

use std::fmt;

/// Namespace + resource pair identifying one taxonomy variant's schema.
pub trait SchemaSourceLocator: Send + Sync + fmt::Debug {
    /// Vocabulary namespace, including its trailing `#` or `/`.
    fn namespace(&self) -> &str;

    /// Resource path of the schema document (e.g. `/taxonomy/logistics-base.ttl`).
    fn resource_path(&self) -> &str;
}

/// Namespace of the logistics base taxonomy.
pub const LOGISTICS_NAMESPACE: &str = "http://taxonomy.sirktek.no/logistics#";

/// Embedded resource path of the logistics base taxonomy.
pub const LOGISTICS_RESOURCE_PATH: &str = "/taxonomy/logistics-base.ttl";

/// Built-in locator for the logistics base taxonomy.
pub const LOGISTICS: StaticLocator =
    StaticLocator::new(LOGISTICS_NAMESPACE, LOGISTICS_RESOURCE_PATH);

/// Locator backed by compile-time strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticLocator {
    namespace: &'static str,
    resource_path: &'static str,
}

impl StaticLocator {
    pub const fn new(namespace: &'static str, resource_path: &'static str) -> Self {
        Self { namespace, resource_path }
    }
}

impl SchemaSourceLocator for StaticLocator {
    fn namespace(&self) -> &str {
        self.namespace
    }

    fn resource_path(&self) -> &str {
        self.resource_path
    }
}

/// Locator built at runtime, typically from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedLocator {
    namespace: String,
    resource_path: String,
}

impl OwnedLocator {
    pub fn new(namespace: impl Into<String>, resource_path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            resource_path: resource_path.into(),
        }
    }
}

impl SchemaSourceLocator for OwnedLocator {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn resource_path(&self) -> &str {
        &self.resource_path
    }
}
