//! Resource path → schema document text.
//!
//! Embedded documents are consulted first; when a resource root is configured,
//! the path is then resolved against it on disk.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::errors::{Result, TaxonomyError};
use crate::schema::locator::LOGISTICS_RESOURCE_PATH;

static EMBEDDED: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut resources = HashMap::new();
    resources.insert(
        LOGISTICS_RESOURCE_PATH,
        include_str!("../../resources/taxonomy/logistics-base.ttl"),
    );
    resources
});

/// Paths of every embedded schema document.
pub fn embedded_paths() -> Vec<&'static str> {
    let mut paths: Vec<_> = EMBEDDED.keys().copied().collect();
    paths.sort_unstable();
    paths
}

#[derive(Debug, Clone, Default)]
pub struct ResourceResolver {
    root: Option<PathBuf>,
    use_embedded: bool,
}

impl ResourceResolver {
    /// Resolver serving only the embedded documents.
    pub fn embedded() -> Self {
        Self {
            root: None,
            use_embedded: true,
        }
    }

    /// Resolver serving only files below `root`.
    pub fn filesystem(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            use_embedded: false,
        }
    }

    /// Embedded documents first, then files below `root`.
    pub fn layered(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            use_embedded: true,
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Read the document at `resource_path`.
    pub fn read(&self, resource_path: &str) -> Result<String> {
        if self.use_embedded {
            if let Some(content) = EMBEDDED.get(resource_path) {
                return Ok((*content).to_string());
            }
        }

        let Some(root) = &self.root else {
            return Err(TaxonomyError::SourceUnavailable(format!(
                "No embedded resource at {} (embedded: {})",
                resource_path,
                embedded_paths().join(", ")
            )));
        };

        let relative = Path::new(resource_path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(TaxonomyError::SourceUnavailable(format!(
                "Resource path escapes the resource root: {}",
                resource_path
            )));
        }

        let path = root.join(relative);
        if !path.is_file() {
            return Err(TaxonomyError::SourceUnavailable(format!(
                "Resource not found: {} (resolved to {})",
                resource_path,
                path.display()
            )));
        }

        fs::read_to_string(&path).map_err(|e| {
            TaxonomyError::SourceUnavailable(format!("Failed to read {}: {}", path.display(), e))
        })
    }
}
