/**
 * config.rs
 * Parser for taxonomy configuration files (YAML format)
 *
 * Format:
 * ```yaml
 * apiVersion: taxonomy/v1
 * kind: TaxonomySet
 * spec:
 *   resourceRoot: ./schemas
 *   defaultVariant: logistics
 *   variants:
 *     - name: logistics
 *       namespace: http://taxonomy.sirktek.no/logistics#
 *       resource: /taxonomy/logistics-base.ttl
 * ```
 */

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, TaxonomyError};
use crate::schema::locator::{OwnedLocator, LOGISTICS_NAMESPACE, LOGISTICS_RESOURCE_PATH};
use crate::schema::resources::ResourceResolver;

pub const API_VERSION: &str = "taxonomy/v1";
pub const KIND: &str = "TaxonomySet";

/// Taxonomy configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyConfig {
    pub api_version: String,
    pub kind: String,
    pub spec: Spec,
    /// Directory the file was loaded from; relative resource roots resolve against it
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Spec {
    /// On-disk directory searched after the embedded resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_root: Option<PathBuf>,
    /// Variant used when none is requested (defaults to the first one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_variant: Option<String>,
    pub variants: Vec<VariantConfig>,
}

/// One taxonomy variant (e.g. "logistics")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantConfig {
    pub name: String,
    pub namespace: String,
    pub resource: String,
}

impl VariantConfig {
    pub fn locator(&self) -> OwnedLocator {
        OwnedLocator::new(self.namespace.clone(), self.resource.clone())
    }
}

impl TaxonomyConfig {
    /// Configuration with only the embedded logistics taxonomy
    pub fn builtin() -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            spec: Spec {
                resource_root: None,
                default_variant: Some("logistics".to_string()),
                variants: vec![VariantConfig {
                    name: "logistics".to_string(),
                    namespace: LOGISTICS_NAMESPACE.to_string(),
                    resource: LOGISTICS_RESOURCE_PATH.to_string(),
                }],
            },
            base_dir: None,
        }
    }

    /// Load and validate a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(TaxonomyError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Parse and validate configuration YAML
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: TaxonomyConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration structure
    ///
    /// Ensures:
    /// - apiVersion is "taxonomy/v1" and kind is "TaxonomySet"
    /// - at least one variant, names non-empty and unique
    /// - namespaces end in '#' or '/', resources non-empty
    /// - defaultVariant, when set, names a variant
    pub fn validate(&self) -> Result<()> {
        if self.api_version != API_VERSION {
            return Err(TaxonomyError::Config(format!(
                "Invalid apiVersion: expected '{}', got '{}'",
                API_VERSION, self.api_version
            )));
        }

        if self.kind != KIND {
            return Err(TaxonomyError::Config(format!(
                "Invalid kind: expected '{}', got '{}'",
                KIND, self.kind
            )));
        }

        if self.spec.variants.is_empty() {
            return Err(TaxonomyError::Config(
                "spec.variants must declare at least one variant".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for variant in &self.spec.variants {
            if variant.name.trim().is_empty() {
                return Err(TaxonomyError::Config("Variant name cannot be empty".to_string()));
            }
            if !names.insert(variant.name.as_str()) {
                return Err(TaxonomyError::Config(format!(
                    "Duplicate variant: {}",
                    variant.name
                )));
            }
            if !(variant.namespace.ends_with('#') || variant.namespace.ends_with('/')) {
                return Err(TaxonomyError::Config(format!(
                    "Namespace of variant '{}' must end in '#' or '/': {}",
                    variant.name, variant.namespace
                )));
            }
            if variant.resource.trim().is_empty() {
                return Err(TaxonomyError::Config(format!(
                    "Variant '{}' has no resource",
                    variant.name
                )));
            }
        }

        if let Some(default) = &self.spec.default_variant {
            if !names.contains(default.as_str()) {
                return Err(TaxonomyError::UnknownVariant(default.clone()));
            }
        }

        Ok(())
    }

    pub fn variant_names(&self) -> Vec<&str> {
        self.spec.variants.iter().map(|v| v.name.as_str()).collect()
    }

    /// Locator of the named variant
    pub fn variant(&self, name: &str) -> Result<OwnedLocator> {
        self.spec
            .variants
            .iter()
            .find(|v| v.name == name)
            .map(VariantConfig::locator)
            .ok_or_else(|| TaxonomyError::UnknownVariant(name.to_string()))
    }

    /// Locator of `defaultVariant`, or the first variant
    pub fn default_variant(&self) -> Result<OwnedLocator> {
        match &self.spec.default_variant {
            Some(name) => self.variant(name),
            None => self
                .spec
                .variants
                .first()
                .map(VariantConfig::locator)
                .ok_or_else(|| TaxonomyError::Config("No variants configured".to_string())),
        }
    }

    /// Embedded resources, layered over `resourceRoot` when one is set
    pub fn resource_resolver(&self) -> ResourceResolver {
        match &self.spec.resource_root {
            Some(root) if root.is_relative() => match &self.base_dir {
                Some(base) => ResourceResolver::layered(base.join(root)),
                None => ResourceResolver::layered(root.clone()),
            },
            Some(root) => ResourceResolver::layered(root.clone()),
            None => ResourceResolver::embedded(),
        }
    }
}
