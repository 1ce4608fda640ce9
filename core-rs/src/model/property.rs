//! Typed attribute declared on a taxonomy class.

use serde::Serialize;

use crate::model::property_type::{classify, PropertyType};

/// Immutable property definition; construct with [`PropertyDefinition::builder`].
///
/// # Examples
///
/// ```
/// use taxonomy_core::model::{PropertyDefinition, PropertyType};
///
/// let address = PropertyDefinition::builder()
///     .name("address")
///     .range_type("http://www.w3.org/2001/XMLSchema#string")
///     .build();
/// assert_eq!(address.property_type(), PropertyType::Address);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    english_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    norwegian_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    range_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl PropertyDefinition {
    pub fn builder() -> PropertyDefinitionBuilder {
        PropertyDefinitionBuilder::default()
    }

    /// Local identifier, unique within the owning class.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn english_label(&self) -> Option<&str> {
        self.english_label.as_deref()
    }

    pub fn norwegian_label(&self) -> Option<&str> {
        self.norwegian_label.as_deref()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Declared range IRI; `None` means untyped.
    pub fn range_type(&self) -> Option<&str> {
        self.range_type.as_deref()
    }

    /// Class name the property is declared on.
    pub fn domain_class(&self) -> Option<&str> {
        self.domain_class.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Label for display: English label, else the property name.
    pub fn display_name(&self) -> &str {
        self.english_label.as_deref().unwrap_or(&self.name)
    }

    pub fn property_type(&self) -> PropertyType {
        classify(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PropertyDefinitionBuilder {
    name: Option<String>,
    english_label: Option<String>,
    norwegian_label: Option<String>,
    uri: Option<String>,
    range_type: Option<String>,
    domain_class: Option<String>,
    description: Option<String>,
}

impl PropertyDefinitionBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn english_label(mut self, label: impl Into<String>) -> Self {
        self.english_label = Some(label.into());
        self
    }

    pub fn norwegian_label(mut self, label: impl Into<String>) -> Self {
        self.norwegian_label = Some(label.into());
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn range_type(mut self, range_type: impl Into<String>) -> Self {
        self.range_type = Some(range_type.into());
        self
    }

    /// Set or clear the range; `None` leaves the property untyped.
    pub fn maybe_range_type(mut self, range_type: Option<String>) -> Self {
        self.range_type = range_type;
        self
    }

    pub fn domain_class(mut self, domain_class: impl Into<String>) -> Self {
        self.domain_class = Some(domain_class.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> PropertyDefinition {
        PropertyDefinition {
            name: self.name.unwrap_or_default(),
            english_label: self.english_label,
            norwegian_label: self.norwegian_label,
            uri: self.uri,
            range_type: self.range_type,
            domain_class: self.domain_class,
            description: self.description,
        }
    }
}
